// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use rust_decimal_macros::dec;
use tillbook::application::LedgerService;
use tillbook::domain::Account;
use tillbook::http::{self, SharedLedger};

/// Ledger seeded with the standard accounts: "123" and "456", both at 100.0
pub fn seeded_ledger() -> LedgerService {
    LedgerService::with_accounts(standard_accounts())
}

pub fn standard_accounts() -> Vec<Account> {
    vec![
        Account::new("123", dec!(100.0)),
        Account::new("456", dec!(100.0)),
    ]
}

/// Router state over an empty ledger
pub fn empty_shared() -> SharedLedger {
    http::shared(LedgerService::default())
}

/// Router state over the standard accounts
pub fn seeded_shared() -> SharedLedger {
    http::shared(seeded_ledger())
}
