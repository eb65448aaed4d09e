use tracing::{debug, info, warn};

use crate::domain::{format_amount, Account, Amount};
use crate::storage::Repository;

use super::AppError;

/// Application service owning the account ledger.
/// This is the primary interface for any client (HTTP, replay, tests).
#[derive(Debug, Default)]
pub struct LedgerService {
    repo: Repository,
}

/// Both sides of a completed transfer
#[derive(Debug, Clone, PartialEq)]
pub struct TransferOutcome {
    pub origin: Account,
    pub destination: Account,
}

impl LedgerService {
    /// Create a new ledger service with the given repository.
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Create a ledger seeded with accounts.
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        Self::new(Repository::with_accounts(accounts))
    }

    /// Remove every account.
    pub fn reset(&mut self) {
        info!(accounts = self.repo.count_accounts(), "resetting ledger");
        self.repo.clear();
    }

    /// Get the balance of an existing account.
    pub fn get_balance(&self, id: &str) -> Result<Amount, AppError> {
        self.require(id).map(|account| account.balance)
    }

    /// Get an account by id, if it exists.
    pub fn get_account(&self, id: &str) -> Option<Account> {
        self.repo.get_account(id).cloned()
    }

    /// Insert or overwrite an account.
    pub fn save_account(&mut self, account: Account) {
        debug!(id = %account.id, balance = %account.balance, "saving account");
        self.repo.save_account(account);
    }

    pub fn account_count(&self) -> usize {
        self.repo.count_accounts()
    }

    /// All accounts ordered by id.
    pub fn list_accounts(&self) -> Vec<Account> {
        self.repo.list_accounts()
    }

    // ========================
    // Account resolution
    // ========================

    /// Resolve an account that must already exist.
    pub fn require(&self, id: &str) -> Result<Account, AppError> {
        self.get_account(id).ok_or_else(|| {
            warn!(id, "account not found");
            AppError::AccountNotFound(id.to_string())
        })
    }

    /// Resolve an account, opening it with a zero balance if absent.
    /// The opened account is not stored until it is saved.
    pub fn get_or_open(&self, id: &str) -> Account {
        self.get_account(id).unwrap_or_else(|| {
            debug!(id, "opening account");
            Account::open(id)
        })
    }

    // ========================
    // Balance operations
    // ========================

    /// Credit the destination, opening it if it does not exist yet.
    pub fn process_deposit(
        &mut self,
        destination_id: &str,
        amount: Amount,
    ) -> Result<Account, AppError> {
        let mut destination = self.get_or_open(destination_id);
        destination.balance = credit(&destination, amount)?;
        info!(
            destination = %destination.id,
            balance = %format_amount(destination.balance),
            "deposit applied"
        );

        self.save_account(destination.clone());
        Ok(destination)
    }

    /// Debit an existing origin. Withdrawals never open accounts.
    pub fn process_withdraw(&mut self, origin_id: &str, amount: Amount) -> Result<Account, AppError> {
        let mut origin = self.require(origin_id)?;
        origin.balance = debit(&origin, amount)?;
        info!(
            origin = %origin.id,
            balance = %format_amount(origin.balance),
            "withdraw applied"
        );

        self.save_account(origin.clone());
        Ok(origin)
    }

    /// Move `amount` from an existing origin to the destination, opening the
    /// destination if needed.
    ///
    /// The origin is resolved first so that a missing origin fails before any
    /// destination is opened. Nothing is saved unless both balances compute.
    pub fn process_transfer(
        &mut self,
        origin_id: &str,
        destination_id: &str,
        amount: Amount,
    ) -> Result<TransferOutcome, AppError> {
        let mut origin = self.require(origin_id)?;
        let mut destination = self.get_or_open(destination_id);

        origin.balance = debit(&origin, amount)?;
        if origin.id == destination.id {
            // Same account on both sides: the credit applies on top of the debit.
            destination.balance = origin.balance;
        }
        destination.balance = credit(&destination, amount)?;
        if origin.id == destination.id {
            origin.balance = destination.balance;
        }

        info!(
            origin = %origin.id,
            origin_balance = %format_amount(origin.balance),
            destination = %destination.id,
            destination_balance = %format_amount(destination.balance),
            "transfer applied"
        );

        self.save_account(origin.clone());
        self.save_account(destination.clone());
        Ok(TransferOutcome {
            origin,
            destination,
        })
    }
}

fn credit(account: &Account, amount: Amount) -> Result<Amount, AppError> {
    account
        .balance
        .checked_add(amount)
        .ok_or_else(|| AppError::AmountOverflow(account.id.clone()))
}

fn debit(account: &Account, amount: Amount) -> Result<Amount, AppError> {
    account
        .balance
        .checked_sub(amount)
        .ok_or_else(|| AppError::AmountOverflow(account.id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_get_or_open_does_not_store() {
        let ledger = LedgerService::default();
        let account = ledger.get_or_open("999");
        assert_eq!(account, Account::open("999"));
        assert_eq!(ledger.account_count(), 0);
    }

    #[test]
    fn test_require_missing_account() {
        let ledger = LedgerService::default();
        assert_eq!(
            ledger.require("999"),
            Err(AppError::AccountNotFound("999".to_string()))
        );
    }

    #[test]
    fn test_overflow_leaves_ledger_unchanged() {
        let mut ledger = LedgerService::with_accounts([
            Account::new("rich", Amount::MAX),
            Account::new("poor", dec!(1)),
        ]);

        let err = ledger.process_transfer("poor", "rich", dec!(1)).unwrap_err();
        assert_eq!(err, AppError::AmountOverflow("rich".to_string()));
        assert_eq!(ledger.get_balance("poor").unwrap(), dec!(1));
        assert_eq!(ledger.get_balance("rich").unwrap(), Amount::MAX);
    }

    #[test]
    fn test_self_transfer_keeps_balance() {
        let mut ledger = LedgerService::with_accounts([Account::new("123", dec!(100))]);
        let outcome = ledger.process_transfer("123", "123", dec!(10)).unwrap();
        assert_eq!(outcome.origin.balance, dec!(100));
        assert_eq!(outcome.destination.balance, dec!(100));
        assert_eq!(ledger.get_balance("123").unwrap(), dec!(100));
    }
}
