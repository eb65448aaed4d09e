use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::LedgerService;
use crate::domain::{Account, format_amount};

/// Point-in-time copy of every account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub accounts: Vec<Account>,
}

/// Exporter for writing ledger balances in various formats
pub struct Exporter<'a> {
    ledger: &'a LedgerService,
}

impl<'a> Exporter<'a> {
    pub fn new(ledger: &'a LedgerService) -> Self {
        Self { ledger }
    }

    /// Export balances to CSV format, ordered by account id
    pub fn export_balances_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let accounts = self.ledger.list_accounts();
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["id", "balance"])?;

        let mut count = 0;
        for account in &accounts {
            let balance = format_amount(account.balance);
            csv_writer.write_record([account.id.as_str(), balance.as_str()])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export every account as a JSON snapshot
    pub fn export_snapshot_json<W: Write>(&self, mut writer: W) -> Result<LedgerSnapshot> {
        let snapshot = LedgerSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            accounts: self.ledger.list_accounts(),
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_export_balances_csv() {
        let ledger = LedgerService::with_accounts([
            Account::new("300", dec!(15)),
            Account::new("100", dec!(-5.5)),
        ]);
        let mut out = Vec::new();
        let count = Exporter::new(&ledger).export_balances_csv(&mut out).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "id,balance\n100,-5.5\n300,15.0\n"
        );
    }

    #[test]
    fn test_export_empty_ledger_writes_header_only() {
        let ledger = LedgerService::default();
        let mut out = Vec::new();
        let count = Exporter::new(&ledger).export_balances_csv(&mut out).unwrap();
        assert_eq!(count, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "id,balance\n");
    }

    #[test]
    fn test_snapshot_json_roundtrips() {
        let ledger = LedgerService::with_accounts([Account::new("100", dec!(20))]);
        let mut out = Vec::new();
        let snapshot = Exporter::new(&ledger).export_snapshot_json(&mut out).unwrap();

        let parsed: LedgerSnapshot = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.accounts, snapshot.accounts);
        assert_eq!(parsed.accounts, vec![Account::new("100", dec!(20))]);
    }
}
