use std::collections::HashMap;

use crate::domain::{Account, AccountId};

/// In-memory store of accounts keyed by identifier.
///
/// Lives for the lifetime of the process; nothing is written anywhere.
#[derive(Debug, Default)]
pub struct Repository {
    accounts: HashMap<AccountId, Account>,
}

impl Repository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with the given accounts.
    /// Later entries overwrite earlier ones with the same id.
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let mut repo = Self::new();
        for account in accounts {
            repo.save_account(account);
        }
        repo
    }

    /// Get an account by ID.
    pub fn get_account(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    /// Insert or overwrite the entry keyed by the account's id.
    pub fn save_account(&mut self, account: Account) {
        self.accounts.insert(account.id.clone(), account);
    }

    /// Remove every account.
    pub fn clear(&mut self) {
        self.accounts.clear();
    }

    pub fn count_accounts(&self) -> usize {
        self.accounts.len()
    }

    /// List all accounts ordered by id.
    pub fn list_accounts(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self.accounts.values().cloned().collect();
        accounts.sort_by(|a, b| a.id.cmp(&b.id));
        accounts
    }
}
