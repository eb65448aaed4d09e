use serde::{Deserialize, Serialize};

use super::Amount;

pub type AccountId = String;

/// An identifier/balance pair. This is also the `{id, balance}` shape used on
/// the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub balance: Amount,
}

impl Account {
    pub fn new(id: impl Into<AccountId>, balance: Amount) -> Self {
        Self {
            id: id.into(),
            balance,
        }
    }

    /// A freshly opened account, before any amount has been applied.
    pub fn open(id: impl Into<AccountId>) -> Self {
        Self::new(id, Amount::ZERO)
    }

    pub fn is_overdrawn(&self) -> bool {
        self.balance.is_sign_negative() && !self.balance.is_zero()
    }
}
