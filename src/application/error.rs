use thiserror::Error;

use crate::domain::AccountId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Invalid operation type: {0}")]
    InvalidOperationType(String),

    #[error("{kind} event is missing the {role} account id")]
    MissingAccountId {
        kind: &'static str,
        role: &'static str,
    },

    #[error("Balance overflow on account: {0}")]
    AmountOverflow(AccountId),
}
