use serde::{Deserialize, Serialize};

use super::{Account, AccountId, Amount};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Credits the destination, opening it if needed
    Deposit,
    /// Debits an existing origin
    Withdraw,
    /// Debits an existing origin and credits the destination, opening it if needed
    Transfer,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdraw => "withdraw",
            TransactionKind::Transfer => "transfer",
        }
    }

    /// Exact, case-sensitive match on the declared type.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "deposit" => Some(TransactionKind::Deposit),
            "withdraw" => Some(TransactionKind::Withdraw),
            "transfer" => Some(TransactionKind::Transfer),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inbound transaction event.
///
/// The declared type stays a raw string so that unknown types are rejected by
/// the dispatcher rather than by deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRequest {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<AccountId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<AccountId>,
    pub amount: Amount,
}

impl TransactionRequest {
    pub fn new(kind: impl Into<String>, amount: Amount) -> Self {
        Self {
            kind: kind.into(),
            origin: None,
            destination: None,
            amount,
        }
    }

    pub fn deposit(destination: impl Into<AccountId>, amount: Amount) -> Self {
        Self::new(TransactionKind::Deposit.as_str(), amount).with_destination(destination)
    }

    pub fn withdraw(origin: impl Into<AccountId>, amount: Amount) -> Self {
        Self::new(TransactionKind::Withdraw.as_str(), amount).with_origin(origin)
    }

    pub fn transfer(
        origin: impl Into<AccountId>,
        destination: impl Into<AccountId>,
        amount: Amount,
    ) -> Self {
        Self::new(TransactionKind::Transfer.as_str(), amount)
            .with_origin(origin)
            .with_destination(destination)
    }

    pub fn with_origin(mut self, origin: impl Into<AccountId>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_destination(mut self, destination: impl Into<AccountId>) -> Self {
        self.destination = Some(destination.into());
        self
    }
}

/// Accounts touched by a transaction. Only the ones relevant to the
/// operation type are populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Account>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<Account>,
}

impl TransactionResult {
    pub fn deposited(destination: Account) -> Self {
        Self {
            origin: None,
            destination: Some(destination),
        }
    }

    pub fn withdrawn(origin: Account) -> Self {
        Self {
            origin: Some(origin),
            destination: None,
        }
    }

    pub fn transferred(origin: Account, destination: Account) -> Self {
        Self {
            origin: Some(origin),
            destination: Some(destination),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_transaction_kind_roundtrip() {
        for kind in [
            TransactionKind::Deposit,
            TransactionKind::Withdraw,
            TransactionKind::Transfer,
        ] {
            assert_eq!(TransactionKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_transaction_kind_is_case_sensitive() {
        assert_eq!(TransactionKind::from_str("Deposit"), None);
        assert_eq!(TransactionKind::from_str("refund"), None);
        assert_eq!(TransactionKind::from_str(""), None);
    }

    #[test]
    fn test_request_from_json() {
        let request: TransactionRequest =
            serde_json::from_str(r#"{"type":"transfer","origin":"100","destination":"300","amount":15}"#)
                .unwrap();
        assert_eq!(request, TransactionRequest::transfer("100", "300", dec!(15)));

        // Fractional amounts and absent ids
        let request: TransactionRequest =
            serde_json::from_str(r#"{"type":"deposit","destination":"100","amount":10.5}"#).unwrap();
        assert_eq!(request.origin, None);
        assert_eq!(request.amount, dec!(10.5));
    }

    #[test]
    fn test_unknown_type_still_deserializes() {
        let request: TransactionRequest =
            serde_json::from_str(r#"{"type":"refund","amount":1}"#).unwrap();
        assert_eq!(request.kind, "refund");
    }

    #[test]
    fn test_result_omits_absent_accounts() {
        let deposit = TransactionResult::deposited(Account::new("100", dec!(10)));
        assert_eq!(
            serde_json::to_string(&deposit).unwrap(),
            r#"{"destination":{"id":"100","balance":10.0}}"#
        );

        let withdraw = TransactionResult::withdrawn(Account::new("100", dec!(15)));
        assert_eq!(
            serde_json::to_string(&withdraw).unwrap(),
            r#"{"origin":{"id":"100","balance":15.0}}"#
        );
    }
}
