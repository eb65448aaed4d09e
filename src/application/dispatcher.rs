use tracing::{info, warn};

use crate::domain::{AccountId, TransactionKind, TransactionRequest, TransactionResult};

use super::{AppError, LedgerService};

/// Route a transaction request to the ledger and shape the result.
///
/// The declared type and the ids it requires are checked before the ledger is
/// touched. Only the accounts relevant to the operation type are returned.
pub fn dispatch(
    ledger: &mut LedgerService,
    request: &TransactionRequest,
) -> Result<TransactionResult, AppError> {
    let Some(kind) = TransactionKind::from_str(&request.kind) else {
        warn!(kind = %request.kind, "invalid operation type");
        return Err(AppError::InvalidOperationType(request.kind.clone()));
    };
    info!(%kind, origin = ?request.origin, destination = ?request.destination, amount = %request.amount, "dispatching event");

    match kind {
        TransactionKind::Deposit => {
            let destination = required(kind, "destination", &request.destination)?;
            let account = ledger.process_deposit(destination, request.amount)?;
            Ok(TransactionResult::deposited(account))
        }
        TransactionKind::Withdraw => {
            let origin = required(kind, "origin", &request.origin)?;
            let account = ledger.process_withdraw(origin, request.amount)?;
            Ok(TransactionResult::withdrawn(account))
        }
        TransactionKind::Transfer => {
            let origin = required(kind, "origin", &request.origin)?;
            let destination = required(kind, "destination", &request.destination)?;
            let outcome = ledger.process_transfer(origin, destination, request.amount)?;
            Ok(TransactionResult::transferred(
                outcome.origin,
                outcome.destination,
            ))
        }
    }
}

fn required<'a>(
    kind: TransactionKind,
    role: &'static str,
    id: &'a Option<AccountId>,
) -> Result<&'a str, AppError> {
    id.as_deref().ok_or_else(|| {
        warn!(%kind, role, "missing account id");
        AppError::MissingAccountId {
            kind: kind.as_str(),
            role,
        }
    })
}
