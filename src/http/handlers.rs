use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use tracing::info;

use crate::application::dispatch;
use crate::domain::{Amount, TransactionRequest, TransactionResult};

use super::{ApiError, SharedLedger};

#[derive(Debug, Deserialize)]
pub struct BalanceQuery {
    pub account_id: Option<String>,
}

pub async fn reset(State(ledger): State<SharedLedger>) -> (StatusCode, &'static str) {
    ledger.lock().await.reset();
    (StatusCode::OK, "OK")
}

pub async fn balance(
    State(ledger): State<SharedLedger>,
    Query(query): Query<BalanceQuery>,
) -> Result<Json<Amount>, ApiError> {
    // A missing parameter can never name an account.
    let id = query.account_id.unwrap_or_default();
    info!(account_id = %id, "balance requested");

    let balance = ledger.lock().await.get_balance(&id)?;
    Ok(Json(balance))
}

pub async fn event(
    State(ledger): State<SharedLedger>,
    payload: Result<Json<TransactionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TransactionResult>), ApiError> {
    let Json(request) = payload?;

    let result = dispatch(&mut *ledger.lock().await, &request)?;
    Ok((StatusCode::CREATED, Json(result)))
}
