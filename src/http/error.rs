use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::application::AppError;

/// Failure of a request at the transport boundary.
///
/// Every failure is answered with the placeholder body `0`.
#[derive(Debug)]
pub enum ApiError {
    App(AppError),
    MalformedBody(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::App(AppError::AccountNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::App(AppError::InvalidOperationType(_))
            | ApiError::App(AppError::MissingAccountId { .. })
            | ApiError::App(AppError::AmountOverflow(_)) => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError::App(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::App(err) => warn!(%status, %err, "request failed"),
            ApiError::MalformedBody(reason) => warn!(%status, %reason, "malformed request body"),
        }
        (status, Json(0)).into_response()
    }
}
