//! HTTP surface of the ledger.
//!
//! Routes:
//! - `POST /reset`
//! - `GET /balance?account_id=<id>`
//! - `POST /event`

mod error;
mod handlers;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::application::LedgerService;

pub use error::ApiError;

/// Shared handle to the single ledger instance. Every request holds the lock
/// for the whole lookup-mutate-save sequence of its operation.
pub type SharedLedger = Arc<Mutex<LedgerService>>;

pub fn shared(ledger: LedgerService) -> SharedLedger {
    Arc::new(Mutex::new(ledger))
}

/// Build the application router around a ledger handle.
pub fn router(ledger: SharedLedger) -> Router {
    Router::new()
        .route("/reset", post(handlers::reset))
        .route("/balance", get(handlers::balance))
        .route("/event", post(handlers::event))
        .layer(TraceLayer::new_for_http())
        .with_state(ledger)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: &str, ledger: SharedLedger) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    let local = listener
        .local_addr()
        .context("Failed to read bound address")?;
    info!(%local, "ledger listening");

    axum::serve(listener, router(ledger))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("ledger stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
