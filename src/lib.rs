//! Moneyflow is a personal finance tracker: users record income, expense, and
//! plan transactions against their own categories, filter and summarize them,
//! and share a read-only view of their data via a public link.
//!
//! This library provides the JSON REST API and the pure [analytics] functions
//! used to derive filtered and aggregated views of a user's transactions.

#![warn(missing_docs)]

use std::time::Duration;

use axum_server::Handle;
use tokio::signal;

pub mod analytics;
pub mod auth;
pub mod db;
pub mod models;
pub mod routes;
pub mod stores;

mod error;
mod state;

pub use error::Error;
pub use routes::build_router;
pub use state::{AppState, AuthState};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
