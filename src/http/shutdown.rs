//! Shutdown signal handling.
//!
//! Ctrl+C (and SIGTERM on Unix) triggers a graceful shutdown: the listener
//! stops accepting new connections and in-flight requests get a short drain
//! window before the process exits.

use std::time::Duration;

use axum_server::Handle;

/// How long in-flight requests may take to finish after a shutdown signal.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Setup graceful shutdown on SIGTERM and Ctrl+C.
pub fn setup_shutdown_handler(handle: Handle) {
    tokio::spawn(async move {
        let ctrl_c = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C, shutting down");
            }
            _ = terminate => {
                tracing::info!("Received SIGTERM, shutting down");
            }
        }

        handle.graceful_shutdown(Some(DRAIN_TIMEOUT));
    });
}
