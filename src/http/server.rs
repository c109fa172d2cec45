//! HTTP/HTTPS server startup logic.
//!
//! Supports two TLS modes:
//! - Manual: user-provided certificate files
//! - None: plain HTTP
//!
//! Certificate material is loaded once at startup; a load failure aborts
//! before the listener accepts any connection.

use std::net::SocketAddr;

use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;

use crate::config::{AppConfig, TlsMode};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Address(String),

    #[error("Failed to load TLS configuration: {0}")]
    TlsConfig(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// Start the HTTP/HTTPS server based on configuration.
///
/// Installs the signal-driven shutdown handler and blocks until the server
/// shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let handle = Handle::new();
    shutdown::setup_shutdown_handler(handle.clone());
    start_server_with_handle(app, config, handle).await
}

/// Start the server with a caller-supplied [`Handle`].
///
/// The handle can be used to observe the bound address (`Handle::listening`)
/// and to trigger shutdown, which is how the integration tests drive servers
/// on ephemeral ports.
pub async fn start_server_with_handle(
    app: Router,
    config: &AppConfig,
    handle: Handle,
) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port)
        .parse()
        .map_err(|e| ServerError::Address(format!("{}:{}: {}", config.http.host, config.http.port, e)))?;

    match config.http.tls.mode {
        TlsMode::None => start_plain_server(app, addr, handle).await,
        TlsMode::Manual => {
            start_manual_tls_server(
                app,
                addr,
                &config.http.tls.cert_path,
                &config.http.tls.key_path,
                handle,
            )
            .await
        }
    }
}

/// Start a plain HTTP server (no TLS).
async fn start_plain_server(
    app: Router,
    addr: SocketAddr,
    handle: Handle,
) -> Result<(), ServerError> {
    tracing::info!(%addr, "Starting HTTP server (no TLS)");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))
}

/// Start an HTTPS server with user-provided certificates.
async fn start_manual_tls_server(
    app: Router,
    addr: SocketAddr,
    cert_path: &str,
    key_path: &str,
    handle: Handle,
) -> Result<(), ServerError> {
    tracing::info!(%addr, cert = %cert_path, key = %key_path, "Starting HTTPS server");

    // Fail fast: missing, unreadable, or mismatched credentials surface here,
    // before the listener exists.
    let rustls_config = RustlsConfig::from_pem_file(cert_path, key_path)
        .await
        .map_err(|e| ServerError::TlsConfig(format!("Failed to load certificates: {}", e)))?;

    axum_server::bind_rustls(addr, rustls_config)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))
}
