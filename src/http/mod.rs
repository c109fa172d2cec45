//! HTTP server module with TLS support.
//!
//! The server runs in one of two modes:
//! - **Manual**: HTTPS with a user-provided certificate and key
//! - **None**: plain HTTP
//!
//! Shutdown is signal-driven (Ctrl+C / SIGTERM) with a short drain window.

mod server;
mod shutdown;
pub mod static_files;

pub use server::{start_server, start_server_with_handle, ServerError};
