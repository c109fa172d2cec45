//! devserve: serve a local directory over HTTP or HTTPS for manual testing.
//!
//! The server maps request paths to files under a configured root directory
//! and otherwise stays out of the way. Two configuration profiles cover the
//! common cases: a plain-HTTP server that injects permissive CORS and
//! cache-disabling headers and opens a browser tab on startup, and an HTTPS
//! server backed by a user-provided certificate/key pair.

pub mod browser;
pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
