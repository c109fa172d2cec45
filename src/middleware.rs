//! Access-log middleware.
//!
//! Generates a UUID v4 for each incoming request and creates a tracing span
//! that wraps the entire request lifecycle. One completion event per request
//! carries the status code and duration; together with the subscriber's
//! timestamp this is the per-request access line.

use std::time::Instant;

use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// Middleware that logs one access line per request.
///
/// This should be the outermost middleware layer so the span wraps
/// all request processing, including header injection and file serving.
pub async fn access_log(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
    );

    let start = Instant::now();

    async move {
        let response = next.run(request).await;

        tracing::info!(
            status = response.status().as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "{} {}",
            method,
            path,
        );

        response
    }
    .instrument(span)
    .await
}
