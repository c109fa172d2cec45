//! One-shot deferred browser launch.
//!
//! A background task, independent of the request path, that opens the
//! default browser at the serve URL shortly after startup. Launch failures
//! (headless host, no default browser) are logged and never affect the
//! server.

use std::time::Duration;

/// Spawn the one-shot task that opens `url` in the default browser after
/// `delay`. Returns immediately; the launch happens in the background.
pub fn spawn_browser_open(url: String, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        tracing::info!(%url, "Opening browser");

        // `open::that` may block on the platform launcher, so it runs on the
        // blocking pool.
        let target = url.clone();
        let result = tokio::task::spawn_blocking(move || open::that(&target)).await;

        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::warn!(error = %e, %url, "Failed to open browser; open the URL manually");
            }
            Err(e) => {
                tracing::warn!(error = %e, %url, "Browser launch task failed");
            }
        }
    });
}
