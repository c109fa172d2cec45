//! Static file serving over the configured root directory.
//!
//! A thin constructor around `tower_http::services::ServeDir`. The service's
//! default behavior governs everything beyond path-to-file mapping: missing
//! paths produce 404, a directory request is answered with its `index.html`
//! when present.

use tower_http::services::ServeDir;

use crate::config::ServeConfig;

/// Create the static file service for the configured root.
pub fn create_static_service(serve: &ServeConfig) -> ServeDir {
    ServeDir::new(&serve.root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_for_default_root() {
        let serve = ServeConfig::default();
        // Construction must not touch the filesystem; serving is covered by
        // the integration tests.
        let _service = create_static_service(&serve);
    }

    #[test]
    fn builds_for_missing_directory() {
        let serve = ServeConfig {
            root: "does-not-exist".to_string(),
            cors: true,
        };
        let _service = create_static_service(&serve);
    }
}
