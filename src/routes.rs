//! Router assembly.
//!
//! The router is a single fallback service (the static file service) wrapped
//! in the response-header layers and the access-log middleware. With CORS
//! enabled, every response, 404s included, carries the three fixed headers.

use axum::{middleware, Router};
use http::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{AppConfig, CACHE_CONTROL_DISABLED, CORS_ALLOW_METHODS, CORS_ALLOW_ORIGIN};
use crate::http::static_files::create_static_service;
use crate::middleware::access_log;

/// Creates the router: static file serving plus header injection and
/// access logging.
pub fn create_router(config: &AppConfig) -> Router {
    let mut router = Router::new().fallback_service(create_static_service(&config.serve));

    if config.serve.cors {
        // Overriding, not if-not-present: every response carries exactly
        // these values regardless of what the inner service set.
        router = router
            .layer(SetResponseHeaderLayer::overriding(
                ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static(CORS_ALLOW_ORIGIN),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(CORS_ALLOW_METHODS),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                CACHE_CONTROL,
                HeaderValue::from_static(CACHE_CONTROL_DISABLED),
            ));
    }

    // Outermost so the access line reflects the final status and headers.
    router.layer(middleware::from_fn(access_log))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_default_config() {
        let _router = create_router(&AppConfig::default());
    }

    #[test]
    fn builds_without_cors() {
        let mut config = AppConfig::default();
        config.serve.cors = false;
        let _router = create_router(&config);
    }
}
