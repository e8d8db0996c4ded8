//! CORS layer configuration.

use std::time::Duration;

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use newsroom_core::config::CorsConfig;

/// Builds a CORS tower layer from configuration.
///
/// Credentials are always allowed since the session rides in a cookie, so
/// origins are echoed rather than wildcarded. An empty origin list, or one
/// containing `*`, mirrors whatever origin the request came from.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mirror =
        config.allowed_origins.is_empty() || config.allowed_origins.iter().any(|o| o == "*");
    let origins = if mirror {
        AllowOrigin::mirror_request()
    } else {
        let list: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        AllowOrigin::list(list)
    };

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(config.max_age_seconds))
}
