//! CORS policy for the /reports routes.
//!
//! Note:
//! - CORS is enforced by browsers. Server-to-server calls are not restricted
//!   by CORS.
//! - Applied to the reports sub-router only; /v1/users carries no CORS
//!   headers at all.
//!
//! Policy:
//! - Allowlist origins from Config (comma-separated env var, default
//!   `http://localhost:4200`), exact match, WITHOUT credentials.
//! - An empty allowlist allows no origin (no CORS headers), which is safer
//!   than accidentally allowing all.

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::Config;

/// Apply the reports CORS policy to the given Router.
pub fn apply<S>(router: Router<S>, config: &Config) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let allowed: Vec<HeaderValue> = config
        .reports_cors_origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    let allow_origin = AllowOrigin::predicate(move |origin: &HeaderValue, _req| {
        allowed.iter().any(|v| v == origin)
    });

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(std::time::Duration::from_secs(60 * 10));

    router.layer(cors)
}
