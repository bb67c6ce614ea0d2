pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;

pub use crate::config::Config;
pub use routes::AppState;

use axum::Router;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

/// Full application: routes plus the response layers every request goes
/// through. Used by `serve` and by the integration tests.
pub fn app(state: AppState) -> Router {
    routes::router(state)
        .layer(axum::middleware::from_fn(
            middleware::cache_control_middleware,
        ))
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        // Minify HTML responses before compression
        .layer(axum::middleware::map_response(
            middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
