//! HTTP health-check service.
//!
//! Exposes `GET /api/health`, which answers with a fixed `"ok"` status and
//! the current UTC time, with structured request logging (tracing).

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

/// Path of the health-check route.
pub const HEALTH_PATH: &str = "/api/health";

/// Creates the Axum application router.
pub fn create_app() -> Router {
    Router::new()
        .route(HEALTH_PATH, get(routes::health::check))
        .fallback(routes::fallback::not_found)
        .method_not_allowed_fallback(routes::fallback::method_not_allowed)
        .layer(TraceLayer::new_for_http())
}
