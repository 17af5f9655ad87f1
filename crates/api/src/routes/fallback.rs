//! Catch-alls for unknown routes and unsupported methods.

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Any unmatched path — 404 in the standard error envelope.
pub async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!(%uri, "no route");
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

/// Known path, wrong method — 405 in the standard error envelope.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    tracing::debug!(%method, %uri, "method not allowed");
    ApiError::MethodNotAllowed(format!("{method} not allowed on {}", uri.path()))
}
