//! Health check endpoint.

use axum::Json;
use common::HealthCheckResponse;

/// GET /api/health — reports that the process is up, with the current time.
///
/// Request body, headers and query string are ignored.
pub async fn check() -> Json<HealthCheckResponse> {
    let response = HealthCheckResponse::now();
    tracing::debug!(timestamp = %response.timestamp, "health check");
    Json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::HealthStatus;

    #[tokio::test]
    async fn check_reports_ok() {
        let Json(response) = check().await;
        assert_eq!(response.status, HealthStatus::Ok);
    }

    #[tokio::test]
    async fn check_stamps_each_call() {
        let Json(first) = check().await;
        let Json(second) = check().await;
        assert!(second.timestamp >= first.timestamp);
    }
}
