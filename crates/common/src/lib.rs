pub mod types;

pub use types::{
    ApiErrorBody, ApiErrorResponse, ApiResponse, ApiSuccessResponse, HealthCheckResponse,
    HealthStatus,
};
