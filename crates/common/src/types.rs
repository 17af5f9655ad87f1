use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Liveness marker reported by the health check.
///
/// Only one value exists: a process that can answer the request is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
}

/// Body of `GET /api/health`.
///
/// Built fresh for every request and dropped once serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: HealthStatus,
    #[serde(serialize_with = "serialize_millis")]
    pub timestamp: DateTime<Utc>,
}

impl HealthCheckResponse {
    /// Creates a response stamped with the current UTC time.
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    /// Creates a response stamped with the given instant.
    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            status: HealthStatus::Ok,
            timestamp,
        }
    }
}

/// Writes `YYYY-MM-DDTHH:MM:SS.sssZ`.
fn serialize_millis<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Successful API envelope: `{"success": true, "data": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiSuccessResponse<T> {
    success: bool,
    pub data: T,
}

impl<T> ApiSuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Error details carried by [`ApiErrorResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Failed API envelope: `{"success": false, "error": {"message": ..., "code": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorResponse {
    success: bool,
    pub error: ApiErrorBody,
}

impl ApiErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ApiErrorBody {
                message: message.into(),
                code: None,
            },
        }
    }

    /// Attaches a machine-readable error code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.error.code = Some(code.into());
        self
    }
}

/// Either envelope. Serialized without an extra tag; `success` tells them apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Success(ApiSuccessResponse<T>),
    Error(ApiErrorResponse),
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self::Success(ApiSuccessResponse::new(data))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(ApiErrorResponse::new(message))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl From<ApiErrorResponse> for ApiResponse<()> {
    fn from(err: ApiErrorResponse) -> Self {
        Self::Error(err)
    }
}
