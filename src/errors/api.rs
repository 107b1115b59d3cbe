use poem_openapi::{payload::Json, ApiResponse, Object};
use std::fmt;

/// Standardized error response body for every endpoint
#[derive(Object, Debug)]
pub struct ApiErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Error taxonomy for the whole API.
///
/// One variant per HTTP status the service can answer with. Stores and
/// services return this type directly so nothing internal ever reaches the
/// caller unhandled.
#[derive(ApiResponse, Debug)]
pub enum ApiError {
    /// Missing or empty required field, or a constraint violation
    #[oai(status = 400)]
    Validation(Json<ApiErrorResponse>),

    /// Missing, invalid, or expired token; bad credentials at login
    #[oai(status = 401)]
    Unauthorized(Json<ApiErrorResponse>),

    /// Authenticated but lacking the role or ownership for the action
    #[oai(status = 403)]
    Forbidden(Json<ApiErrorResponse>),

    /// Referenced resource does not exist
    #[oai(status = 404)]
    NotFound(Json<ApiErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    Internal(Json<ApiErrorResponse>),
}

impl ApiError {
    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(Json(ApiErrorResponse {
            error: "validation_error".to_string(),
            message: message.into(),
            status_code: 400,
        }))
    }

    /// Create an InvalidCredentials error (uniform for unknown email and
    /// wrong password, so neither case is distinguishable)
    pub fn invalid_credentials() -> Self {
        ApiError::Unauthorized(Json(ApiErrorResponse {
            error: "invalid_credentials".to_string(),
            message: "Invalid email or password".to_string(),
            status_code: 401,
        }))
    }

    /// Create an Unauthorized error for a bad or missing token
    pub fn invalid_token() -> Self {
        ApiError::Unauthorized(Json(ApiErrorResponse {
            error: "invalid_token".to_string(),
            message: "Invalid or malformed token".to_string(),
            status_code: 401,
        }))
    }

    /// Create an Unauthorized error for an expired token
    pub fn expired_token() -> Self {
        ApiError::Unauthorized(Json(ApiErrorResponse {
            error: "expired_token".to_string(),
            message: "Token has expired".to_string(),
            status_code: 401,
        }))
    }

    /// Create a Forbidden error. Always the same body: the policy never
    /// leaks why a caller was refused.
    pub fn forbidden() -> Self {
        ApiError::Forbidden(Json(ApiErrorResponse {
            error: "forbidden".to_string(),
            message: "You do not have permission for this".to_string(),
            status_code: 403,
        }))
    }

    /// Create a NotFound error
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(Json(ApiErrorResponse {
            error: "not_found".to_string(),
            message: message.into(),
            status_code: 404,
        }))
    }

    /// Create an Internal error
    pub fn internal_error(message: impl Into<String>) -> Self {
        ApiError::Internal(Json(ApiErrorResponse {
            error: "internal_error".to_string(),
            message: message.into(),
            status_code: 500,
        }))
    }

    /// Translate a database error. Constraint violations (unique keys,
    /// foreign keys) are caller mistakes, not infrastructure failures.
    pub fn from_db(err: sea_orm::DbErr) -> Self {
        let text = err.to_string();
        if text.contains("UNIQUE") {
            ApiError::validation("Value already exists")
        } else if text.contains("FOREIGN KEY") {
            ApiError::validation("Referenced record does not exist")
        } else {
            ApiError::internal_error(format!("Database error: {}", text))
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ApiError::Validation(json) => json.0.message.clone(),
            ApiError::Unauthorized(json) => json.0.message.clone(),
            ApiError::Forbidden(json) => json.0.message.clone(),
            ApiError::NotFound(json) => json.0.message.clone(),
            ApiError::Internal(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
