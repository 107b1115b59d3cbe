use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Response for successful deletes (original wire format)
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Always true on success
    pub result: bool,
}

impl DeleteResponse {
    pub fn ok() -> Self {
        Self { result: true }
    }
}

/// Health check response
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Current server time (RFC 3339)
    pub timestamp: String,
}
