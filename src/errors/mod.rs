// Error taxonomy shared by every endpoint
pub mod api;

pub use api::{ApiError, ApiErrorResponse};
