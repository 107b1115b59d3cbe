// API layer - HTTP endpoints
pub mod auth;
pub mod booking;
pub mod chambre;
pub mod health;
pub mod hotel;
pub mod image;
pub mod user;

pub use auth::AuthApi;
pub use booking::BookingApi;
pub use chambre::ChambreApi;
pub use health::HealthApi;
pub use hotel::HotelApi;
pub use image::ImageApi;
pub use user::UserApi;

use poem_openapi::{auth::Bearer, SecurityScheme};

use crate::errors::ApiError;
use crate::services::TokenService;
use crate::types::internal::auth::Identity;

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    key_name = "Authorization",
    key_in = "header",
    bearer_format = "JWT"
)]
pub struct BearerAuth(pub Bearer);

/// Validate the bearer token and build the caller's identity, once per
/// request.
pub(crate) fn authenticate(tokens: &TokenService, auth: &BearerAuth) -> Result<Identity, ApiError> {
    let claims = tokens.validate(&auth.0.token)?;
    Ok(Identity::from(&claims))
}
