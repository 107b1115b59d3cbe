use poem_openapi::{param::Path, param::Query, payload::Json, OpenApi};
use std::sync::Arc;

use crate::api::{authenticate, BearerAuth};
use crate::errors::ApiError;
use crate::services::{policy, TokenService};
use crate::stores::HotelStore;
use crate::types::dto::common::DeleteResponse;
use crate::types::dto::hotel::{CreateHotelRequest, HotelResponse, UpdateHotelRequest};

/// Hotel catalog API endpoints
pub struct HotelApi {
    hotels: Arc<HotelStore>,
    tokens: Arc<TokenService>,
}

impl HotelApi {
    pub fn new(hotels: Arc<HotelStore>, tokens: Arc<TokenService>) -> Self {
        Self { hotels, tokens }
    }
}

#[OpenApi]
impl HotelApi {
    /// List hotels, ordered by creation time then name then location.
    /// Public; default limit 10.
    #[oai(path = "/hotel", method = "get")]
    async fn list_hotels(
        &self,
        limit: Query<Option<u64>>,
    ) -> Result<Json<Vec<HotelResponse>>, ApiError> {
        let hotels = self.hotels.list(limit.0).await?;
        Ok(Json(hotels.into_iter().map(HotelResponse::from).collect()))
    }

    /// Create a hotel (admin only)
    #[oai(path = "/hotel", method = "post")]
    async fn create_hotel(
        &self,
        auth: BearerAuth,
        body: Json<CreateHotelRequest>,
    ) -> Result<Json<HotelResponse>, ApiError> {
        let caller = authenticate(&self.tokens, &auth)?;
        if !policy::can_manage_catalog(&caller) {
            return Err(ApiError::forbidden());
        }

        let created = self
            .hotels
            .create(&body.name, &body.location, &body.description)
            .await?;
        Ok(Json(created.into()))
    }

    /// Partially update a hotel (admin only)
    #[oai(path = "/hotel/:id", method = "put")]
    async fn update_hotel(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<UpdateHotelRequest>,
    ) -> Result<Json<HotelResponse>, ApiError> {
        let caller = authenticate(&self.tokens, &auth)?;
        if !policy::can_manage_catalog(&caller) {
            return Err(ApiError::forbidden());
        }

        let updated = self.hotels.update(id.0, body.0).await?;
        Ok(Json(updated.into()))
    }

    /// Delete a hotel and, atomically, its images, chambres, and their
    /// bookings (admin only)
    #[oai(path = "/hotel/:id", method = "delete")]
    async fn delete_hotel(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
    ) -> Result<Json<DeleteResponse>, ApiError> {
        let caller = authenticate(&self.tokens, &auth)?;
        if !policy::can_manage_catalog(&caller) {
            return Err(ApiError::forbidden());
        }

        self.hotels.delete(id.0).await?;
        Ok(Json(DeleteResponse::ok()))
    }
}
