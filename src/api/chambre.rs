use poem_openapi::{param::Path, param::Query, payload::Json, OpenApi};
use std::sync::Arc;

use crate::api::{authenticate, BearerAuth};
use crate::errors::ApiError;
use crate::services::{policy, TokenService};
use crate::stores::ChambreStore;
use crate::types::dto::chambre::{ChambreResponse, CreateChambreRequest, UpdateChambreRequest};
use crate::types::dto::common::DeleteResponse;

/// Chambre (room) API endpoints
pub struct ChambreApi {
    chambres: Arc<ChambreStore>,
    tokens: Arc<TokenService>,
}

impl ChambreApi {
    pub fn new(chambres: Arc<ChambreStore>, tokens: Arc<TokenService>) -> Self {
        Self { chambres, tokens }
    }
}

#[OpenApi]
impl ChambreApi {
    /// List chambres, optionally filtered by hotel. Public; default limit 10.
    #[oai(path = "/chambres", method = "get")]
    async fn list_chambres(
        &self,
        limit: Query<Option<u64>>,
        hotel_id: Query<Option<i32>>,
    ) -> Result<Json<Vec<ChambreResponse>>, ApiError> {
        let chambres = self.chambres.list(limit.0, hotel_id.0).await?;
        Ok(Json(
            chambres.into_iter().map(ChambreResponse::from).collect(),
        ))
    }

    /// Create a chambre (admin only)
    #[oai(path = "/chambres", method = "post")]
    async fn create_chambre(
        &self,
        auth: BearerAuth,
        body: Json<CreateChambreRequest>,
    ) -> Result<Json<ChambreResponse>, ApiError> {
        let caller = authenticate(&self.tokens, &auth)?;
        if !policy::can_manage_catalog(&caller) {
            return Err(ApiError::forbidden());
        }

        let created = self
            .chambres
            .create(body.numero, body.nb_personne, body.hotel_id)
            .await?;
        Ok(Json(created.into()))
    }

    /// Partially update a chambre (admin only)
    #[oai(path = "/chambres/:id", method = "put")]
    async fn update_chambre(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<UpdateChambreRequest>,
    ) -> Result<Json<ChambreResponse>, ApiError> {
        let caller = authenticate(&self.tokens, &auth)?;
        if !policy::can_manage_catalog(&caller) {
            return Err(ApiError::forbidden());
        }

        let updated = self.chambres.update(id.0, body.0).await?;
        Ok(Json(updated.into()))
    }

    /// Delete a chambre and, atomically, its bookings (admin only)
    #[oai(path = "/chambres/:id", method = "delete")]
    async fn delete_chambre(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
    ) -> Result<Json<DeleteResponse>, ApiError> {
        let caller = authenticate(&self.tokens, &auth)?;
        if !policy::can_manage_catalog(&caller) {
            return Err(ApiError::forbidden());
        }

        self.chambres.delete(id.0).await?;
        Ok(Json(DeleteResponse::ok()))
    }
}
