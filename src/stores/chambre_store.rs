use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect, Set,
    TransactionTrait,
};

use crate::errors::ApiError;
use crate::stores::cascade;
use crate::stores::hotel_store::DEFAULT_LIST_LIMIT;
use crate::types::db::chambre::{self, Entity as Chambre};
use crate::types::db::hotel::Entity as Hotel;
use crate::types::dto::chambre::UpdateChambreRequest;

/// ChambreStore manages rooms within hotels
pub struct ChambreStore {
    db: DatabaseConnection,
}

impl ChambreStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a chambre. The target hotel must exist; a dangling `hotel_id`
    /// is a validation error, not a driver error.
    pub async fn create(
        &self,
        numero: i32,
        nb_personne: i32,
        hotel_id: i32,
    ) -> Result<chambre::Model, ApiError> {
        let hotel_exists = Hotel::find_by_id(hotel_id)
            .one(&self.db)
            .await
            .map_err(ApiError::from_db)?
            .is_some();
        if !hotel_exists {
            return Err(ApiError::validation("hotel does not exist"));
        }

        let new_chambre = chambre::ActiveModel {
            numero: Set(numero),
            nb_personne: Set(nb_personne),
            hotel_id: Set(hotel_id),
            ..Default::default()
        };

        new_chambre
            .insert(&self.db)
            .await
            .map_err(ApiError::from_db)
    }

    /// List chambres, optionally filtered by hotel.
    pub async fn list(
        &self,
        limit: Option<u64>,
        hotel_id: Option<i32>,
    ) -> Result<Vec<chambre::Model>, ApiError> {
        let mut query = Chambre::find();
        if let Some(hotel_id) = hotel_id {
            query = query.filter(chambre::Column::HotelId.eq(hotel_id));
        }
        query
            .limit(limit.unwrap_or(DEFAULT_LIST_LIMIT))
            .all(&self.db)
            .await
            .map_err(ApiError::from_db)
    }

    pub async fn get(&self, id: i32) -> Result<chambre::Model, ApiError> {
        Chambre::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ApiError::from_db)?
            .ok_or_else(|| ApiError::not_found("chambre not found"))
    }

    /// Partial update: only supplied fields are overwritten.
    pub async fn update(
        &self,
        id: i32,
        fields: UpdateChambreRequest,
    ) -> Result<chambre::Model, ApiError> {
        let existing = self.get(id).await?;

        let mut active: chambre::ActiveModel = existing.into();
        if let Some(numero) = fields.numero {
            active.numero = Set(numero);
        }
        if let Some(nb_personne) = fields.nb_personne {
            active.nb_personne = Set(nb_personne);
        }

        active.update(&self.db).await.map_err(ApiError::from_db)
    }

    /// Delete a chambre together with its bookings, atomically.
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        self.get(id).await?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ApiError::internal_error(format!("Failed to start transaction: {}", e)))?;

        cascade::delete_chambre(&txn, id)
            .await
            .map_err(ApiError::from_db)?;

        txn.commit()
            .await
            .map_err(|e| ApiError::internal_error(format!("Failed to commit transaction: {}", e)))
    }
}
