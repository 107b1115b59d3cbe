use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};

use crate::errors::ApiError;
use crate::stores::cascade;
use crate::types::db::hotel::{self, Entity as Hotel};
use crate::types::dto::hotel::UpdateHotelRequest;

/// Default page size when a listing gets no explicit limit
pub const DEFAULT_LIST_LIMIT: u64 = 10;

/// HotelStore manages the hotel catalog
pub struct HotelStore {
    db: DatabaseConnection,
}

impl HotelStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a hotel. All three fields are required and non-empty.
    pub async fn create(
        &self,
        name: &str,
        location: &str,
        description: &str,
    ) -> Result<hotel::Model, ApiError> {
        if name.trim().is_empty() || location.trim().is_empty() || description.trim().is_empty() {
            return Err(ApiError::validation("missing parameter"));
        }

        let new_hotel = hotel::ActiveModel {
            name: Set(name.to_string()),
            location: Set(location.to_string()),
            description: Set(description.to_string()),
            created_at: Set(Utc::now().timestamp()),
            ..Default::default()
        };

        new_hotel.insert(&self.db).await.map_err(ApiError::from_db)
    }

    /// List hotels ordered by creation time, then name, then location.
    pub async fn list(&self, limit: Option<u64>) -> Result<Vec<hotel::Model>, ApiError> {
        Hotel::find()
            .order_by_asc(hotel::Column::CreatedAt)
            .order_by_asc(hotel::Column::Name)
            .order_by_asc(hotel::Column::Location)
            .limit(limit.unwrap_or(DEFAULT_LIST_LIMIT))
            .all(&self.db)
            .await
            .map_err(ApiError::from_db)
    }

    pub async fn get(&self, id: i32) -> Result<hotel::Model, ApiError> {
        Hotel::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ApiError::from_db)?
            .ok_or_else(|| ApiError::not_found("hotel not found"))
    }

    /// Partial update: only supplied fields are overwritten.
    pub async fn update(
        &self,
        id: i32,
        fields: UpdateHotelRequest,
    ) -> Result<hotel::Model, ApiError> {
        let existing = self.get(id).await?;

        let mut active: hotel::ActiveModel = existing.into();
        if let Some(name) = fields.name {
            active.name = Set(name);
        }
        if let Some(location) = fields.location {
            active.location = Set(location);
        }
        if let Some(description) = fields.description {
            active.description = Set(description);
        }

        active.update(&self.db).await.map_err(ApiError::from_db)
    }

    /// Delete a hotel with its images, chambres, and their bookings, as one
    /// atomic unit.
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        // Existence check before the cascade so an absent id is a 404
        self.get(id).await?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ApiError::internal_error(format!("Failed to start transaction: {}", e)))?;

        cascade::delete_hotel(&txn, id)
            .await
            .map_err(ApiError::from_db)?;

        txn.commit()
            .await
            .map_err(|e| ApiError::internal_error(format!("Failed to commit transaction: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    async fn setup_store() -> HotelStore {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");
        HotelStore::new(db)
    }

    #[tokio::test]
    async fn test_create_persists_hotel_with_created_at() {
        let store = setup_store().await;

        let created = store
            .create("Grand Hotel", "Paris", "A grand hotel")
            .await
            .expect("Failed to create hotel");

        assert_eq!(created.name, "Grand Hotel");
        assert!(created.created_at > 0);
        assert_eq!(store.get(created.id).await.unwrap().location, "Paris");
    }

    #[tokio::test]
    async fn test_create_rejects_empty_required_field() {
        let store = setup_store().await;

        let result = store.create("Grand Hotel", "", "A grand hotel").await;

        match result {
            Err(ApiError::Validation(_)) => {}
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_defaults_to_ten_rows() {
        let store = setup_store().await;

        for i in 0..12 {
            store
                .create(&format!("Hotel {:02}", i), "City", "Desc")
                .await
                .expect("Failed to create hotel");
        }

        let hotels = store.list(None).await.unwrap();
        assert_eq!(hotels.len(), 10);
    }

    #[tokio::test]
    async fn test_list_orders_by_created_at_then_name_then_location() {
        let store = setup_store().await;

        // Same timestamp resolution (seconds), so ordering falls back to name
        store.create("Bravo", "Lyon", "d").await.unwrap();
        store.create("Alpha", "Nice", "d").await.unwrap();
        store.create("Alpha", "Marseille", "d").await.unwrap();

        let hotels = store.list(Some(10)).await.unwrap();
        let keys: Vec<(i64, &str, &str)> = hotels
            .iter()
            .map(|h| (h.created_at, h.name.as_str(), h.location.as_str()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[tokio::test]
    async fn test_update_overwrites_only_supplied_fields() {
        let store = setup_store().await;
        let created = store.create("Old Name", "Old City", "Old Desc").await.unwrap();

        let updated = store
            .update(
                created.id,
                UpdateHotelRequest {
                    name: Some("New Name".to_string()),
                    location: None,
                    description: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "New Name");
        assert_eq!(updated.location, "Old City");
        assert_eq!(updated.description, "Old Desc");
    }

    #[tokio::test]
    async fn test_update_missing_hotel_is_not_found() {
        let store = setup_store().await;

        let result = store
            .update(
                9999,
                UpdateHotelRequest {
                    name: Some("x".to_string()),
                    location: None,
                    description: None,
                },
            )
            .await;

        match result {
            Err(ApiError::NotFound(_)) => {}
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_missing_hotel_is_not_found() {
        let store = setup_store().await;

        match store.delete(9999).await {
            Err(ApiError::NotFound(_)) => {}
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }
}
