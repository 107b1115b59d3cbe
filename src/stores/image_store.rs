use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
};

use crate::errors::ApiError;
use crate::types::db::hotel::Entity as Hotel;
use crate::types::db::image::{self, Entity as Image};

/// ImageStore manages hotel images (metadata plus blob)
pub struct ImageStore {
    db: DatabaseConnection,
}

impl ImageStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn hotel_exists(&self, hotel_id: i32) -> Result<bool, ApiError> {
        Ok(Hotel::find_by_id(hotel_id)
            .one(&self.db)
            .await
            .map_err(ApiError::from_db)?
            .is_some())
    }

    /// List the images of a hotel. An absent hotel is 404.
    pub async fn list_for_hotel(&self, hotel_id: i32) -> Result<Vec<image::Model>, ApiError> {
        if !self.hotel_exists(hotel_id).await? {
            return Err(ApiError::not_found("Hotel not found"));
        }

        Image::find()
            .filter(image::Column::HotelId.eq(hotel_id))
            .all(&self.db)
            .await
            .map_err(ApiError::from_db)
    }

    /// Store an uploaded image. An empty filename or a dangling hotel id is
    /// a validation error.
    pub async fn create(
        &self,
        name: &str,
        data: Vec<u8>,
        hotel_id: i32,
    ) -> Result<image::Model, ApiError> {
        if name.is_empty() {
            return Err(ApiError::validation("No image selected"));
        }
        if !self.hotel_exists(hotel_id).await? {
            return Err(ApiError::validation("hotel does not exist"));
        }

        let new_image = image::ActiveModel {
            name: Set(name.to_string()),
            data: Set(data),
            hotel_id: Set(hotel_id),
            ..Default::default()
        };

        new_image.insert(&self.db).await.map_err(ApiError::from_db)
    }

    /// Delete one image, scoped to its hotel.
    pub async fn delete(&self, hotel_id: i32, image_id: i32) -> Result<(), ApiError> {
        if !self.hotel_exists(hotel_id).await? {
            return Err(ApiError::not_found("Hotel not found"));
        }

        let image = Image::find()
            .filter(image::Column::Id.eq(image_id))
            .filter(image::Column::HotelId.eq(hotel_id))
            .one(&self.db)
            .await
            .map_err(ApiError::from_db)?
            .ok_or_else(|| ApiError::not_found("Image not found for the specified hotel"))?;

        image.delete(&self.db).await.map_err(ApiError::from_db)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::HotelStore;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    async fn setup() -> (ImageStore, HotelStore) {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");
        (ImageStore::new(db.clone()), HotelStore::new(db))
    }

    #[tokio::test]
    async fn test_create_and_list_for_hotel() {
        let (images, hotels) = setup().await;
        let hotel = hotels.create("H", "L", "D").await.unwrap();

        images
            .create("front.jpg", vec![1, 2, 3], hotel.id)
            .await
            .unwrap();
        images
            .create("lobby.jpg", vec![4, 5], hotel.id)
            .await
            .unwrap();

        let listed = images.list_for_hotel(hotel.id).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().any(|i| i.name == "front.jpg" && i.data == vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_list_for_missing_hotel_is_not_found() {
        let (images, _hotels) = setup().await;

        match images.list_for_hotel(9999).await {
            Err(ApiError::NotFound(_)) => {}
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_empty_filename() {
        let (images, hotels) = setup().await;
        let hotel = hotels.create("H", "L", "D").await.unwrap();

        match images.create("", vec![1], hotel.id).await {
            Err(ApiError::Validation(_)) => {}
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_dangling_hotel_id() {
        let (images, _hotels) = setup().await;

        match images.create("front.jpg", vec![1], 9999).await {
            Err(ApiError::Validation(_)) => {}
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_is_scoped_to_hotel() {
        let (images, hotels) = setup().await;
        let h1 = hotels.create("H1", "L", "D").await.unwrap();
        let h2 = hotels.create("H2", "L", "D").await.unwrap();
        let img = images.create("front.jpg", vec![1], h1.id).await.unwrap();

        // Wrong hotel: 404, image survives
        match images.delete(h2.id, img.id).await {
            Err(ApiError::NotFound(_)) => {}
            other => panic!("Expected NotFound, got {:?}", other),
        }
        assert_eq!(images.list_for_hotel(h1.id).await.unwrap().len(), 1);

        // Right hotel: deleted
        images.delete(h1.id, img.id).await.unwrap();
        assert!(images.list_for_hotel(h1.id).await.unwrap().is_empty());
    }
}
