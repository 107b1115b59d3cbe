use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
    TransactionTrait,
};

use crate::errors::ApiError;
use crate::types::db::booking::{self, Entity as Booking};
use crate::types::db::chambre::Entity as Chambre;
use crate::types::dto::booking::UpdateBookingRequest;

/// BookingStore manages reservations.
///
/// There is no availability check: two bookings for the same chambre with
/// overlapping date ranges both succeed. Known gap, kept as-is.
pub struct BookingStore {
    db: DatabaseConnection,
}

impl BookingStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a booking for `user_id`. The chambre existence check and the
    /// insert share one transaction so the FK target cannot vanish between
    /// them.
    pub async fn create(
        &self,
        chambre_id: i32,
        user_id: i32,
        datein: NaiveDate,
        dateout: NaiveDate,
    ) -> Result<booking::Model, ApiError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ApiError::internal_error(format!("Failed to start transaction: {}", e)))?;

        let chambre_exists = Chambre::find_by_id(chambre_id)
            .one(&txn)
            .await
            .map_err(ApiError::from_db)?
            .is_some();
        if !chambre_exists {
            return Err(ApiError::validation("chambre does not exist"));
        }

        let new_booking = booking::ActiveModel {
            chambre_id: Set(chambre_id),
            user_id: Set(user_id),
            datein: Set(datein),
            dateout: Set(dateout),
            ..Default::default()
        };

        let created = new_booking.insert(&txn).await.map_err(ApiError::from_db)?;

        txn.commit()
            .await
            .map_err(|e| ApiError::internal_error(format!("Failed to commit transaction: {}", e)))?;

        Ok(created)
    }

    pub async fn get(&self, id: i32) -> Result<booking::Model, ApiError> {
        Booking::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ApiError::from_db)?
            .ok_or_else(|| ApiError::not_found("booking not found"))
    }

    pub async fn list_all(&self) -> Result<Vec<booking::Model>, ApiError> {
        Booking::find()
            .all(&self.db)
            .await
            .map_err(ApiError::from_db)
    }

    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<booking::Model>, ApiError> {
        Booking::find()
            .filter(booking::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(ApiError::from_db)
    }

    /// Partial update of the dates; absent fields are left unchanged.
    pub async fn update(
        &self,
        id: i32,
        fields: UpdateBookingRequest,
    ) -> Result<booking::Model, ApiError> {
        let existing = self.get(id).await?;

        let mut active: booking::ActiveModel = existing.into();
        if let Some(datein) = fields.datein {
            active.datein = Set(datein);
        }
        if let Some(dateout) = fields.dateout {
            active.dateout = Set(dateout);
        }

        active.update(&self.db).await.map_err(ApiError::from_db)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        let existing = self.get(id).await?;
        existing.delete(&self.db).await.map_err(ApiError::from_db)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::{ChambreStore, HotelStore, UserStore};
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    struct Fixture {
        bookings: BookingStore,
        chambres: ChambreStore,
        hotels: HotelStore,
        users: UserStore,
    }

    async fn setup() -> Fixture {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");
        Fixture {
            bookings: BookingStore::new(db.clone()),
            chambres: ChambreStore::new(db.clone()),
            hotels: HotelStore::new(db.clone()),
            users: UserStore::new(db),
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_create_requires_existing_chambre() {
        let f = setup().await;
        let user = f.users.register("u", "u@example.com", "pass").await.unwrap();

        let result = f
            .bookings
            .create(9999, user.id, date("2024-02-23"), date("2024-02-25"))
            .await;

        match result {
            Err(ApiError::Validation(_)) => {}
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_and_list_for_user() {
        let f = setup().await;
        let hotel = f.hotels.create("H", "L", "D").await.unwrap();
        let chambre = f.chambres.create(1, 2, hotel.id).await.unwrap();
        let alice = f.users.register("a", "a@example.com", "pass").await.unwrap();
        let bob = f.users.register("b", "b@example.com", "pass").await.unwrap();

        f.bookings
            .create(chambre.id, alice.id, date("2024-03-01"), date("2024-03-05"))
            .await
            .unwrap();
        f.bookings
            .create(chambre.id, bob.id, date("2024-03-10"), date("2024-03-12"))
            .await
            .unwrap();

        let for_alice = f.bookings.list_for_user(alice.id).await.unwrap();
        assert_eq!(for_alice.len(), 1);
        assert_eq!(for_alice[0].user_id, alice.id);
        assert_eq!(for_alice[0].datein, date("2024-03-01"));

        assert_eq!(f.bookings.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_overlapping_bookings_are_not_rejected() {
        // Documented gap: no availability check exists.
        let f = setup().await;
        let hotel = f.hotels.create("H", "L", "D").await.unwrap();
        let chambre = f.chambres.create(1, 2, hotel.id).await.unwrap();
        let user = f.users.register("u", "u@example.com", "pass").await.unwrap();

        f.bookings
            .create(chambre.id, user.id, date("2024-03-01"), date("2024-03-10"))
            .await
            .unwrap();
        let second = f
            .bookings
            .create(chambre.id, user.id, date("2024-03-05"), date("2024-03-08"))
            .await;

        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn test_update_overwrites_only_supplied_dates() {
        let f = setup().await;
        let hotel = f.hotels.create("H", "L", "D").await.unwrap();
        let chambre = f.chambres.create(1, 2, hotel.id).await.unwrap();
        let user = f.users.register("u", "u@example.com", "pass").await.unwrap();
        let booking = f
            .bookings
            .create(chambre.id, user.id, date("2024-03-01"), date("2024-03-05"))
            .await
            .unwrap();

        let updated = f
            .bookings
            .update(
                booking.id,
                UpdateBookingRequest {
                    datein: None,
                    dateout: Some(date("2024-03-07")),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.datein, date("2024-03-01"));
        assert_eq!(updated.dateout, date("2024-03-07"));
    }

    #[tokio::test]
    async fn test_delete_missing_booking_is_not_found() {
        let f = setup().await;

        match f.bookings.delete(9999).await {
            Err(ApiError::NotFound(_)) => {}
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }
}
