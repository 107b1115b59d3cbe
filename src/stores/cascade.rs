//! Cascade policy: child-first deletes run against one open transaction.
//!
//! Dependents per parent:
//! - hotel → images(hotel), chambres(hotel) → bookings(chambre)
//! - chambre → bookings(chambre)
//! - user → bookings(user)
//!
//! Callers own the transaction; a failure anywhere leaves it uncommitted so
//! the whole delete rolls back.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::types::db::{booking, chambre, hotel, image, user};

/// Delete a hotel and everything hanging off it: its images, its chambres,
/// and the bookings of those chambres.
pub async fn delete_hotel<C: ConnectionTrait>(conn: &C, hotel_id: i32) -> Result<(), DbErr> {
    image::Entity::delete_many()
        .filter(image::Column::HotelId.eq(hotel_id))
        .exec(conn)
        .await?;

    let chambre_ids: Vec<i32> = chambre::Entity::find()
        .filter(chambre::Column::HotelId.eq(hotel_id))
        .all(conn)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();

    if !chambre_ids.is_empty() {
        booking::Entity::delete_many()
            .filter(booking::Column::ChambreId.is_in(chambre_ids))
            .exec(conn)
            .await?;
        chambre::Entity::delete_many()
            .filter(chambre::Column::HotelId.eq(hotel_id))
            .exec(conn)
            .await?;
    }

    hotel::Entity::delete_by_id(hotel_id).exec(conn).await?;
    Ok(())
}

/// Delete a chambre and its bookings.
pub async fn delete_chambre<C: ConnectionTrait>(conn: &C, chambre_id: i32) -> Result<(), DbErr> {
    booking::Entity::delete_many()
        .filter(booking::Column::ChambreId.eq(chambre_id))
        .exec(conn)
        .await?;

    chambre::Entity::delete_by_id(chambre_id).exec(conn).await?;
    Ok(())
}

/// Delete a user and their bookings.
pub async fn delete_user<C: ConnectionTrait>(conn: &C, user_id: i32) -> Result<(), DbErr> {
    booking::Entity::delete_many()
        .filter(booking::Column::UserId.eq(user_id))
        .exec(conn)
        .await?;

    user::Entity::delete_by_id(user_id).exec(conn).await?;
    Ok(())
}
