mod common;

use chrono::NaiveDate;
use hotel_backend::stores::{BookingStore, ChambreStore, HotelStore, ImageStore, UserStore};
use hotel_backend::types::db::{booking, chambre, image};
use sea_orm::{DatabaseConnection, EntityTrait};

use common::setup_test_db;

struct Stores {
    db: DatabaseConnection,
    hotels: HotelStore,
    chambres: ChambreStore,
    images: ImageStore,
    users: UserStore,
    bookings: BookingStore,
}

async fn setup() -> Stores {
    let db = setup_test_db().await;
    Stores {
        hotels: HotelStore::new(db.clone()),
        chambres: ChambreStore::new(db.clone()),
        images: ImageStore::new(db.clone()),
        users: UserStore::new(db.clone()),
        bookings: BookingStore::new(db.clone()),
        db,
    }
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[tokio::test]
async fn test_hotel_delete_leaves_no_referencing_rows() {
    let s = setup().await;
    let hotel = s.hotels.create("Grand", "Paris", "Rooms").await.unwrap();
    let other = s.hotels.create("Plaza", "Lyon", "More rooms").await.unwrap();

    let c1 = s.chambres.create(101, 2, hotel.id).await.unwrap();
    let c2 = s.chambres.create(102, 4, hotel.id).await.unwrap();
    let kept = s.chambres.create(201, 2, other.id).await.unwrap();

    s.images
        .create("front.jpg", vec![1, 2, 3], hotel.id)
        .await
        .unwrap();
    s.images
        .create("lobby.jpg", vec![4, 5, 6], other.id)
        .await
        .unwrap();

    let guest = s.users.register("g", "g@example.com", "pw").await.unwrap();
    s.bookings
        .create(c1.id, guest.id, date("2024-03-01"), date("2024-03-05"))
        .await
        .unwrap();
    s.bookings
        .create(c2.id, guest.id, date("2024-03-06"), date("2024-03-08"))
        .await
        .unwrap();
    s.bookings
        .create(kept.id, guest.id, date("2024-03-10"), date("2024-03-12"))
        .await
        .unwrap();

    s.hotels.delete(hotel.id).await.unwrap();

    let chambres = chambre::Entity::find().all(&s.db).await.unwrap();
    assert_eq!(chambres.len(), 1);
    assert_eq!(chambres[0].hotel_id, other.id);

    let images = image::Entity::find().all(&s.db).await.unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].hotel_id, other.id);

    let bookings = booking::Entity::find().all(&s.db).await.unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].chambre_id, kept.id);
}

#[tokio::test]
async fn test_chambre_delete_removes_exactly_its_bookings() {
    let s = setup().await;
    let hotel = s.hotels.create("Grand", "Paris", "Rooms").await.unwrap();
    let doomed = s.chambres.create(101, 2, hotel.id).await.unwrap();
    let kept = s.chambres.create(102, 4, hotel.id).await.unwrap();

    let guest = s.users.register("g", "g@example.com", "pw").await.unwrap();
    s.bookings
        .create(doomed.id, guest.id, date("2024-03-01"), date("2024-03-05"))
        .await
        .unwrap();
    s.bookings
        .create(doomed.id, guest.id, date("2024-03-06"), date("2024-03-08"))
        .await
        .unwrap();
    s.bookings
        .create(kept.id, guest.id, date("2024-03-10"), date("2024-03-12"))
        .await
        .unwrap();

    s.chambres.delete(doomed.id).await.unwrap();

    let bookings = booking::Entity::find().all(&s.db).await.unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].chambre_id, kept.id);

    assert_eq!(chambre::Entity::find().all(&s.db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_user_delete_removes_only_their_bookings() {
    let s = setup().await;
    let hotel = s.hotels.create("Grand", "Paris", "Rooms").await.unwrap();
    let room = s.chambres.create(101, 2, hotel.id).await.unwrap();

    let alice = s.users.register("a", "a@example.com", "pw").await.unwrap();
    let bob = s.users.register("b", "b@example.com", "pw").await.unwrap();

    s.bookings
        .create(room.id, alice.id, date("2024-03-01"), date("2024-03-05"))
        .await
        .unwrap();
    s.bookings
        .create(room.id, bob.id, date("2024-03-06"), date("2024-03-08"))
        .await
        .unwrap();

    s.users.delete(alice.id).await.unwrap();

    let bookings = booking::Entity::find().all(&s.db).await.unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].user_id, bob.id);

    // The chambre and its hotel are untouched
    assert!(s.chambres.get(room.id).await.is_ok());
    assert!(s.hotels.get(hotel.id).await.is_ok());
}
