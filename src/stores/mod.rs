// Stores layer - one repository per table, plus the cascade policy
pub mod booking_store;
pub mod cascade;
pub mod chambre_store;
pub mod hotel_store;
pub mod image_store;
pub mod user_store;

pub use booking_store::BookingStore;
pub use chambre_store::ChambreStore;
pub use hotel_store::HotelStore;
pub use image_store::ImageStore;
pub use user_store::UserStore;
