// Database entities - SeaORM models
pub mod booking;
pub mod chambre;
pub mod hotel;
pub mod image;
pub mod user;
