// Request/response models - one module per resource
pub mod auth;
pub mod booking;
pub mod chambre;
pub mod common;
pub mod hotel;
pub mod image;
pub mod user;
