// Services layer - token handling and authorization rules
pub mod policy;
pub mod token_service;

pub use token_service::TokenService;
