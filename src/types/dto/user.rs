use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::user;

/// Request model for public registration
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name
    pub pseudo: String,

    /// Email address, unique across users
    pub email: String,

    /// Plaintext password, hashed before storage
    pub password: String,
}

/// Partial update of a user profile. Absent fields are left unchanged.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub pseudo: Option<String>,
    pub email: Option<String>,
    /// New password; empty string means "no change"
    pub password: Option<String>,
}

/// User record as returned to clients. Carries no password material.
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub pseudo: String,
    pub email: String,
    pub role: String,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        UserResponse {
            id: model.id,
            pseudo: model.pseudo,
            email: model.email,
            role: model.role,
        }
    }
}
