use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::hotel;

/// Request model for hotel creation; every field is required and non-empty
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateHotelRequest {
    pub name: String,
    pub location: String,
    pub description: String,
}

/// Partial update of a hotel. Absent fields are left unchanged.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UpdateHotelRequest {
    pub name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// Hotel record as returned to clients
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct HotelResponse {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub description: String,
    /// Creation time (unix timestamp)
    pub created_at: i64,
}

impl From<hotel::Model> for HotelResponse {
    fn from(model: hotel::Model) -> Self {
        HotelResponse {
            id: model.id,
            name: model.name,
            location: model.location,
            description: model.description,
            created_at: model.created_at,
        }
    }
}
