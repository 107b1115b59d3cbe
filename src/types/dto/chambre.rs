use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::chambre;

/// Request model for chambre creation
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateChambreRequest {
    /// Room number within the hotel
    pub numero: i32,

    /// Sleeping capacity
    pub nb_personne: i32,

    /// Hotel this chambre belongs to
    pub hotel_id: i32,
}

/// Partial update of a chambre. Absent fields are left unchanged.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UpdateChambreRequest {
    pub numero: Option<i32>,
    pub nb_personne: Option<i32>,
}

/// Chambre record as returned to clients
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct ChambreResponse {
    pub id: i32,
    pub numero: i32,
    pub nb_personne: i32,
    pub hotel_id: i32,
}

impl From<chambre::Model> for ChambreResponse {
    fn from(model: chambre::Model) -> Self {
        ChambreResponse {
            id: model.id,
            numero: model.numero,
            nb_personne: model.nb_personne,
            hotel_id: model.hotel_id,
        }
    }
}
