use chrono::NaiveDate;
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::booking;

/// Request model for booking creation. The booking is always created for
/// the authenticated caller; there is no `user_id` field.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    /// Chambre to book
    pub chambre_id: i32,

    /// Check-in date (YYYY-MM-DD)
    pub datein: NaiveDate,

    /// Check-out date (YYYY-MM-DD)
    pub dateout: NaiveDate,
}

/// Partial update of a booking's dates. Absent fields are left unchanged.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UpdateBookingRequest {
    pub datein: Option<NaiveDate>,
    pub dateout: Option<NaiveDate>,
}

/// Booking record as returned to clients
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub id: i32,
    pub chambre_id: i32,
    pub user_id: i32,
    pub datein: NaiveDate,
    pub dateout: NaiveDate,
}

impl From<booking::Model> for BookingResponse {
    fn from(model: booking::Model) -> Self {
        BookingResponse {
            id: model.id,
            chambre_id: model.chambre_id,
            user_id: model.user_id,
            datein: model.datein,
            dateout: model.dateout,
        }
    }
}
