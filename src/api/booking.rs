use poem_openapi::{
    param::{Path, Query},
    payload::Json,
    OpenApi,
};
use std::sync::Arc;

use crate::api::{authenticate, BearerAuth};
use crate::errors::ApiError;
use crate::services::policy::{self, ListingScope};
use crate::services::TokenService;
use crate::stores::{BookingStore, UserStore};
use crate::types::dto::booking::{BookingResponse, CreateBookingRequest, UpdateBookingRequest};
use crate::types::dto::common::DeleteResponse;

/// Booking API endpoints. All of them require a valid token.
pub struct BookingApi {
    bookings: Arc<BookingStore>,
    users: Arc<UserStore>,
    tokens: Arc<TokenService>,
}

impl BookingApi {
    pub fn new(
        bookings: Arc<BookingStore>,
        users: Arc<UserStore>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            bookings,
            users,
            tokens,
        }
    }
}

#[OpenApi]
impl BookingApi {
    /// List bookings. Admins see every booking, or a single user's bookings
    /// when the `email` query parameter is given; everyone else sees only
    /// their own.
    #[oai(path = "/booking", method = "get")]
    async fn list_bookings(
        &self,
        auth: BearerAuth,
        email: Query<Option<String>>,
    ) -> Result<Json<Vec<BookingResponse>>, ApiError> {
        let caller = authenticate(&self.tokens, &auth)?;

        let bookings = match policy::booking_listing_scope(&caller) {
            ListingScope::All => match email.0 {
                Some(email) => {
                    let user = self.users.find_by_email(&email).await?;
                    self.bookings.list_for_user(user.id).await?
                }
                None => self.bookings.list_all().await?,
            },
            ListingScope::OwnOnly => self.bookings.list_for_user(caller.id).await?,
        };

        Ok(Json(
            bookings.into_iter().map(BookingResponse::from).collect(),
        ))
    }

    /// Create a booking for the authenticated caller
    #[oai(path = "/booking", method = "post")]
    async fn create_booking(
        &self,
        auth: BearerAuth,
        body: Json<CreateBookingRequest>,
    ) -> Result<Json<BookingResponse>, ApiError> {
        let caller = authenticate(&self.tokens, &auth)?;

        let created = self
            .bookings
            .create(body.chambre_id, caller.id, body.datein, body.dateout)
            .await?;
        Ok(Json(created.into()))
    }

    /// Change the dates of a booking (the owner or an admin)
    #[oai(path = "/booking/:id", method = "put")]
    async fn update_booking(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<UpdateBookingRequest>,
    ) -> Result<Json<BookingResponse>, ApiError> {
        let caller = authenticate(&self.tokens, &auth)?;

        let booking = self.bookings.get(id.0).await?;
        if !policy::can_act_on_owned(&caller, booking.user_id) {
            return Err(ApiError::forbidden());
        }

        let updated = self.bookings.update(id.0, body.0).await?;
        Ok(Json(updated.into()))
    }

    /// Cancel a booking (the owner or an admin)
    #[oai(path = "/booking/:id", method = "delete")]
    async fn delete_booking(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
    ) -> Result<Json<DeleteResponse>, ApiError> {
        let caller = authenticate(&self.tokens, &auth)?;

        let booking = self.bookings.get(id.0).await?;
        if !policy::can_act_on_owned(&caller, booking.user_id) {
            return Err(ApiError::forbidden());
        }

        self.bookings.delete(id.0).await?;
        Ok(Json(DeleteResponse::ok()))
    }
}
