use poem_openapi::{param::Path, payload::Json, OpenApi};
use std::sync::Arc;

use crate::api::{authenticate, BearerAuth};
use crate::errors::ApiError;
use crate::services::policy::{self, ListingScope};
use crate::services::TokenService;
use crate::stores::UserStore;
use crate::types::dto::common::DeleteResponse;
use crate::types::dto::user::{RegisterRequest, UpdateUserRequest, UserResponse};

/// User account API endpoints
pub struct UserApi {
    users: Arc<UserStore>,
    tokens: Arc<TokenService>,
}

impl UserApi {
    pub fn new(users: Arc<UserStore>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }
}

#[OpenApi]
impl UserApi {
    /// List users: employees see everyone, everyone else sees only their own
    /// record (always returned as a list)
    #[oai(path = "/user", method = "get")]
    async fn list_users(&self, auth: BearerAuth) -> Result<Json<Vec<UserResponse>>, ApiError> {
        let caller = authenticate(&self.tokens, &auth)?;

        let users = match policy::user_listing_scope(&caller) {
            ListingScope::All => self.users.list_all().await?,
            ListingScope::OwnOnly => vec![self.users.get(caller.id).await?],
        };

        Ok(Json(users.into_iter().map(UserResponse::from).collect()))
    }

    /// Public registration; the new account gets the guest role
    #[oai(path = "/user", method = "post")]
    async fn register(&self, body: Json<RegisterRequest>) -> Result<Json<UserResponse>, ApiError> {
        let created = self
            .users
            .register(&body.pseudo, &body.email, &body.password)
            .await?;
        Ok(Json(created.into()))
    }

    /// Partially update a profile (the owner or an admin)
    #[oai(path = "/user/:id", method = "put")]
    async fn update_user(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<UpdateUserRequest>,
    ) -> Result<Json<UserResponse>, ApiError> {
        let caller = authenticate(&self.tokens, &auth)?;
        if !policy::can_act_on_owned(&caller, id.0) {
            return Err(ApiError::forbidden());
        }

        let updated = self.users.update(id.0, body.0).await?;
        Ok(Json(updated.into()))
    }

    /// Delete the caller's own account together with their bookings
    #[oai(path = "/user", method = "delete")]
    async fn delete_own_account(&self, auth: BearerAuth) -> Result<Json<DeleteResponse>, ApiError> {
        let caller = authenticate(&self.tokens, &auth)?;

        self.users.delete(caller.id).await?;
        Ok(Json(DeleteResponse::ok()))
    }
}
