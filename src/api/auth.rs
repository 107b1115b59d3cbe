use poem_openapi::{payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::{authenticate, BearerAuth};
use crate::errors::ApiError;
use crate::services::TokenService;
use crate::stores::UserStore;
use crate::types::dto::auth::{LoginRequest, LoginResponse, LogoutResponse};
use crate::types::internal::auth::{Identity, Role};

/// Authentication API endpoints
pub struct AuthApi {
    users: Arc<UserStore>,
    tokens: Arc<TokenService>,
}

impl AuthApi {
    pub fn new(users: Arc<UserStore>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }
}

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi]
impl AuthApi {
    /// Login with email and password to receive an access token
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(&self, body: Json<LoginRequest>) -> Result<Json<LoginResponse>, ApiError> {
        let user = self
            .users
            .verify_credentials(&body.email, &body.password)
            .await?;

        // A stored role outside the known set means no access
        let role = Role::parse(&user.role).ok_or_else(ApiError::forbidden)?;
        let identity = Identity { id: user.id, role };

        let access_token = self.tokens.issue(&identity)?;

        Ok(Json(LoginResponse {
            access_token,
            user: user.into(),
        }))
    }

    /// Logout. Sessions are stateless: the server keeps nothing, the client
    /// discards its token.
    #[oai(path = "/logout", method = "post", tag = "AuthTags::Authentication")]
    async fn logout(&self, auth: BearerAuth) -> Result<Json<LogoutResponse>, ApiError> {
        authenticate(&self.tokens, &auth)?;

        Ok(Json(LogoutResponse {
            msg: "logout successful".to_string(),
        }))
    }
}
