use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

use crate::errors::ApiError;
use crate::stores::cascade;
use crate::types::db::user::{self, Entity as User};
use crate::types::dto::user::UpdateUserRequest;
use crate::types::internal::auth::Role;

/// UserStore manages accounts and credential verification
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn hash_password(password: &str) -> Result<String, ApiError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| ApiError::internal_error(format!("Password hashing error: {}", e)))
    }

    /// Register a new account. Role defaults to guest; the email must be
    /// unused; all fields are required and non-empty.
    pub async fn register(
        &self,
        pseudo: &str,
        email: &str,
        password: &str,
    ) -> Result<user::Model, ApiError> {
        if pseudo.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(ApiError::validation("missing parameter"));
        }

        let existing = User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(ApiError::from_db)?;
        if existing.is_some() {
            return Err(ApiError::validation("email already registered"));
        }

        let new_user = user::ActiveModel {
            pseudo: Set(pseudo.to_string()),
            email: Set(email.to_string()),
            password: Set(Self::hash_password(password)?),
            role: Set(Role::Guest.as_str().to_string()),
            ..Default::default()
        };

        new_user.insert(&self.db).await.map_err(ApiError::from_db)
    }

    /// Verify credentials. Unknown email and wrong password fail with the
    /// same error so neither case is distinguishable from outside.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<user::Model, ApiError> {
        let user = User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|_| ApiError::invalid_credentials())?
            .ok_or_else(ApiError::invalid_credentials)?;

        let parsed_hash =
            PasswordHash::new(&user.password).map_err(|_| ApiError::invalid_credentials())?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| ApiError::invalid_credentials())?;

        Ok(user)
    }

    pub async fn get(&self, id: i32) -> Result<user::Model, ApiError> {
        User::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ApiError::from_db)?
            .ok_or_else(|| ApiError::not_found("user not found"))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<user::Model, ApiError> {
        User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(ApiError::from_db)?
            .ok_or_else(|| ApiError::not_found("user not found"))
    }

    pub async fn list_all(&self) -> Result<Vec<user::Model>, ApiError> {
        User::find().all(&self.db).await.map_err(ApiError::from_db)
    }

    /// Partial profile update. An absent or empty password means "no change";
    /// a supplied one is re-hashed.
    pub async fn update(&self, id: i32, fields: UpdateUserRequest) -> Result<user::Model, ApiError> {
        let existing = self.get(id).await?;

        let mut active: user::ActiveModel = existing.into();
        if let Some(pseudo) = fields.pseudo {
            active.pseudo = Set(pseudo);
        }
        if let Some(email) = fields.email {
            active.email = Set(email);
        }
        if let Some(password) = fields.password {
            if !password.is_empty() {
                active.password = Set(Self::hash_password(&password)?);
            }
        }

        active.update(&self.db).await.map_err(ApiError::from_db)
    }

    /// Delete an account together with its bookings, atomically.
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        self.get(id).await?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ApiError::internal_error(format!("Failed to start transaction: {}", e)))?;

        cascade::delete_user(&txn, id)
            .await
            .map_err(ApiError::from_db)?;

        txn.commit()
            .await
            .map_err(|e| ApiError::internal_error(format!("Failed to commit transaction: {}", e)))
    }

    /// Promote or demote an account. Used by test setups and operator
    /// tooling; there is no public endpoint for role changes.
    pub async fn set_role(&self, id: i32, role: Role) -> Result<user::Model, ApiError> {
        let existing = self.get(id).await?;
        let mut active: user::ActiveModel = existing.into();
        active.role = Set(role.as_str().to_string());
        active.update(&self.db).await.map_err(ApiError::from_db)
    }
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStore")
            .field("db", &"<connection>")
            .finish()
    }
}
