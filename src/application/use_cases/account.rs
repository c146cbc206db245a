use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::password::{Argon2Passwords, PasswordService, decoy_hash},
    domain::entities::{session::SessionUser, user::User},
};

#[async_trait]
pub trait UserRepo: Send + Sync {
    /// Inserts the user or replaces the record already stored under its email.
    async fn put_user(&self, user: &User) -> AppResult<()>;
    async fn get_user(&self, email: &str) -> AppResult<Option<User>>;
}

/// Raw signup form values, before validation.
#[derive(Debug, Clone, Default)]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone)]
pub struct AccountUseCases {
    repo: Arc<dyn UserRepo>,
    passwords: Arc<dyn PasswordService>,
}

impl AccountUseCases {
    pub fn new(repo: Arc<dyn UserRepo>) -> Self {
        Self::with_passwords(repo, Arc::new(Argon2Passwords))
    }

    pub fn with_passwords(repo: Arc<dyn UserRepo>, passwords: Arc<dyn PasswordService>) -> Self {
        Self { repo, passwords }
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn sign_up(&self, request: SignupRequest) -> AppResult<()> {
        if request.full_name.is_empty()
            || request.email.is_empty()
            || request.password.is_empty()
            || request.confirm_password.is_empty()
        {
            return Err(AppError::InvalidInput("All fields are required.".into()));
        }
        if request.password != request.confirm_password {
            return Err(AppError::InvalidInput("Passwords do not match.".into()));
        }

        let user = User {
            password_hash: self.passwords.hash(&request.password).await?,
            email: request.email,
            full_name: request.full_name,
            created_at: Utc::now(),
        };
        self.repo.put_user(&user).await?;

        tracing::info!("User signed up");
        Ok(())
    }

    /// Unknown email and wrong password both yield `InvalidCredentials`, after
    /// the same amount of hashing work.
    #[instrument(skip(self, password))]
    pub async fn log_in(&self, email: &str, password: &str) -> AppResult<SessionUser> {
        let Some(user) = self.repo.get_user(email).await? else {
            if let Some(decoy) = decoy_hash() {
                self.passwords.verify(password, decoy).await?;
            }
            return Err(AppError::InvalidCredentials);
        };

        if !self.passwords.verify(password, &user.password_hash).await? {
            return Err(AppError::InvalidCredentials);
        }

        Ok(SessionUser {
            user: user.full_name,
            email: user.email,
        })
    }
}
