//! Salted password hashing.
//!
//! Hashes are Argon2id PHC strings, so the salt and parameters travel with the
//! stored value. Verification goes through `PasswordVerifier`, which compares
//! digests in constant time.

use std::sync::OnceLock;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use async_trait::async_trait;

use crate::app_error::{AppError, AppResult};

/// Password hashing as seen by the use cases. Implementations must not hold
/// up the async executor while they work.
#[async_trait]
pub trait PasswordService: Send + Sync {
    async fn hash(&self, password: &str) -> AppResult<String>;
    async fn verify(&self, password: &str, stored_hash: &str) -> AppResult<bool>;
}

/// Argon2id on the blocking thread pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Passwords;

#[async_trait]
impl PasswordService for Argon2Passwords {
    async fn hash(&self, password: &str) -> AppResult<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AppError::Internal(format!("password hashing task failed: {e}")))?
    }

    async fn verify(&self, password: &str, stored_hash: &str) -> AppResult<bool> {
        let password = password.to_owned();
        let stored_hash = stored_hash.to_owned();
        tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
            .await
            .map_err(|e| AppError::Internal(format!("password check task failed: {e}")))
    }
}

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut rand::rngs::OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))
}

/// Returns `false` for a wrong password and for a malformed stored hash.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        tracing::warn!("Stored password hash is not a valid PHC string");
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// A hash no password maps to in practice, checked against when the account
/// does not exist so the lookup costs the same either way.
pub fn decoy_hash() -> Option<&'static str> {
    static DECOY: OnceLock<Option<String>> = OnceLock::new();
    DECOY
        .get_or_init(|| match hash_password("medtrack-decoy-password") {
            Ok(hash) => Some(hash),
            Err(e) => {
                tracing::error!(error = %e, "Could not build decoy password hash");
                None
            }
        })
        .as_deref()
}
