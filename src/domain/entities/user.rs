use chrono::{DateTime, Utc};

/// A registered user, keyed by email.
#[derive(Debug, Clone)]
pub struct User {
    pub email: String,
    pub full_name: String,
    /// Argon2 PHC string, never the raw password.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
