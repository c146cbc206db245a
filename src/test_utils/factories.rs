//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use std::net::SocketAddr;
use std::sync::OnceLock;

use chrono::{DateTime, TimeZone, Utc};
use secrecy::SecretString;
use time::Duration;

use crate::{
    application::password::hash_password,
    domain::entities::{session::SessionUser, user::User},
    infra::config::AppConfig,
};

/// Plain-text password of every user built by `create_test_user`.
pub const TEST_PASSWORD: &str = "password123";

/// Create a test user whose password is `TEST_PASSWORD`.
pub fn create_test_user(overrides: impl FnOnce(&mut User)) -> User {
    // Hashing is deliberately slow, so share one hash across tests
    static HASH: OnceLock<String> = OnceLock::new();
    let password_hash = HASH
        .get_or_init(|| hash_password(TEST_PASSWORD).expect("hashing test password"))
        .clone();

    let mut user = User {
        email: "user@example.com".to_string(),
        full_name: "Test User".to_string(),
        password_hash,
        created_at: test_datetime(),
    };
    overrides(&mut user);
    user
}

pub fn create_test_session() -> SessionUser {
    SessionUser {
        user: "Test User".to_string(),
        email: "user@example.com".to_string(),
    }
}

/// Minimal config for tests. No external service is contacted.
pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:5000".parse::<SocketAddr>().unwrap(),
        redis_url: String::new(),
        notify_topic: Some("appointments-test".to_string()),
        session_secret: SecretString::new("test_session_secret".into()),
        session_ttl: Duration::hours(24),
        secure_cookies: false,
    }
}

/// Fixed datetime for reproducible tests.
pub fn test_datetime() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
}
