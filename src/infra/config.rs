use std::net::SocketAddr;

use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;
use time::Duration;

/// Key namespace for user records, keyed by email.
pub const USERS_TABLE: &str = "Users";
/// Key namespace for appointment records, keyed by appointment id.
pub const APPOINTMENTS_TABLE: &str = "Appointments";

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Endpoint of the key-value store, also used for topic notifications.
    pub redis_url: String,
    /// Notification channel. Publishing is skipped when unset.
    pub notify_topic: Option<String>,
    /// Signs the session and flash cookies.
    pub session_secret: SecretString,
    pub session_ttl: Duration,
    /// Set the `Secure` attribute on cookies. Enable when served over HTTPS.
    pub secure_cookies: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 5000)));
        let redis_url: String = get_env_default("REDIS_URL", "redis://127.0.0.1:6379".to_string());
        let notify_topic: Option<String> = std::env::var("NOTIFY_TOPIC")
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        let session_secret: SecretString =
            SecretString::new(get_env::<String>("SESSION_SECRET").into());
        let session_ttl_hours: i64 = get_env_default("SESSION_TTL_HOURS", 24);
        let secure_cookies: bool = get_env_default("SECURE_COOKIES", false);

        Self {
            bind_addr,
            redis_url,
            notify_topic,
            session_secret,
            session_ttl: Duration::hours(session_ttl_hours),
            secure_cookies,
        }
    }
}
