use redis::aio::ConnectionManager;

use crate::app_error::AppError;

pub mod appointment;
pub mod user;

#[derive(Clone)]
pub struct RedisPersistence {
    manager: ConnectionManager,
}

impl RedisPersistence {
    pub fn new(manager: ConnectionManager) -> Self {
        RedisPersistence { manager }
    }

    /// Cheap handle to the shared multiplexed connection.
    pub fn manager(&self) -> ConnectionManager {
        self.manager.clone()
    }
}

/// `{table}:{id}`, e.g. `Users:a@x.com`.
pub fn record_key(table: &str, id: &str) -> String {
    format!("{table}:{id}")
}

impl From<redis::RedisError> for AppError {
    fn from(err: redis::RedisError) -> Self {
        // Log the actual error for debugging, but don't expose details
        tracing::error!(error = ?err, "Key-value store error");
        AppError::Storage("Storage operation failed".into())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!(error = %err, "Stored record could not be (de)serialized");
        AppError::Storage("Stored record is malformed".into())
    }
}
