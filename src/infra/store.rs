use redis::aio::ConnectionManager;
use tracing::info;

use super::InfraError;

pub async fn init_store(redis_url: &str) -> Result<ConnectionManager, InfraError> {
    let client = redis::Client::open(redis_url).map_err(InfraError::RedisConnection)?;
    let manager = ConnectionManager::new(client)
        .await
        .map_err(InfraError::RedisConnection)?;

    info!("Connected to key-value store!");
    Ok(manager)
}
