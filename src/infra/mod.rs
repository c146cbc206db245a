use crate::{adapters::persistence::RedisPersistence, infra::store::init_store};

pub mod app;
pub mod config;
pub mod error;
pub mod setup;
pub mod store;

pub use error::InfraError;

pub async fn redis_persistence(redis_url: &str) -> Result<RedisPersistence, InfraError> {
    let manager = init_store(redis_url).await?;
    Ok(RedisPersistence::new(manager))
}
