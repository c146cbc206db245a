use thiserror::Error;

/// Infrastructure errors that can occur during application startup.
///
/// Display messages are safe for console output. Debug output includes the
/// source chain, which may contain connection strings.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Redis connection failed. Check REDIS_URL and credentials.")]
    RedisConnection(#[source] redis::RedisError),

    #[error("TCP bind failed")]
    TcpBind(#[source] std::io::Error),

    #[error("Server error")]
    Server(#[source] std::io::Error),
}
