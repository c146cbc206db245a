use async_trait::async_trait;
use redis::{AsyncCommands, aio::ConnectionManager};
use serde::Serialize;

use crate::{
    app_error::{AppError, AppResult},
    use_cases::appointment::AppointmentNotifier,
};

/// Publishes notifications on a Redis pub/sub channel.
#[derive(Clone)]
pub struct RedisTopicPublisher {
    manager: ConnectionManager,
    topic: String,
}

impl RedisTopicPublisher {
    pub fn new(manager: ConnectionManager, topic: String) -> Self {
        Self { manager, topic }
    }
}

#[derive(Serialize)]
struct TopicMessage<'a> {
    subject: &'a str,
    message: &'a str,
}

#[async_trait]
impl AppointmentNotifier for RedisTopicPublisher {
    async fn publish(&self, subject: &str, message: &str) -> AppResult<()> {
        let mut conn = self.manager.clone();
        let body = serde_json::to_string(&TopicMessage { subject, message })
            .map_err(|e| AppError::Notification(e.to_string()))?;

        let receivers: i64 = conn
            .publish(&self.topic, body)
            .await
            .map_err(|e| AppError::Notification(e.to_string()))?;

        tracing::debug!(topic = %self.topic, receivers, "Published notification");
        Ok(())
    }
}
