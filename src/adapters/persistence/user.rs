use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};

use crate::{
    adapters::persistence::{RedisPersistence, record_key},
    app_error::AppResult,
    domain::entities::user::User,
    infra::config::USERS_TABLE,
    use_cases::account::UserRepo,
};

// User struct as stored in the key-value store.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    pub fullname: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            fullname: user.full_name.clone(),
            password_hash: user.password_hash.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<UserRecord> for User {
    fn from(rec: UserRecord) -> Self {
        Self {
            email: rec.email,
            full_name: rec.fullname,
            password_hash: rec.password_hash,
            created_at: rec.created_at,
        }
    }
}

#[async_trait]
impl UserRepo for RedisPersistence {
    async fn put_user(&self, user: &User) -> AppResult<()> {
        let mut conn = self.manager();
        let value = serde_json::to_string(&UserRecord::from(user))?;
        let _: () = conn
            .set(record_key(USERS_TABLE, &user.email), value)
            .await?;
        Ok(())
    }

    async fn get_user(&self, email: &str) -> AppResult<Option<User>> {
        let mut conn = self.manager();
        let raw: Option<String> = conn.get(record_key(USERS_TABLE, email)).await?;
        raw.map(|value| serde_json::from_str::<UserRecord>(&value).map(User::from))
            .transpose()
            .map_err(Into::into)
    }
}
