use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::AsyncCommands;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    adapters::persistence::{RedisPersistence, record_key},
    app_error::{AppError, AppResult},
    domain::entities::appointment::Appointment,
    infra::config::APPOINTMENTS_TABLE,
    use_cases::appointment::AppointmentRepo,
};

// Appointment struct as stored in the key-value store.
#[derive(Debug, Serialize)]
pub struct AppointmentRecord {
    pub appointment_id: Uuid,
    pub email: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
    pub symptoms: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Appointment> for AppointmentRecord {
    fn from(a: &Appointment) -> Self {
        Self {
            appointment_id: a.appointment_id,
            email: a.email.clone(),
            doctor: a.doctor.clone(),
            date: a.date.clone(),
            time: a.time.clone(),
            symptoms: a.symptoms.clone(),
            created_at: a.created_at,
        }
    }
}

#[async_trait]
impl AppointmentRepo for RedisPersistence {
    async fn insert(&self, appointment: &Appointment) -> AppResult<()> {
        let mut conn = self.manager();
        let key = record_key(APPOINTMENTS_TABLE, &appointment.appointment_id.to_string());
        let value = serde_json::to_string(&AppointmentRecord::from(appointment))?;

        let inserted: bool = conn.set_nx(key, value).await?;
        if !inserted {
            tracing::error!(
                appointment_id = %appointment.appointment_id,
                "Appointment id already present, refusing to overwrite"
            );
            return Err(AppError::Storage("Appointment id collision".into()));
        }
        Ok(())
    }
}
