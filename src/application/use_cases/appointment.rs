use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::{
        appointment::{Appointment, AppointmentNotice},
        session::SessionUser,
    },
};

pub const BOOKING_SUBJECT: &str = "New Appointment Booked";

#[async_trait]
pub trait AppointmentRepo: Send + Sync {
    /// Insert-only; an existing id is an error.
    async fn insert(&self, appointment: &Appointment) -> AppResult<()>;
}

#[async_trait]
pub trait AppointmentNotifier: Send + Sync {
    async fn publish(&self, subject: &str, message: &str) -> AppResult<()>;
}

#[derive(Debug, Clone, Default)]
pub struct AppointmentRequest {
    pub doctor: String,
    pub date: String,
    pub time: String,
    pub symptoms: String,
}

#[derive(Clone)]
pub struct AppointmentUseCases {
    repo: Arc<dyn AppointmentRepo>,
    /// `None` when no notification topic is configured.
    notifier: Option<Arc<dyn AppointmentNotifier>>,
}

impl AppointmentUseCases {
    pub fn new(
        repo: Arc<dyn AppointmentRepo>,
        notifier: Option<Arc<dyn AppointmentNotifier>>,
    ) -> Self {
        Self { repo, notifier }
    }

    /// Stores the appointment, then makes one attempt to publish a notice.
    /// A failed publish is logged and does not undo the booking.
    #[instrument(skip(self, owner, request), fields(owner = %owner.email))]
    pub async fn book(
        &self,
        owner: &SessionUser,
        request: AppointmentRequest,
    ) -> AppResult<Appointment> {
        if request.doctor.is_empty() || request.date.is_empty() || request.time.is_empty() {
            return Err(AppError::InvalidInput(
                "Doctor, date and time are required.".into(),
            ));
        }

        let appointment = Appointment {
            appointment_id: Uuid::new_v4(),
            email: owner.email.clone(),
            doctor: request.doctor,
            date: request.date,
            time: request.time,
            symptoms: request.symptoms,
            created_at: Utc::now(),
        };
        self.repo.insert(&appointment).await?;

        tracing::info!(appointment_id = %appointment.appointment_id, "Appointment booked");

        if let Err(err) = self.notify_booked(owner, &appointment).await {
            tracing::error!(
                error = %err,
                code = err.code().as_str(),
                appointment_id = %appointment.appointment_id,
                "Appointment notification failed"
            );
        }

        Ok(appointment)
    }

    async fn notify_booked(&self, owner: &SessionUser, appointment: &Appointment) -> AppResult<()> {
        let Some(notifier) = &self.notifier else {
            tracing::debug!("No notification topic configured, skipping publish");
            return Ok(());
        };

        let notice = AppointmentNotice::new(owner, appointment);
        let message = serde_json::to_string_pretty(&notice)
            .map_err(|e| AppError::Notification(e.to_string()))?;
        notifier.publish(BOOKING_SUBJECT, &message).await
    }
}
