use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::session::SessionUser;

#[derive(Debug, Clone)]
pub struct Appointment {
    pub appointment_id: Uuid,
    /// Email of the booking user.
    pub email: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
    pub symptoms: String,
    pub created_at: DateTime<Utc>,
}

/// Payload broadcast to the notification topic after a booking is stored.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AppointmentNotice {
    pub appointment_id: Uuid,
    pub user: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
}

impl AppointmentNotice {
    pub fn new(owner: &SessionUser, appointment: &Appointment) -> Self {
        Self {
            appointment_id: appointment.appointment_id,
            user: owner.user.clone(),
            doctor: appointment.doctor.clone(),
            date: appointment.date.clone(),
            time: appointment.time.clone(),
        }
    }
}
