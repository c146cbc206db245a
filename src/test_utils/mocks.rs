//! In-memory mock implementations of the application ports.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::{appointment::Appointment, user::User},
    use_cases::{
        account::UserRepo,
        appointment::{AppointmentNotifier, AppointmentRepo},
    },
};

// ============================================================================
// InMemoryUserRepo
// ============================================================================

/// In-memory implementation of UserRepo, keyed by email.
#[derive(Default)]
pub struct InMemoryUserRepo {
    pub users: Mutex<HashMap<String, User>>,
    fail: bool,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let map = users.into_iter().map(|u| (u.email.clone(), u)).collect();
        Self {
            users: Mutex::new(map),
            fail: false,
        }
    }

    /// Every call returns a storage error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn stored(&self, email: &str) -> Option<User> {
        self.users.lock().unwrap().get(email).cloned()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepo for InMemoryUserRepo {
    async fn put_user(&self, user: &User) -> AppResult<()> {
        if self.fail {
            return Err(AppError::Storage("simulated outage".into()));
        }
        self.users
            .lock()
            .unwrap()
            .insert(user.email.clone(), user.clone());
        Ok(())
    }

    async fn get_user(&self, email: &str) -> AppResult<Option<User>> {
        if self.fail {
            return Err(AppError::Storage("simulated outage".into()));
        }
        Ok(self.stored(email))
    }
}

// ============================================================================
// InMemoryAppointmentRepo
// ============================================================================

#[derive(Default)]
pub struct InMemoryAppointmentRepo {
    appointments: Mutex<Vec<Appointment>>,
    fail: bool,
}

impl InMemoryAppointmentRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn appointments(&self) -> Vec<Appointment> {
        self.appointments.lock().unwrap().clone()
    }
}

#[async_trait]
impl AppointmentRepo for InMemoryAppointmentRepo {
    async fn insert(&self, appointment: &Appointment) -> AppResult<()> {
        if self.fail {
            return Err(AppError::Storage("simulated outage".into()));
        }
        let mut appointments = self.appointments.lock().unwrap();
        if appointments
            .iter()
            .any(|a| a.appointment_id == appointment.appointment_id)
        {
            return Err(AppError::Storage("Appointment id collision".into()));
        }
        appointments.push(appointment.clone());
        Ok(())
    }
}

// ============================================================================
// InMemoryNotifier
// ============================================================================

#[derive(Debug, Clone)]
pub struct PublishedNotice {
    pub subject: String,
    pub message: String,
}

/// Captures published notices instead of broadcasting them.
#[derive(Default)]
pub struct InMemoryNotifier {
    published: Mutex<Vec<PublishedNotice>>,
    fail: bool,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every publish returns a notification error and captures nothing.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn captured(&self) -> Vec<PublishedNotice> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl AppointmentNotifier for InMemoryNotifier {
    async fn publish(&self, subject: &str, message: &str) -> AppResult<()> {
        if self.fail {
            return Err(AppError::Notification("simulated topic outage".into()));
        }
        self.published.lock().unwrap().push(PublishedNotice {
            subject: subject.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_user;

    #[tokio::test]
    async fn user_repo_put_replaces_by_email() {
        let repo = InMemoryUserRepo::new();
        repo.put_user(&create_test_user(|u| u.full_name = "First".into()))
            .await
            .unwrap();
        repo.put_user(&create_test_user(|u| u.full_name = "Second".into()))
            .await
            .unwrap();

        assert_eq!(repo.len(), 1);
        let user = repo.get_user("user@example.com").await.unwrap().unwrap();
        assert_eq!(user.full_name, "Second");
    }

    #[tokio::test]
    async fn failing_notifier_captures_nothing() {
        let notifier = InMemoryNotifier::failing();
        assert!(notifier.publish("s", "m").await.is_err());
        assert!(notifier.captured().is_empty());
    }
}
