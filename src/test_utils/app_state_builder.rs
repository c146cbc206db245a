//! Test app state builder for HTTP-level integration testing.
//!
//! `TestAppStateBuilder` creates an `AppState` wired to in-memory mocks so
//! routes can be exercised through `axum_test::TestServer`.

use std::sync::Arc;

use crate::{
    adapters::http::{app_state::AppState, session::derive_cookie_key},
    domain::entities::user::User,
    test_utils::{InMemoryAppointmentRepo, InMemoryNotifier, InMemoryUserRepo, test_config},
    use_cases::{
        account::{AccountUseCases, UserRepo},
        appointment::{AppointmentNotifier, AppointmentRepo, AppointmentUseCases},
    },
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let user = create_test_user(|u| u.email = "a@x.com".to_string());
///
/// let app_state = TestAppStateBuilder::new()
///     .with_user(user)
///     .without_notifier()
///     .build();
/// ```
pub struct TestAppStateBuilder {
    users: Vec<User>,
    user_repo: Option<Arc<dyn UserRepo>>,
    appointment_repo: Option<Arc<dyn AppointmentRepo>>,
    notifier: Option<Arc<dyn AppointmentNotifier>>,
    notify: bool,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            users: vec![],
            user_repo: None,
            appointment_repo: None,
            notifier: None,
            notify: true,
        }
    }

    /// Seed the default user repo. Ignored when a custom repo is set.
    pub fn with_user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    pub fn with_user_repo(mut self, repo: Arc<dyn UserRepo>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn with_appointment_repo(mut self, repo: Arc<dyn AppointmentRepo>) -> Self {
        self.appointment_repo = Some(repo);
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn AppointmentNotifier>) -> Self {
        self.notifier = Some(notifier);
        self.notify = true;
        self
    }

    /// Behave as if no notification topic were configured.
    pub fn without_notifier(mut self) -> Self {
        self.notifier = None;
        self.notify = false;
        self
    }

    /// Build with fresh in-memory mocks and return them for assertions.
    /// After `without_notifier()` the returned notifier is never wired in.
    pub fn build_with_mocks(
        self,
    ) -> (
        AppState,
        Arc<InMemoryUserRepo>,
        Arc<InMemoryAppointmentRepo>,
        Arc<InMemoryNotifier>,
    ) {
        let users = Arc::new(InMemoryUserRepo::with_users(self.users.clone()));
        let appointments = Arc::new(InMemoryAppointmentRepo::new());
        let notifier = Arc::new(InMemoryNotifier::new());

        let notify = self.notify;
        let builder = self
            .with_user_repo(users.clone())
            .with_appointment_repo(appointments.clone());
        let app_state = if notify {
            builder.with_notifier(notifier.clone())
        } else {
            builder
        }
        .build();

        (app_state, users, appointments, notifier)
    }

    pub fn build(self) -> AppState {
        let user_repo: Arc<dyn UserRepo> = self
            .user_repo
            .unwrap_or_else(|| Arc::new(InMemoryUserRepo::with_users(self.users)));
        let appointment_repo: Arc<dyn AppointmentRepo> = self
            .appointment_repo
            .unwrap_or_else(|| Arc::new(InMemoryAppointmentRepo::new()));
        let notifier: Option<Arc<dyn AppointmentNotifier>> = if self.notify {
            let notifier: Arc<dyn AppointmentNotifier> = self
                .notifier
                .unwrap_or_else(|| Arc::new(InMemoryNotifier::new()));
            Some(notifier)
        } else {
            None
        };

        let config = test_config();
        let cookie_key = derive_cookie_key(&config.session_secret);

        AppState {
            config: Arc::new(config),
            account_use_cases: Arc::new(AccountUseCases::new(user_repo)),
            appointment_use_cases: Arc::new(AppointmentUseCases::new(appointment_repo, notifier)),
            cookie_key,
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_session;
    use crate::use_cases::appointment::AppointmentRequest;

    fn booking() -> AppointmentRequest {
        AppointmentRequest {
            doctor: "Dr. Who".to_string(),
            date: "2026-11-02".to_string(),
            time: "10:30".to_string(),
            symptoms: String::new(),
        }
    }

    #[tokio::test]
    async fn build_with_mocks_wires_returned_notifier() {
        let (app_state, _, appointments, notifier) = TestAppStateBuilder::new().build_with_mocks();

        app_state
            .appointment_use_cases
            .book(&create_test_session(), booking())
            .await
            .unwrap();

        assert_eq!(appointments.appointments().len(), 1);
        assert_eq!(notifier.captured().len(), 1);
    }

    #[tokio::test]
    async fn build_with_mocks_keeps_notifier_disabled() {
        let (app_state, _, appointments, notifier) = TestAppStateBuilder::new()
            .without_notifier()
            .build_with_mocks();

        app_state
            .appointment_use_cases
            .book(&create_test_session(), booking())
            .await
            .unwrap();

        assert_eq!(appointments.appointments().len(), 1);
        assert!(notifier.captured().is_empty());
    }
}
