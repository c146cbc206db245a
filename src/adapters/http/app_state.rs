use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use crate::{
    infra::config::AppConfig,
    use_cases::{account::AccountUseCases, appointment::AppointmentUseCases},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub account_use_cases: Arc<AccountUseCases>,
    pub appointment_use_cases: Arc<AppointmentUseCases>,
    pub cookie_key: Key,
}

impl FromRef<AppState> for Key {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.cookie_key.clone()
    }
}
