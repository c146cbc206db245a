use axum::{
    Form, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;

use super::page_context;
use crate::{
    adapters::http::{
        app_error_impl::redirect_with_error, app_state::AppState, session::current_session,
        views,
    },
    app_error::AppError,
    use_cases::appointment::AppointmentRequest,
};

#[derive(Deserialize)]
struct AppointmentPayload {
    #[serde(default)]
    doctor: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    time: String,
    #[serde(default)]
    symptoms: String,
}

pub(crate) fn router() -> Router<AppState> {
    Router::new().route(
        "/create-appointment",
        get(appointment_page).post(create_appointment),
    )
}

fn login_required(jar: SignedCookieJar) -> Response {
    redirect_with_error(
        jar,
        &AppError::AuthRequired,
        "/login",
        "Please log in to book an appointment.",
    )
}

async fn appointment_page(jar: SignedCookieJar) -> Response {
    if current_session(&jar).is_none() {
        return login_required(jar);
    }
    let (jar, ctx) = page_context(jar);
    (jar, views::appointment_form(&ctx)).into_response()
}

/// POST /create-appointment
/// Stores the booking and renders a confirmation. Notification problems
/// never reach the user.
async fn create_appointment(
    State(app_state): State<AppState>,
    jar: SignedCookieJar,
    Form(payload): Form<AppointmentPayload>,
) -> Response {
    let Some(owner) = current_session(&jar) else {
        return login_required(jar);
    };

    let request = AppointmentRequest {
        doctor: payload.doctor,
        date: payload.date,
        time: payload.time,
        symptoms: payload.symptoms,
    };

    match app_state.appointment_use_cases.book(&owner, request).await {
        Ok(appointment) => {
            let (jar, ctx) = page_context(jar);
            (jar, views::appointment_status(&ctx, &appointment)).into_response()
        }
        Err(err) => redirect_with_error(
            jar,
            &err,
            "/create-appointment",
            "DB error while booking appointment.",
        ),
    }
}
