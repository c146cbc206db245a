//! Signup, login, logout and the dashboard.

use axum::{
    Form, Router,
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;

use super::page_context;
use crate::{
    adapters::http::{
        app_error_impl::redirect_with_error,
        app_state::AppState,
        session::{clear_session, current_session, set_flash, start_session},
        views,
    },
    use_cases::account::SignupRequest,
};

#[derive(Deserialize)]
struct SignupPayload {
    #[serde(default)]
    fullname: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    confirm_password: String,
}

#[derive(Deserialize)]
struct LoginPayload {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", get(signup_page).post(signup))
        .route("/login", get(login_page).post(login))
        .route("/dashboard", get(dashboard))
        .route("/logout", get(logout))
}

async fn signup_page(jar: SignedCookieJar) -> impl IntoResponse {
    let (jar, ctx) = page_context(jar);
    (jar, views::signup(&ctx))
}

/// POST /signup
/// Replaces any existing account with the same email.
async fn signup(
    State(app_state): State<AppState>,
    jar: SignedCookieJar,
    Form(payload): Form<SignupPayload>,
) -> Response {
    let request = SignupRequest {
        full_name: payload.fullname,
        email: payload.email,
        password: payload.password,
        confirm_password: payload.confirm_password,
    };

    match app_state.account_use_cases.sign_up(request).await {
        Ok(()) => (
            set_flash(jar, "Signup successful! Please log in."),
            Redirect::to("/login"),
        )
            .into_response(),
        Err(err) => redirect_with_error(
            jar,
            &err,
            "/signup",
            "Error saving user. Please try again.",
        ),
    }
}

async fn login_page(jar: SignedCookieJar) -> impl IntoResponse {
    let (jar, ctx) = page_context(jar);
    (jar, views::login(&ctx))
}

/// POST /login
async fn login(
    State(app_state): State<AppState>,
    jar: SignedCookieJar,
    Form(payload): Form<LoginPayload>,
) -> Response {
    match app_state
        .account_use_cases
        .log_in(&payload.email, &payload.password)
        .await
    {
        Ok(session) => {
            let jar = start_session(jar, &session, &app_state.config);
            (jar, Redirect::to("/dashboard")).into_response()
        }
        Err(err) => redirect_with_error(jar, &err, "/login", "Error accessing database."),
    }
}

async fn dashboard(jar: SignedCookieJar) -> Response {
    // Checked before the flash is consumed so a pending message survives the redirect.
    if current_session(&jar).is_none() {
        return Redirect::to("/login").into_response();
    }

    let (jar, ctx) = page_context(jar);
    let user = ctx
        .session
        .as_ref()
        .map(|s| s.user.clone())
        .unwrap_or_default();
    (jar, views::dashboard(&ctx, &user)).into_response()
}

async fn logout(jar: SignedCookieJar) -> impl IntoResponse {
    let jar = clear_session(jar);
    (
        set_flash(jar, "You have been logged out."),
        Redirect::to("/"),
    )
}
