use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::SignedCookieJar;

use crate::{
    adapters::http::session::set_flash,
    app_error::{AppError, ErrorCode},
};

impl AppError {
    /// Flash text for this error. `route_message` is the route's own wording,
    /// used for a missing login and for failures whose details must stay in
    /// the logs.
    pub fn user_message(&self, route_message: &str) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::InvalidCredentials => "Invalid credentials.".to_string(),
            AppError::AuthRequired
            | AppError::Storage(_)
            | AppError::Notification(_)
            | AppError::Internal(_) => route_message.to_string(),
        }
    }
}

/// Turns a failed request into a redirect carrying a flash message. No error
/// leaves the handler in any other form.
pub fn redirect_with_error(
    jar: SignedCookieJar,
    err: &AppError,
    to: &str,
    route_message: &str,
) -> Response {
    match err.code() {
        ErrorCode::StorageError | ErrorCode::InternalError | ErrorCode::NotificationError => {
            tracing::error!(error = ?err, code = err.code().as_str(), "Request failed");
        }
        code => {
            tracing::debug!(error = %err, code = code.as_str(), "Request rejected");
        }
    }

    let jar = set_flash(jar, &err.user_message(route_message));
    (jar, Redirect::to(to)).into_response()
}
