pub mod account;
pub mod appointment;
pub mod pages;

use axum::{Router, http::StatusCode, response::IntoResponse};
use axum_extra::extract::SignedCookieJar;

use crate::adapters::http::{
    app_state::AppState,
    session::{current_session, take_flash},
    views::{self, PageContext},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .merge(account::router())
        .merge(appointment::router())
        .fallback(not_found)
}

/// Consumes the pending flash and reads the session for page rendering.
pub(crate) fn page_context(jar: SignedCookieJar) -> (SignedCookieJar, PageContext) {
    let session = current_session(&jar);
    let (jar, flash) = take_flash(jar);
    (jar, PageContext { flash, session })
}

async fn not_found(jar: SignedCookieJar) -> impl IntoResponse {
    let (jar, ctx) = page_context(jar);
    (StatusCode::NOT_FOUND, jar, views::not_found(&ctx))
}
