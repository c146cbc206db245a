//! Informational pages and the contact form.

use axum::{Form, Router, response::IntoResponse, routing::get};
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;

use super::page_context;
use crate::adapters::http::{app_state::AppState, views};

#[derive(Deserialize)]
struct ContactPayload {
    #[serde(default)]
    name: String,
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/about-us", get(about_us))
        .route("/contact-us", get(contact_us).post(submit_contact))
}

async fn home(jar: SignedCookieJar) -> impl IntoResponse {
    let (jar, ctx) = page_context(jar);
    (jar, views::home(&ctx))
}

async fn about_us(jar: SignedCookieJar) -> impl IntoResponse {
    let (jar, ctx) = page_context(jar);
    (jar, views::about_us(&ctx))
}

async fn contact_us(jar: SignedCookieJar) -> impl IntoResponse {
    let (jar, ctx) = page_context(jar);
    (jar, views::contact_us(&ctx))
}

/// The message is not stored anywhere; the sender just gets a thank-you page.
async fn submit_contact(
    jar: SignedCookieJar,
    Form(payload): Form<ContactPayload>,
) -> impl IntoResponse {
    tracing::info!("Contact form submitted");
    let (jar, ctx) = page_context(jar);
    (jar, views::thank_you(&ctx, &payload.name))
}
