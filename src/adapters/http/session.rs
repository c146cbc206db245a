//! Cookie-backed session and flash messages.
//!
//! Both live in cookies signed with the process key, so a tampered or foreign
//! cookie reads as absent. Values are URL-safe base64 to stay within the cookie
//! character set.

use axum_extra::extract::{
    SignedCookieJar,
    cookie::{Cookie, Key, SameSite},
};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha512};

use crate::{domain::entities::session::SessionUser, infra::config::AppConfig};

pub const SESSION_COOKIE: &str = "session";
pub const FLASH_COOKIE: &str = "flash";

/// Stretches the configured secret to the 64 bytes a cookie `Key` needs.
pub fn derive_cookie_key(secret: &SecretString) -> Key {
    let digest = Sha512::digest(secret.expose_secret().as_bytes());
    Key::from(digest.as_slice())
}

pub fn current_session(jar: &SignedCookieJar) -> Option<SessionUser> {
    let cookie = jar.get(SESSION_COOKIE)?;
    let bytes = URL_SAFE_NO_PAD.decode(cookie.value()).ok()?;
    serde_json::from_slice(&bytes).ok()
}

pub fn start_session(
    jar: SignedCookieJar,
    user: &SessionUser,
    config: &AppConfig,
) -> SignedCookieJar {
    // SessionUser only holds strings, serialization can't fail
    let payload = serde_json::to_vec(user).unwrap_or_default();
    let cookie = Cookie::build((SESSION_COOKIE, URL_SAFE_NO_PAD.encode(payload)))
        .http_only(true)
        .secure(config.secure_cookies)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(config.session_ttl)
        .build();
    jar.add(cookie)
}

pub fn clear_session(jar: SignedCookieJar) -> SignedCookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}

pub fn set_flash(jar: SignedCookieJar, message: &str) -> SignedCookieJar {
    let cookie = Cookie::build((FLASH_COOKIE, URL_SAFE_NO_PAD.encode(message)))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .build();
    jar.add(cookie)
}

/// Reads the pending flash message and drops its cookie.
pub fn take_flash(jar: SignedCookieJar) -> (SignedCookieJar, Option<String>) {
    let message = jar
        .get(FLASH_COOKIE)
        .and_then(|c| URL_SAFE_NO_PAD.decode(c.value()).ok())
        .and_then(|bytes| String::from_utf8(bytes).ok());

    match message {
        Some(message) => (
            jar.remove(Cookie::build(FLASH_COOKIE).path("/")),
            Some(message),
        ),
        None => (jar, None),
    }
}
