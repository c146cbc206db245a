//! Server-rendered HTML pages.

use axum::response::Html;

use crate::domain::entities::{appointment::Appointment, session::SessionUser};

/// Per-request data every page layout needs.
#[derive(Default)]
pub struct PageContext {
    pub flash: Option<String>,
    pub session: Option<SessionUser>,
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, ctx: &PageContext, body: &str) -> Html<String> {
    let nav = match &ctx.session {
        Some(session) => format!(
            r#"<a href="/dashboard">{}</a> <a href="/create-appointment">Book appointment</a> <a href="/logout">Log out</a>"#,
            escape_html(&session.user)
        ),
        None => r#"<a href="/login">Log in</a> <a href="/signup">Sign up</a>"#.to_string(),
    };
    let flash = ctx
        .flash
        .as_deref()
        .map(|msg| format!(r#"<div class="flash">{}</div>"#, escape_html(msg)))
        .unwrap_or_default();

    Html(format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | MedTrack</title>
</head>
<body>
<nav><a href="/">MedTrack</a> <a href="/about-us">About us</a> <a href="/contact-us">Contact us</a> {nav}</nav>
{flash}
<main>
{body}
</main>
</body>
</html>"#,
        title = escape_html(title),
    ))
}

pub fn home(ctx: &PageContext) -> Html<String> {
    layout(
        "Home",
        ctx,
        r#"<h1>MedTrack</h1>
<p>Book medical appointments online.</p>
<p><a href="/create-appointment">Book an appointment</a></p>"#,
    )
}

pub fn about_us(ctx: &PageContext) -> Html<String> {
    layout(
        "About us",
        ctx,
        r#"<h1>About us</h1>
<p>MedTrack connects patients with doctors for fast appointment booking.</p>"#,
    )
}

pub fn contact_us(ctx: &PageContext) -> Html<String> {
    layout(
        "Contact us",
        ctx,
        r#"<h1>Contact us</h1>
<form method="post" action="/contact-us">
<label>Name <input name="name" required></label>
<label>Email <input name="email" type="email"></label>
<label>Message <textarea name="message"></textarea></label>
<button type="submit">Send</button>
</form>"#,
    )
}

pub fn thank_you(ctx: &PageContext, name: &str) -> Html<String> {
    layout(
        "Thank you",
        ctx,
        &format!(
            "<h1>Thank you, {}!</h1>\n<p>We will get back to you soon.</p>",
            escape_html(name)
        ),
    )
}

pub fn signup(ctx: &PageContext) -> Html<String> {
    layout(
        "Sign up",
        ctx,
        r#"<h1>Sign up</h1>
<form method="post" action="/signup">
<label>Full name <input name="fullname" required></label>
<label>Email <input name="email" type="email" required></label>
<label>Password <input name="password" type="password" required></label>
<label>Confirm password <input name="confirm_password" type="password" required></label>
<button type="submit">Sign up</button>
</form>"#,
    )
}

pub fn login(ctx: &PageContext) -> Html<String> {
    layout(
        "Log in",
        ctx,
        r#"<h1>Log in</h1>
<form method="post" action="/login">
<label>Email <input name="email" type="email" required></label>
<label>Password <input name="password" type="password" required></label>
<button type="submit">Log in</button>
</form>"#,
    )
}

pub fn dashboard(ctx: &PageContext, user: &str) -> Html<String> {
    layout(
        "Dashboard",
        ctx,
        &format!(
            r#"<h1>Welcome, {}</h1>
<p><a href="/create-appointment">Book a new appointment</a></p>"#,
            escape_html(user)
        ),
    )
}

pub fn appointment_form(ctx: &PageContext) -> Html<String> {
    layout(
        "Book appointment",
        ctx,
        r#"<h1>Book an appointment</h1>
<form method="post" action="/create-appointment">
<label>Doctor <input name="doctor" required></label>
<label>Date <input name="date" type="date" required></label>
<label>Time <input name="time" type="time" required></label>
<label>Symptoms <textarea name="symptoms"></textarea></label>
<button type="submit">Book</button>
</form>"#,
    )
}

pub fn appointment_status(ctx: &PageContext, appointment: &Appointment) -> Html<String> {
    layout(
        "Appointment booked",
        ctx,
        &format!(
            r#"<h1>Appointment booked</h1>
<dl>
<dt>Doctor</dt><dd>{}</dd>
<dt>Date</dt><dd>{}</dd>
<dt>Time</dt><dd>{}</dd>
<dt>Symptoms</dt><dd>{}</dd>
</dl>
<p><a href="/dashboard">Back to dashboard</a></p>"#,
            escape_html(&appointment.doctor),
            escape_html(&appointment.date),
            escape_html(&appointment.time),
            escape_html(&appointment.symptoms),
        ),
    )
}

pub fn not_found(ctx: &PageContext) -> Html<String> {
    layout(
        "Not found",
        ctx,
        r#"<h1>Page not found</h1>
<p><a href="/">Go home</a></p>"#,
    )
}
