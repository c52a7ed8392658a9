//! Login and logout.

use axum::Form;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use minijinja::context;
use serde::Deserialize;
use tracing::{info, warn};

use super::error::AdminError;
use super::session::{Flash, FlashLevel, redirect, session_from_headers};
use super::state::{AdminState, Backend};

#[derive(Debug, Deserialize)]
pub(crate) struct LoginForm {
    #[serde(default)]
    password: String,
}

/// `GET /admin/login`
pub(crate) async fn login_form<B: Backend>(
    State(state): State<AdminState<B>>,
    headers: HeaderMap,
) -> Result<Response, AdminError> {
    let current = session_from_headers(&headers);
    if current.is_some_and(|id| state.sessions.is_authenticated(id)) {
        return Ok(redirect("/admin", None));
    }
    let flashes = current
        .map(|id| state.sessions.take_flashes(id))
        .unwrap_or_default();
    let html = state.views.render(
        "admin/login.html",
        context! { flashes => flashes, hide_logout => true },
    )?;
    Ok(html.into_response())
}

/// `POST /admin/login`
pub(crate) async fn login<B: Backend>(
    State(state): State<AdminState<B>>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Result<Response, AdminError> {
    let current = session_from_headers(&headers);
    if state.settings.password.verify(&form.password) {
        if let Some(previous) = current {
            state.sessions.end(previous);
        }
        let id = state.sessions.start(true);
        state
            .sessions
            .flash(id, FlashLevel::Success, "Login successful!");
        info!("admin logged in");
        return Ok(redirect("/admin", Some(id)));
    }

    warn!("rejected admin login attempt");
    let mut flashes = current
        .map(|id| state.sessions.take_flashes(id))
        .unwrap_or_default();
    flashes.push(Flash {
        level: FlashLevel::Danger,
        message: "Incorrect password.".to_owned(),
    });
    let html = state.views.render(
        "admin/login.html",
        context! { flashes => flashes, hide_logout => true },
    )?;
    Ok((StatusCode::UNAUTHORIZED, html).into_response())
}

/// `GET /admin/logout`
pub(crate) async fn logout<B: Backend>(
    State(state): State<AdminState<B>>,
    headers: HeaderMap,
) -> Response {
    if let Some(id) = session_from_headers(&headers) {
        state.sessions.end(id);
        info!("admin logged out");
    }
    let id = state.sessions.start(false);
    state
        .sessions
        .flash(id, FlashLevel::Info, "You have been logged out.");
    redirect("/admin/login", Some(id))
}
