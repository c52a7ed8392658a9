//! Admin HTTP surface: session login, the portfolio catalogue and the
//! task roadmap.
//!
//! Every route under `/admin` except login and logout requires a logged-in
//! session. Mutations answer with `303 See Other` and a flash message that
//! the next rendered page shows.

mod auth;
pub mod error;
mod portfolio;
mod resume;
mod roadmap;
pub mod session;
pub mod state;
pub mod views;

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::response::Response;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;
use tracing::error;

use self::error::AdminError;
use self::session::{FlashLevel, SessionId, SessionStore, redirect};
pub use self::state::{AdminSettings, AdminState, Backend, InMemoryBackend, PostgresBackend};
pub use self::views::Views;

/// Flash shown when the store rejects a change.
pub const STORAGE_FAILED: &str = "The change could not be saved. Please try again.";

/// Builds the router for the admin surface and the resume download.
pub fn build_router<B: Backend>(state: AdminState<B>) -> Router {
    let guarded = Router::new()
        .route("/admin", get(portfolio::dashboard::<B>))
        .route(
            "/admin/roadmap",
            get(roadmap::dashboard::<B>).post(roadmap::create::<B>),
        )
        .route("/admin/roadmap/{id}/activate", post(roadmap::activate::<B>))
        .route("/admin/roadmap/{id}/pause", post(roadmap::pause::<B>))
        .route("/admin/roadmap/{id}/complete", post(roadmap::complete::<B>))
        .route("/admin/roadmap/{id}/delete", post(roadmap::delete::<B>))
        .route(
            "/admin/roadmap/{id}/edit",
            get(roadmap::edit_form::<B>).post(roadmap::edit::<B>),
        )
        .route("/admin/{kind}", post(portfolio::add::<B>))
        .route(
            "/admin/{kind}/{id}/edit",
            get(portfolio::edit_form::<B>).post(portfolio::edit::<B>),
        )
        .route("/admin/{kind}/{id}/delete", post(portfolio::delete::<B>))
        .route_layer(from_fn_with_state(
            state.clone(),
            session::require_admin::<B>,
        ));

    Router::new()
        .route(
            "/admin/login",
            get(auth::login_form::<B>).post(auth::login::<B>),
        )
        .route("/admin/logout", get(auth::logout::<B>))
        .route("/download-resume", get(resume::download::<B>))
        .merge(guarded)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> AdminError {
    AdminError::NotFound("page".to_owned())
}

/// Flashes the outcome of a mutation and redirects to `to`.
///
/// Validation and storage failures become a danger flash; anything else
/// is returned for [`AdminError`]'s error page.
fn conclude(
    sessions: &SessionStore,
    session: SessionId,
    to: &str,
    outcome: Result<String, AdminError>,
) -> Result<Response, AdminError> {
    match outcome {
        Ok(message) => sessions.flash(session, FlashLevel::Success, message),
        Err(AdminError::Invalid(message)) => sessions.flash(session, FlashLevel::Danger, message),
        Err(AdminError::Storage(cause)) => {
            error!(%cause, "admin change failed");
            sessions.flash(session, FlashLevel::Danger, STORAGE_FAILED);
        }
        Err(other) => return Err(other),
    }
    Ok(redirect(to, None))
}
