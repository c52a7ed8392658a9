//! HTTP-facing error type for the admin surface.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::portfolio::services::PortfolioError;
use crate::roadmap::services::RoadmapError;

const NOT_FOUND_PAGE: &str = include_str!("../../templates/admin/not_found.html");
const ERROR_PAGE: &str = include_str!("../../templates/admin/error.html");

/// Failures surfaced by admin handlers.
///
/// Handlers turn [`AdminError::Invalid`] and [`AdminError::Storage`] into a
/// flash message and a redirect. The remaining variants become error pages.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The addressed record does not exist.
    #[error("{0} not found")]
    NotFound(String),
    /// Submitted values failed validation.
    #[error("{0}")]
    Invalid(String),
    /// The store rejected the operation.
    #[error("storage failure: {0}")]
    Storage(String),
    /// A template failed to render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
    /// A blocking task failed to complete.
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<RoadmapError> for AdminError {
    fn from(err: RoadmapError) -> Self {
        if let Some(id) = err.not_found() {
            return Self::NotFound(format!("task {id}"));
        }
        match err {
            RoadmapError::Domain(inner) => Self::Invalid(inner.to_string()),
            RoadmapError::Repository(inner) => Self::Storage(inner.to_string()),
        }
    }
}

impl From<PortfolioError> for AdminError {
    fn from(err: PortfolioError) -> Self {
        if let Some((kind, id)) = err.not_found() {
            return Self::NotFound(format!("{} {id}", kind.label()));
        }
        match err {
            PortfolioError::Domain(inner) => Self::Invalid(inner.to_string()),
            PortfolioError::Repository(inner) => Self::Storage(inner.to_string()),
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(what) => {
                warn!(%what, "admin request addressed a missing record");
                (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response()
            }
            Self::Invalid(message) => {
                warn!(%message, "admin request rejected");
                (StatusCode::BAD_REQUEST, Html(ERROR_PAGE)).into_response()
            }
            other => {
                error!(error = %other, "admin request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(ERROR_PAGE)).into_response()
            }
        }
    }
}
