//! Resume download.

use axum::extract::State;
use axum::http::HeaderValue;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use tracing::info;

use super::error::AdminError;
use super::state::{AdminState, Backend};

/// `GET /download-resume`
///
/// Serves the resume from the data directory as an attachment.
pub(crate) async fn download<B: Backend>(
    State(state): State<AdminState<B>>,
) -> Result<Response, AdminError> {
    let settings = Arc::clone(&state.settings);
    let read = tokio::task::spawn_blocking(move || {
        settings.data_dir.read(&settings.resume_file)
    })
    .await?;
    let bytes = read
        .map_err(|err| AdminError::Storage(err.to_string()))?
        .ok_or_else(|| AdminError::NotFound("resume".to_owned()))?;

    info!(size = bytes.len(), "serving resume");
    let mut response = bytes.into_response();
    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/pdf"));
    let disposition = format!(
        "attachment; filename=\"{}\"",
        state.settings.resume_file.replace(['"', '\\'], "")
    );
    headers.insert(
        CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition)
            .unwrap_or_else(|_| HeaderValue::from_static("attachment")),
    );
    Ok(response)
}
