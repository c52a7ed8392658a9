//! Resume download.

use super::helpers::{RESUME_BYTES, TestApp, app, app_with_resume};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use http_body_util::BodyExt;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn resume_is_served_as_attachment(app: TestApp) {
    let response = app.get("/download-resume", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("application/pdf")
    );
    assert_eq!(
        headers.get(CONTENT_DISPOSITION).and_then(|v| v.to_str().ok()),
        Some(r#"attachment; filename="resume.pdf""#)
    );
    let body = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    assert_eq!(body.as_ref(), RESUME_BYTES);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_resume_is_not_found() {
    let app = app_with_resume("cv-2026.pdf");

    let response = app.get("/download-resume", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
