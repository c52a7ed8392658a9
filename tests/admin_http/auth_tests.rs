//! Login, logout and the session guard.

use super::helpers::{
    PASSWORD, TestApp, app, assert_redirect, body_text, set_cookie,
};
use axum::http::StatusCode;
use axum::http::header::SET_COOKIE;
use rstest::rstest;

#[rstest]
#[case("/admin")]
#[case("/admin/roadmap")]
#[case("/admin/projects/1/edit")]
#[tokio::test(flavor = "multi_thread")]
async fn anonymous_requests_are_sent_to_login(app: TestApp, #[case] path: &str) {
    let response = app.get(path, None).await;

    assert_redirect(&response, "/admin/login");
    let cookie = set_cookie(&response).expect("session cookie");
    let page = app.follow(&response, Some(&cookie)).await;
    assert!(page.contains("Please log in to access this page."));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn session_cookie_is_http_only_and_lax(app: TestApp) {
    let response = app
        .post_form("/admin/login", &format!("password={}", PASSWORD.replace(' ', "+")), None)
        .await;

    let header = response
        .headers()
        .get(SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .expect("set-cookie header");
    assert!(header.contains("HttpOnly"));
    assert!(header.contains("SameSite=Lax"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn correct_password_opens_the_dashboard(app: TestApp) {
    let response = app
        .post_form("/admin/login", &format!("password={}", PASSWORD.replace(' ', "+")), None)
        .await;

    assert_redirect(&response, "/admin");
    let cookie = set_cookie(&response).expect("session cookie");
    let dashboard = app.get("/admin", Some(&cookie)).await;
    assert_eq!(dashboard.status(), StatusCode::OK);
    assert!(body_text(dashboard).await.contains("Login successful!"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn wrong_password_is_rejected(app: TestApp) {
    let response = app.post_form("/admin/login", "password=guess", None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookie(&response).is_none());
    assert!(body_text(response).await.contains("Incorrect password."));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn logout_ends_the_session(app: TestApp) {
    let cookie = app.admin_cookie();

    let response = app.get("/admin/logout", Some(&cookie)).await;
    assert_redirect(&response, "/admin/login");
    let fresh = set_cookie(&response).expect("anonymous session cookie");
    let page = app.follow(&response, Some(&fresh)).await;
    assert!(page.contains("You have been logged out."));

    let again = app.get("/admin", Some(&cookie)).await;
    assert_redirect(&again, "/admin/login");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn forged_cookie_is_not_trusted(app: TestApp) {
    let forged = "folio_session=00000000-0000-4000-8000-000000000000";
    let response = app.get("/admin", Some(forged)).await;

    assert_redirect(&response, "/admin/login");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn anonymous_visits_leave_no_sessions_behind(app: TestApp) {
    for _ in 0..5 {
        let response = app.get("/admin/roadmap", None).await;
        let cookie = set_cookie(&response).expect("session cookie");
        let page = app.follow(&response, Some(&cookie)).await;
        assert!(page.contains("Please log in to access this page."));
    }

    let logout = app.get("/admin/logout", None).await;
    let cookie = set_cookie(&logout).expect("anonymous session cookie");
    app.follow(&logout, Some(&cookie)).await;

    assert!(app.state.sessions().is_empty());
}
