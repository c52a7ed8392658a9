//! Shared helpers for admin HTTP tests.

use axum::Router;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Request, Response, StatusCode};
use camino::Utf8PathBuf;
use folio::admin::session::{AdminPassword, SESSION_COOKIE};
use folio::admin::{AdminSettings, AdminState, InMemoryBackend, Views, build_router};
use folio::app::in_memory_state;
use folio::data_dir::DataDir;
use http_body_util::BodyExt;
use rstest::fixture;
use tempfile::TempDir;
use tower::ServiceExt;

/// Password configured for every test app.
pub const PASSWORD: &str = "correct horse battery staple";

/// Bytes written as the resume in the test data directory.
pub const RESUME_BYTES: &[u8] = b"%PDF-1.4 folio test resume";

/// Router plus direct access to its services.
pub struct TestApp {
    pub router: Router,
    pub state: AdminState<InMemoryBackend>,
    _data: TempDir,
}

/// Builds an app whose data directory holds `resume.pdf`.
#[fixture]
pub fn app() -> TestApp {
    app_with_resume("resume.pdf")
}

/// Builds an app that serves `resume_file` from a data directory holding
/// only `resume.pdf`.
pub fn app_with_resume(resume_file: &str) -> TestApp {
    let data = tempfile::tempdir().expect("temp dir");
    std::fs::write(data.path().join("resume.pdf"), RESUME_BYTES).expect("write resume");
    let root = Utf8PathBuf::from_path_buf(data.path().to_path_buf()).expect("utf8 temp path");
    let settings = AdminSettings {
        password: AdminPassword::new(PASSWORD),
        data_dir: DataDir::new(root),
        resume_file: resume_file.to_owned(),
    };
    let state = in_memory_state(Views::load().expect("templates load"), settings);
    TestApp {
        router: build_router(state.clone()),
        state,
        _data: data,
    }
}

impl TestApp {
    /// Starts a logged-in session and returns its `Cookie` header value.
    pub fn admin_cookie(&self) -> String {
        format!("{SESSION_COOKIE}={}", self.state.sessions().start(true))
    }

    /// Sends a request through the router.
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    /// Sends a `GET` request.
    pub async fn get(&self, path: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::get(path);
        if let Some(value) = cookie {
            builder = builder.header(COOKIE, value);
        }
        self.send(builder.body(Body::empty()).expect("request"))
            .await
    }

    /// Sends a url-encoded form `POST` request.
    pub async fn post_form(&self, path: &str, form: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::post(path).header(CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(value) = cookie {
            builder = builder.header(COOKIE, value);
        }
        self.send(builder.body(Body::from(form.to_owned())).expect("request"))
            .await
    }

    /// Follows a redirect with the same cookie and returns the page body.
    pub async fn follow(&self, response: &Response<Body>, cookie: Option<&str>) -> String {
        let to = location(response).expect("redirect location");
        body_text(self.get(to.split('#').next().unwrap_or(to), cookie).await).await
    }
}

/// Returns the `Location` header.
pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
}

/// Returns the `name=value` part of the `Set-Cookie` header.
pub fn set_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::to_owned)
}

/// Collects the body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Asserts a `303 See Other` to `to`.
pub fn assert_redirect(response: &Response<Body>, to: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(response), Some(to));
}
