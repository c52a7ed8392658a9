//! Cookie sessions, flash messages and the admin guard.

use axum::extract::{Request, State};
use axum::http::header::{COOKIE, LOCATION, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;
use uuid::Uuid;

use super::state::{AdminState, Backend};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "folio_session";

/// Message shown when an anonymous visitor reaches a guarded page.
pub const LOGIN_REQUIRED: &str = "Please log in to access this page.";

/// Severity of a flash message; doubles as its CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashLevel {
    /// The operation succeeded.
    Success,
    /// The operation failed.
    Danger,
    /// Neutral notice.
    Info,
}

/// A one-shot message shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flash {
    /// Severity.
    pub level: FlashLevel,
    /// Message text.
    pub message: String,
}

/// Opaque session identifier carried in [`SESSION_COOKIE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Anonymous sessions kept at once. Starting one more evicts the oldest.
pub const ANONYMOUS_SESSION_LIMIT: usize = 1024;

#[derive(Debug)]
struct Session {
    authenticated: bool,
    flashes: Vec<Flash>,
    started: u64,
}

#[derive(Debug, Default)]
struct SessionTable {
    sessions: HashMap<SessionId, Session>,
    next_started: u64,
}

impl SessionTable {
    fn insert(&mut self, id: SessionId, authenticated: bool) {
        let started = self.next_started;
        self.next_started = started.wrapping_add(1);
        self.sessions.insert(
            id,
            Session {
                authenticated,
                flashes: Vec::new(),
                started,
            },
        );
    }

    fn anonymous_count(&self) -> usize {
        self.sessions
            .values()
            .filter(|session| !session.authenticated)
            .count()
    }

    fn evict_oldest_anonymous(&mut self) {
        let oldest = self
            .sessions
            .iter()
            .filter(|(_, session)| !session.authenticated)
            .min_by_key(|(_, session)| session.started)
            .map(|(id, _)| *id);
        if let Some(id) = oldest {
            self.sessions.remove(&id);
        }
    }
}

/// Server-side session table.
///
/// Anonymous sessions only carry flash messages to the login page. They are
/// dropped once their messages have been shown, and at most
/// `anonymous_limit` of them are kept.
#[derive(Debug, Clone)]
pub struct SessionStore {
    table: Arc<RwLock<SessionTable>>,
    anonymous_limit: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_anonymous_limit(ANONYMOUS_SESSION_LIMIT)
    }
}

impl SessionStore {
    /// Creates an empty store with the default anonymous limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store keeping at most `limit` anonymous sessions.
    #[must_use]
    pub fn with_anonymous_limit(limit: usize) -> Self {
        Self {
            table: Arc::new(RwLock::new(SessionTable::default())),
            anonymous_limit: limit.max(1),
        }
    }

    fn with_table<T>(&self, f: impl FnOnce(&mut SessionTable) -> T) -> T {
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut table)
    }

    /// Starts a new session with a random identifier.
    #[must_use]
    pub fn start(&self, authenticated: bool) -> SessionId {
        let id = SessionId(Uuid::new_v4());
        let limit = self.anonymous_limit;
        self.with_table(|table| {
            if !authenticated {
                while table.anonymous_count() >= limit {
                    table.evict_oldest_anonymous();
                }
            }
            table.insert(id, authenticated);
        });
        id
    }

    /// Returns the existing session or starts an anonymous one.
    ///
    /// The flag is `true` when a new session was started and its cookie
    /// still has to be sent.
    #[must_use]
    pub fn resume_or_start(&self, current: Option<SessionId>) -> (SessionId, bool) {
        match current {
            Some(id) if self.with_table(|table| table.sessions.contains_key(&id)) => (id, false),
            _ => (self.start(false), true),
        }
    }

    /// Returns `true` when `id` names a logged-in session.
    #[must_use]
    pub fn is_authenticated(&self, id: SessionId) -> bool {
        self.with_table(|table| {
            table
                .sessions
                .get(&id)
                .is_some_and(|session| session.authenticated)
        })
    }

    /// Number of live sessions, logged-in and anonymous.
    #[must_use]
    pub fn len(&self) -> usize {
        self.with_table(|table| table.sessions.len())
    }

    /// Returns `true` when no session is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops a session.
    pub fn end(&self, id: SessionId) {
        self.with_table(|table| table.sessions.remove(&id));
    }

    /// Queues a flash message on a session.
    pub fn flash(&self, id: SessionId, level: FlashLevel, message: impl Into<String>) {
        let message = message.into();
        self.with_table(|table| {
            if let Some(session) = table.sessions.get_mut(&id) {
                session.flashes.push(Flash { level, message });
            }
        });
    }

    /// Removes and returns the queued flash messages.
    ///
    /// An anonymous session has nothing left to carry afterwards and is
    /// dropped.
    #[must_use]
    pub fn take_flashes(&self, id: SessionId) -> Vec<Flash> {
        self.with_table(|table| {
            let anonymous = table
                .sessions
                .get(&id)
                .is_some_and(|session| !session.authenticated);
            if anonymous {
                return table
                    .sessions
                    .remove(&id)
                    .map(|session| session.flashes)
                    .unwrap_or_default();
            }
            table
                .sessions
                .get_mut(&id)
                .map(|session| std::mem::take(&mut session.flashes))
                .unwrap_or_default()
        })
    }
}

/// SHA-256 digest of the admin password.
#[derive(Clone)]
pub struct AdminPassword {
    digest: [u8; 32],
}

impl AdminPassword {
    /// Hashes the configured password.
    #[must_use]
    pub fn new(password: &str) -> Self {
        Self {
            digest: Sha256::digest(password.as_bytes()).into(),
        }
    }

    /// Checks a submitted password. Every digest byte is compared.
    #[must_use]
    pub fn verify(&self, candidate: &str) -> bool {
        let candidate: [u8; 32] = Sha256::digest(candidate.as_bytes()).into();
        self.digest
            .iter()
            .zip(candidate.iter())
            .fold(0_u8, |acc, (left, right)| acc | (left ^ right))
            == 0
    }
}

impl fmt::Debug for AdminPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminPassword(..)")
    }
}

/// Reads the session identifier from the `Cookie` header.
#[must_use]
pub fn session_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| SessionId::parse(value))
}

fn session_cookie(id: SessionId) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax"
    ))
    .ok()
}

/// Builds a `303 See Other` redirect, attaching the session cookie when
/// one is given.
#[must_use]
pub fn redirect(to: &str, cookie: Option<SessionId>) -> Response {
    let mut response = StatusCode::SEE_OTHER.into_response();
    if let Ok(location) = HeaderValue::from_str(to) {
        response.headers_mut().insert(LOCATION, location);
    }
    if let Some(value) = cookie.and_then(session_cookie) {
        response.headers_mut().insert(SET_COOKIE, value);
    }
    response
}

/// Attaches the session cookie to an arbitrary response.
#[must_use]
pub fn with_session_cookie(mut response: Response, id: SessionId) -> Response {
    if let Some(value) = session_cookie(id) {
        response.headers_mut().insert(SET_COOKIE, value);
    }
    response
}

/// Lets logged-in requests through and sends everyone else to the login
/// page with a flash message.
///
/// The authenticated [`SessionId`] is added to the request extensions.
pub(crate) async fn require_admin<B: Backend>(
    State(state): State<AdminState<B>>,
    mut request: Request,
    next: Next,
) -> Response {
    let current = session_from_headers(request.headers());
    if let Some(id) = current.filter(|id| state.sessions.is_authenticated(*id)) {
        request.extensions_mut().insert(id);
        return next.run(request).await;
    }

    debug!(path = %request.uri().path(), "redirecting anonymous request to login");
    let (id, fresh) = state.sessions.resume_or_start(current);
    state.sessions.flash(id, FlashLevel::Danger, LOGIN_REQUIRED);
    redirect("/admin/login", fresh.then_some(id))
}
