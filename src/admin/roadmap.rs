//! Roadmap dashboard and task transitions.

use axum::extract::{Extension, Form, Path, State};
use axum::response::{IntoResponse, Response};
use minijinja::context;
use serde::{Deserialize, Serialize};

use super::conclude;
use super::error::AdminError;
use super::session::SessionId;
use super::state::{AdminState, Backend};
use crate::roadmap::domain::{Todo, TodoEdit, TodoId, TodoStatus};
use crate::roadmap::services::CreateTodoRequest;

const ROADMAP: &str = "/admin/roadmap";

#[derive(Debug, Deserialize)]
pub(crate) struct CreateTodoForm {
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EditTodoForm {
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    status: String,
}

#[derive(Debug, Serialize)]
struct StatusOption {
    value: &'static str,
    label: &'static str,
}

fn status_options() -> Vec<StatusOption> {
    TodoStatus::ALL
        .iter()
        .map(|status| StatusOption {
            value: status.as_str(),
            label: status.label(),
        })
        .collect()
}

/// `GET /admin/roadmap`
pub(crate) async fn dashboard<B: Backend>(
    State(state): State<AdminState<B>>,
    Extension(session): Extension<SessionId>,
) -> Result<Response, AdminError> {
    let dashboard = state.roadmap.dashboard().await?;
    let html = state.views.render(
        "admin/roadmap.html",
        context! {
            flashes => state.sessions.take_flashes(session),
            dashboard => dashboard,
        },
    )?;
    Ok(html.into_response())
}

/// `POST /admin/roadmap`
pub(crate) async fn create<B: Backend>(
    State(state): State<AdminState<B>>,
    Extension(session): Extension<SessionId>,
    Form(form): Form<CreateTodoForm>,
) -> Result<Response, AdminError> {
    let mut request = CreateTodoRequest::new(form.description);
    if let Some(category) = form.category {
        request = request.with_category(category);
    }
    let outcome = state
        .roadmap
        .create(request)
        .await
        .map(|todo| format!("Task added to {}.", todo.category()))
        .map_err(AdminError::from);
    conclude(&state.sessions, session, ROADMAP, outcome)
}

/// `POST /admin/roadmap/{id}/activate`
pub(crate) async fn activate<B: Backend>(
    State(state): State<AdminState<B>>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<i64>,
) -> Result<Response, AdminError> {
    let outcome = state
        .roadmap
        .activate(TodoId::new(id))
        .await
        .map(|todo| format!("Now working on: {}", todo.description()))
        .map_err(AdminError::from);
    conclude(&state.sessions, session, ROADMAP, outcome)
}

/// `POST /admin/roadmap/{id}/pause`
pub(crate) async fn pause<B: Backend>(
    State(state): State<AdminState<B>>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<i64>,
) -> Result<Response, AdminError> {
    let outcome = state
        .roadmap
        .pause(TodoId::new(id))
        .await
        .map(|todo| format!("Paused: {}", todo.description()))
        .map_err(AdminError::from);
    conclude(&state.sessions, session, ROADMAP, outcome)
}

/// `POST /admin/roadmap/{id}/complete`
pub(crate) async fn complete<B: Backend>(
    State(state): State<AdminState<B>>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<i64>,
) -> Result<Response, AdminError> {
    let outcome = state
        .roadmap
        .complete(TodoId::new(id))
        .await
        .map(|(done, next)| completion_message(&done, next.as_ref()))
        .map_err(AdminError::from);
    conclude(&state.sessions, session, ROADMAP, outcome)
}

fn completion_message(done: &Todo, next: Option<&Todo>) -> String {
    match next {
        Some(next) => format!(
            "Completed: {}. Next up: {}",
            done.description(),
            next.description()
        ),
        None => format!("Completed: {}", done.description()),
    }
}

/// `POST /admin/roadmap/{id}/delete`
pub(crate) async fn delete<B: Backend>(
    State(state): State<AdminState<B>>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<i64>,
) -> Result<Response, AdminError> {
    let outcome = state
        .roadmap
        .delete(TodoId::new(id))
        .await
        .map(|()| "Task deleted.".to_owned())
        .map_err(AdminError::from);
    conclude(&state.sessions, session, ROADMAP, outcome)
}

/// `GET /admin/roadmap/{id}/edit`
pub(crate) async fn edit_form<B: Backend>(
    State(state): State<AdminState<B>>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<i64>,
) -> Result<Response, AdminError> {
    let todo = state.roadmap.find(TodoId::new(id)).await?;
    let html = state.views.render(
        "admin/edit_todo.html",
        context! {
            flashes => state.sessions.take_flashes(session),
            todo => todo,
            statuses => status_options(),
        },
    )?;
    Ok(html.into_response())
}

/// `POST /admin/roadmap/{id}/edit`
///
/// Writes the submitted values as-is, including the status.
pub(crate) async fn edit<B: Backend>(
    State(state): State<AdminState<B>>,
    Extension(session): Extension<SessionId>,
    Path(raw_id): Path<i64>,
    Form(form): Form<EditTodoForm>,
) -> Result<Response, AdminError> {
    let id = TodoId::new(raw_id);
    let edit = match TodoEdit::parse(form.description, form.category, &form.status) {
        Ok(edit) => edit,
        Err(err) => {
            // Unknown ids still answer 404 rather than a validation flash.
            state.roadmap.find(id).await?;
            let back = format!("{ROADMAP}/{id}/edit");
            return conclude(
                &state.sessions,
                session,
                &back,
                Err(AdminError::Invalid(err.to_string())),
            );
        }
    };
    let outcome = state
        .roadmap
        .override_todo(id, edit)
        .await
        .map(|todo| format!("Task #{} updated.", todo.id()))
        .map_err(AdminError::from);
    conclude(&state.sessions, session, ROADMAP, outcome)
}
