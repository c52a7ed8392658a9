//! Catalogue dashboard and entry management.

use axum::extract::{Extension, Form, Path, State};
use axum::response::{IntoResponse, Response};
use minijinja::context;
use serde::Deserialize;

use super::conclude;
use super::error::AdminError;
use super::session::SessionId;
use super::state::{AdminState, Backend};
use crate::portfolio::domain::{
    CatalogEntry, Certificate, CertificateDraft, EntryId, EntryKind, PortfolioDomainError,
    Project, ProjectDraft, Skill, SkillDraft,
};
use crate::portfolio::ports::CatalogRepository;

/// Union of the fields posted by the three entry forms.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct EntryForm {
    title: String,
    role: String,
    description: String,
    tech: Option<String>,
    image: Option<String>,
    provider: String,
    icon: Option<String>,
    category: String,
    name: String,
    svg: Option<String>,
}

/// Form handling that differs per entry type.
trait AdminEntry: CatalogEntry {
    const TEMPLATE: &'static str;

    fn draft(form: EntryForm) -> Result<Self::Draft, PortfolioDomainError>;

    fn headline(&self) -> &str;
}

impl AdminEntry for Project {
    const TEMPLATE: &'static str = "admin/edit_project.html";

    fn draft(form: EntryForm) -> Result<ProjectDraft, PortfolioDomainError> {
        Ok(ProjectDraft::new(form.title, form.role, form.description)?
            .with_tech(form.tech)
            .with_image(form.image))
    }

    fn headline(&self) -> &str {
        self.title()
    }
}

impl AdminEntry for Certificate {
    const TEMPLATE: &'static str = "admin/edit_certificate.html";

    fn draft(form: EntryForm) -> Result<CertificateDraft, PortfolioDomainError> {
        Ok(CertificateDraft::new(form.title, form.provider)?.with_icon(form.icon))
    }

    fn headline(&self) -> &str {
        self.title()
    }
}

impl AdminEntry for Skill {
    const TEMPLATE: &'static str = "admin/edit_skill.html";

    fn draft(form: EntryForm) -> Result<SkillDraft, PortfolioDomainError> {
        Ok(SkillDraft::new(form.category, form.name)?.with_svg(form.svg))
    }

    fn headline(&self) -> &str {
        self.name()
    }
}

fn parse_kind(raw: &str) -> Result<EntryKind, AdminError> {
    EntryKind::try_from(raw).map_err(|_| AdminError::NotFound(format!("catalogue {raw}")))
}

fn section(kind: EntryKind) -> String {
    format!("/admin#{}", kind.as_str())
}

/// `GET /admin`
pub(crate) async fn dashboard<B: Backend>(
    State(state): State<AdminState<B>>,
    Extension(session): Extension<SessionId>,
) -> Result<Response, AdminError> {
    let portfolio = &state.portfolio;
    let projects = portfolio.list::<Project>().await?;
    let certificates = portfolio.list::<Certificate>().await?;
    let mut skills = portfolio.list::<Skill>().await?;
    skills.sort_by(|left, right| left.category().cmp(right.category()));
    let stats = portfolio.stats().await?;

    let html = state.views.render(
        "admin/dashboard.html",
        context! {
            flashes => state.sessions.take_flashes(session),
            projects => projects,
            certificates => certificates,
            skills => skills,
            stats => stats,
        },
    )?;
    Ok(html.into_response())
}

/// `POST /admin/{kind}`
pub(crate) async fn add<B: Backend>(
    State(state): State<AdminState<B>>,
    Extension(session): Extension<SessionId>,
    Path(raw_kind): Path<String>,
    Form(form): Form<EntryForm>,
) -> Result<Response, AdminError> {
    let kind = parse_kind(&raw_kind)?;
    let outcome = match kind {
        EntryKind::Project => add_entry::<B, Project>(&state, form).await,
        EntryKind::Certificate => add_entry::<B, Certificate>(&state, form).await,
        EntryKind::Skill => add_entry::<B, Skill>(&state, form).await,
    };
    conclude(&state.sessions, session, &section(kind), outcome)
}

async fn add_entry<B, E>(state: &AdminState<B>, form: EntryForm) -> Result<String, AdminError>
where
    B: Backend,
    E: AdminEntry,
    B::Catalog: CatalogRepository<E>,
{
    let draft = E::draft(form).map_err(|err| AdminError::Invalid(err.to_string()))?;
    let entry = state.portfolio.add::<E>(draft).await?;
    Ok(format!("{} added: {}", E::KIND.label(), entry.headline()))
}

/// `GET /admin/{kind}/{id}/edit`
pub(crate) async fn edit_form<B: Backend>(
    State(state): State<AdminState<B>>,
    Extension(session): Extension<SessionId>,
    Path((raw_kind, raw_id)): Path<(String, i64)>,
) -> Result<Response, AdminError> {
    let id = EntryId::new(raw_id);
    match parse_kind(&raw_kind)? {
        EntryKind::Project => render_edit::<B, Project>(&state, session, id).await,
        EntryKind::Certificate => render_edit::<B, Certificate>(&state, session, id).await,
        EntryKind::Skill => render_edit::<B, Skill>(&state, session, id).await,
    }
}

async fn render_edit<B, E>(
    state: &AdminState<B>,
    session: SessionId,
    id: EntryId,
) -> Result<Response, AdminError>
where
    B: Backend,
    E: AdminEntry,
    B::Catalog: CatalogRepository<E>,
{
    let entry = state
        .portfolio
        .find::<E>(id)
        .await?
        .ok_or_else(|| AdminError::NotFound(format!("{} {id}", E::KIND.label())))?;
    let html = state.views.render(
        E::TEMPLATE,
        context! {
            flashes => state.sessions.take_flashes(session),
            entry => entry,
        },
    )?;
    Ok(html.into_response())
}

/// `POST /admin/{kind}/{id}/edit`
pub(crate) async fn edit<B: Backend>(
    State(state): State<AdminState<B>>,
    Extension(session): Extension<SessionId>,
    Path((raw_kind, raw_id)): Path<(String, i64)>,
    Form(form): Form<EntryForm>,
) -> Result<Response, AdminError> {
    let kind = parse_kind(&raw_kind)?;
    let id = EntryId::new(raw_id);
    let outcome = match kind {
        EntryKind::Project => edit_entry::<B, Project>(&state, id, form).await,
        EntryKind::Certificate => edit_entry::<B, Certificate>(&state, id, form).await,
        EntryKind::Skill => edit_entry::<B, Skill>(&state, id, form).await,
    };
    let target = match &outcome {
        Err(AdminError::Invalid(_)) => format!("/admin/{}/{id}/edit", kind.as_str()),
        _ => section(kind),
    };
    conclude(&state.sessions, session, &target, outcome)
}

async fn edit_entry<B, E>(
    state: &AdminState<B>,
    id: EntryId,
    form: EntryForm,
) -> Result<String, AdminError>
where
    B: Backend,
    E: AdminEntry,
    B::Catalog: CatalogRepository<E>,
{
    // Missing entries answer 404 even when the form is also invalid.
    if state.portfolio.find::<E>(id).await?.is_none() {
        return Err(AdminError::NotFound(format!("{} {id}", E::KIND.label())));
    }
    let draft = E::draft(form).map_err(|err| AdminError::Invalid(err.to_string()))?;
    let entry = state.portfolio.edit::<E>(id, draft).await?;
    Ok(format!("{} updated: {}", E::KIND.label(), entry.headline()))
}

/// `POST /admin/{kind}/{id}/delete`
pub(crate) async fn delete<B: Backend>(
    State(state): State<AdminState<B>>,
    Extension(session): Extension<SessionId>,
    Path((raw_kind, raw_id)): Path<(String, i64)>,
) -> Result<Response, AdminError> {
    let kind = parse_kind(&raw_kind)?;
    let id = EntryId::new(raw_id);
    let portfolio = &state.portfolio;
    let outcome = match kind {
        EntryKind::Project => portfolio.delete::<Project>(id).await,
        EntryKind::Certificate => portfolio.delete::<Certificate>(id).await,
        EntryKind::Skill => portfolio.delete::<Skill>(id).await,
    }
    .map(|()| format!("{} deleted.", kind.label()))
    .map_err(AdminError::from);
    conclude(&state.sessions, session, &section(kind), outcome)
}
