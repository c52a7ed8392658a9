//! `PostgreSQL` repository implementation for the portfolio catalogue.

use super::{
    models::{
        CertificateRow, CertificateValues, ProjectRow, ProjectValues, SkillRow, SkillValues,
    },
    schema::{certificates, projects, skills},
};
use crate::portfolio::{
    domain::{
        CatalogEntry, Certificate, CertificateDraft, EntryId, Project, ProjectDraft, Skill,
        SkillDraft,
    },
    ports::{
        CatalogRepository, CatalogRepositoryError, CatalogRepositoryResult, PortfolioRepository,
    },
};
use crate::storage::PgPool;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed catalogue repository.
#[derive(Debug, Clone)]
pub struct PostgresPortfolioRepository {
    pool: PgPool,
}

impl PostgresPortfolioRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> CatalogRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> CatalogRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(CatalogRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(CatalogRepositoryError::persistence)?
    }
}

fn count_rows(count: i64) -> CatalogRepositoryResult<usize> {
    usize::try_from(count).map_err(CatalogRepositoryError::persistence)
}

fn ensure_affected<E: CatalogEntry>(affected: usize, id: EntryId) -> CatalogRepositoryResult<()> {
    if affected == 0 {
        return Err(CatalogRepositoryError::not_found::<E>(id));
    }
    Ok(())
}

impl From<&Project> for ProjectValues {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title().to_owned(),
            role: project.role().to_owned(),
            tech: project.tech().map(str::to_owned),
            description: project.description().to_owned(),
            image: project.image().map(str::to_owned),
        }
    }
}

impl From<&Certificate> for CertificateValues {
    fn from(certificate: &Certificate) -> Self {
        Self {
            title: certificate.title().to_owned(),
            provider: certificate.provider().to_owned(),
            icon: certificate.icon().map(str::to_owned),
        }
    }
}

impl From<&Skill> for SkillValues {
    fn from(skill: &Skill) -> Self {
        Self {
            category: skill.category().to_owned(),
            name: skill.name().to_owned(),
            svg: skill.svg().map(str::to_owned),
        }
    }
}

fn row_to_project(row: ProjectRow) -> CatalogRepositoryResult<Project> {
    let draft = ProjectDraft::new(row.title, row.role, row.description)
        .map_err(CatalogRepositoryError::persistence)?
        .with_tech(row.tech)
        .with_image(row.image);
    Ok(Project::from_draft(EntryId::new(row.id), draft))
}

fn row_to_certificate(row: CertificateRow) -> CatalogRepositoryResult<Certificate> {
    let draft = CertificateDraft::new(row.title, row.provider)
        .map_err(CatalogRepositoryError::persistence)?
        .with_icon(row.icon);
    Ok(Certificate::from_draft(EntryId::new(row.id), draft))
}

fn row_to_skill(row: SkillRow) -> CatalogRepositoryResult<Skill> {
    let draft = SkillDraft::new(row.category, row.name)
        .map_err(CatalogRepositoryError::persistence)?
        .with_svg(row.svg);
    Ok(Skill::from_draft(EntryId::new(row.id), draft))
}

#[async_trait]
impl CatalogRepository<Project> for PostgresPortfolioRepository {
    async fn insert(&self, draft: ProjectDraft) -> CatalogRepositoryResult<Project> {
        // The placeholder id is discarded; the sequence assigns the real one.
        let values = ProjectValues::from(&Project::from_draft(EntryId::new(0), draft));
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(projects::table)
                .values(&values)
                .returning(ProjectRow::as_returning())
                .get_result::<ProjectRow>(connection)
                .map_err(CatalogRepositoryError::persistence)?;
            row_to_project(row)
        })
        .await
    }

    async fn insert_all(&self, drafts: Vec<ProjectDraft>) -> CatalogRepositoryResult<Vec<Project>> {
        let values: Vec<ProjectValues> = drafts
            .into_iter()
            .map(|draft| ProjectValues::from(&Project::from_draft(EntryId::new(0), draft)))
            .collect();
        if values.is_empty() {
            return Ok(Vec::new());
        }
        self.run_blocking(move |connection| {
            let mut rows = diesel::insert_into(projects::table)
                .values(&values)
                .returning(ProjectRow::as_returning())
                .get_results::<ProjectRow>(connection)
                .map_err(CatalogRepositoryError::persistence)?;
            rows.sort_by_key(|row| row.id);
            rows.into_iter().map(row_to_project).collect()
        })
        .await
    }

    async fn update(&self, entry: &Project) -> CatalogRepositoryResult<()> {
        let id = entry.id();
        let values = ProjectValues::from(entry);
        self.run_blocking(move |connection| {
            let affected = diesel::update(projects::table.find(id.value()))
                .set(&values)
                .execute(connection)
                .map_err(CatalogRepositoryError::persistence)?;
            ensure_affected::<Project>(affected, id)
        })
        .await
    }

    async fn delete(&self, id: EntryId) -> CatalogRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(projects::table.find(id.value()))
                .execute(connection)
                .map_err(CatalogRepositoryError::persistence)?;
            ensure_affected::<Project>(affected, id)
        })
        .await
    }

    async fn find_by_id(&self, id: EntryId) -> CatalogRepositoryResult<Option<Project>> {
        self.run_blocking(move |connection| {
            let row = projects::table
                .find(id.value())
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(CatalogRepositoryError::persistence)?;
            row.map(row_to_project).transpose()
        })
        .await
    }

    async fn list(&self) -> CatalogRepositoryResult<Vec<Project>> {
        self.run_blocking(move |connection| {
            let rows = projects::table
                .order(projects::id.asc())
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(CatalogRepositoryError::persistence)?;
            rows.into_iter().map(row_to_project).collect()
        })
        .await
    }

    async fn count(&self) -> CatalogRepositoryResult<usize> {
        self.run_blocking(move |connection| {
            let count = projects::table
                .count()
                .get_result::<i64>(connection)
                .map_err(CatalogRepositoryError::persistence)?;
            count_rows(count)
        })
        .await
    }
}

#[async_trait]
impl CatalogRepository<Certificate> for PostgresPortfolioRepository {
    async fn insert(&self, draft: CertificateDraft) -> CatalogRepositoryResult<Certificate> {
        let values = CertificateValues::from(&Certificate::from_draft(EntryId::new(0), draft));
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(certificates::table)
                .values(&values)
                .returning(CertificateRow::as_returning())
                .get_result::<CertificateRow>(connection)
                .map_err(CatalogRepositoryError::persistence)?;
            row_to_certificate(row)
        })
        .await
    }

    async fn insert_all(&self, drafts: Vec<CertificateDraft>) -> CatalogRepositoryResult<Vec<Certificate>> {
        let values: Vec<CertificateValues> = drafts
            .into_iter()
            .map(|draft| CertificateValues::from(&Certificate::from_draft(EntryId::new(0), draft)))
            .collect();
        if values.is_empty() {
            return Ok(Vec::new());
        }
        self.run_blocking(move |connection| {
            let mut rows = diesel::insert_into(certificates::table)
                .values(&values)
                .returning(CertificateRow::as_returning())
                .get_results::<CertificateRow>(connection)
                .map_err(CatalogRepositoryError::persistence)?;
            rows.sort_by_key(|row| row.id);
            rows.into_iter().map(row_to_certificate).collect()
        })
        .await
    }

    async fn update(&self, entry: &Certificate) -> CatalogRepositoryResult<()> {
        let id = entry.id();
        let values = CertificateValues::from(entry);
        self.run_blocking(move |connection| {
            let affected = diesel::update(certificates::table.find(id.value()))
                .set(&values)
                .execute(connection)
                .map_err(CatalogRepositoryError::persistence)?;
            ensure_affected::<Certificate>(affected, id)
        })
        .await
    }

    async fn delete(&self, id: EntryId) -> CatalogRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(certificates::table.find(id.value()))
                .execute(connection)
                .map_err(CatalogRepositoryError::persistence)?;
            ensure_affected::<Certificate>(affected, id)
        })
        .await
    }

    async fn find_by_id(&self, id: EntryId) -> CatalogRepositoryResult<Option<Certificate>> {
        self.run_blocking(move |connection| {
            let row = certificates::table
                .find(id.value())
                .select(CertificateRow::as_select())
                .first::<CertificateRow>(connection)
                .optional()
                .map_err(CatalogRepositoryError::persistence)?;
            row.map(row_to_certificate).transpose()
        })
        .await
    }

    async fn list(&self) -> CatalogRepositoryResult<Vec<Certificate>> {
        self.run_blocking(move |connection| {
            let rows = certificates::table
                .order(certificates::id.asc())
                .select(CertificateRow::as_select())
                .load::<CertificateRow>(connection)
                .map_err(CatalogRepositoryError::persistence)?;
            rows.into_iter().map(row_to_certificate).collect()
        })
        .await
    }

    async fn count(&self) -> CatalogRepositoryResult<usize> {
        self.run_blocking(move |connection| {
            let count = certificates::table
                .count()
                .get_result::<i64>(connection)
                .map_err(CatalogRepositoryError::persistence)?;
            count_rows(count)
        })
        .await
    }
}

#[async_trait]
impl CatalogRepository<Skill> for PostgresPortfolioRepository {
    async fn insert(&self, draft: SkillDraft) -> CatalogRepositoryResult<Skill> {
        let values = SkillValues::from(&Skill::from_draft(EntryId::new(0), draft));
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(skills::table)
                .values(&values)
                .returning(SkillRow::as_returning())
                .get_result::<SkillRow>(connection)
                .map_err(CatalogRepositoryError::persistence)?;
            row_to_skill(row)
        })
        .await
    }

    async fn insert_all(&self, drafts: Vec<SkillDraft>) -> CatalogRepositoryResult<Vec<Skill>> {
        let values: Vec<SkillValues> = drafts
            .into_iter()
            .map(|draft| SkillValues::from(&Skill::from_draft(EntryId::new(0), draft)))
            .collect();
        if values.is_empty() {
            return Ok(Vec::new());
        }
        self.run_blocking(move |connection| {
            let mut rows = diesel::insert_into(skills::table)
                .values(&values)
                .returning(SkillRow::as_returning())
                .get_results::<SkillRow>(connection)
                .map_err(CatalogRepositoryError::persistence)?;
            rows.sort_by_key(|row| row.id);
            rows.into_iter().map(row_to_skill).collect()
        })
        .await
    }

    async fn update(&self, entry: &Skill) -> CatalogRepositoryResult<()> {
        let id = entry.id();
        let values = SkillValues::from(entry);
        self.run_blocking(move |connection| {
            let affected = diesel::update(skills::table.find(id.value()))
                .set(&values)
                .execute(connection)
                .map_err(CatalogRepositoryError::persistence)?;
            ensure_affected::<Skill>(affected, id)
        })
        .await
    }

    async fn delete(&self, id: EntryId) -> CatalogRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(skills::table.find(id.value()))
                .execute(connection)
                .map_err(CatalogRepositoryError::persistence)?;
            ensure_affected::<Skill>(affected, id)
        })
        .await
    }

    async fn find_by_id(&self, id: EntryId) -> CatalogRepositoryResult<Option<Skill>> {
        self.run_blocking(move |connection| {
            let row = skills::table
                .find(id.value())
                .select(SkillRow::as_select())
                .first::<SkillRow>(connection)
                .optional()
                .map_err(CatalogRepositoryError::persistence)?;
            row.map(row_to_skill).transpose()
        })
        .await
    }

    async fn list(&self) -> CatalogRepositoryResult<Vec<Skill>> {
        self.run_blocking(move |connection| {
            let rows = skills::table
                .order(skills::id.asc())
                .select(SkillRow::as_select())
                .load::<SkillRow>(connection)
                .map_err(CatalogRepositoryError::persistence)?;
            rows.into_iter().map(row_to_skill).collect()
        })
        .await
    }

    async fn count(&self) -> CatalogRepositoryResult<usize> {
        self.run_blocking(move |connection| {
            let count = skills::table
                .count()
                .get_result::<i64>(connection)
                .map_err(CatalogRepositoryError::persistence)?;
            count_rows(count)
        })
        .await
    }
}

#[async_trait]
impl PortfolioRepository for PostgresPortfolioRepository {
    async fn clear_catalogue(&self) -> CatalogRepositoryResult<usize> {
        self.run_blocking(move |connection| {
            connection
                .transaction::<usize, diesel::result::Error, _>(|tx| {
                    Ok(diesel::delete(projects::table).execute(tx)?
                        + diesel::delete(certificates::table).execute(tx)?
                        + diesel::delete(skills::table).execute(tx)?)
                })
                .map_err(CatalogRepositoryError::persistence)
        })
        .await
    }
}
