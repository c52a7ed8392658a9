//! Bulk loading of the catalogue and roadmap from JSON files.
//!
//! Each file is optional. A missing or malformed file is logged and
//! skipped; the other files still load. Persistence failures abort the run.

use crate::data_dir::DataDir;
use crate::portfolio::{
    domain::{Project, ProjectDraft, Skill, SkillDraft},
    ports::PortfolioRepository,
    services::{PortfolioError, PortfolioService},
};
use crate::roadmap::{
    ports::TodoRepository,
    services::{RoadmapError, RoadmapService, SeedTodo},
};
use mockable::Clock;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::io;
use thiserror::Error;
use tracing::{info, warn};

/// Project list file name.
pub const PROJECTS_FILE: &str = "projects.json";
/// Skill category file name.
pub const SKILLS_FILE: &str = "skills.json";
/// Roadmap task file name.
pub const ROADMAP_FILE: &str = "roadmap.json";

/// Source of seed documents.
#[cfg_attr(test, mockall::automock)]
pub trait SeedSource {
    /// Returns the document contents, or `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the document exists but cannot be read.
    fn read(&self, name: &str) -> io::Result<Option<String>>;
}

impl SeedSource for DataDir {
    fn read(&self, name: &str) -> io::Result<Option<String>> {
        self.read_to_string(name)
    }
}

/// Errors that abort a seed run.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A seed document could not be read.
    #[error("failed to read {name}: {source}")]
    Read {
        /// Document name.
        name: &'static str,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Roadmap persistence failed.
    #[error(transparent)]
    Roadmap(RoadmapError),
    /// Catalogue persistence failed.
    #[error(transparent)]
    Portfolio(PortfolioError),
}

/// Counts of records written by a seed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Records removed by `--reset`.
    pub cleared: usize,
    /// Projects written.
    pub projects: usize,
    /// Skills written.
    pub skills: usize,
    /// Roadmap tasks written.
    pub todos: usize,
}

#[derive(Debug, Deserialize)]
struct ProjectRecord {
    title: String,
    role: String,
    description: String,
    #[serde(default)]
    tech: Option<String>,
    #[serde(default)]
    image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SkillCategoryRecord {
    category: String,
    #[serde(default)]
    skills: Vec<SkillRecord>,
}

#[derive(Debug, Deserialize)]
struct SkillRecord {
    name: String,
    #[serde(default)]
    svg: Option<String>,
}

/// Services a seed run writes through.
pub struct Seeder<'a, T, C, P>
where
    T: TodoRepository,
    C: Clock + Send + Sync,
    P: PortfolioRepository,
{
    roadmap: &'a RoadmapService<T, C>,
    portfolio: &'a PortfolioService<P>,
}

impl<'a, T, C, P> Seeder<'a, T, C, P>
where
    T: TodoRepository,
    C: Clock + Send + Sync,
    P: PortfolioRepository,
{
    /// Creates a seeder over the given services.
    #[must_use]
    pub const fn new(roadmap: &'a RoadmapService<T, C>, portfolio: &'a PortfolioService<P>) -> Self {
        Self { roadmap, portfolio }
    }

    /// Loads every seed document from `source`.
    ///
    /// With `reset`, every existing record is removed first.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] when a document cannot be read or a write
    /// fails. Malformed documents are skipped with a warning instead.
    pub async fn run(&self, source: &impl SeedSource, reset: bool) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::default();
        if reset {
            report.cleared = self.roadmap.clear().await.map_err(SeedError::Roadmap)?
                + self.portfolio.clear().await.map_err(SeedError::Portfolio)?;
            info!(removed = report.cleared, "existing records cleared");
        }

        report.projects = self.seed_projects(source).await?;
        report.skills = self.seed_skills(source).await?;
        report.todos = self.seed_roadmap(source).await?;
        info!(
            projects = report.projects,
            skills = report.skills,
            todos = report.todos,
            "seed complete"
        );
        Ok(report)
    }

    async fn seed_projects(&self, source: &impl SeedSource) -> Result<usize, SeedError> {
        let Some(records) = load::<Vec<ProjectRecord>>(source, PROJECTS_FILE)? else {
            return Ok(0);
        };
        let drafts = match records
            .into_iter()
            .map(|record| {
                ProjectDraft::new(record.title, record.role, record.description)
                    .map(|draft| draft.with_tech(record.tech).with_image(record.image))
            })
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(drafts) => drafts,
            Err(err) => {
                warn!(file = PROJECTS_FILE, error = %err, "skipping invalid seed file");
                return Ok(0);
            }
        };
        let stored = self
            .portfolio
            .add_all::<Project>(drafts)
            .await
            .map_err(SeedError::Portfolio)?;
        Ok(stored.len())
    }

    async fn seed_skills(&self, source: &impl SeedSource) -> Result<usize, SeedError> {
        let Some(categories) = load::<Vec<SkillCategoryRecord>>(source, SKILLS_FILE)? else {
            return Ok(0);
        };
        let drafts = match categories
            .into_iter()
            .flat_map(|group| {
                let category = group.category;
                group.skills.into_iter().map(move |skill| {
                    SkillDraft::new(category.clone(), skill.name)
                        .map(|draft| draft.with_svg(skill.svg))
                })
            })
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(drafts) => drafts,
            Err(err) => {
                warn!(file = SKILLS_FILE, error = %err, "skipping invalid seed file");
                return Ok(0);
            }
        };
        let stored = self
            .portfolio
            .add_all::<Skill>(drafts)
            .await
            .map_err(SeedError::Portfolio)?;
        Ok(stored.len())
    }

    async fn seed_roadmap(&self, source: &impl SeedSource) -> Result<usize, SeedError> {
        let Some(entries) = load::<Vec<SeedTodo>>(source, ROADMAP_FILE)? else {
            return Ok(0);
        };
        match self.roadmap.seed(entries).await {
            Ok(todos) => Ok(todos.len()),
            Err(RoadmapError::Domain(err)) => {
                warn!(file = ROADMAP_FILE, error = %err, "skipping invalid seed file");
                Ok(0)
            }
            Err(err) => Err(SeedError::Roadmap(err)),
        }
    }
}

fn load<T: DeserializeOwned>(
    source: &impl SeedSource,
    name: &'static str,
) -> Result<Option<T>, SeedError> {
    let Some(contents) = source
        .read(name)
        .map_err(|source| SeedError::Read { name, source })?
    else {
        info!(file = name, "seed file not present");
        return Ok(None);
    };
    match serde_json::from_str(&contents) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => {
            warn!(file = name, error = %err, "skipping malformed seed file");
            Ok(None)
        }
    }
}
