//! Portfolio project entries.

use super::{CatalogEntry, EntryId, EntryKind, PortfolioDomainError, optional, required};
use serde::{Deserialize, Serialize};

/// Validated project fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    title: String,
    role: String,
    description: String,
    tech: Option<String>,
    image: Option<String>,
}

impl ProjectDraft {
    /// Creates a draft from the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioDomainError::MissingField`] when the title, role or
    /// description is blank.
    pub fn new(
        title: impl Into<String>,
        role: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, PortfolioDomainError> {
        Ok(Self {
            title: required("title", title)?,
            role: required("role", role)?,
            description: required("description", description)?,
            tech: None,
            image: None,
        })
    }

    /// Sets the comma-separated technology list.
    #[must_use]
    pub fn with_tech(mut self, tech: Option<String>) -> Self {
        self.tech = optional(tech);
        self
    }

    /// Sets the image path or URL.
    #[must_use]
    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = optional(image);
        self
    }
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: EntryId,
    title: String,
    role: String,
    description: String,
    tech: Option<String>,
    image: Option<String>,
}

impl Project {
    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the role held on the project.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the raw comma-separated technology list.
    #[must_use]
    pub fn tech(&self) -> Option<&str> {
        self.tech.as_deref()
    }

    /// Returns the technologies as trimmed, non-empty items.
    #[must_use]
    pub fn tech_list(&self) -> Vec<&str> {
        self.tech
            .as_deref()
            .map(|tech| {
                tech.split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the image path or URL.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

impl CatalogEntry for Project {
    type Draft = ProjectDraft;
    const KIND: EntryKind = EntryKind::Project;

    fn id(&self) -> EntryId {
        self.id
    }

    fn from_draft(id: EntryId, draft: ProjectDraft) -> Self {
        Self {
            id,
            title: draft.title,
            role: draft.role,
            description: draft.description,
            tech: draft.tech,
            image: draft.image,
        }
    }

    fn apply(&mut self, draft: ProjectDraft) {
        *self = Self::from_draft(self.id, draft);
    }
}
