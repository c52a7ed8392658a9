//! Skill entries and their category grouping.

use super::{CatalogEntry, EntryId, EntryKind, PortfolioDomainError, optional, required};
use serde::{Deserialize, Serialize};

/// Validated skill fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDraft {
    category: String,
    name: String,
    svg: Option<String>,
}

impl SkillDraft {
    /// Creates a draft from the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioDomainError::MissingField`] when the category or
    /// name is blank.
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, PortfolioDomainError> {
        Ok(Self {
            category: required("category", category)?,
            name: required("name", name)?,
            svg: None,
        })
    }

    /// Sets the inline SVG markup.
    #[must_use]
    pub fn with_svg(mut self, svg: Option<String>) -> Self {
        self.svg = optional(svg);
        self
    }
}

/// A skill listed under a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    id: EntryId,
    category: String,
    name: String,
    svg: Option<String>,
}

impl Skill {
    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the skill name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the inline SVG markup.
    #[must_use]
    pub fn svg(&self) -> Option<&str> {
        self.svg.as_deref()
    }
}

impl CatalogEntry for Skill {
    type Draft = SkillDraft;
    const KIND: EntryKind = EntryKind::Skill;

    fn id(&self) -> EntryId {
        self.id
    }

    fn from_draft(id: EntryId, draft: SkillDraft) -> Self {
        Self {
            id,
            category: draft.category,
            name: draft.name,
            svg: draft.svg,
        }
    }

    fn apply(&mut self, draft: SkillDraft) {
        *self = Self::from_draft(self.id, draft);
    }
}

/// Skills sharing a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    /// Category name.
    pub category: String,
    /// Skills in the category, in input order.
    pub skills: Vec<Skill>,
}

/// Groups skills by category, keeping categories in first-appearance order.
#[must_use]
pub fn group_by_category(skills: Vec<Skill>) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|group| group.category == skill.category) {
            Some(group) => group.skills.push(skill),
            None => groups.push(SkillGroup {
                category: skill.category.clone(),
                skills: vec![skill],
            }),
        }
    }
    groups
}
