//! Domain model for the portfolio catalogue.

mod certificate;
mod entry;
mod error;
mod project;
mod skill;

pub use certificate::{Certificate, CertificateDraft};
pub use entry::{CatalogEntry, EntryId, EntryKind};
pub use error::{ParseEntryKindError, PortfolioDomainError};
pub use project::{Project, ProjectDraft};
pub use skill::{Skill, SkillDraft, SkillGroup, group_by_category};

/// Validates a required text field, returning the trimmed value.
fn required(field: &'static str, value: impl Into<String>) -> Result<String, PortfolioDomainError> {
    let raw = value.into();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PortfolioDomainError::MissingField(field));
    }
    Ok(trimmed.to_owned())
}

/// Normalizes an optional text field; blank values become `None`.
fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|inner| inner.trim().to_owned())
        .filter(|inner| !inner.is_empty())
}
