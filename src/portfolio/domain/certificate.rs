//! Certificate entries.

use super::{CatalogEntry, EntryId, EntryKind, PortfolioDomainError, optional, required};
use serde::{Deserialize, Serialize};

/// Validated certificate fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateDraft {
    title: String,
    provider: String,
    icon: Option<String>,
}

impl CertificateDraft {
    /// Creates a draft from the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioDomainError::MissingField`] when the title or
    /// provider is blank.
    pub fn new(
        title: impl Into<String>,
        provider: impl Into<String>,
    ) -> Result<Self, PortfolioDomainError> {
        Ok(Self {
            title: required("title", title)?,
            provider: required("provider", provider)?,
            icon: None,
        })
    }

    /// Sets the icon class, e.g. `fa-solid fa-award`.
    #[must_use]
    pub fn with_icon(mut self, icon: Option<String>) -> Self {
        self.icon = optional(icon);
        self
    }
}

/// A certificate earned from a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    id: EntryId,
    title: String,
    provider: String,
    icon: Option<String>,
}

impl Certificate {
    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the issuing provider.
    #[must_use]
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Returns the icon class.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
}

impl CatalogEntry for Certificate {
    type Draft = CertificateDraft;
    const KIND: EntryKind = EntryKind::Certificate;

    fn id(&self) -> EntryId {
        self.id
    }

    fn from_draft(id: EntryId, draft: CertificateDraft) -> Self {
        Self {
            id,
            title: draft.title,
            provider: draft.provider,
            icon: draft.icon,
        }
    }

    fn apply(&mut self, draft: CertificateDraft) {
        *self = Self::from_draft(self.id, draft);
    }
}
