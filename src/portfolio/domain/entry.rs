//! Shared shape of catalogue entries.

use super::ParseEntryKindError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier of a catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(i64);

impl EntryId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// A portfolio project.
    Project,
    /// A certificate.
    Certificate,
    /// A skill.
    Skill,
}

impl EntryKind {
    /// Returns the plural route segment for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Project => "projects",
            Self::Certificate => "certificates",
            Self::Skill => "skills",
        }
    }

    /// Returns the singular label shown in flash messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Project => "Project",
            Self::Certificate => "Certificate",
            Self::Skill => "Skill",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for EntryKind {
    type Error = ParseEntryKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "projects" | "project" => Ok(Self::Project),
            "certificates" | "certificate" => Ok(Self::Certificate),
            "skills" | "skill" => Ok(Self::Skill),
            _ => Err(ParseEntryKindError(value.to_owned())),
        }
    }
}

/// Behaviour shared by every catalogue entry type.
///
/// Entries are created from a validated draft once the store has assigned
/// an identifier, and edited by replacing every field from a new draft.
pub trait CatalogEntry: Clone + fmt::Debug + Serialize + Send + Sync + 'static {
    /// Validated field values without an identifier.
    type Draft: Clone + fmt::Debug + Send + Sync + 'static;

    /// Kind tag of this entry type.
    const KIND: EntryKind;

    /// Returns the entry identifier.
    fn id(&self) -> EntryId;

    /// Builds an entry from a draft and its assigned identifier.
    fn from_draft(id: EntryId, draft: Self::Draft) -> Self;

    /// Replaces every field with the draft's values.
    fn apply(&mut self, draft: Self::Draft);
}
