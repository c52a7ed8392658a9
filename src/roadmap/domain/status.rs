//! Task lifecycle status.

use super::ParseTodoStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a roadmap task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    /// The task currently being worked on. At most one task holds it.
    Active,
    /// Queued, not yet started.
    #[default]
    Pending,
    /// Previously active, temporarily set aside.
    Paused,
    /// Completed, with a recorded completion time.
    Done,
}

impl TodoStatus {
    /// Every status, in dashboard order.
    pub const ALL: [Self; 4] = [Self::Active, Self::Pending, Self::Paused, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Paused => "paused",
            Self::Done => "done",
        }
    }

    /// Returns the human-readable label shown in the admin views.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::Paused => "Paused",
            Self::Done => "Done",
        }
    }

    /// Returns `true` for statuses that hold the "current task" slot.
    ///
    /// Activating another task demotes whichever task holds the slot.
    #[must_use]
    pub const fn holds_focus(self) -> bool {
        matches!(self, Self::Active | Self::Paused)
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TodoStatus {
    type Error = ParseTodoStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "pending" => Ok(Self::Pending),
            "paused" => Ok(Self::Paused),
            "done" => Ok(Self::Done),
            _ => Err(ParseTodoStatusError(value.to_owned())),
        }
    }
}
