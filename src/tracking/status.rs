//! Translation status of a tracked file.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Translation state recorded in the `status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Fully translated.
    Complete,
    /// Translation started but not finished.
    InProgress,
    /// Not touched yet.
    NotStarted,
}

impl Status {
    /// Every status, in report order.
    pub const ALL: [Status; 3] = [Status::Complete, Status::InProgress, Status::NotStarted];

    /// The exact text used in the tracking file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::InProgress => "in-progress",
            Self::NotStarted => "not-started",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a `status` value is not one of the known states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "complete" => Ok(Self::Complete),
            "in-progress" => Ok(Self::InProgress),
            "not-started" => Ok(Self::NotStarted),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}
