use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Task workflow status. The in-progress wire string contains a space,
/// so the variants carry explicit renames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "ASSESSMENT")]
    Assessment,
    #[serde(rename = "IN PROGRESS")]
    InProgress,
    #[serde(rename = "DONE")]
    Done,
}

impl TaskStatus {
    /// Wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assessment => "ASSESSMENT",
            Self::InProgress => "IN PROGRESS",
            Self::Done => "DONE",
        }
    }

    /// Human-facing label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Assessment => "Assessment",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.to_uppercase().as_str() {
            "ASSESSMENT" => Ok(Self::Assessment),
            // Accept an underscore so the status is typeable without quoting
            "IN PROGRESS" | "IN_PROGRESS" => Ok(Self::InProgress),
            "DONE" => Ok(Self::Done),
            _ => Err(CoreError::InvalidTaskStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
