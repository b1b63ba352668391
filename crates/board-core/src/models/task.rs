use crate::{CoreError, Priority, Result, TaskStatus};

use serde::{Deserialize, Serialize};

/// A task belongs to exactly one project and is assigned to exactly one
/// member, referenced by bare id (no name snapshot, unlike project members).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub member_id: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub project_id: String,
}

impl Task {
    /// Copy the editable fields into a draft (update form pre-population)
    pub fn draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            member_id: self.member_id.clone(),
            priority: Some(self.priority),
            status: Some(self.status),
            project_id: self.project_id.clone(),
        }
    }
}

/// Editable field set for a task, serialized as the request body.
/// Priority and status are unset until picked, like the original's
/// placeholder-selected dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub member_id: String,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    pub project_id: String,
}

impl TaskDraft {
    /// Blank draft bound to the owning project
    pub fn new(project_id: &str) -> Self {
        Self {
            project_id: project_id.to_string(),
            ..Self::default()
        }
    }

    /// Required-field check, mirroring the original form's required inputs
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::validation("title is required"));
        }
        if self.member_id.trim().is_empty() {
            return Err(CoreError::validation("member is required"));
        }
        if self.priority.is_none() {
            return Err(CoreError::validation("priority is required"));
        }
        if self.status.is_none() {
            return Err(CoreError::validation("status is required"));
        }
        Ok(())
    }
}
