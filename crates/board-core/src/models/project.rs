//! Project entity - organizational container for tasks.

use crate::{CoreError, MemberRef, Result};

use serde::{Deserialize, Serialize};

/// A project is a top-level organizational container. It embeds denormalized
/// member snapshots; the member set is capped client-side at selection time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub member_id: Vec<MemberRef>,
}

impl Project {
    /// Copy the editable fields into a draft (update form pre-population)
    pub fn draft(&self) -> ProjectDraft {
        ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            member_id: self.member_id.clone(),
        }
    }
}

/// Editable field set for a project, serialized as the request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub member_id: Vec<MemberRef>,
}

impl ProjectDraft {
    /// Required-field check, mirroring the original form's required inputs.
    /// Description and members are optional.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::validation("title is required"));
        }
        Ok(())
    }
}
