use crate::{CoreError, Result};

use serde::{Deserialize, Serialize};

/// An operator account, referenced by projects and tasks by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub firstname: String,
    pub lastname: String,
}

impl User {
    /// Copy the editable fields into a draft (update form pre-population)
    pub fn draft(&self) -> UserDraft {
        UserDraft {
            firstname: self.firstname.clone(),
            lastname: self.lastname.clone(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

/// Editable field set for a user, serialized as the request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub firstname: String,
    pub lastname: String,
}

impl UserDraft {
    /// Required-field check, mirroring the original form's required inputs
    pub fn validate(&self) -> Result<()> {
        if self.firstname.trim().is_empty() {
            return Err(CoreError::validation("firstname is required"));
        }
        if self.lastname.trim().is_empty() {
            return Err(CoreError::validation("lastname is required"));
        }
        Ok(())
    }
}
