use crate::User;

use serde::{Deserialize, Serialize};

/// Denormalized member snapshot embedded in a project.
///
/// Carries a copy of the user's name fields as of selection time, not a
/// live join. Tasks by contrast reference a member by bare id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub firstname: String,
    pub lastname: String,
}

impl MemberRef {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

impl From<&User> for MemberRef {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            firstname: user.firstname.clone(),
            lastname: user.lastname.clone(),
        }
    }
}
