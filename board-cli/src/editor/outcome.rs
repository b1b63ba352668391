use board_core::CoreError;

/// Result triage for a mutation, mirroring the three paths every submit
/// takes: refresh on success, surface the message on a rejected envelope,
/// log on transport failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Accepted; the page has been refreshed
    Saved,
    /// Rejected; carries the message to surface verbatim
    Rejected(String),
    /// Transport or decode failure; already logged, nothing to surface
    Failed,
}

impl Outcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }

    /// Alert path for a required-field failure caught before any request
    pub(crate) fn from_validation(err: CoreError) -> Self {
        match err {
            CoreError::Validation { message, .. } => Self::Rejected(message),
            other => Self::Rejected(other.to_string()),
        }
    }
}
