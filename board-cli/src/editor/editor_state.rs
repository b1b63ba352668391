/// Editor visibility for a page.
///
/// A single tagged state replaces the original's two independent modal
/// flags, so the create and update forms cannot both be open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Closed,
    Creating,
    /// Update form open for the row with this id
    Editing(String),
}

impl EditorState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Id of the row being edited, if the update form is open
    pub fn editing_id(&self) -> Option<&str> {
        match self {
            Self::Editing(id) => Some(id),
            _ => None,
        }
    }
}
