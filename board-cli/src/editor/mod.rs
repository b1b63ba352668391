//! Page/editor session layer.
//!
//! One page struct per entity, each owning its fetched list state, a
//! single editor state, and the create/update drafts. This replaces the
//! original frontend's modal flags and whole-page reloads with explicit
//! state and an explicit refresh.

mod editor_state;
mod error;
mod member_picker;
mod outcome;
mod projects;
mod tasks;
mod users;

pub use editor_state::EditorState;
pub use error::EditorError;
pub use member_picker::{MAX_MEMBER_SELECTIONS, SelectionRejected, select_members};
pub use outcome::Outcome;
pub use projects::ProjectsPage;
pub use tasks::{MEMBER_PLACEHOLDER, Roster, SelectOption, TasksPage};
pub use users::UsersPage;

/// Which of a page's two drafts an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftTarget {
    Create,
    Update,
}
