use board_core::{MemberRef, ProjectDraft};

use thiserror::Error;

/// Ceiling on simultaneous project member selections
pub const MAX_MEMBER_SELECTIONS: usize = 5;

/// Rejection raised when a derived selection exceeds the ceiling
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("You can select a maximum of {limit} members.")]
pub struct SelectionRejected {
    pub limit: usize,
}

/// Replace the draft's member set with a freshly derived selection.
///
/// The full selection is re-derived on every call - nothing accumulates
/// between calls. Over the ceiling, the draft is left untouched and the
/// rejection names the limit.
pub fn select_members(
    draft: &mut ProjectDraft,
    selection: Vec<MemberRef>,
) -> Result<(), SelectionRejected> {
    if selection.len() > MAX_MEMBER_SELECTIONS {
        return Err(SelectionRejected {
            limit: MAX_MEMBER_SELECTIONS,
        });
    }

    draft.member_id = selection;
    Ok(())
}
