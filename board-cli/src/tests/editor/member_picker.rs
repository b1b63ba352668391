use crate::editor::{MAX_MEMBER_SELECTIONS, select_members};

use board_core::{MemberRef, ProjectDraft};

fn member(id: &str) -> MemberRef {
    MemberRef {
        id: id.to_string(),
        firstname: format!("First{id}"),
        lastname: format!("Last{id}"),
    }
}

fn members(n: usize) -> Vec<MemberRef> {
    (0..n).map(|i| member(&format!("u{i}"))).collect()
}

#[test]
fn test_selection_over_limit_rejected_and_draft_unchanged() {
    let mut draft = ProjectDraft {
        member_id: members(2),
        ..ProjectDraft::default()
    };
    let before = draft.clone();

    let result = select_members(&mut draft, members(6));

    let err = result.unwrap_err();
    assert!(err.to_string().contains("5"));
    assert_eq!(draft, before);
}

#[test]
fn test_selection_at_limit_replaces_wholesale() {
    let mut draft = ProjectDraft {
        member_id: members(1),
        ..ProjectDraft::default()
    };

    let picked = members(MAX_MEMBER_SELECTIONS);
    select_members(&mut draft, picked.clone()).unwrap();

    assert_eq!(draft.member_id, picked);
    assert_eq!(draft.member_id[0].firstname, "Firstu0");
    assert_eq!(draft.member_id[4].lastname, "Lastu4");
}

#[test]
fn test_selection_never_accumulates() {
    let mut draft = ProjectDraft::default();

    select_members(&mut draft, members(3)).unwrap();
    select_members(&mut draft, vec![member("solo")]).unwrap();

    // Each call re-derives the full selection; earlier picks are gone
    assert_eq!(draft.member_id.len(), 1);
    assert_eq!(draft.member_id[0].id, "solo");
}

#[test]
fn test_empty_selection_clears_members() {
    let mut draft = ProjectDraft {
        member_id: members(3),
        ..ProjectDraft::default()
    };

    select_members(&mut draft, Vec::new()).unwrap();

    assert!(draft.member_id.is_empty());
}
