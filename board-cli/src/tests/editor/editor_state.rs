use crate::editor::EditorState;

#[test]
fn test_default_is_closed() {
    let state = EditorState::default();
    assert_eq!(state, EditorState::Closed);
    assert!(!state.is_open());
}

#[test]
fn test_creating_is_open_without_row() {
    let state = EditorState::Creating;
    assert!(state.is_open());
    assert!(state.editing_id().is_none());
}

#[test]
fn test_editing_carries_row_id() {
    let state = EditorState::Editing("p1".to_string());
    assert!(state.is_open());
    assert_eq!(state.editing_id(), Some("p1"));
}
