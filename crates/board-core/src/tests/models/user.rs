use crate::{User, UserDraft};

#[test]
fn test_draft_copies_name_fields() {
    let user = User {
        id: "u1".to_string(),
        firstname: "Ada".to_string(),
        lastname: "Lovelace".to_string(),
    };

    let draft = user.draft();
    assert_eq!(draft.firstname, "Ada");
    assert_eq!(draft.lastname, "Lovelace");
}

#[test]
fn test_validate_requires_both_names() {
    let mut draft = UserDraft::default();
    assert!(draft.validate().is_err());

    draft.firstname = "Ada".to_string();
    assert!(draft.validate().is_err());

    draft.lastname = "Lovelace".to_string();
    assert!(draft.validate().is_ok());
}

#[test]
fn test_serialized_draft_has_no_id() {
    let draft = UserDraft {
        firstname: "Ada".to_string(),
        lastname: "Lovelace".to_string(),
    };
    let body = serde_json::to_string(&draft).unwrap();

    assert_eq!(body, r#"{"firstname":"Ada","lastname":"Lovelace"}"#);
}

#[test]
fn test_deserialize_renames_underscore_id() {
    let body = r#"{"_id":"u1","firstname":"Ada","lastname":"Lovelace"}"#;
    let user: User = serde_json::from_str(body).unwrap();

    assert_eq!(user.id, "u1");
    assert_eq!(user.full_name(), "Ada Lovelace");
}
