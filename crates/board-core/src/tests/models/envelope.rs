use crate::{Envelope, User};

#[test]
fn test_success_envelope_with_list() {
    let body = r#"{"code":200,"list":[{"_id":"u1","firstname":"Ada","lastname":"Lovelace"}]}"#;
    let envelope: Envelope<User> = serde_json::from_str(body).unwrap();

    assert!(envelope.is_success());
    let list = envelope.into_list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, "u1");
    assert_eq!(list[0].firstname, "Ada");
}

#[test]
fn test_success_envelope_without_list() {
    let body = r#"{"code":200}"#;
    let envelope: Envelope<User> = serde_json::from_str(body).unwrap();

    assert!(envelope.is_success());
    assert!(envelope.message.is_none());
    assert!(envelope.into_list().is_empty());
}

#[test]
fn test_error_envelope_carries_message() {
    let body = r#"{"code":400,"message":"title already taken"}"#;
    let envelope: Envelope<User> = serde_json::from_str(body).unwrap();

    assert!(!envelope.is_success());
    assert_eq!(envelope.message.as_deref(), Some("title already taken"));
}

#[test]
fn test_non_success_code_other_than_400() {
    let body = r#"{"code":500,"message":"internal error"}"#;
    let envelope: Envelope<User> = serde_json::from_str(body).unwrap();

    assert!(!envelope.is_success());
}
