use crate::TaskStatus;

use std::str::FromStr;

#[test]
fn test_wire_string_contains_space() {
    assert_eq!(TaskStatus::InProgress.as_str(), "IN PROGRESS");
}

#[test]
fn test_labels() {
    assert_eq!(TaskStatus::Assessment.label(), "Assessment");
    assert_eq!(TaskStatus::InProgress.label(), "In Progress");
    assert_eq!(TaskStatus::Done.label(), "Done");
}

#[test]
fn test_from_str_accepts_underscore_form() {
    assert_eq!(
        TaskStatus::from_str("in_progress").unwrap(),
        TaskStatus::InProgress
    );
    assert_eq!(
        TaskStatus::from_str("IN PROGRESS").unwrap(),
        TaskStatus::InProgress
    );
}

#[test]
fn test_from_str_rejects_unknown() {
    assert!(TaskStatus::from_str("BLOCKED").is_err());
}

#[test]
fn test_serde_round_trip() {
    let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
    assert_eq!(json, r#""IN PROGRESS""#);

    let parsed: TaskStatus = serde_json::from_str(r#""DONE""#).unwrap();
    assert_eq!(parsed, TaskStatus::Done);
}
