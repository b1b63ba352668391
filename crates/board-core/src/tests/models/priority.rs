use crate::Priority;

use std::str::FromStr;

#[test]
fn test_wire_strings() {
    assert_eq!(Priority::Low.as_str(), "LOW");
    assert_eq!(Priority::Medium.as_str(), "MEDIUM");
    assert_eq!(Priority::High.as_str(), "HIGH");
}

#[test]
fn test_labels() {
    assert_eq!(Priority::Low.label(), "Low");
    assert_eq!(Priority::Medium.label(), "Medium");
    assert_eq!(Priority::High.label(), "High");
}

#[test]
fn test_from_str_accepts_lowercase() {
    assert_eq!(Priority::from_str("low").unwrap(), Priority::Low);
    assert_eq!(Priority::from_str("HIGH").unwrap(), Priority::High);
}

#[test]
fn test_from_str_rejects_unknown() {
    assert!(Priority::from_str("urgent").is_err());
}

#[test]
fn test_serde_uses_wire_string() {
    let json = serde_json::to_string(&Priority::Medium).unwrap();
    assert_eq!(json, r#""MEDIUM""#);

    let parsed: Priority = serde_json::from_str(r#""LOW""#).unwrap();
    assert_eq!(parsed, Priority::Low);
}
