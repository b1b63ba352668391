use crate::{Priority, Task, TaskDraft, TaskStatus};

fn sample_task() -> Task {
    Task {
        id: "t1".to_string(),
        title: "Ship it".to_string(),
        description: "Final pass".to_string(),
        member_id: "u1".to_string(),
        priority: Priority::High,
        status: TaskStatus::InProgress,
        project_id: "p1".to_string(),
    }
}

#[test]
fn test_draft_copies_all_editable_fields() {
    let draft = sample_task().draft();

    assert_eq!(draft.title, "Ship it");
    assert_eq!(draft.description, "Final pass");
    assert_eq!(draft.member_id, "u1");
    assert_eq!(draft.priority, Some(Priority::High));
    assert_eq!(draft.status, Some(TaskStatus::InProgress));
    assert_eq!(draft.project_id, "p1");
}

#[test]
fn test_new_draft_is_blank_except_project() {
    let draft = TaskDraft::new("p1");

    assert_eq!(draft.project_id, "p1");
    assert!(draft.title.is_empty());
    assert!(draft.member_id.is_empty());
    assert!(draft.priority.is_none());
    assert!(draft.status.is_none());
}

#[test]
fn test_validate_requires_every_picked_field() {
    let mut draft = TaskDraft::new("p1");
    assert!(draft.validate().is_err());

    draft.title = "Ship it".to_string();
    assert!(draft.validate().is_err());

    draft.member_id = "u1".to_string();
    assert!(draft.validate().is_err());

    draft.priority = Some(Priority::Low);
    assert!(draft.validate().is_err());

    draft.status = Some(TaskStatus::Assessment);
    assert!(draft.validate().is_ok());
}

#[test]
fn test_deserialize_wire_shape() {
    let body = r#"{"_id":"t1","title":"Ship it","description":"",
        "member_id":"u1","priority":"LOW","status":"IN PROGRESS","project_id":"p1"}"#;
    let task: Task = serde_json::from_str(body).unwrap();

    assert_eq!(task.priority, Priority::Low);
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.member_id, "u1");
}

#[test]
fn test_serialized_draft_uses_wire_strings() {
    let task = sample_task();
    let body = serde_json::to_string(&task.draft()).unwrap();

    assert!(body.contains(r#""priority":"HIGH""#));
    assert!(body.contains(r#""status":"IN PROGRESS""#));
    assert!(body.contains(r#""project_id":"p1""#));
}
