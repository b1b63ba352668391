use crate::{MemberRef, Project, User};

fn member(id: &str, first: &str, last: &str) -> MemberRef {
    MemberRef {
        id: id.to_string(),
        firstname: first.to_string(),
        lastname: last.to_string(),
    }
}

#[test]
fn test_draft_copies_all_editable_fields() {
    let project = Project {
        id: "p1".to_string(),
        title: "Website".to_string(),
        description: "Relaunch".to_string(),
        member_id: vec![member("u1", "Ada", "Lovelace"), member("u2", "Alan", "Turing")],
    };

    let draft = project.draft();

    assert_eq!(draft.title, "Website");
    assert_eq!(draft.description, "Relaunch");
    assert_eq!(draft.member_id, project.member_id);
}

#[test]
fn test_draft_member_order_preserved() {
    let members = vec![
        member("a", "A", "A"),
        member("b", "B", "B"),
        member("c", "C", "C"),
    ];
    let project = Project {
        id: "p1".to_string(),
        title: "T".to_string(),
        description: String::new(),
        member_id: members.clone(),
    };

    let draft = project.draft();
    let ids: Vec<&str> = draft.member_id.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_validate_requires_title() {
    let mut draft = Project {
        id: "p1".to_string(),
        title: "  ".to_string(),
        description: String::new(),
        member_id: vec![],
    }
    .draft();

    assert!(draft.validate().is_err());

    draft.title = "Website".to_string();
    assert!(draft.validate().is_ok());
}

#[test]
fn test_member_ref_from_user() {
    let user = User {
        id: "u1".to_string(),
        firstname: "Ada".to_string(),
        lastname: "Lovelace".to_string(),
    };

    let member = MemberRef::from(&user);
    assert_eq!(member.id, "u1");
    assert_eq!(member.full_name(), "Ada Lovelace");
}

#[test]
fn test_deserialize_wire_shape() {
    let body = r#"{"_id":"p1","title":"Website","description":"","member_id":[
        {"_id":"u1","firstname":"Ada","lastname":"Lovelace"}
    ]}"#;
    let project: Project = serde_json::from_str(body).unwrap();

    assert_eq!(project.id, "p1");
    assert_eq!(project.member_id.len(), 1);
    assert_eq!(project.member_id[0].lastname, "Lovelace");
}

#[test]
fn test_deserialize_tolerates_missing_optional_fields() {
    let body = r#"{"_id":"p1","title":"Website"}"#;
    let project: Project = serde_json::from_str(body).unwrap();

    assert!(project.description.is_empty());
    assert!(project.member_id.is_empty());
}
