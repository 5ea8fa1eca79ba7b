use super::*;

#[test]
fn todo_reads_camel_case_fields() {
    let todo: Todo = serde_json::from_value(serde_json::json!({
        "id": "t1",
        "title": "Buy milk",
        "completed": false,
        "createdAt": "2024-03-05T10:15:00Z"
    }))
    .unwrap();
    assert_eq!(todo.id, "t1");
    assert_eq!(todo.title, "Buy milk");
    assert!(!todo.completed);
    assert_eq!(todo.created_at.as_deref(), Some("2024-03-05T10:15:00Z"));
}

#[test]
fn todo_accepts_legacy_underscore_id() {
    let todo: Todo = serde_json::from_value(serde_json::json!({ "_id": "abc", "title": "x" })).unwrap();
    assert_eq!(todo.id, "abc");
    assert!(!todo.completed);
    assert!(todo.created_at.is_none());
}

#[test]
fn todo_without_id_is_rejected() {
    let parsed = serde_json::from_value::<Todo>(serde_json::json!({ "title": "x" }));
    assert!(parsed.is_err());
}

#[test]
fn patch_serializes_only_present_fields() {
    assert_eq!(serde_json::to_value(TodoPatch::completed(true)).unwrap(), serde_json::json!({ "completed": true }));
    assert_eq!(serde_json::to_value(TodoPatch::title("Call mom")).unwrap(), serde_json::json!({ "title": "Call mom" }));
}

#[test]
fn user_keeps_unknown_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "_id": "u1",
        "name": "Ada",
        "email": "ada@example.com",
        "role": "admin"
    }))
    .unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.name, "Ada");
    assert_eq!(user.extra.get("role"), Some(&serde_json::json!("admin")));

    let back = serde_json::to_value(&user).unwrap();
    assert_eq!(back["role"], "admin");
    assert_eq!(back["id"], "u1");
}

#[test]
fn user_tolerates_sparse_shapes() {
    let user: User = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(user, User::default());
}

#[test]
fn list_envelope_wraps_todos() {
    let list: TodoList =
        serde_json::from_value(serde_json::json!({ "todos": [{ "_id": "a", "title": "A" }] })).unwrap();
    assert_eq!(list.todos.len(), 1);
    assert_eq!(list.todos[0].id, "a");

    assert!(serde_json::from_value::<TodoList>(serde_json::json!([{ "_id": "a", "title": "A" }])).is_err());
}

#[test]
fn item_envelope_wraps_one_todo() {
    let env: TodoEnvelope =
        serde_json::from_value(serde_json::json!({ "todo": { "_id": "a", "title": "A", "completed": true } })).unwrap();
    assert_eq!(env.todo.id, "a");
    assert!(env.todo.completed);
}
