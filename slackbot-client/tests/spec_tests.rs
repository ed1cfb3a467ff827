use pretty_assertions::assert_eq;

use slackbot_client::spec::{HttpMethod, OPERATIONS, operation};

#[test]
fn table_is_sorted_by_name() {
    for pair in OPERATIONS.windows(2) {
        assert!(
            pair[0].name < pair[1].name,
            "{} is not before {}",
            pair[0].name,
            pair[1].name
        );
    }
}

#[test]
fn paths_mirror_operation_names() {
    for op in OPERATIONS {
        assert_eq!(op.path, format!("/{}", op.name));
    }
}

#[test]
fn lookup_finds_known_operations() {
    let op = operation("chat.postMessage").unwrap();
    assert_eq!(op.name, "chat.postMessage");
    assert_eq!(op.method, HttpMethod::Post);
    assert_eq!(op.path, "/chat.postMessage");

    let op = operation("channels.history").unwrap();
    assert_eq!(op.method, HttpMethod::Get);
}

#[test]
fn lookup_handles_boundaries() {
    assert!(operation("api.test").is_some());
    assert!(operation("rtm.start").is_some());
}

#[test]
fn lookup_rejects_unknown_names() {
    assert!(operation("chat.postmessage").is_none());
    assert!(operation("stars.add").is_none());
    assert!(operation("").is_none());
}

#[test]
fn nested_namespaces_use_dotted_names() {
    assert!(operation("files.comments.add").is_some());
    assert!(operation("files.comments.edit").is_some());
    assert!(operation("files.comments.delete").is_some());
}
