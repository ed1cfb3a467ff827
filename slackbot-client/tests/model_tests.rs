use pretty_assertions::assert_eq;
use serde_json::json;

use slackbot_client::models::{
    FileType, ItemType, Message, MessageItem, MessageSubtype, TextParse,
};
use slackbot_client::modules::{
    ChannelsHistoryRequest, GroupsCreateRequest, Pin, PinType, ReminderTime, RemindersAddRequest,
};
use slackbot_model::{Model, Timestamp, args};

#[test]
fn message_decodes_from_realistic_payload() {
    let message = Message::from_raw(json!({
        "type": "message",
        "subtype": "file_share",
        "user": "U024BE7LH",
        "text": "uploaded a file",
        "ts": "1503435956.000247",
        "upload": true,
        "file": {
            "id": "F1234",
            "name": "plan.md",
            "filetype": "markdown",
            "mode": "hosted",
            "size": 1024
        },
        "pinned_to": ["C024BE91L"]
    }))
    .unwrap();

    assert_eq!(message.kind, Some(ItemType::Message));
    assert_eq!(message.subtype, Some(MessageSubtype::FileShare));
    let file = message.file.unwrap();
    assert_eq!(file.filetype, Some(FileType::Markdown));
    assert_eq!(file.size, Some(1024));
    assert_eq!(message.pinned_to.unwrap(), vec!["C024BE91L".to_string()]);
}

#[test]
fn nested_message_payloads_stay_typed() {
    let message = Message::from_raw(json!({
        "type": "message",
        "subtype": "message_changed",
        "channel": "C024BE91L",
        "ts": "1503435957.000001",
        "message": {
            "type": "message",
            "user": "U024BE7LH",
            "text": "edited text",
            "ts": "1503435956.000247",
            "edited": {"user": "U024BE7LH", "ts": "1503435957.000001"}
        }
    }))
    .unwrap();

    let inner = message.message.unwrap();
    assert_eq!(inner.text.as_deref(), Some("edited text"));
    assert_eq!(inner.edited.unwrap().user.as_deref(), Some("U024BE7LH"));
}

#[test]
fn message_item_takes_the_first_matching_shape() {
    // Every declared field is optional, so the message shape matches any
    // object and always wins.
    let item: MessageItem = serde_json::from_value(json!({"text": "pinned"})).unwrap();
    assert!(matches!(item, MessageItem::Message(_)));
}

#[test]
fn pin_kind_rides_the_wire_as_type() {
    let pin = Pin::from_raw(json!({
        "type": "file",
        "channel": "C024BE91L",
        "file": {"id": "F1234"},
        "created": 1508881078,
        "created_by": "U024BE7LH"
    }))
    .unwrap();

    assert_eq!(pin.kind, Some(PinType::File));
    assert_eq!(pin.file.as_ref().unwrap().id.as_deref(), Some("F1234"));

    let raw = pin.to_raw().unwrap();
    assert_eq!(raw.get("type"), Some(&json!("file")));
    assert!(raw.get("kind").is_none());
}

#[test]
fn enum_values_use_wire_spelling() {
    assert_eq!(serde_json::to_value(TextParse::None).unwrap(), json!("none"));
    assert_eq!(serde_json::to_value(FileType::Csharp).unwrap(), json!("csharp"));
    let parsed: FileType = serde_json::from_value(json!("python")).unwrap();
    assert_eq!(parsed, FileType::Python);
}

#[test]
fn history_request_substitutes_declared_defaults() {
    let request: ChannelsHistoryRequest = args! { channel: "C024BE91L" }.build().unwrap();
    assert_eq!(request.count(), 100);
    assert_eq!(request.oldest(), Timestamp::EPOCH);
    assert!(!request.inclusive());
    // Defaults are substituted on read, never serialized.
    let raw = request.to_raw().unwrap();
    assert!(raw.get("count").is_none());
}

#[test]
fn group_requests_share_the_channel_schemas() {
    let request: GroupsCreateRequest = args! { name: "secret-plans" }.build().unwrap();
    assert_eq!(request.name.as_deref(), Some("secret-plans"));
}

#[test]
fn reminder_time_accepts_timestamp_or_phrase() {
    let request = RemindersAddRequest::from_raw(json!({
        "text": "standup",
        "time": "every Thursday"
    }))
    .unwrap();
    assert_eq!(
        request.time,
        Some(ReminderTime::Phrase("every Thursday".to_string()))
    );

    let request = RemindersAddRequest::from_raw(json!({
        "text": "standup",
        "time": 1508881078
    }))
    .unwrap();
    assert_eq!(
        request.time,
        Some(ReminderTime::At(Timestamp::from_secs(1_508_881_078)))
    );
}
