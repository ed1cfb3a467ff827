use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use serde_json::json;
use slackbot_model::{model, FieldKind, FieldSpec, Model, Schema, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Private,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum When {
    At(Timestamp),
    Phrase(String),
}

model! {
    /// Nested model used by the fixtures below.
    pub struct Topic {
        value: Str as String,
        creator: Str as String,
        last_set: Timestamp as Timestamp,
    }
}

model! {
    /// Closed fixture schema exercising every field kind.
    pub struct Room {
        @read_only id: Str as String,
        name: Str as String,
        visibility: Enum as Visibility,
        member_count: Int as i64 = 0,
        archived: Bool as bool = false,
        created: Timestamp as Timestamp,
        topic: Model as Topic,
        members: List as Vec<String>,
        when: Multi as When,
    }
}

model! {
    /// Open fixture schema.
    pub struct Echo: open {
        error: Str as String,
    }
}

// ── Schema tables ───────────────────────────────────────────────

#[test]
fn schema_lists_declared_fields_in_order() {
    let names: Vec<&str> = Room::SCHEMA.fields.iter().map(|f| f.name).collect();
    assert_eq!(
        names,
        vec![
            "id",
            "name",
            "visibility",
            "member_count",
            "archived",
            "created",
            "topic",
            "members",
            "when"
        ]
    );
    assert!(!Room::SCHEMA.open);
    assert!(Echo::SCHEMA.open);
}

#[test]
fn schema_field_lookup_carries_flags() {
    let id = Room::SCHEMA.field("id").unwrap();
    assert!(id.read_only);
    assert_eq!(id.kind, FieldKind::Str);

    let when = Room::SCHEMA.field("when").unwrap();
    assert_eq!(when.kind, FieldKind::Multi);

    assert!(Room::SCHEMA.field("no_such_field").is_none());
    assert!(Room::SCHEMA.has_field("topic"));
}

#[test]
fn schema_lookup_prefers_later_declaration_on_collision() {
    // Field lists produced by concatenating several sources resolve name
    // collisions in favor of the most-derived entry.
    static COMPOSED: Schema = Schema {
        name: "Composed",
        fields: &[
            FieldSpec::new("x", FieldKind::Str),
            FieldSpec::new("x", FieldKind::Int),
        ],
        open: false,
    };
    assert_eq!(COMPOSED.field("x").unwrap().kind, FieldKind::Int);
}

// ── Deserialization ─────────────────────────────────────────────

#[test]
fn deserialize_sets_present_fields_and_leaves_others_unset() {
    let room = Room::from_raw(json!({
        "id": "R1",
        "name": "general",
        "created": "1405894322.002768"
    }))
    .unwrap();

    assert_eq!(room.id.as_deref(), Some("R1"));
    assert_eq!(room.name.as_deref(), Some("general"));
    assert_eq!(room.created, Some(Timestamp::from_parts(1_405_894_322, 2_768)));
    // Absent fields stay unset; defaults are not substituted here.
    assert_eq!(room.member_count, None);
    assert_eq!(room.archived, None);
}

#[test]
fn deserialize_recurses_into_nested_models_and_arrays() {
    let room = Room::from_raw(json!({
        "topic": {"value": "release planning", "creator": "U1"},
        "members": ["U1", "U2"]
    }))
    .unwrap();

    let topic = room.topic.unwrap();
    assert_eq!(topic.value.as_deref(), Some("release planning"));
    assert_eq!(room.members, Some(vec!["U1".to_string(), "U2".to_string()]));
}

#[test]
fn deserialize_ignores_unknown_keys_on_closed_schema() {
    let room = Room::from_raw(json!({"name": "general", "surprise": 42})).unwrap();
    assert_eq!(room.name.as_deref(), Some("general"));
}

#[test]
fn deserialize_retains_unknown_keys_on_open_schema() {
    let echo = Echo::from_raw(json!({"error": "oops", "foo": "bar", "n": 7})).unwrap();
    assert_eq!(echo.error.as_deref(), Some("oops"));
    assert_eq!(echo.extra.get("foo"), Some(&json!("bar")));
    assert_eq!(echo.extra.get("n"), Some(&json!(7)));
    assert_eq!(echo.extra.len(), 2);
}

#[test]
fn deserialize_rejects_type_mismatch_naming_the_schema() {
    let err = Room::from_raw(json!({"member_count": "lots"})).unwrap_err();
    assert!(err.to_string().contains("Room"), "got: {err}");
}

#[test]
fn deserialize_rejects_unknown_enum_string() {
    let err = Room::from_raw(json!({"visibility": "secret"})).unwrap_err();
    assert!(err.to_string().contains("Room"), "got: {err}");

    let room = Room::from_raw(json!({"visibility": "private"})).unwrap();
    assert_eq!(room.visibility, Some(Visibility::Private));
}

// ── Multi-type fields ───────────────────────────────────────────

#[test]
fn multi_type_field_accepts_first_matching_candidate() {
    let as_ts = Room::from_raw(json!({"when": "1405894322.000001"})).unwrap();
    assert_eq!(
        as_ts.when,
        Some(When::At(Timestamp::from_parts(1_405_894_322, 1)))
    );

    let as_phrase = Room::from_raw(json!({"when": "every thursday"})).unwrap();
    assert_eq!(as_phrase.when, Some(When::Phrase("every thursday".into())));
}

#[test]
fn multi_type_field_fails_when_no_candidate_matches() {
    let err = Room::from_raw(json!({"when": {"nested": true}})).unwrap_err();
    assert!(err.to_string().contains("Room"), "got: {err}");
}

// ── Serialization ───────────────────────────────────────────────

#[test]
fn serialize_emits_only_assigned_fields() {
    let mut room = Room::new();
    room.name = Some("general".into());
    room.created = Some(Timestamp::from_secs(1_500_000_000));

    let raw = room.to_raw().unwrap();
    assert_eq!(
        raw,
        json!({"name": "general", "created": "1500000000.000000"})
    );
}

#[test]
fn serialize_reduces_enums_to_wire_strings() {
    let mut room = Room::new();
    room.visibility = Some(Visibility::Public);
    assert_eq!(room.to_raw().unwrap(), json!({"visibility": "public"}));
}

#[test]
fn serialize_round_trips_assigned_fields() {
    let mut room = Room::new();
    room.id = Some("R1".into());
    room.member_count = Some(12);
    room.members = Some(vec!["U1".into()]);
    room.topic = Some(Topic {
        value: Some("planning".into()),
        ..Topic::new()
    });

    let back = Room::from_raw(room.to_raw().unwrap()).unwrap();
    assert_eq!(back, room);
}

#[test]
fn open_schema_round_trips_extra_keys() {
    let mut echo = Echo::new();
    echo.extra.insert("foo", "bar");

    let raw = echo.to_raw().unwrap();
    assert_eq!(raw, json!({"foo": "bar"}));
    assert_eq!(Echo::from_raw(raw).unwrap(), echo);
}

// ── Defaults and equality ───────────────────────────────────────

#[test]
fn default_accessor_substitutes_declared_default_when_unset() {
    let room = Room::new();
    assert_eq!(room.member_count(), 0);
    assert!(!room.archived());

    let mut assigned = Room::new();
    assigned.member_count = Some(7);
    assert_eq!(assigned.member_count(), 7);
}

#[test]
fn equality_holds_over_assigned_or_default_values() {
    let unset = Room::new();
    let mut explicit = Room::new();
    explicit.member_count = Some(0);
    explicit.archived = Some(false);

    // Explicitly assigning the declared default compares equal to unset.
    assert_eq!(unset, explicit);

    let mut different = Room::new();
    different.member_count = Some(1);
    assert_ne!(unset, different);
}

#[test]
fn equality_distinguishes_assigned_fields_without_defaults() {
    let mut a = Room::new();
    a.name = Some("general".into());
    let b = Room::new();
    assert_ne!(a, b);
}
