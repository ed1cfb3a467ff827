use pretty_assertions::assert_eq;
use serde_json::json;
use slackbot_model::{args, model, Args, IntoRequest, ModelError};

model! {
    /// Closed request fixture.
    pub struct PostRequest {
        @read_only id: Str as String,
        channel: Str as String,
        text: Str as String,
        count: Int as i64 = 100,
        @auto_list recipients: List as Vec<String>,
    }
}

model! {
    /// Open request fixture (echo-test style).
    pub struct ProbeRequest: open {
        error: Str as String,
    }
}

// ── Building requests from keyword arguments ────────────────────

#[test]
fn build_constructs_request_from_named_values() {
    let req: PostRequest = args! { channel: "C1", text: "hello", count: 5 }
        .build()
        .unwrap();

    assert_eq!(req.channel.as_deref(), Some("C1"));
    assert_eq!(req.text.as_deref(), Some("hello"));
    assert_eq!(req.count, Some(5));
    assert_eq!(req.recipients, None);
}

#[test]
fn build_rejects_unknown_parameter() {
    let err = args! { channel: "C1", frobnicate: true }
        .build::<PostRequest>()
        .unwrap_err();

    match err {
        ModelError::UnknownParameter { schema, name } => {
            assert_eq!(schema, "PostRequest");
            assert_eq!(name, "frobnicate");
        }
        other => panic!("expected UnknownParameter, got {other:?}"),
    }
}

#[test]
fn build_rejects_read_only_parameter() {
    let err = args! { id: "R1" }.build::<PostRequest>().unwrap_err();

    match err {
        ModelError::ReadOnlyParameter { schema, name } => {
            assert_eq!(schema, "PostRequest");
            assert_eq!(name, "id");
        }
        other => panic!("expected ReadOnlyParameter, got {other:?}"),
    }
}

#[test]
fn read_only_field_still_deserializes_from_server_payloads() {
    use slackbot_model::Model;

    let req = PostRequest::from_raw(json!({"id": "R1"})).unwrap();
    assert_eq!(req.id.as_deref(), Some("R1"));
}

#[test]
fn build_wraps_scalar_into_auto_list() {
    let req: PostRequest = args! { recipients: "U1" }.build().unwrap();
    assert_eq!(req.recipients, Some(vec!["U1".to_string()]));

    let req: PostRequest = args! { recipients: vec!["U1", "U2"] }.build().unwrap();
    assert_eq!(
        req.recipients,
        Some(vec!["U1".to_string(), "U2".to_string()])
    );
}

#[test]
fn build_passes_unknown_keys_through_on_open_schema() {
    let req: ProbeRequest = args! { error: "forced", anything: 42 }.build().unwrap();
    assert_eq!(req.error.as_deref(), Some("forced"));
    assert_eq!(req.extra.get("anything"), Some(&json!(42)));
}

#[test]
fn build_reports_type_mismatch_as_decode_error() {
    let err = args! { count: "many" }.build::<PostRequest>().unwrap_err();
    assert!(matches!(err, ModelError::Decode { schema: "PostRequest", .. }));
}

// ── IntoRequest adapter ─────────────────────────────────────────

#[test]
fn into_request_forwards_prebuilt_model_unchanged() {
    let mut req = PostRequest::new();
    req.channel = Some("C9".into());

    let forwarded: PostRequest = req.clone().into_request().unwrap();
    assert_eq!(forwarded, req);
}

#[test]
fn into_request_builds_from_args() {
    let req: PostRequest = IntoRequest::into_request(args! { channel: "C9" }).unwrap();
    assert_eq!(req.channel.as_deref(), Some("C9"));
}

#[test]
fn later_args_override_earlier_ones() {
    let a = Args::new().arg("channel", "C1").arg("channel", "C2");
    let req: PostRequest = a.build().unwrap();
    assert_eq!(req.channel.as_deref(), Some("C2"));
}

#[test]
fn empty_args_build_empty_request() {
    let req: PostRequest = Args::new().build().unwrap();
    assert_eq!(req, PostRequest::new());
    assert!(Args::new().is_empty());
}
