use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use slackbot_client::modules::{ChannelsHistoryRequest, ConversationOps};
use slackbot_client::{Bot, BotConfig, ClientError};
use slackbot_model::{ModelError, args};

fn bot_for(server: &MockServer) -> Bot {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    Bot::with_config(BotConfig::new("xoxb-test").base_url(server.uri())).unwrap()
}

#[tokio::test]
async fn history_decodes_typed_messages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/channels.history"))
        .and(query_param("channel", "C024BE91L"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "latest": "1503435956.000247",
            "messages": [
                {
                    "type": "message",
                    "user": "U024BE7LH",
                    "text": "hello there",
                    "ts": "1503435956.000247",
                    "reactions": [{"name": "thumbsup", "count": 2, "users": ["U1", "U2"]}]
                },
                {
                    "type": "message",
                    "subtype": "channel_join",
                    "user": "U024BE7LH",
                    "text": "<@U024BE7LH|bob> has joined the channel",
                    "ts": "1503435957.000001"
                }
            ],
            "has_more": false
        })))
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let resp = bot
        .channels
        .history(args! { channel: "C024BE91L" })
        .await
        .unwrap();
    let messages = resp.messages.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].text.as_deref(), Some("hello there"));
    assert_eq!(messages[0].ts.unwrap().secs(), 1_503_435_956);
    let reactions = messages[1].reactions.clone();
    assert!(reactions.is_none());
}

#[tokio::test]
async fn nested_comments_namespace_uses_dotted_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/files.comments.add"))
        .and(query_param("file", "F1234"))
        .and(query_param("comment", "nice one"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "comment": {"id": "Fc1234", "comment": "nice one", "user": "U1"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let resp = bot
        .files
        .comments
        .add(args! { file: "F1234", comment: "nice one" })
        .await
        .unwrap();
    assert_eq!(resp.comment.unwrap().id.as_deref(), Some("Fc1234"));
}

#[tokio::test]
async fn unknown_parameter_fails_without_calling_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(0)
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let err = bot
        .chat
        .post_message(args! { channel: "C1", shout: true })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ClientError::Model(ModelError::UnknownParameter { name, .. }) if name == "shout"
    ));
}

#[tokio::test]
async fn ack_only_operations_report_the_ok_flag() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/pins.add"))
        .and(query_param("channel", "C1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let acked = bot.pins.add(args! { channel: "C1" }).await.unwrap();
    assert!(acked);
}

#[tokio::test]
async fn ack_only_operations_surface_ok_false_as_false() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/pins.add"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ok": false, "error": "already_pinned"})),
        )
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let acked = bot.pins.add(args! { channel: "C1" }).await.unwrap();
    assert!(!acked);
}

#[tokio::test]
async fn shared_conversation_ops_dispatch_under_each_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/groups.setPurpose"))
        .and(query_param("channel", "G1"))
        .and(query_param("purpose", "planning"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"ok": true, "purpose": "planning"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/channels.archive"))
        .and(query_param("channel", "C1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let resp = bot
        .groups
        .set_purpose(args! { channel: "G1", purpose: "planning" })
        .await
        .unwrap();
    assert_eq!(resp.purpose.as_deref(), Some("planning"));

    assert!(bot.channels.archive(args! { channel: "C1" }).await.unwrap());
}

#[tokio::test]
async fn auto_list_wraps_scalar_arguments() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/mpim.open"))
        .and(query_param("users", "U1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let resp = bot.mpim.open(args! { users: "U1" }).await.unwrap();
    assert_eq!(resp.ok, Some(true));
}

#[tokio::test]
async fn open_request_schema_passes_extra_arguments_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api.test"))
        .and(query_param("anything", "goes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "args": {"anything": "goes"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let resp = bot.api.test(args! { anything: "goes" }).await.unwrap();
    assert_eq!(resp.args.unwrap().get("anything"), Some(&json!("goes")));
}

#[tokio::test]
async fn client_owns_the_only_strong_core_handle() {
    let server = MockServer::start().await;
    let bot = bot_for(&server);
    // Namespaces hold weak handles, so the client's own handle is the
    // only strong one.
    assert_eq!(bot.core_handles(), 1);
}

#[tokio::test]
async fn dropping_the_client_invalidates_outstanding_namespaces() {
    let server = MockServer::start().await;
    let bot = bot_for(&server);
    let ns = bot.channels.namespace().clone();
    drop(bot);

    let mut request = ChannelsHistoryRequest::new();
    request.channel = Some("C1".to_string());
    let err = ns.call_raw("history", request).await.unwrap_err();
    assert!(matches!(err, ClientError::ClientGone));
}

#[tokio::test]
async fn rtm_start_decodes_the_self_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rtm.start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "url": "wss://example.invalid/websocket/1",
            "team": {"id": "T1", "name": "acme", "prefs": {"who_can_kick": "admins"}},
            "self": {"id": "U0", "name": "robo"},
            "users": [{"id": "U1", "name": "ana", "is_admin": true}],
            "channels": [],
            "bots": [{"id": "B1", "anything": 3}]
        })))
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let resp = bot.rtm.start(args! {}).await.unwrap();
    assert_eq!(resp.self_info.unwrap().name.as_deref(), Some("robo"));
    let users = resp.users.unwrap();
    assert!(users[0].is_admin.unwrap());
    assert_eq!(resp.bots.unwrap()[0].get("anything"), Some(&json!(3)));
}
