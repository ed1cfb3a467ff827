use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use slackbot_client::{Bot, BotConfig, ClientError, Transport};
use slackbot_model::args;

fn bot_for(server: &MockServer) -> Bot {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    Bot::with_config(BotConfig::new("xoxb-test").base_url(server.uri())).unwrap()
}

#[tokio::test]
async fn token_is_injected_as_query_param() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api.test"))
        .and(query_param("token", "xoxb-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let resp = bot.api.test(args! {}).await.unwrap();
    assert_eq!(resp.ok, Some(true));
}

#[tokio::test]
async fn payload_fields_become_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api.test"))
        .and(query_param("foo", "bar"))
        .and(query_param("flag", "true"))
        .and(query_param("count", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "args": {"foo": "bar", "flag": "true", "count": "7"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let resp = bot
        .api
        .test(args! { foo: "bar", flag: true, count: 7 })
        .await
        .unwrap();
    let echoed = resp.args.unwrap();
    assert_eq!(echoed.get("foo"), Some(&json!("bar")));
}

#[tokio::test]
async fn string_lists_are_comma_joined() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dnd.teamInfo"))
        .and(query_param("users", "U1,U2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "users": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let resp = bot
        .dnd
        .team_info(args! { users: vec!["U1", "U2"] })
        .await
        .unwrap();
    assert_eq!(resp.ok, Some(true));
}

#[tokio::test]
async fn http_error_status_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth.test"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "internal_error"})),
        )
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let err = bot.auth.test(args! {}).await.unwrap_err();
    match err {
        ClientError::Api { status, error } => {
            assert_eq!(status, 500);
            assert_eq!(error, "internal_error");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn not_ok_body_is_data_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth.test"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"ok": false, "error": "invalid_auth"})),
        )
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let resp = bot.auth.test(args! {}).await.unwrap();
    assert_eq!(resp.ok, Some(false));
}

#[tokio::test]
async fn unknown_operation_fails_before_any_request() {
    let server = MockServer::start().await;
    let transport = Transport::new("test-agent", server.uri(), Vec::new()).unwrap();
    let err = transport
        .call("stars.add", &json!({"channel": "C1"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::UnknownOperation(name) if name == "stars.add"));
}

#[tokio::test]
async fn mutating_operations_use_post() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat.postMessage"))
        .and(query_param("channel", "C024BE91L"))
        .and(query_param("text", "hello"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "ts": "1503435956.000247",
            "channel": "C024BE91L"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let bot = bot_for(&server);
    let resp = bot
        .chat
        .post_message(args! { channel: "C024BE91L", text: "hello" })
        .await
        .unwrap();
    assert_eq!(resp.ts.unwrap().to_string(), "1503435956.000247");
}
