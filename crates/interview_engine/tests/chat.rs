use pretty_assertions::assert_eq;

use interview_engine::{ApiSettings, FailureKind, InterviewApi, ReqwestApi};
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> ReqwestApi {
    let settings = ApiSettings {
        base_url: Url::parse(&server.uri()).expect("server url"),
        ..ApiSettings::default()
    };
    ReqwestApi::new(settings).expect("api")
}

#[tokio::test]
async fn chat_posts_message_with_keyword_context() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_json(serde_json::json!({
            "message": "What is a hash table?",
            "resumeKeywords": ["Python", "SQL"],
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "response": "A hash table is..." })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let keywords = vec!["Python".to_string(), "SQL".to_string()];

    let reply = api
        .send_chat("What is a hash table?", &keywords)
        .await
        .expect("chat ok");
    assert_eq!(reply, "A hash table is...");
}

#[tokio::test]
async fn chat_maps_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let api = api_for(&server);

    let err = api.send_chat("hello", &[]).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}

#[tokio::test]
async fn chat_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"unexpected\":1}"))
        .mount(&server)
        .await;

    let api = api_for(&server);

    let err = api.send_chat("hello", &[]).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedResponse);
}
