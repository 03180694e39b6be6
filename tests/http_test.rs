mod common;

use common::http;
use kkbox_sdk::{
    KkboxError,
    kkbox::{HttpClient, http::Query},
    types::Territory,
};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param, query_param_is_missing},
};

#[test]
fn test_query_skips_unset_values() {
    let query = Query::for_territory(Territory::HK).page(Some(10), None);
    assert_eq!(
        query.as_slice(),
        &[("territory", "HK".to_string()), ("limit", "10".to_string())]
    );

    let query = Query::new().page(None, None);
    assert!(query.as_slice().is_empty());
}

#[test]
fn test_base_url_trailing_slash_is_trimmed() {
    let http = HttpClient::with_base_url("t", "https://api.kkbox.com/v1.1/");
    assert_eq!(http.base_url(), "https://api.kkbox.com/v1.1");
}

#[tokio::test]
async fn test_get_sends_bearer_token_and_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks/KpnEGVHEsGgkoB0MBk"))
        .and(header("authorization", "Bearer test-token"))
        .and(query_param("territory", "TW"))
        .and(query_param_is_missing("limit"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": "KpnEGVHEsGgkoB0MBk" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let envelope = http(&server)
        .get(
            "/tracks/KpnEGVHEsGgkoB0MBk",
            &Query::for_territory(Territory::TW),
        )
        .await
        .unwrap();

    assert_eq!(envelope.status, 200);
    assert!(envelope.is_success());
    assert_eq!(envelope.data["id"], "KpnEGVHEsGgkoB0MBk");
}

#[tokio::test]
async fn test_api_errors_resolve_as_envelopes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks/unknown"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "error": { "code": 404, "message": "Resource not found" } })),
        )
        .mount(&server)
        .await;

    let envelope = http(&server)
        .get("/tracks/unknown", &Query::new())
        .await
        .expect("4xx must not be a transport error");

    assert_eq!(envelope.status, 404);
    assert!(!envelope.is_success());
    assert_eq!(envelope.data["error"]["message"], "Resource not found");
}

#[tokio::test]
async fn test_non_json_and_empty_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/empty"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = http(&server);

    let broken = client.get("/broken", &Query::new()).await.unwrap();
    assert_eq!(broken.status, 502);
    assert_eq!(broken.data, Value::String("<html>Bad Gateway</html>".into()));

    let empty = client.get("/empty", &Query::new()).await.unwrap();
    assert_eq!(empty.status, 204);
    assert_eq!(empty.data, Value::Null);
}

#[tokio::test]
async fn test_network_failure_is_a_transport_error() {
    // nothing listens on port 1
    let client = HttpClient::with_base_url("t", "http://127.0.0.1:1");

    let result = client.get("/charts", &Query::new()).await;
    assert!(matches!(result, Err(KkboxError::Transport(_))));

    let result = client.get_url("http://127.0.0.1:1/charts?offset=1").await;
    assert!(matches!(result, Err(KkboxError::Transport(_))));
}

#[tokio::test]
async fn test_get_url_uses_absolute_url_as_is() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/elsewhere/next"))
        .and(query_param("offset", "20"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    // base URL deliberately differs from the cursor's path prefix
    let client = HttpClient::with_base_url("test-token", format!("{}/v1.1", server.uri()));
    let envelope = client
        .get_url(&format!("{}/elsewhere/next?offset=20", server.uri()))
        .await
        .unwrap();

    assert_eq!(envelope.status, 200);
    assert!(envelope.items().is_empty());
}
