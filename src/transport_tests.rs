//! Tests for the reqwest-backed transport.

use super::*;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config() -> Config {
    Config::builder().token("t").project_id("p").build().unwrap()
}

fn request_to(uri: &str, path: &str) -> ApiRequest {
    let url = Url::parse(uri)
        .and_then(|u| u.join(path))
        .expect("mock server URI parses");

    ApiRequest {
        method: HttpMethod::Get,
        url,
        headers: vec![("Authorization".to_string(), "OAuth t".to_string())],
        body: None,
    }
}

#[tokio::test]
async fn test_send_returns_status_and_raw_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("Authorization", "OAuth t"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
        .mount(&mock_server)
        .await;

    let transport = ReqwestTransport::new(&test_config()).unwrap();
    let response = transport
        .send(&request_to(&mock_server.uri(), "/ping"))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(&response.body[..], b"pong");
}

#[tokio::test]
async fn test_non_success_status_is_not_a_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let transport = ReqwestTransport::new(&test_config()).unwrap();
    let response = transport
        .send(&request_to(&mock_server.uri(), "/missing"))
        .await
        .unwrap();

    assert_eq!(response.status, 404);
}

#[tokio::test]
async fn test_json_body_is_forwarded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(body_json(serde_json::json!({"messages": [{"body": "hi"}]})))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&mock_server)
        .await;

    let mut request = request_to(&mock_server.uri(), "/messages");
    request.method = HttpMethod::Post;
    request.body = Some(serde_json::json!({"messages": [{"body": "hi"}]}));

    let transport = ReqwestTransport::new(&test_config()).unwrap();
    let response = transport.send(&request).await.unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_connection_refused_is_a_transport_error() {
    // Nothing listens on port 1.
    let transport = ReqwestTransport::new(&test_config()).unwrap();
    let result = transport.send(&request_to("http://127.0.0.1:1", "/")).await;

    assert!(matches!(result, Err(TransportError::Connection { .. })));
}
