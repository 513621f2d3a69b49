use hello_stack::client::{ApiClient, ApiError};
use hello_stack::config::ClientConfig;
use hello_stack::schema::HelloInput;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(base_url: &str, timeout_ms: u64) -> ApiClient {
    ApiClient::new(ClientConfig {
        base_url: base_url.to_string(),
        timeout_ms,
    })
    .unwrap()
}

fn hello_input() -> HelloInput {
    HelloInput {
        input: "hello".to_string(),
    }
}

#[tokio::test]
async fn test_send_hello_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/hello"))
        .and(body_json(json!({ "input": "hello" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "message": "world",
                "success": true
            })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri(), 1_000);
    let response = client.send_hello(&hello_input()).await.unwrap();

    assert_eq!(response.message, "world");
    assert!(response.success);
}

#[tokio::test]
async fn test_validation_error_surfaces_backend_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/hello"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({
                "success": false,
                "message": "Validation failed",
                "errors": [
                    { "field": "input", "message": "Input must be exactly 'hello'" }
                ]
            })),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri(), 1_000);
    let err = client
        .send_hello(&HelloInput {
            input: "invalid".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Validation failed");
    match err {
        ApiError::Http {
            status, response, ..
        } => {
            assert_eq!(status, 400);
            let payload = response.expect("structured body should be kept");
            assert!(!payload.success);
            assert_eq!(payload.message, "Validation failed");
        }
        other => panic!("expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_http_error_without_decodable_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/hello"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "boom" })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri(), 1_000);
    let err = client.send_hello(&hello_input()).await.unwrap_err();

    assert_eq!(err.to_string(), "HTTP error! status: 500");
    assert!(err.response().is_none());
}

#[tokio::test]
async fn test_non_json_response_is_a_format_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/hello"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>world</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri(), 1_000);
    let err = client.send_hello(&hello_input()).await.unwrap_err();

    match err {
        ApiError::InvalidFormat { ref content_type, .. } => {
            assert!(!content_type.contains("application/json"));
        }
        other => panic!("expected InvalidFormat error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_slow_response_is_a_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/hello"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "world", "success": true }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri(), 100);
    let err = client.send_hello(&hello_input()).await.unwrap_err();

    assert!(matches!(err, ApiError::Timeout));
    assert_eq!(err.to_string(), "Request timeout - please try again");
}

#[tokio::test]
async fn test_connection_refused_is_a_network_error() {
    // Bind then drop a listener so the port is known-free
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = client_for(&format!("http://127.0.0.1:{}", port), 1_000);
    let err = client.send_hello(&hello_input()).await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(
        err.to_string(),
        "Network error - please check your connection and try again"
    );
}

#[tokio::test]
async fn test_health_check() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri(), 1_000);
    let health = client.health_check().await.unwrap();

    assert_eq!(health.status, "ok");
}
