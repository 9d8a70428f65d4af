//! Integration tests for the HTTP transport.
//!
//! These tests verify URL construction, header merging, body encoding, and
//! response parsing against a mock backend.

use jewelry_api::clients::{DataType, HttpClient, HttpMethod, HttpRequest};
use jewelry_api::{ApiError, BaseUrl, ClientConfig, InvalidHttpRequestError};
use serde_json::json;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = ClientConfig::builder()
        .base_url(BaseUrl::new(format!("{}/", server.uri())).unwrap())
        .user_agent_prefix("Tests/1.0")
        .build()
        .unwrap();
    HttpClient::new(&config)
}

#[tokio::test]
async fn test_non_2xx_is_returned_not_raised() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/orders/5"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Order not found"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = HttpRequest::builder(HttpMethod::Get, "/api/orders/5")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 404);
    assert!(!response.is_ok());
    assert_eq!(response.path, "/api/orders/5");
    assert_eq!(response.detail().as_deref(), Some("Order not found"));
}

#[tokio::test]
async fn test_empty_and_non_json_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/cart/"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let deleted = client
        .request(HttpRequest::builder(HttpMethod::Delete, "/api/cart/").build().unwrap())
        .await
        .unwrap();
    assert_eq!(deleted.code, 204);
    assert_eq!(deleted.body, json!({}));

    let gateway = client
        .request(HttpRequest::builder(HttpMethod::Get, "/health").build().unwrap())
        .await
        .unwrap();
    assert_eq!(gateway.body, json!({"raw_body": "Bad Gateway"}));
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .request(HttpRequest::builder(HttpMethod::Get, "/health").build().unwrap())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let user_agent = requests[0].headers.get("user-agent").unwrap().to_str().unwrap();
    assert!(user_agent.starts_with("Tests/1.0 | Jewelry API Client v"));
}

#[tokio::test]
async fn test_form_body_is_url_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("password=s%20cret&username=ana"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "T"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = HttpRequest::builder(HttpMethod::Post, "/api/auth/login")
        .body(json!({"username": "ana", "password": "s cret"}))
        .body_type(DataType::Form)
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert!(response.is_ok());
}

#[tokio::test]
async fn test_invalid_request_fails_before_sending() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let request = HttpRequest {
        http_method: HttpMethod::Get,
        path: "/api/cart/".to_string(),
        body: Some(json!({"key": "value"})),
        body_type: None,
        query: Vec::new(),
        extra_headers: None,
    };

    let result = client.request(request).await;
    assert!(matches!(
        result,
        Err(ApiError::InvalidRequest(InvalidHttpRequestError::MissingBodyType))
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let config = ClientConfig::builder()
        .base_url(BaseUrl::new("http://127.0.0.1:9").unwrap())
        .build()
        .unwrap();
    let client = HttpClient::new(&config);

    let result = client
        .request(HttpRequest::builder(HttpMethod::Get, "/health").build().unwrap())
        .await;
    assert!(matches!(result, Err(ApiError::Network(_))));
}
