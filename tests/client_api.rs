//! Client API layer tests
//!
//! Runs the HTTP client against a wiremock server. The client functions
//! are synchronous (they own a runtime internally), so they run on a
//! blocking task here.

use serde_json::json;
use tempfile::tempdir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use authgate::client::api::{AuthApi, ClientError, HttpAuthApi};
use authgate::client::config::Config;
use authgate::client::storage::TokenStore;

fn api_for(server_url: &str, store: TokenStore) -> HttpAuthApi {
    HttpAuthApi::new(Config::with_server_url(server_url), store)
}

#[tokio::test]
async fn login_persists_returned_token_under_fixed_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({
            "email": "test@example.com",
            "password": "Pass!123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "issued.token.value",
            "user": {"id": "1", "name": "test", "email": "test@example.com"}
        })))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let store = TokenStore::with_path(dir.path().join("session.json"));
    let api = api_for(&server.uri(), store.clone());

    let payload = tokio::task::spawn_blocking(move || api.login("test@example.com", "Pass!123"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(payload.token.as_deref(), Some("issued.token.value"));
    assert_eq!(payload.user.unwrap().email, "test@example.com");
    assert_eq!(
        store.load_token().unwrap(),
        Some("issued.token.value".to_string())
    );
}

#[tokio::test]
async fn login_without_token_in_response_stores_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"id": "1", "name": "test", "email": "test@example.com"}
        })))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let store = TokenStore::with_path(dir.path().join("session.json"));
    let api = api_for(&server.uri(), store.clone());

    let payload = tokio::task::spawn_blocking(move || api.login("test@example.com", "Pass!123"))
        .await
        .unwrap()
        .unwrap();

    assert!(payload.token.is_none());
    assert_eq!(store.load_token().unwrap(), None);
}

#[tokio::test]
async fn register_posts_name_email_and_password() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({
            "name": "test",
            "email": "test@example.com",
            "password": "Pass!123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "t",
            "user": {"id": "1", "name": "test", "email": "test@example.com"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let store = TokenStore::with_path(dir.path().join("session.json"));
    let api = api_for(&server.uri(), store);

    let payload =
        tokio::task::spawn_blocking(move || api.register("test", "test@example.com", "Pass!123"))
            .await
            .unwrap()
            .unwrap();

    assert_eq!(payload.token.as_deref(), Some("t"));
}

#[tokio::test]
async fn error_status_carries_the_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({
                "message": "Invalid email or password"
            })),
        )
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let store = TokenStore::with_path(dir.path().join("session.json"));
    let api = api_for(&server.uri(), store.clone());

    let result = tokio::task::spawn_blocking(move || api.login("test@example.com", "bad"))
        .await
        .unwrap();

    match result {
        Err(ClientError::Status { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid email or password");
        }
        other => panic!("expected status error, got {:?}", other.map(|p| p.token)),
    }

    assert_eq!(store.load_token().unwrap(), None);
}
