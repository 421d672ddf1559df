//! Integration tests for token issuance and account sync.
//!
//! These tests require a running Adorly Market server:
//!
//! ```bash
//! MARKET_JWT_SECRET=$(openssl rand -hex 32) cargo run -p adorly-server
//! ```
//!
//! Run with: cargo test -p adorly-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

/// Base URL for the market API (configurable via environment).
fn base_url() -> String {
    std::env::var("MARKET_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

/// Sync a fresh account and return the response body.
async fn sync_account(client: &Client, id: &str, username: &str) -> Value {
    let resp = client
        .post(format!("{}/api/auth/sync", base_url()))
        .json(&json!({ "id": id, "username": username }))
        .send()
        .await
        .expect("Failed to sync account");

    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("Failed to parse sync response")
}

#[tokio::test]
#[ignore = "Requires running adorly-server"]
async fn test_sync_issues_bearer_token() {
    let client = Client::new();
    let id = format!("it-{}", Uuid::new_v4());

    let body = sync_account(&client, &id, "sync-test").await;

    let token = body["token"].as_str().expect("token missing");
    assert!(!token.is_empty());
    assert_eq!(body["user"]["id"], id.as_str());
    assert_eq!(body["user"]["username"], "sync-test");
    assert!(body["user"]["role"].is_string());
}

#[tokio::test]
#[ignore = "Requires running adorly-server"]
async fn test_resync_keeps_existing_role() {
    let client = Client::new();
    let id = format!("it-{}", Uuid::new_v4());

    let first = sync_account(&client, &id, "resync-test").await;
    let second = sync_account(&client, &id, "resync-test").await;

    assert_eq!(first["user"]["role"], second["user"]["role"]);
}

#[tokio::test]
#[ignore = "Requires running adorly-server"]
async fn test_sync_rejects_empty_fields() {
    let client = Client::new();

    let resp = client
        .post(format!("{}/api/auth/sync", base_url()))
        .json(&json!({ "id": "", "username": "nobody" }))
        .send()
        .await
        .expect("Failed to send sync request");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse error body");
    assert!(body["error"].is_string());
}

#[tokio::test]
#[ignore = "Requires running adorly-server"]
async fn test_protected_route_requires_token() {
    let client = Client::new();

    let resp = client
        .get(format!("{}/api/orders/my", base_url()))
        .send()
        .await
        .expect("Failed to request orders");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running adorly-server"]
async fn test_garbage_token_is_forbidden() {
    let client = Client::new();

    let resp = client
        .get(format!("{}/api/orders/my", base_url()))
        .bearer_auth("not-a-real-token")
        .send()
        .await
        .expect("Failed to request orders");

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}
