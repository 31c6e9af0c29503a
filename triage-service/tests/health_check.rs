//! Integration tests for the triage-service HTTP server.
//!
//! These spawn the real server on a random port; no external services are
//! needed because the model path is disabled.

mod common;

use common::TestApp;
use reqwest::Client;
use triage_service::services::init_metrics;

#[tokio::test]
async fn health_check_returns_ok() {
    let app = TestApp::spawn(None).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", app.http_address))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert!(response.headers().contains_key("x-request-id"));

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "triage-service");
    assert_eq!(body["model_enabled"], false);
}

#[tokio::test]
async fn readiness_check_returns_ok() {
    let app = TestApp::spawn(None).await;

    let response = Client::new()
        .get(format!("{}/ready", app.http_address))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
async fn metrics_endpoint_returns_prometheus_format() {
    init_metrics();
    let app = TestApp::spawn(None).await;
    let client = Client::new();

    // Produce at least one domain metric
    client
        .post(format!("{}/recommend", app.http_address))
        .json(&serde_json::json!({
            "gender": "male",
            "age": 50,
            "symptoms": ["batuk"]
        }))
        .send()
        .await
        .expect("Failed to send request");

    let response = client
        .get(format!("{}/metrics", app.http_address))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .expect("Invalid content-type")
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = response.text().await.expect("Failed to get response body");
    assert!(
        body.contains("triage_recommendations_total"),
        "Unexpected metrics output: {}",
        body
    );
}

#[tokio::test]
async fn recommend_over_the_wire() {
    let app = TestApp::spawn(None).await;

    let response = Client::new()
        .post(format!("{}/recommend", app.http_address))
        .json(&serde_json::json!({
            "gender": "female",
            "age": 27,
            "symptoms": ["pusing", "mual", "pusing"]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["recommended_department"], "Neurology");
}
