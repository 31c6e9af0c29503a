#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use tower::ServiceExt;
use triage_service::config::{
    Environment, GoogleConfig, ModelConfig, TriageConfig, DEFAULT_GENAI_API_BASE,
};
use triage_service::services::providers::TextProvider;
use triage_service::startup::Application;
use triage_service::{build_router, AppState};

pub fn test_config(api_key: Option<&str>) -> TriageConfig {
    TriageConfig {
        // Use random port for testing (port 0)
        common: CoreConfig {
            port: 0,
            log_level: "error".to_string(),
        },
        environment: Environment::Dev,
        models: ModelConfig {
            text_model: "gemini-2.0-flash-001".to_string(),
            api_base: DEFAULT_GENAI_API_BASE.to_string(),
            request_timeout_secs: 5,
            temperature: None,
        },
        google: GoogleConfig {
            api_key: api_key.map(str::to_string),
        },
    }
}

/// Router with the given provider wired in, for `oneshot` requests.
pub fn router(provider: Option<Arc<dyn TextProvider>>) -> Router {
    build_router(AppState::new(test_config(None), provider))
}

/// Send a JSON POST through the router and return status plus parsed body.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

pub struct TestApp {
    pub http_address: String,
    pub http_port: u16,
}

impl TestApp {
    pub async fn spawn(provider: Option<Arc<dyn TextProvider>>) -> Self {
        let app = Application::build_with_provider(test_config(None), provider)
            .await
            .expect("Failed to build test application");

        let http_port = app.http_port();
        let http_address = format!("http://127.0.0.1:{}", http_port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", http_address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            http_address,
            http_port,
        }
    }
}
