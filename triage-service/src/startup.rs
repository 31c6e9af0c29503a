//! Application startup and lifecycle management.
//!
//! Builds the shared state (symptom table, resolver, aggregator), wires the
//! HTTP router and runs it until a shutdown signal arrives.

use crate::config::{Environment, TriageConfig};
use crate::handlers;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::{GenerationParams, TextProvider};
use crate::services::{Aggregator, RecommendationResolver, SymptomTable};
use axum::{
    http::{header, Method, Request},
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics_middleware, request_id_middleware, REQUEST_ID_HEADER};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: TriageConfig,
    pub resolver: Arc<RecommendationResolver>,
    pub aggregator: Aggregator,
}

impl AppState {
    /// Assemble the state around an optional text provider.
    pub fn new(config: TriageConfig, provider: Option<Arc<dyn TextProvider>>) -> Self {
        let table = Arc::new(SymptomTable::default());
        let params = GenerationParams {
            temperature: config.models.temperature,
            max_tokens: None,
        };

        Self {
            config,
            resolver: Arc::new(RecommendationResolver::new(table.clone(), provider, params)),
            aggregator: Aggregator::new(table),
        }
    }
}

/// Build the Gemini provider if a key is configured.
///
/// Any failure here disables the model path instead of aborting startup.
pub fn text_provider_from_config(config: &TriageConfig) -> Option<Arc<dyn TextProvider>> {
    let Some(api_key) = config.google.api_key.clone() else {
        if config.environment == Environment::Prod {
            tracing::warn!(
                "GOOGLE_API_KEY is not set in production, serving rule-based recommendations only"
            );
        } else {
            tracing::info!("GOOGLE_API_KEY not set, serving rule-based recommendations only");
        }
        return None;
    };

    let gemini_config = GeminiConfig {
        api_key,
        model: config.models.text_model.clone(),
        api_base: config.models.api_base.clone(),
        timeout: Duration::from_secs(config.models.request_timeout_secs),
    };

    match GeminiTextProvider::new(gemini_config) {
        Ok(provider) => {
            tracing::info!(
                model = %config.models.text_model,
                "Initialized Gemini text provider"
            );
            let provider: Arc<dyn TextProvider> = Arc::new(provider);
            Some(provider)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to initialize Gemini provider: {}. Using symptom rules only.",
                e
            );
            None
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route("/recommend", post(handlers::recommend_department))
        .route("/stats", post(handlers::department_stats))
        .with_state(state)
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    http_port: u16,
    http_listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: TriageConfig) -> Result<Self, AppError> {
        let provider = text_provider_from_config(&config);
        Self::build_with_provider(config, provider).await
    }

    /// Build the application around an explicit text provider.
    pub async fn build_with_provider(
        config: TriageConfig,
        provider: Option<Arc<dyn TextProvider>>,
    ) -> Result<Self, AppError> {
        let state = AppState::new(config.clone(), provider);

        // Bind HTTP listener (port 0 = random port for testing)
        let http_addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let http_listener = TcpListener::bind(http_addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", http_addr, e);
            AppError::from(e)
        })?;
        let http_port = http_listener.local_addr()?.port();

        tracing::info!(
            model_enabled = state.resolver.model_enabled(),
            "Triage service: HTTP on port {}",
            http_port
        );

        Ok(Self {
            http_port,
            http_listener,
            state,
        })
    }

    /// Get the HTTP port the server is listening on.
    pub fn http_port(&self) -> u16 {
        self.http_port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.http_listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                std::io::Error::other(format!("HTTP server error: {}", e))
            })
    }
}
