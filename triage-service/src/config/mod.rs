use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Gemini REST endpoint used when `GENAI_API_BASE` is not set.
pub const DEFAULT_GENAI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Upper bound on a single model call.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
pub struct TriageConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub environment: Environment,
    pub models: ModelConfig,
    pub google: GoogleConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Prod,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Model used for department suggestions (e.g., gemini-2.0-flash-001)
    pub text_model: String,
    /// Base URL of the generative language API
    pub api_base: String,
    pub request_timeout_secs: u64,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    /// Absent key disables the model path; recommendations then come from rules only.
    pub api_key: Option<String>,
}

impl TriageConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let environment = match env::var("ENVIRONMENT").as_deref() {
            Ok("prod") => Environment::Prod,
            _ => Environment::Dev,
        };

        let api_key = env::var("GOOGLE_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        Ok(TriageConfig {
            common: common_config,
            environment,
            models: ModelConfig {
                text_model: get_env("GENAI_TEXT_MODEL", "gemini-2.0-flash-001"),
                api_base: get_env("GENAI_API_BASE", DEFAULT_GENAI_API_BASE),
                request_timeout_secs: parse_env(
                    "GENAI_REQUEST_TIMEOUT_SECS",
                    DEFAULT_REQUEST_TIMEOUT_SECS,
                )?,
                temperature: env::var("GENAI_TEMPERATURE")
                    .ok()
                    .map(|raw| {
                        raw.parse().map_err(|e| {
                            AppError::ConfigError(anyhow::anyhow!(
                                "GENAI_TEMPERATURE must be a number, got '{}': {}",
                                raw,
                                e
                            ))
                        })
                    })
                    .transpose()?,
            },
            google: GoogleConfig { api_key },
        })
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("{} is invalid ('{}'): {}", key, raw, e))
        }),
        Err(_) => Ok(default),
    }
}
