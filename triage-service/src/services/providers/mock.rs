//! Mock provider for testing.
//!
//! Returns a scripted reply (or a scripted failure) and counts calls so tests
//! can assert whether the model path was exercised.

use super::{FinishReason, GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

enum Script {
    Reply(String),
    Fail,
}

/// Mock text provider for testing.
pub struct MockTextProvider {
    script: Script,
    calls: AtomicUsize,
}

impl MockTextProvider {
    /// Always answer with `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            script: Script::Reply(reply.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fail as an unreachable backend would.
    pub fn failing() -> Self {
        Self {
            script: Script::Fail,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `generate` calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.script {
            Script::Reply(text) => Ok(ProviderResponse {
                text: Some(text.clone()),
                input_tokens: prompt.len() as i32 / 4,
                output_tokens: text.len() as i32 / 4,
                finish_reason: FinishReason::Complete,
            }),
            Script::Fail => Err(ProviderError::NetworkError(
                "Mock text provider is unreachable".to_string(),
            )),
        }
    }
}
