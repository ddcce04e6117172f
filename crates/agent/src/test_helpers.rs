//! Shared test helpers: scripted generative providers.

use recruitem_core::error::ProviderError;
use recruitem_core::provider::{Provider, ProviderRequest, ProviderResponse, Usage};
use std::sync::Mutex;
use std::time::Duration;

/// A mock provider that returns a sequence of scripted texts.
///
/// Panics if more calls are made than texts provided.
pub struct ScriptedProvider {
    texts: Vec<String>,
    call_count: Mutex<usize>,
}

impl ScriptedProvider {
    pub fn new(texts: Vec<&str>) -> Self {
        Self {
            texts: texts.into_iter().map(String::from).collect(),
            call_count: Mutex::new(0),
        }
    }

    pub fn text(text: &str) -> Self {
        Self::new(vec![text])
    }

    pub fn calls(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted_mock"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let mut count = self.call_count.lock().unwrap();
        let text = self.texts.get(*count).cloned().unwrap_or_else(|| {
            panic!(
                "ScriptedProvider: no more responses (call #{}, have {})",
                *count,
                self.texts.len()
            )
        });
        *count += 1;
        Ok(ProviderResponse {
            text,
            model: request.model,
            usage: Some(Usage {
                prompt_tokens: 10,
                completion_tokens: 5,
                total_tokens: 15,
            }),
        })
    }
}

/// Always fails with a server error.
pub struct FailingProvider;

#[async_trait::async_trait]
impl Provider for FailingProvider {
    fn name(&self) -> &str {
        "failing_mock"
    }

    async fn complete(&self, _request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        Err(ProviderError::ApiError {
            status_code: 500,
            message: "internal error".into(),
        })
    }
}

/// Never answers within any reasonable timeout.
pub struct SlowProvider;

#[async_trait::async_trait]
impl Provider for SlowProvider {
    fn name(&self) -> &str {
        "slow_mock"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(ProviderResponse {
            text: "too late".into(),
            model: request.model,
            usage: None,
        })
    }
}
