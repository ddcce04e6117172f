//! Interview preparation tip tool.
//!
//! Two strategies sit behind [`TipStrategy`]:
//! - [`KeywordTip`] walks the ordered tip table. Always available.
//! - [`DelegatedTip`] asks a generative [`Provider`] for a tip, bounded by
//!   a timeout. Any provider failure degrades to the keyword tip and is
//!   reported as a fallback, never as an error.

use async_trait::async_trait;
use recruitem_core::error::ToolError;
use recruitem_core::provider::{Provider, ProviderRequest};
use recruitem_core::tips::TipTable;
use recruitem_core::tool::{Tool, ToolResult, required_str};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub const TOOL_NAME: &str = "generate_preparation_tip";

pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(20);

/// Reason reported when generation is requested but no provider exists.
pub const NOT_CONFIGURED_REASON: &str = "generation provider not configured";

/// How a tip was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TipSource {
    Keyword,
    Generated,
    /// Generation was requested but the keyword tip was used instead.
    Fallback,
}

impl TipSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Generated => "generated",
            Self::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipOutcome {
    pub tip: String,
    pub source: TipSource,
    pub fallback_reason: Option<String>,
}

impl TipOutcome {
    fn keyword(tip: impl Into<String>) -> Self {
        Self {
            tip: tip.into(),
            source: TipSource::Keyword,
            fallback_reason: None,
        }
    }

    fn fallback(tip: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            tip: tip.into(),
            source: TipSource::Fallback,
            fallback_reason: Some(reason.into()),
        }
    }
}

/// A way of turning a job description into one preparation tip.
#[async_trait]
pub trait TipStrategy: Send + Sync {
    fn name(&self) -> &str;

    /// Produce a tip. Must not fail.
    async fn tip(&self, job_description: &str, candidate_profile: &str) -> TipOutcome;
}

/// Deterministic tip from the keyword table.
#[derive(Debug, Clone)]
pub struct KeywordTip {
    table: Arc<TipTable>,
}

impl KeywordTip {
    pub fn new(table: Arc<TipTable>) -> Self {
        Self { table }
    }

    pub fn select(&self, job_description: &str) -> &str {
        self.table.select(job_description)
    }
}

#[async_trait]
impl TipStrategy for KeywordTip {
    fn name(&self) -> &str {
        "keyword"
    }

    async fn tip(&self, job_description: &str, _candidate_profile: &str) -> TipOutcome {
        TipOutcome::keyword(self.select(job_description))
    }
}

/// Provider-generated tip with keyword fallback.
pub struct DelegatedTip {
    provider: Arc<dyn Provider>,
    fallback: KeywordTip,
    model: String,
    max_tokens: u32,
    temperature: f32,
    timeout: Duration,
}

impl DelegatedTip {
    pub fn new(provider: Arc<dyn Provider>, fallback: KeywordTip, model: impl Into<String>) -> Self {
        Self {
            provider,
            fallback,
            model: model.into(),
            max_tokens: 100,
            temperature: 0.7,
            timeout: DEFAULT_GENERATION_TIMEOUT,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn generate(&self, job_description: &str, candidate_profile: &str) -> Result<String, String> {
        let request = ProviderRequest::new(
            &self.model,
            build_prompt(job_description, candidate_profile),
            self.max_tokens,
        )
        .with_temperature(self.temperature);

        let response = tokio::time::timeout(self.timeout, self.provider.complete(request))
            .await
            .map_err(|_| format!("generation timed out after {:?}", self.timeout))?
            .map_err(|e| e.to_string())?;

        let text = response.text.trim();
        if text.is_empty() {
            return Err("provider returned an empty tip".into());
        }
        Ok(text.to_string())
    }
}

#[async_trait]
impl TipStrategy for DelegatedTip {
    fn name(&self) -> &str {
        "delegated"
    }

    async fn tip(&self, job_description: &str, candidate_profile: &str) -> TipOutcome {
        match self.generate(job_description, candidate_profile).await {
            Ok(tip) => {
                debug!(provider = self.provider.name(), "Generated preparation tip");
                TipOutcome {
                    tip,
                    source: TipSource::Generated,
                    fallback_reason: None,
                }
            }
            Err(reason) => {
                warn!(provider = self.provider.name(), %reason, "Tip generation failed; using keyword tip");
                TipOutcome::fallback(self.fallback.select(job_description), reason)
            }
        }
    }
}

/// The generation prompt. A non-empty candidate profile is appended
/// after the job description.
pub fn build_prompt(job_description: &str, candidate_profile: &str) -> String {
    let mut prompt = format!(
        "Based on this job description, give ONE specific, high-impact tip to help a \
         candidate prepare for their interview. Keep it under 50 words.\n\n\
         Job Description: {job_description}"
    );
    if !candidate_profile.trim().is_empty() {
        prompt.push_str("\n\nCandidate Profile: ");
        prompt.push_str(candidate_profile);
    }
    prompt.push_str("\n\nTip:");
    prompt
}

pub struct PreparationTipTool {
    keyword: KeywordTip,
    augmented: Option<Box<dyn TipStrategy>>,
}

impl PreparationTipTool {
    pub fn new(keyword: KeywordTip) -> Self {
        Self {
            keyword,
            augmented: None,
        }
    }

    /// Strategy used when a call asks for augmented generation.
    pub fn with_augmented(mut self, strategy: impl TipStrategy + 'static) -> Self {
        self.augmented = Some(Box::new(strategy));
        self
    }

    pub async fn generate(
        &self,
        job_description: &str,
        use_augmented_generation: bool,
        candidate_profile: &str,
    ) -> TipOutcome {
        if !use_augmented_generation {
            return self.keyword.tip(job_description, candidate_profile).await;
        }

        match &self.augmented {
            Some(strategy) => {
                debug!(strategy = strategy.name(), "Augmented tip requested");
                strategy.tip(job_description, candidate_profile).await
            }
            None => {
                warn!("Tip generation requested without a provider; using keyword tip");
                TipOutcome::fallback(self.keyword.select(job_description), NOT_CONFIGURED_REASON)
            }
        }
    }
}

#[async_trait]
impl Tool for PreparationTipTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Produce one interview preparation tip for a job description, optionally via a generative provider."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "job_description": {
                    "type": "string",
                    "description": "Full text of the job description"
                },
                "use_augmented_generation": {
                    "type": "boolean",
                    "description": "Ask the generative provider for a tip (default false)",
                    "default": false
                },
                "candidate_profile": {
                    "type": "string",
                    "description": "Optional free text about the candidate"
                }
            },
            "required": ["job_description"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let job_description = required_str(&arguments, "job_description")?;

        let use_augmented_generation = match &arguments["use_augmented_generation"] {
            serde_json::Value::Null => false,
            serde_json::Value::Bool(b) => *b,
            _ => {
                return Err(ToolError::InvalidArguments(
                    "'use_augmented_generation' must be a boolean".into(),
                ));
            }
        };

        let candidate_profile = match &arguments["candidate_profile"] {
            serde_json::Value::Null => "",
            serde_json::Value::String(s) => s.as_str(),
            _ => {
                return Err(ToolError::InvalidArguments(
                    "'candidate_profile' must be a string".into(),
                ));
            }
        };

        let outcome = self
            .generate(job_description, use_augmented_generation, candidate_profile)
            .await;

        Ok(ToolResult::ok(outcome.tip).with_data(serde_json::json!({
            "source": outcome.source.as_str(),
            "fallback_reason": outcome.fallback_reason,
        })))
    }
}
