//! Generative-text provider implementations for RecruitEM.
//!
//! All providers implement the `recruitem_core::Provider` trait. A
//! dispatcher runs fine without one; [`build_from_config`] only returns a
//! provider when credentials are present.

pub mod anthropic;

pub use anthropic::AnthropicProvider;

use recruitem_config::GenerationConfig;
use recruitem_core::Provider;
use std::sync::Arc;
use tracing::{debug, warn};

/// Build the configured provider, if generation can be offered at all.
///
/// Returns `None` when no API key is configured, when the provider name
/// is unknown, or when the HTTP client cannot be constructed. Each of
/// those cases leaves the dispatcher on keyword tips.
pub fn build_from_config(config: &GenerationConfig) -> Option<Arc<dyn Provider>> {
    let api_key = config.api_key.as_deref().filter(|k| !k.trim().is_empty())?;

    match config.provider.as_str() {
        "anthropic" => {
            let provider = match AnthropicProvider::new(api_key) {
                Ok(p) => p.with_model(&config.model),
                Err(e) => {
                    warn!(error = %e, "Could not construct Anthropic provider");
                    return None;
                }
            };
            let provider = match config.api_url.as_deref() {
                Some(url) => provider.with_base_url(url),
                None => provider,
            };
            debug!(provider = "anthropic", model = %config.model, "Generation provider configured");
            Some(Arc::new(provider))
        }
        other => {
            warn!(provider = other, "Unknown generation provider; keyword tips only");
            None
        }
    }
}
