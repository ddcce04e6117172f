//! Wiring an [`Orchestrator`] from an [`AppConfig`].

use recruitem_config::AppConfig;
use recruitem_core::catalog::Catalog;
use recruitem_core::provider::Provider;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::messages::MessageStyle;
use crate::orchestrator::Orchestrator;
use recruitem_tools::{DelegatedTip, KeywordTip, default_registry};

impl Orchestrator {
    /// Build an orchestrator from configuration, creating the generation
    /// provider when an API key is available.
    pub fn from_config(config: &AppConfig) -> Self {
        let provider = recruitem_providers::build_from_config(&config.generation);
        Self::from_config_with_provider(config, provider)
    }

    /// Build an orchestrator from configuration with an explicit provider
    /// (or none).
    pub fn from_config_with_provider(config: &AppConfig, provider: Option<Arc<dyn Provider>>) -> Self {
        let catalog: Arc<dyn Catalog> = Arc::new(config.catalog.to_catalog());
        let tips = Arc::new(config.tip_table());

        let delegated = provider.map(|provider| {
            info!(
                provider = provider.name(),
                model = %config.generation.model,
                "Tip generation enabled"
            );
            DelegatedTip::new(provider, KeywordTip::new(tips.clone()), &config.generation.model)
                .with_max_tokens(config.generation.max_tokens)
                .with_temperature(config.generation.temperature)
                .with_timeout(Duration::from_secs(config.generation.timeout_secs))
        });

        let tools = default_registry(catalog.clone(), tips, delegated);
        let style = MessageStyle {
            signature: config.messages.signature.clone(),
            assessment_time_limit_minutes: config.messages.assessment_time_limit_minutes,
        };
        Self::new(catalog, Arc::new(tools), style)
    }

    /// An orchestrator over the built-in catalog and tips, without generation.
    pub fn builtin() -> Self {
        Self::from_config_with_provider(&AppConfig::default(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::ScriptedProvider;
    use recruitem_core::{InputEvent, JobRecord, TipEntry};

    #[tokio::test]
    async fn builtin_matches_seed_data() {
        let msg = Orchestrator::builtin()
            .orchestrate("Alice Chen", "alice@email.com", "Assessment", "J123", false)
            .await
            .unwrap();
        assert!(msg.contains("https://assess.example.com/python"));
        assert!(msg.ends_with("RecruitEM Team"));
    }

    #[tokio::test]
    async fn config_customizes_catalog_and_style() {
        let mut config = AppConfig::default();
        config.messages.signature = "Acme Hiring".into();
        config.messages.assessment_time_limit_minutes = 45;
        config
            .catalog
            .jobs
            .insert("R1".into(), JobRecord::new("Rust Engineer", "Rust and Tokio services."));
        config
            .catalog
            .test_links
            .insert("Rust Engineer".into(), "https://assess.example.com/rust".into());

        let msg = Orchestrator::from_config_with_provider(&config, None)
            .orchestrate("Ann", "ann@x.com", "assessment", "R1", false)
            .await
            .unwrap();

        assert!(msg.contains("Rust Engineer"));
        assert!(msg.contains("https://assess.example.com/rust"));
        assert!(msg.contains("45 minutes"));
        assert!(msg.ends_with("Acme Hiring"));
    }

    #[tokio::test]
    async fn config_tips_drive_keyword_selection() {
        let mut config = AppConfig::default();
        config.tips = vec![TipEntry::new("tokio", "Explain how the Tokio scheduler works.")];
        config
            .catalog
            .jobs
            .insert("R1".into(), JobRecord::new("Rust Engineer", "Rust and Tokio services."));

        let msg = Orchestrator::from_config_with_provider(&config, None)
            .orchestrate("Ann", "ann@x.com", "interview", "R1", false)
            .await
            .unwrap();
        assert!(msg.contains("Explain how the Tokio scheduler works."));
    }

    #[tokio::test]
    async fn provider_is_wired_with_config_model() {
        let provider = Arc::new(ScriptedProvider::text("Generated tip."));
        let orch = Orchestrator::from_config_with_provider(
            &AppConfig::default(),
            Some(provider.clone() as Arc<dyn Provider>),
        );
        let outcome = orch
            .dispatch(
                InputEvent::new("Bob", "b@x.com", "interview", "J123").with_augmented_generation(true),
            )
            .await
            .unwrap();
        assert!(outcome.message().contains("Generated tip."));
        assert_eq!(provider.calls(), 1);
    }

    #[test]
    fn no_key_means_keyword_only() {
        let config = AppConfig::default();
        assert!(recruitem_providers::build_from_config(&config.generation).is_none());
    }
}
