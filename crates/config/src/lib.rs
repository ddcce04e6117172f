//! Configuration loading, validation, and management for the RecruitEM
//! dispatcher.
//!
//! Loads configuration from `~/.recruitem/config.toml` with environment
//! variable overrides. Validates all settings at startup. Every section
//! has defaults, so a missing file yields a working configuration backed
//! by the built-in catalog and tip table.

use recruitem_core::catalog::{
    DEFAULT_ASSESSMENT_LINK, GENERIC_JOB_DESCRIPTION, GENERIC_JOB_TITLE, JobRecord, StaticCatalog,
};
use recruitem_core::tips::{DEFAULT_TIP, TipEntry, TipTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.recruitem/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Message templates
    #[serde(default)]
    pub messages: MessagesConfig,

    /// Generative tip backend
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Job and assessment-link reference data
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Keyword → tip table, in match order
    #[serde(default = "default_tips")]
    pub tips: Vec<TipEntry>,
}

fn default_tips() -> Vec<TipEntry> {
    TipTable::builtin().entries().to_vec()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            messages: MessagesConfig::default(),
            generation: GenerationConfig::default(),
            catalog: CatalogConfig::default(),
            tips: default_tips(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesConfig {
    /// Sign-off line at the end of every message
    #[serde(default = "default_signature")]
    pub signature: String,

    /// Time limit quoted in assessment invitations
    #[serde(default = "default_time_limit")]
    pub assessment_time_limit_minutes: u32,

    /// Tip used when no keyword matches the job description
    #[serde(default = "default_tip")]
    pub default_tip: String,
}

fn default_signature() -> String {
    "RecruitEM Team".into()
}
fn default_time_limit() -> u32 {
    60
}
fn default_tip() -> String {
    DEFAULT_TIP.into()
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            signature: default_signature(),
            assessment_time_limit_minutes: default_time_limit(),
            default_tip: default_tip(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Backend name; only "anthropic" is built in
    #[serde(default = "default_provider")]
    pub provider: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// API key (usually supplied via environment instead)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Override the provider's base URL (proxies, tests)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Upper bound on one generation call before falling back
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_provider() -> String {
    "anthropic".into()
}
fn default_model() -> String {
    "claude-3-5-sonnet-20241022".into()
}
fn default_max_tokens() -> u32 {
    100
}
fn default_temperature() -> f32 {
    0.7
}
fn default_timeout_secs() -> u64 {
    20
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            api_key: None,
            api_url: None,
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &redact(&self.api_key))
            .field("api_url", &self.api_url)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Redact a secret for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Link sent when a job title has no dedicated assessment
    #[serde(default = "default_fallback_link")]
    pub fallback_link: String,

    #[serde(default = "default_fallback_job_title")]
    pub fallback_job_title: String,

    #[serde(default = "default_fallback_job_description")]
    pub fallback_job_description: String,

    /// Job title → assessment URL. Replaces the built-in links when present.
    #[serde(default = "default_test_links")]
    pub test_links: BTreeMap<String, String>,

    /// Job id → job record. Replaces the built-in jobs when present.
    #[serde(default = "default_jobs")]
    pub jobs: BTreeMap<String, JobRecord>,
}

fn default_fallback_link() -> String {
    DEFAULT_ASSESSMENT_LINK.into()
}
fn default_fallback_job_title() -> String {
    GENERIC_JOB_TITLE.into()
}
fn default_fallback_job_description() -> String {
    GENERIC_JOB_DESCRIPTION.into()
}
fn default_test_links() -> BTreeMap<String, String> {
    StaticCatalog::builtin()
        .links()
        .map(|(title, url)| (title.to_string(), url.to_string()))
        .collect()
}
fn default_jobs() -> BTreeMap<String, JobRecord> {
    use recruitem_core::Catalog;
    StaticCatalog::builtin().jobs().into_iter().collect()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            fallback_link: default_fallback_link(),
            fallback_job_title: default_fallback_job_title(),
            fallback_job_description: default_fallback_job_description(),
            test_links: default_test_links(),
            jobs: default_jobs(),
        }
    }
}

impl CatalogConfig {
    /// Build the read-only catalog the orchestrator shares.
    pub fn to_catalog(&self) -> StaticCatalog {
        let catalog = StaticCatalog::new()
            .with_fallback_link(&self.fallback_link)
            .with_fallback_job(JobRecord::new(
                &self.fallback_job_title,
                &self.fallback_job_description,
            ));
        let catalog = self
            .test_links
            .iter()
            .fold(catalog, |c, (title, url)| c.with_link(title, url));
        self.jobs
            .iter()
            .fold(catalog, |c, (id, job)| c.with_job(id, job.clone()))
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.recruitem/config.toml).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_env(&Self::config_dir().join("config.toml"))
    }

    /// Load from `path`, then apply environment overrides:
    /// - `RECRUITEM_API_KEY` (highest priority), then `ANTHROPIC_API_KEY`,
    ///   fill a missing generation key
    /// - `RECRUITEM_MODEL` overrides the generation model
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load_from(path)?;

        if config.generation.api_key.is_none() {
            config.generation.api_key = std::env::var("RECRUITEM_API_KEY")
                .ok()
                .or_else(|| std::env::var("ANTHROPIC_API_KEY").ok())
                .filter(|key| !key.trim().is_empty());
        }

        if let Ok(model) = std::env::var("RECRUITEM_MODEL") {
            config.generation.model = model;
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".recruitem")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generation.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "generation.timeout_secs must be greater than 0".into(),
            ));
        }

        if !(0.0..=2.0).contains(&self.generation.temperature) {
            return Err(ConfigError::ValidationError(
                "generation.temperature must be between 0.0 and 2.0".into(),
            ));
        }

        if self.messages.signature.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "messages.signature must not be empty".into(),
            ));
        }

        if self.messages.assessment_time_limit_minutes == 0 {
            return Err(ConfigError::ValidationError(
                "messages.assessment_time_limit_minutes must be greater than 0".into(),
            ));
        }

        if self.messages.default_tip.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "messages.default_tip must not be empty".into(),
            ));
        }

        if self.catalog.fallback_link.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "catalog.fallback_link must not be empty".into(),
            ));
        }

        if let Some(entry) = self.tips.iter().find(|t| t.keyword.trim().is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "tip keyword must not be empty (tip: '{}')",
                entry.tip
            )));
        }

        Ok(())
    }

    /// Check if a generation API key is available (from config or environment).
    pub fn has_api_key(&self) -> bool {
        self.generation.api_key.is_some()
    }

    /// The keyword tip table described by this configuration.
    pub fn tip_table(&self) -> TipTable {
        TipTable::new(self.tips.clone(), &self.messages.default_tip)
    }

    /// Generate a default config TOML string (for the `config` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
