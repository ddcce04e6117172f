//! The caller-supplied recruitment-status event.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single status update for one candidate.
///
/// Only presence is checked. Empty strings are legal and flow through
/// the pipeline unchanged; they resolve to catalog defaults downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEvent {
    pub candidate_name: String,

    pub candidate_email: String,

    /// Recruitment status, e.g. "Assessment" or "Interview".
    pub status: String,

    /// Job posting id, e.g. "J123".
    pub job_id: String,

    /// Ask for an externally generated preparation tip.
    #[serde(default)]
    pub use_augmented_generation: bool,

    /// Free-text background on the candidate, used only in generation prompts.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub candidate_profile: String,
}

impl InputEvent {
    pub fn new(
        candidate_name: impl Into<String>,
        candidate_email: impl Into<String>,
        status: impl Into<String>,
        job_id: impl Into<String>,
    ) -> Self {
        Self {
            candidate_name: candidate_name.into(),
            candidate_email: candidate_email.into(),
            status: status.into(),
            job_id: job_id.into(),
            use_augmented_generation: false,
            candidate_profile: String::new(),
        }
    }

    pub fn with_augmented_generation(mut self, enabled: bool) -> Self {
        self.use_augmented_generation = enabled;
        self
    }

    pub fn with_candidate_profile(mut self, profile: impl Into<String>) -> Self {
        self.candidate_profile = profile.into();
        self
    }

    /// Build an event from untyped JSON.
    ///
    /// A missing field or a field of the wrong type (e.g. a numeric
    /// `status`) is a contract violation and returns
    /// [`Error::InvalidInput`].
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::InvalidInput(e.to_string()))
    }

    /// Parse a JSON array of events, failing on the first malformed entry.
    pub fn list_from_json(value: serde_json::Value) -> Result<Vec<Self>> {
        let serde_json::Value::Array(items) = value else {
            return Err(Error::InvalidInput("expected a JSON array of events".into()));
        };
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                Self::from_json(item).map_err(|e| Error::InvalidInput(format!("event #{i}: {e}")))
            })
            .collect()
    }
}
