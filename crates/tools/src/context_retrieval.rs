//! Context retrieval tool: a small keyword search over the catalog and
//! the tip table.
//!
//! Resolution order:
//! 1. exact job id → `"{title}: {description prefix}..."`
//! 2. first job (by id) whose title or description contains the query
//! 3. first tip keyword contained in the query
//! 4. a generic preparation note
//!
//! A `job_id` lookup skips step 2, so an unknown id never borrows another
//! job's description.

use async_trait::async_trait;
use recruitem_core::catalog::{Catalog, JobRecord};
use recruitem_core::error::ToolError;
use recruitem_core::tips::TipTable;
use recruitem_core::tool::{Tool, ToolResult, required_str};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

pub const TOOL_NAME: &str = "retrieve_context";

/// Characters of the job description kept in a snippet.
pub const SNIPPET_CHARS: usize = 150;

pub const GENERIC_SNIPPET: &str = "No specific tips found. General advice: Review the job description carefully and prepare examples from your past experience.";

/// Where a snippet came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextSource {
    JobId,
    JobText,
    Tip,
    Generic,
}

impl ContextSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JobId => "job_id",
            Self::JobText => "job_text",
            Self::Tip => "tip",
            Self::Generic => "generic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievedContext {
    pub snippet: String,
    pub source: ContextSource,
}

pub struct RetrieveContextTool {
    catalog: Arc<dyn Catalog>,
    tips: Arc<TipTable>,
}

impl RetrieveContextTool {
    pub fn new(catalog: Arc<dyn Catalog>, tips: Arc<TipTable>) -> Self {
        Self { catalog, tips }
    }

    /// Free-text retrieval over all four steps.
    pub fn retrieve(&self, query: &str) -> RetrievedContext {
        self.resolve(query, true)
    }

    /// Retrieval keyed by a job id: exact id, then tip keyword, then generic.
    pub fn retrieve_for_job(&self, job_id: &str) -> RetrievedContext {
        self.resolve(job_id, false)
    }

    fn resolve(&self, query: &str, search_job_text: bool) -> RetrievedContext {
        if let Some(job) = self.catalog.job(query) {
            return RetrievedContext {
                snippet: job_snippet(&job),
                source: ContextSource::JobId,
            };
        }

        if search_job_text && !query.is_empty() {
            let needle = query.to_lowercase();
            let found = self.catalog.jobs().into_iter().find(|(_, job)| {
                job.title.to_lowercase().contains(&needle)
                    || job.description.to_lowercase().contains(&needle)
            });
            if let Some((id, job)) = found {
                debug!(query, job_id = %id, "Context matched job text");
                return RetrievedContext {
                    snippet: job_snippet(&job),
                    source: ContextSource::JobText,
                };
            }
        }

        if let Some(entry) = self.tips.find(query) {
            return RetrievedContext {
                snippet: entry.tip.clone(),
                source: ContextSource::Tip,
            };
        }

        RetrievedContext {
            snippet: GENERIC_SNIPPET.to_string(),
            source: ContextSource::Generic,
        }
    }
}

/// `"{title}: {first 150 chars of description}..."`, cut on a char boundary.
pub fn job_snippet(job: &JobRecord) -> String {
    let prefix: String = job.description.chars().take(SNIPPET_CHARS).collect();
    format!("{}: {prefix}...", job.title)
}

#[async_trait]
impl Tool for RetrieveContextTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Retrieve a short role-context snippet for a job id or free-text query."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "A job id (e.g. \"J123\") or keywords to search for"
                },
                "job_id": {
                    "type": "string",
                    "description": "A job id; unknown ids get tip or generic context, never another job's"
                }
            },
            "oneOf": [
                {"required": ["query"]},
                {"required": ["job_id"]}
            ]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let context = if arguments.get("job_id").is_some() {
            self.retrieve_for_job(required_str(&arguments, "job_id")?)
        } else {
            self.retrieve(required_str(&arguments, "query")?)
        };

        Ok(ToolResult::ok(context.snippet).with_data(serde_json::json!({
            "source": context.source.as_str(),
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recruitem_core::StaticCatalog;

    fn tool() -> RetrieveContextTool {
        RetrieveContextTool::new(
            Arc::new(StaticCatalog::builtin()),
            Arc::new(TipTable::builtin()),
        )
    }

    #[test]
    fn job_id_returns_title_and_description_prefix() {
        let ctx = tool().retrieve("J123");
        assert_eq!(ctx.source, ContextSource::JobId);
        assert!(ctx.snippet.starts_with("Python Developer: Python Developer role requiring FastAPI"));
        assert!(ctx.snippet.ends_with("..."));
    }

    #[test]
    fn snippet_is_truncated_to_150_chars() {
        let job = JobRecord::new("T", "x".repeat(400));
        let snippet = job_snippet(&job);
        assert_eq!(snippet, format!("T: {}...", "x".repeat(150)));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let job = JobRecord::new("Ingénieur", "é".repeat(200));
        let snippet = job_snippet(&job);
        assert_eq!(snippet.chars().filter(|c| *c == 'é').count(), 151);
    }

    #[test]
    fn short_description_is_kept_whole() {
        let snippet = job_snippet(&JobRecord::new("T", "short"));
        assert_eq!(snippet, "T: short...");
    }

    #[test]
    fn free_text_matches_job_text() {
        let ctx = tool().retrieve("tableau");
        assert_eq!(ctx.source, ContextSource::JobText);
        assert!(ctx.snippet.starts_with("Data Analyst:"));
    }

    #[test]
    fn first_job_by_id_wins_text_match() {
        // "Python" appears in J123 and J456; J123 sorts first.
        let ctx = tool().retrieve("python");
        assert!(ctx.snippet.starts_with("Python Developer:"));
    }

    #[test]
    fn tip_keyword_when_no_job_matches() {
        let ctx = tool().retrieve("experienced with SQL Server");
        assert_eq!(ctx.source, ContextSource::Tip);
        assert!(ctx.snippet.starts_with("Practice complex JOIN"));
    }

    #[test]
    fn generic_when_nothing_matches() {
        let ctx = tool().retrieve("X999");
        assert_eq!(ctx.source, ContextSource::Generic);
        assert_eq!(ctx.snippet, GENERIC_SNIPPET);
    }

    #[test]
    fn empty_query_is_generic() {
        assert_eq!(tool().retrieve("").source, ContextSource::Generic);
    }

    #[tokio::test]
    async fn execute_reports_source() {
        let result = tool()
            .execute(serde_json::json!({"query": "J789"}))
            .await
            .unwrap();
        assert!(result.output.starts_with("Frontend Developer:"));
        assert_eq!(result.data_str("source"), Some("job_id"));
    }

    #[test]
    fn unknown_job_id_skips_job_text() {
        // Each of these is a substring of some job's title or description.
        for id in ["SE", "DS", "AWS"] {
            assert_eq!(tool().retrieve(id).source, ContextSource::JobText);
            let ctx = tool().retrieve_for_job(id);
            assert_eq!(ctx.source, ContextSource::Generic, "{id}");
            assert_eq!(ctx.snippet, GENERIC_SNIPPET);
        }
    }

    #[test]
    fn job_id_lookup_still_uses_tip_keywords() {
        let ctx = tool().retrieve_for_job("react-frontend");
        assert_eq!(ctx.source, ContextSource::Tip);
    }

    #[test]
    fn known_job_id_lookup_matches_free_text_lookup() {
        assert_eq!(tool().retrieve_for_job("J456"), tool().retrieve("J456"));
    }

    #[tokio::test]
    async fn execute_with_job_id_argument() {
        let result = tool()
            .execute(serde_json::json!({"job_id": "DS"}))
            .await
            .unwrap();
        assert_eq!(result.output, GENERIC_SNIPPET);
        assert_eq!(result.data_str("source"), Some("generic"));
    }

    #[tokio::test]
    async fn non_string_job_id_is_invalid() {
        let result = tool().execute(serde_json::json!({"job_id": 7})).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[tokio::test]
    async fn non_string_query_is_invalid() {
        let result = tool().execute(serde_json::json!({"query": 42})).await;
        assert!(result.is_err());
    }
}
