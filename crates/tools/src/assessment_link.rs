//! Assessment link lookup tool.
//!
//! Maps a job title to its technical assessment URL. A title without a
//! dedicated assessment gets the catalog's general link.

use async_trait::async_trait;
use recruitem_core::catalog::Catalog;
use recruitem_core::error::ToolError;
use recruitem_core::tool::{Tool, ToolResult, required_str};
use std::sync::Arc;
use tracing::debug;

pub const TOOL_NAME: &str = "lookup_assessment_link";

/// A resolved assessment link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentLink {
    pub url: String,
    /// `false` when the general fallback link was used.
    pub catalog_hit: bool,
}

pub struct LookupAssessmentLinkTool {
    catalog: Arc<dyn Catalog>,
}

impl LookupAssessmentLinkTool {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    pub fn lookup(&self, job_title: &str) -> AssessmentLink {
        let (url, catalog_hit) = self.catalog.resolve_link(job_title);
        if !catalog_hit {
            debug!(job_title, "No dedicated assessment; using general link");
        }
        AssessmentLink { url, catalog_hit }
    }
}

#[async_trait]
impl Tool for LookupAssessmentLinkTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Look up the technical assessment link for a job title. Unknown titles get the general assessment."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "job_title": {
                    "type": "string",
                    "description": "Exact job title, e.g. \"Python Developer\""
                }
            },
            "required": ["job_title"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let job_title = required_str(&arguments, "job_title")?;
        let link = self.lookup(job_title);

        Ok(ToolResult::ok(link.url.clone()).with_data(serde_json::json!({
            "link": link.url,
            "catalog_hit": link.catalog_hit,
        })))
    }
}
