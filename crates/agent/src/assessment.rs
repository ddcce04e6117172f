//! Assessment specialist: invites the candidate to a technical assessment.

use async_trait::async_trait;
use recruitem_core::tool::ToolRegistry;
use recruitem_core::{AgentState, Result, Route};
use recruitem_tools::assessment_link;
use std::sync::Arc;
use tracing::debug;

use crate::messages::MessageStyle;
use crate::specialist::{Specialist, invoke_tool};

pub struct AssessmentAgent {
    tools: Arc<ToolRegistry>,
    style: MessageStyle,
}

impl AssessmentAgent {
    pub fn new(tools: Arc<ToolRegistry>, style: MessageStyle) -> Self {
        Self { tools, style }
    }
}

#[async_trait]
impl Specialist for AssessmentAgent {
    fn route(&self) -> Route {
        Route::Assessment
    }

    async fn process(&self, mut state: AgentState) -> Result<AgentState> {
        let arguments = serde_json::json!({ "job_title": state.job_title() });
        let link = invoke_tool(&self.tools, &mut state, assessment_link::TOOL_NAME, arguments)
            .await?
            .output;

        debug!(job_title = state.job_title(), %link, "Drafting assessment invitation");

        let message = self
            .style
            .assessment(state.candidate_name(), state.job_title(), &link);
        state.complete(Route::Assessment, message)?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recruitem_core::{InputEvent, JobRecord, Stage, StaticCatalog, TipTable, TraceEntry};
    use recruitem_tools::default_registry;

    fn agent() -> AssessmentAgent {
        let registry = default_registry(
            Arc::new(StaticCatalog::builtin()),
            Arc::new(TipTable::builtin()),
            None,
        );
        AssessmentAgent::new(Arc::new(registry), MessageStyle::default())
    }

    fn state(title: &str) -> AgentState {
        AgentState::new(
            InputEvent::new("Alice Chen", "alice@email.com", "assessment", "J123"),
            JobRecord::new(title, "desc"),
        )
    }

    #[tokio::test]
    async fn message_contains_link_and_title() {
        let out = agent().process(state("Python Developer")).await.unwrap();

        assert_eq!(out.stage(), Stage::AssessmentCompleted);
        assert!(out.output_message().contains("Alice Chen"));
        assert!(out.output_message().contains("Python Developer"));
        assert!(out.output_message().contains("https://assess.example.com/python"));
    }

    #[tokio::test]
    async fn unknown_title_uses_general_link() {
        let out = agent().process(state("Software Engineer")).await.unwrap();
        assert!(out.output_message().contains("https://assess.example.com/general"));
    }

    #[tokio::test]
    async fn trace_records_lookup() {
        let out = agent().process(state("Data Analyst")).await.unwrap();
        let entries = out.trace().entries();

        assert!(matches!(
            &entries[0],
            TraceEntry::ToolInvoked { tool, summary, .. }
                if tool == "lookup_assessment_link" && summary == "https://assess.example.com/data"
        ));
        assert!(matches!(entries.last(), Some(TraceEntry::MessageDrafted { agent: Route::Assessment, .. })));
    }

    #[tokio::test]
    async fn identity_fields_are_untouched() {
        let out = agent().process(state("Python Developer")).await.unwrap();
        assert_eq!(out.candidate_email(), "alice@email.com");
        assert_eq!(out.status(), "assessment");
        assert_eq!(out.job_id(), "J123");
    }

    #[tokio::test]
    async fn missing_tool_is_an_error() {
        let agent = AssessmentAgent::new(Arc::new(ToolRegistry::new()), MessageStyle::default());
        let err = agent.process(state("Python Developer")).await.unwrap_err();
        assert!(err.to_string().contains("lookup_assessment_link"));
    }
}
