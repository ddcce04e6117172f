//! Interview specialist: coaches the candidate ahead of an interview.
//!
//! Two tool calls feed the message: a role-context snippet keyed by the
//! job id, then one preparation tip derived from the job description.

use async_trait::async_trait;
use recruitem_core::tool::ToolRegistry;
use recruitem_core::{AgentState, Result, Route};
use recruitem_tools::{context_retrieval, prep_tip};
use std::sync::Arc;
use tracing::debug;

use crate::messages::MessageStyle;
use crate::specialist::{Specialist, invoke_tool};

pub struct InterviewAgent {
    tools: Arc<ToolRegistry>,
    style: MessageStyle,
}

impl InterviewAgent {
    pub fn new(tools: Arc<ToolRegistry>, style: MessageStyle) -> Self {
        Self { tools, style }
    }
}

#[async_trait]
impl Specialist for InterviewAgent {
    fn route(&self) -> Route {
        Route::Interview
    }

    async fn process(&self, mut state: AgentState) -> Result<AgentState> {
        let arguments = serde_json::json!({ "job_id": state.job_id() });
        let context = invoke_tool(&self.tools, &mut state, context_retrieval::TOOL_NAME, arguments)
            .await?
            .output;

        let mut arguments = serde_json::json!({
            "job_description": state.job_description(),
            "use_augmented_generation": state.use_augmented_generation(),
        });
        if !state.candidate_profile().is_empty() {
            arguments["candidate_profile"] = serde_json::json!(state.candidate_profile());
        }
        let tip_result = invoke_tool(&self.tools, &mut state, prep_tip::TOOL_NAME, arguments).await?;

        debug!(
            job_id = state.job_id(),
            tip_source = tip_result.data_str("source").unwrap_or("keyword"),
            "Drafting interview coaching message"
        );

        let message = self.style.interview(
            state.candidate_name(),
            state.job_title(),
            &tip_result.output,
            &context,
        );
        state.complete(Route::Interview, message)?;
        Ok(state)
    }
}
