//! The specialist agent contract and the tool-call plumbing both agents share.

use async_trait::async_trait;
use recruitem_core::tool::{ToolCall, ToolRegistry, ToolResult};
use recruitem_core::{AgentState, Result, Route, TraceEntry};
use tracing::debug;

/// A handler that drafts the candidate message for one route.
///
/// `process` fills `output_message`, advances the stage and appends trace
/// entries. It never touches the candidate or job identity fields.
#[async_trait]
pub trait Specialist: Send + Sync {
    fn route(&self) -> Route;

    async fn process(&self, state: AgentState) -> Result<AgentState>;
}

/// Execute a registered tool and record the call in the state's trace.
///
/// A result whose data carries `"source": "fallback"` also gets a
/// fallback entry with the reported reason.
pub(crate) async fn invoke_tool(
    tools: &ToolRegistry,
    state: &mut AgentState,
    name: &str,
    arguments: serde_json::Value,
) -> Result<ToolResult> {
    let call = ToolCall::new(name, arguments);
    debug!(tool = name, call_id = %call.id, "Invoking tool");

    let result = tools.execute(&call).await?;

    state.record(TraceEntry::ToolInvoked {
        tool: name.to_string(),
        arguments: call.arguments,
        summary: result.output.clone(),
    });

    if result.data_str("source") == Some("fallback") {
        state.record(TraceEntry::Fallback {
            tool: name.to_string(),
            reason: result
                .data_str("fallback_reason")
                .unwrap_or("unspecified")
                .to_string(),
        });
    }

    Ok(result)
}
