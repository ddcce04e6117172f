//! Per-call orchestration state and its execution trace.
//!
//! An [`AgentState`] is created fresh for every dispatch, owned by that
//! one call, and dropped once the output message has been extracted.
//! Nothing here is shared between candidates.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::JobRecord;
use crate::error::{Error, Result};
use crate::event::InputEvent;

/// The specialist branch selected for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Test logistics: send the assessment link.
    Assessment,
    /// Preparation coaching for an upcoming interview.
    Interview,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Assessment => "assessment",
            Route::Interview => "interview",
        }
    }

    /// The terminal stage reached when this route's specialist finishes.
    pub fn completed_stage(&self) -> Stage {
        match self {
            Route::Assessment => Stage::AssessmentCompleted,
            Route::Interview => Stage::InterviewCompleted,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a single orchestration call currently is.
///
/// There is one initial stage and two terminal stages; the router's
/// one-shot decision picks which terminal stage is reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    StateBuilt,
    AssessmentCompleted,
    InterviewCompleted,
}

impl Stage {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Stage::StateBuilt)
    }
}

/// One step recorded during a dispatch. Entries carry no timestamps so
/// identical inputs produce identical traces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEntry {
    /// State initialized from the event and the job catalog.
    StateBuilt {
        job_id: String,
        job_title: String,
        /// `false` when the job id was unknown and the generic job was used.
        catalog_hit: bool,
    },
    /// The router's decision.
    RouteSelected { status: String, route: Route },
    /// A tool call with its arguments and a short result summary.
    ToolInvoked {
        tool: String,
        arguments: serde_json::Value,
        summary: String,
    },
    /// A capability degraded to its default path.
    Fallback { tool: String, reason: String },
    /// The specialist finished its message.
    MessageDrafted { agent: Route, characters: usize },
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEntry::StateBuilt {
                job_id,
                job_title,
                catalog_hit,
            } => {
                write!(f, "state built: job '{job_id}' → {job_title}")?;
                if !catalog_hit {
                    f.write_str(" (generic job)")?;
                }
                Ok(())
            }
            TraceEntry::RouteSelected { status, route } => {
                write!(f, "router: status '{status}' → {route}")
            }
            TraceEntry::ToolInvoked {
                tool,
                arguments,
                summary,
            } => write!(f, "tool {tool}({arguments}) → {summary}"),
            TraceEntry::Fallback { tool, reason } => {
                write!(f, "fallback in {tool}: {reason}")
            }
            TraceEntry::MessageDrafted { agent, characters } => {
                write!(f, "{agent} agent drafted {characters} characters")
            }
        }
    }
}

/// Append-only record of the steps taken during one dispatch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace(Vec<TraceEntry>);

impl Trace {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an entry. It is also mirrored to the debug log.
    pub fn push(&mut self, entry: TraceEntry) {
        tracing::debug!(step = self.0.len(), "{entry}");
        self.0.push(entry);
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &TraceEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any capability fell back to its default path.
    pub fn has_fallback(&self) -> bool {
        self.0
            .iter()
            .any(|e| matches!(e, TraceEntry::Fallback { .. }))
    }
}

/// Mutable record flowing through the router and one specialist.
///
/// The candidate and job fields are fixed at construction and only
/// readable afterwards. `output_message` stays empty until
/// [`AgentState::complete`] is called, which may happen exactly once.
#[derive(Debug, Clone, Serialize)]
pub struct AgentState {
    job_id: String,
    candidate_name: String,
    candidate_email: String,
    status: String,
    job_title: String,
    job_description: String,
    candidate_profile: String,
    use_augmented_generation: bool,
    output_message: String,
    stage: Stage,
    trace: Trace,
}

impl AgentState {
    /// Build the initial state for an event and its resolved job record.
    pub fn new(event: InputEvent, job: JobRecord) -> Self {
        Self {
            job_id: event.job_id,
            candidate_name: event.candidate_name,
            candidate_email: event.candidate_email,
            status: event.status,
            job_title: job.title,
            job_description: job.description,
            candidate_profile: event.candidate_profile,
            use_augmented_generation: event.use_augmented_generation,
            output_message: String::new(),
            stage: Stage::StateBuilt,
            trace: Trace::new(),
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn candidate_name(&self) -> &str {
        &self.candidate_name
    }

    pub fn candidate_email(&self) -> &str {
        &self.candidate_email
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn candidate_profile(&self) -> &str {
        &self.candidate_profile
    }

    pub fn use_augmented_generation(&self) -> bool {
        self.use_augmented_generation
    }

    pub fn output_message(&self) -> &str {
        &self.output_message
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Append a trace entry.
    pub fn record(&mut self, entry: TraceEntry) {
        self.trace.push(entry);
    }

    /// Store the specialist's message and move to the route's terminal stage.
    ///
    /// Fails if the message is blank or a specialist already completed.
    pub fn complete(&mut self, route: Route, message: String) -> Result<()> {
        if self.stage.is_terminal() {
            return Err(Error::Internal(format!(
                "state already completed as {:?}",
                self.stage
            )));
        }
        if message.trim().is_empty() {
            return Err(Error::Internal(format!(
                "{route} agent produced an empty message"
            )));
        }
        self.record(TraceEntry::MessageDrafted {
            agent: route,
            characters: message.chars().count(),
        });
        self.output_message = message;
        self.stage = route.completed_stage();
        Ok(())
    }

    /// Consume the state and return the message.
    pub fn into_message(self) -> String {
        self.output_message
    }
}
