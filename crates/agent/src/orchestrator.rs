//! The orchestrator: build state, route, run one specialist, return the message.
//!
//! ```text
//! InputEvent ──▶ build_state ──▶ route(status) ──┬─▶ AssessmentAgent ──┐
//!                (catalog)                       └─▶ InterviewAgent  ──┴─▶ output_message
//! ```
//!
//! One call is strictly sequential. The orchestrator holds only
//! read-only shared data, so any number of calls may run side by side.

use recruitem_core::catalog::Catalog;
use recruitem_core::tool::ToolRegistry;
use recruitem_core::{AgentState, InputEvent, Result, Route, TraceEntry};
use recruitem_tools::{assessment_link, prep_tip};
use serde::Serialize;
use std::sync::Arc;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::assessment::AssessmentAgent;
use crate::interview::InterviewAgent;
use crate::messages::MessageStyle;
use crate::router;
use crate::specialist::Specialist;

/// The key artifact a specialist produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Artifact {
    AssessmentLink { url: String },
    PreparationTip { tip: String },
}

/// Which agent ran and what it handed the candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchMetadata {
    pub agent: Route,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<Artifact>,
}

impl DispatchMetadata {
    /// Read the artifact back from the tool calls in the trace.
    fn from_state(route: Route, state: &AgentState) -> Self {
        let wanted = match route {
            Route::Assessment => assessment_link::TOOL_NAME,
            Route::Interview => prep_tip::TOOL_NAME,
        };
        let artifact = state.trace().iter().find_map(|entry| match entry {
            TraceEntry::ToolInvoked { tool, summary, .. } if tool == wanted => {
                Some(match route {
                    Route::Assessment => Artifact::AssessmentLink {
                        url: summary.clone(),
                    },
                    Route::Interview => Artifact::PreparationTip {
                        tip: summary.clone(),
                    },
                })
            }
            _ => None,
        });
        Self {
            agent: route,
            artifact,
        }
    }
}

/// Result of one dispatch.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchOutcome {
    /// Correlates log lines for this call; never part of the message.
    pub dispatch_id: Uuid,
    pub route: Route,
    pub metadata: DispatchMetadata,
    pub state: AgentState,
}

impl DispatchOutcome {
    pub fn message(&self) -> &str {
        self.state.output_message()
    }

    pub fn into_message(self) -> String {
        self.state.into_message()
    }
}

/// Routes events to the specialist agents.
pub struct Orchestrator {
    catalog: Arc<dyn Catalog>,
    assessment: AssessmentAgent,
    interview: InterviewAgent,
}

impl Orchestrator {
    /// Create an orchestrator over a catalog and a registry holding the
    /// dispatcher tools (see `recruitem_tools::default_registry`).
    pub fn new(catalog: Arc<dyn Catalog>, tools: Arc<ToolRegistry>, style: MessageStyle) -> Self {
        Self {
            catalog,
            assessment: AssessmentAgent::new(tools.clone(), style.clone()),
            interview: InterviewAgent::new(tools, style),
        }
    }

    /// Build the initial state for an event, resolving its job.
    pub fn build_state(&self, event: InputEvent) -> AgentState {
        let (job, catalog_hit) = self.catalog.resolve_job(&event.job_id);
        if !catalog_hit {
            warn!(job_id = %event.job_id, "Unknown job id; using generic job");
        }

        let job_id = event.job_id.clone();
        let job_title = job.title.clone();
        let mut state = AgentState::new(event, job);
        state.record(TraceEntry::StateBuilt {
            job_id,
            job_title,
            catalog_hit,
        });
        state
    }

    /// Produce the candidate message for one status change.
    pub async fn orchestrate(
        &self,
        candidate_name: &str,
        candidate_email: &str,
        status: &str,
        job_id: &str,
        use_augmented_generation: bool,
    ) -> Result<String> {
        let event = InputEvent::new(candidate_name, candidate_email, status, job_id)
            .with_augmented_generation(use_augmented_generation);
        Ok(self.dispatch(event).await?.into_message())
    }

    /// Run one event through the pipeline and return the full outcome.
    pub async fn dispatch(&self, event: InputEvent) -> Result<DispatchOutcome> {
        let dispatch_id = Uuid::new_v4();
        let route = router::route(&event.status);
        let span = info_span!("dispatch", %dispatch_id, route = route.as_str());

        async move {
            info!(job_id = %event.job_id, "Dispatch started");

            let mut state = self.build_state(event);
            state.record(TraceEntry::RouteSelected {
                status: state.status().to_string(),
                route,
            });

            let state = self.specialist(route).process(state).await?;
            let metadata = DispatchMetadata::from_state(route, &state);

            info!(
                stage = ?state.stage(),
                fallback = state.trace().has_fallback(),
                "Dispatch finished"
            );

            Ok::<_, recruitem_core::Error>(DispatchOutcome {
                dispatch_id,
                route,
                metadata,
                state,
            })
        }
        .instrument(span)
        .await
    }

    /// Dispatch each event in order, each with its own state.
    ///
    /// A failing event does not stop the rest of the batch.
    pub async fn dispatch_batch(&self, events: Vec<InputEvent>) -> Vec<Result<DispatchOutcome>> {
        let mut outcomes = Vec::with_capacity(events.len());
        for event in events {
            outcomes.push(self.dispatch(event).await);
        }
        outcomes
    }

    fn specialist(&self, route: Route) -> &dyn Specialist {
        match route {
            Route::Assessment => &self.assessment,
            Route::Interview => &self.interview,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{FailingProvider, ScriptedProvider, SlowProvider};
    use recruitem_core::{Provider, Stage, StaticCatalog, TipTable};
    use recruitem_tools::{DelegatedTip, KeywordTip, default_registry};
    use std::time::Duration;

    fn orchestrator_with(provider: Option<Arc<dyn Provider>>) -> Orchestrator {
        let catalog: Arc<dyn Catalog> = Arc::new(StaticCatalog::builtin());
        let tips = Arc::new(TipTable::builtin());
        let delegated = provider.map(|p| {
            DelegatedTip::new(p, KeywordTip::new(tips.clone()), "m")
                .with_timeout(Duration::from_secs(5))
        });
        let tools = default_registry(catalog.clone(), tips, delegated);
        Orchestrator::new(catalog, Arc::new(tools), MessageStyle::default())
    }

    fn orchestrator() -> Orchestrator {
        orchestrator_with(None)
    }

    #[tokio::test]
    async fn assessment_for_known_job() {
        let msg = orchestrator()
            .orchestrate("Alice Chen", "alice@email.com", "Assessment", "J123", false)
            .await
            .unwrap();
        assert!(msg.contains("Alice Chen"));
        assert!(msg.contains("https://assess.example.com/python"));
    }

    #[tokio::test]
    async fn interview_for_known_job() {
        let msg = orchestrator()
            .orchestrate("Bob", "bob@x.com", "Interview", "J456", false)
            .await
            .unwrap();
        assert!(msg.contains("Bob"));
        assert!(TipTable::builtin().entries().iter().any(|e| msg.contains(&e.tip)));
    }

    #[tokio::test]
    async fn unknown_job_is_generic() {
        let outcome = orchestrator()
            .dispatch(InputEvent::new("Carol", "c@x.com", "assessment", "NOPE"))
            .await
            .unwrap();

        assert_eq!(outcome.state.job_title(), "Software Engineer");
        assert!(outcome.message().contains("Carol"));
        assert!(outcome.message().contains("https://assess.example.com/general"));
        assert!(matches!(
            &outcome.state.trace().entries()[0],
            TraceEntry::StateBuilt { catalog_hit: false, .. }
        ));
    }

    #[tokio::test]
    async fn empty_status_routes_to_interview() {
        let outcome = orchestrator()
            .dispatch(InputEvent::new("Dan", "d@x.com", "", "J789"))
            .await
            .unwrap();
        assert_eq!(outcome.route, Route::Interview);
        assert_eq!(outcome.state.stage(), Stage::InterviewCompleted);
    }

    #[tokio::test]
    async fn identical_inputs_give_identical_messages() {
        let orch = orchestrator();
        let a = orch.orchestrate("Eve", "e@x.com", "interview", "J101", false).await.unwrap();
        let b = orch.orchestrate("Eve", "e@x.com", "interview", "J101", false).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn trace_follows_pipeline_order() {
        let outcome = orchestrator()
            .dispatch(InputEvent::new("Alice", "a@x.com", "ASSESSMENT", "J123"))
            .await
            .unwrap();
        let kinds: Vec<&str> = outcome
            .state
            .trace()
            .iter()
            .map(|e| match e {
                TraceEntry::StateBuilt { .. } => "state_built",
                TraceEntry::RouteSelected { .. } => "route_selected",
                TraceEntry::ToolInvoked { .. } => "tool_invoked",
                TraceEntry::Fallback { .. } => "fallback",
                TraceEntry::MessageDrafted { .. } => "message_drafted",
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["state_built", "route_selected", "tool_invoked", "message_drafted"]
        );
    }

    #[tokio::test]
    async fn metadata_carries_link() {
        let outcome = orchestrator()
            .dispatch(InputEvent::new("Alice", "a@x.com", "assessment", "J789"))
            .await
            .unwrap();
        assert_eq!(outcome.metadata.agent, Route::Assessment);
        assert_eq!(
            outcome.metadata.artifact,
            Some(Artifact::AssessmentLink {
                url: "https://assess.example.com/frontend".into()
            })
        );
    }

    #[tokio::test]
    async fn metadata_carries_tip() {
        let outcome = orchestrator()
            .dispatch(InputEvent::new("Bob", "b@x.com", "interview", "J101"))
            .await
            .unwrap();
        assert_eq!(
            outcome.metadata.artifact,
            Some(Artifact::PreparationTip {
                tip: "Know the difference between Deployments, StatefulSets, and DaemonSets."
                    .into()
            })
        );
    }

    #[tokio::test]
    async fn failing_provider_matches_keyword_path() {
        let plain = orchestrator()
            .orchestrate("Bob", "b@x.com", "interview", "J123", false)
            .await
            .unwrap();
        let outcome = orchestrator_with(Some(Arc::new(FailingProvider) as Arc<dyn Provider>))
            .dispatch(
                InputEvent::new("Bob", "b@x.com", "interview", "J123").with_augmented_generation(true),
            )
            .await
            .unwrap();

        assert_eq!(outcome.message(), plain);
        assert!(outcome.state.trace().has_fallback());
    }

    #[tokio::test(start_paused = true)]
    async fn slow_provider_times_out_to_keyword_tip() {
        let outcome = orchestrator_with(Some(Arc::new(SlowProvider) as Arc<dyn Provider>))
            .dispatch(
                InputEvent::new("Bob", "b@x.com", "interview", "J789").with_augmented_generation(true),
            )
            .await
            .unwrap();

        assert!(outcome.message().contains("virtual DOM"));
        let reason = outcome.state.trace().iter().find_map(|e| match e {
            TraceEntry::Fallback { reason, .. } => Some(reason.clone()),
            _ => None,
        });
        assert_eq!(reason.as_deref(), Some("generation timed out after 5s"));
    }

    #[tokio::test]
    async fn generation_requested_without_provider() {
        let outcome = orchestrator()
            .dispatch(
                InputEvent::new("Bob", "b@x.com", "interview", "J123").with_augmented_generation(true),
            )
            .await
            .unwrap();
        assert!(outcome.state.trace().iter().any(|e| matches!(
            e,
            TraceEntry::Fallback { reason, .. } if reason == "generation provider not configured"
        )));
    }

    #[tokio::test]
    async fn generated_tip_reaches_message() {
        let provider = Arc::new(ScriptedProvider::text("Walk through a FastAPI project end to end."));
        let outcome = orchestrator_with(Some(provider.clone() as Arc<dyn Provider>))
            .dispatch(
                InputEvent::new("Bob", "b@x.com", "interview", "J123").with_augmented_generation(true),
            )
            .await
            .unwrap();

        assert!(outcome.message().contains("Walk through a FastAPI project end to end."));
        assert!(!outcome.state.trace().has_fallback());
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn generation_flag_ignored_on_assessment_route() {
        let provider = Arc::new(ScriptedProvider::new(vec![]));
        orchestrator_with(Some(provider.clone() as Arc<dyn Provider>))
            .dispatch(
                InputEvent::new("A", "a@x.com", "assessment", "J123").with_augmented_generation(true),
            )
            .await
            .unwrap();
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn batch_keeps_states_separate() {
        let events = vec![
            InputEvent::new("Alice Chen", "alice@email.com", "Assessment", "J123"),
            InputEvent::new("Bob", "bob@x.com", "Interview", "J456"),
            InputEvent::new("Carol", "carol@x.com", "interview", "X999"),
        ];
        let outcomes = orchestrator().dispatch_batch(events).await;

        assert_eq!(outcomes.len(), 3);
        let outcomes: Vec<DispatchOutcome> = outcomes.into_iter().map(|o| o.unwrap()).collect();
        assert_eq!(outcomes[0].route, Route::Assessment);
        assert_eq!(outcomes[1].route, Route::Interview);
        assert!(outcomes[2].message().contains("Carol"));
        assert!(!outcomes[1].message().contains("Alice"));
        assert_ne!(outcomes[0].dispatch_id, outcomes[1].dispatch_id);
    }

    #[tokio::test]
    async fn outcome_serializes_with_trace() {
        let outcome = orchestrator()
            .dispatch(InputEvent::new("Alice", "a@x.com", "assessment", "J123"))
            .await
            .unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["route"], "assessment");
        assert_eq!(json["metadata"]["artifact"]["kind"], "assessment_link");
        assert_eq!(json["state"]["trace"][0]["kind"], "state_built");
    }
}
