//! `recruitem dispatch`: Route one candidate event.

use clap::Args;
use recruitem_agent::{DispatchOutcome, Orchestrator};
use recruitem_core::InputEvent;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct DispatchArgs {
    /// Read the event from a JSON file instead of flags
    #[arg(long, conflicts_with_all = ["name", "email", "status", "job_id"])]
    pub event: Option<PathBuf>,

    /// Candidate name
    #[arg(long, required_unless_present = "event")]
    pub name: Option<String>,

    /// Candidate email
    #[arg(long, default_value = "")]
    pub email: String,

    /// Recruitment status, e.g. "Assessment" or "Interview"
    #[arg(long, required_unless_present = "event")]
    pub status: Option<String>,

    /// Job posting id, e.g. "J123"
    #[arg(long, required_unless_present = "event")]
    pub job_id: Option<String>,

    /// Ask the generation provider for the interview tip
    #[arg(long)]
    pub generate: bool,

    /// Free text about the candidate, added to the generation prompt
    #[arg(long)]
    pub profile: Option<String>,

    /// Print the full outcome (route, metadata, trace) as JSON
    #[arg(long)]
    pub trace: bool,
}

impl DispatchArgs {
    fn into_event(self) -> Result<InputEvent, Box<dyn std::error::Error>> {
        if let Some(path) = &self.event {
            let mut event = read_event_file(path)?;
            if self.generate {
                event.use_augmented_generation = true;
            }
            if let Some(profile) = self.profile {
                event.candidate_profile = profile;
            }
            return Ok(event);
        }

        let event = InputEvent::new(
            self.name.unwrap_or_default(),
            self.email,
            self.status.unwrap_or_default(),
            self.job_id.unwrap_or_default(),
        )
        .with_augmented_generation(self.generate)
        .with_candidate_profile(self.profile.unwrap_or_default());
        Ok(event)
    }
}

fn read_event_file(path: &Path) -> Result<InputEvent, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    Ok(InputEvent::from_json(value)?)
}

/// Print an outcome: the message alone, or the whole outcome as JSON.
pub fn print_outcome(outcome: &DispatchOutcome, trace: bool) -> Result<(), Box<dyn std::error::Error>> {
    if trace {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    } else {
        println!("{}", outcome.message());
    }
    Ok(())
}

pub async fn run(config_path: Option<&Path>, args: DispatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config_path).map_err(|e| format!("Failed to load config: {e}"))?;
    let trace = args.trace;
    let event = args.into_event()?;

    let orchestrator = Orchestrator::from_config(&config);
    let outcome = orchestrator.dispatch(event).await?;
    print_outcome(&outcome, trace)
}
