//! `recruitem batch`: Dispatch a JSON array of events.

use recruitem_agent::Orchestrator;
use recruitem_core::InputEvent;
use std::path::Path;

use super::dispatch::print_outcome;

pub async fn run(config_path: Option<&Path>, file: &Path, trace: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config_path).map_err(|e| format!("Failed to load config: {e}"))?;

    let content = std::fs::read_to_string(file)
        .map_err(|e| format!("Failed to read {}: {e}", file.display()))?;
    let events = InputEvent::list_from_json(serde_json::from_str(&content)?)?;
    let total = events.len();

    let orchestrator = Orchestrator::from_config(&config);
    let mut failed = 0;

    for (i, result) in orchestrator.dispatch_batch(events).await.into_iter().enumerate() {
        match result {
            Ok(outcome) => {
                if !trace {
                    println!(
                        "=== [{}/{total}] {} ({}) ===",
                        i + 1,
                        outcome.state.candidate_name(),
                        outcome.route
                    );
                }
                print_outcome(&outcome, trace)?;
                if !trace {
                    println!();
                }
            }
            Err(e) => {
                eprintln!("event #{i} failed: {e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(format!("{failed} of {total} events failed").into());
    }
    Ok(())
}
