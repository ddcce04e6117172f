//! `recruitem demo`: Walk through the sample scenarios.

use recruitem_agent::Orchestrator;
use recruitem_core::InputEvent;
use std::path::Path;

fn banner(title: &str) {
    println!("\n{}", "=".repeat(70));
    println!("{title}");
    println!("{}", "=".repeat(70));
}

pub async fn run(config_path: Option<&Path>, generate: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config_path).map_err(|e| format!("Failed to load config: {e}"))?;
    if generate && !config.has_api_key() {
        eprintln!("No generation API key set (RECRUITEM_API_KEY or ANTHROPIC_API_KEY); keyword tips will be used.");
    }
    let orchestrator = Orchestrator::from_config(&config);

    banner("EXAMPLE 1: Assessment invitation");
    let message = orchestrator
        .orchestrate("Sarah Johnson", "sarah.j@email.com", "Assessment", "J123", false)
        .await?;
    println!("{message}");

    banner("EXAMPLE 2: Interview preparation coaching");
    let message = orchestrator
        .orchestrate("Michael Chen", "m.chen@email.com", "Interview", "J456", generate)
        .await?;
    println!("{message}");

    banner("EXAMPLE 3: Batch processing");
    let events = vec![
        InputEvent::new("Alice", "alice@test.com", "Assessment", "J123"),
        InputEvent::new("Bob", "bob@test.com", "Interview", "J456").with_augmented_generation(generate),
        InputEvent::new("Carol", "carol@test.com", "Assessment", "J789"),
    ];
    for result in orchestrator.dispatch_batch(events).await {
        let outcome = result?;
        let first_line = outcome.message().lines().next().unwrap_or_default();
        println!("  {:<10} {:<11} {first_line}", outcome.state.candidate_name(), outcome.route.as_str());
    }

    banner("DEMONSTRATION COMPLETE");
    Ok(())
}
