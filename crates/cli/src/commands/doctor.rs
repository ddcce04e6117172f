//! `recruitem doctor`: Diagnose configuration and generation setup.

use recruitem_core::{Catalog, Provider};
use std::path::Path;
use std::time::Duration;

pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    println!("🩺 RecruitEM Doctor — Diagnostics");
    println!("=================================\n");

    let mut issues = 0;

    let path = super::config_path(config_path);
    if path.exists() {
        println!("  ✅ Config file found at {}", path.display());
    } else {
        println!("  ℹ️  No config file at {} — using built-in defaults", path.display());
    }

    let config = match super::load_config(config_path) {
        Ok(config) => {
            println!("  ✅ Configuration valid");
            config
        }
        Err(e) => {
            println!("  ❌ Configuration invalid: {e}");
            println!("\n  ⚠️  1 issue(s) found. See above for details.");
            return Ok(());
        }
    };

    let catalog = config.catalog.to_catalog();
    println!(
        "  ✅ Catalog: {} jobs, {} assessment links, {} tips",
        catalog.jobs().len(),
        catalog.link_count(),
        config.tips.len()
    );

    match recruitem_providers::build_from_config(&config.generation) {
        Some(provider) => {
            println!(
                "  ✅ Generation: {} ({})",
                provider.name(),
                config.generation.model
            );
            match tokio::time::timeout(Duration::from_secs(10), provider.health_check()).await {
                Ok(Ok(true)) => println!("  ✅ Provider reachable"),
                Ok(Ok(false)) => {
                    println!("  ❌ Provider rejected the API key");
                    issues += 1;
                }
                Ok(Err(e)) => {
                    println!("  ⚠️  Provider unreachable: {e}");
                    issues += 1;
                }
                Err(_) => {
                    println!("  ⚠️  Provider health check timed out");
                    issues += 1;
                }
            }
        }
        None if config.has_api_key() => {
            println!(
                "  ⚠️  Unknown generation provider '{}' — keyword tips only",
                config.generation.provider
            );
            issues += 1;
        }
        None => {
            println!("  ℹ️  No generation API key — keyword tips only");
            println!("      Set RECRUITEM_API_KEY or ANTHROPIC_API_KEY to enable generated tips");
        }
    }

    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
