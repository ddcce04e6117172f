//! RecruitEM CLI: the main entry point.
//!
//! Commands:
//! - `dispatch`: route one candidate event and print the message
//! - `batch`: dispatch every event in a JSON array file
//! - `demo`: run the sample scenarios against the built-in catalog
//! - `config`: print the default configuration
//! - `doctor`: check configuration and generation setup

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "recruitem",
    about = "RecruitEM — route candidate status changes to assessment and interview messages",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    /// Configuration file (default: ~/.recruitem/config.toml)
    #[arg(short, long, global = true, env = "RECRUITEM_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Route one candidate event and print the resulting message
    Dispatch(commands::dispatch::DispatchArgs),

    /// Dispatch every event in a JSON array file
    Batch {
        /// Path to a JSON file holding an array of events
        file: PathBuf,

        /// Print full outcomes (route, metadata, trace) as JSON
        #[arg(long)]
        trace: bool,
    },

    /// Run the sample scenarios
    Demo {
        /// Ask the generation provider for interview tips
        #[arg(long)]
        generate: bool,
    },

    /// Print the default configuration as TOML
    Config,

    /// Diagnose configuration and generation setup
    Doctor,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only messages.
    let filter = if cli.verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Dispatch(args) => commands::dispatch::run(config_path, args).await?,
        Commands::Batch { file, trace } => commands::batch::run(config_path, &file, trace).await?,
        Commands::Demo { generate } => commands::demo::run(config_path, generate).await?,
        Commands::Config => commands::config_cmd::show()?,
        Commands::Doctor => commands::doctor::run(config_path).await?,
    }

    Ok(())
}
