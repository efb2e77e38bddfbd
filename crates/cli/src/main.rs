//! Workshop console CLI - inspect and replay workshop booking state.
//!
//! # Usage
//!
//! ```bash
//! # Dashboard cards and chart counts for the built-in seed data
//! wsc dashboard
//!
//! # Dates with their time slots
//! wsc setup
//!
//! # Filter registrations
//! wsc customers --search tran --date 2025-08-20
//!
//! # Apply an action script and save the result
//! wsc --seed state.yaml replay script.yaml --strict --output after.json
//!
//! # Check a snapshot for consistency
//! wsc --seed state.json check
//! ```
//!
//! # Commands
//!
//! - `dashboard` - Headline statistics and registration counts
//! - `setup` - Workshop dates and time slots
//! - `customers` - Filtered registration list
//! - `replay` - Apply a YAML/JSON list of actions
//! - `check` - Report invariant violations

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod files;

use config::CliConfig;
use error::CliError;

#[derive(Parser)]
#[command(name = "wsc")]
#[command(author, version, about = "Workshop booking console tools")]
struct Cli {
    /// Starting snapshot (YAML or JSON). Falls back to `WSC_SEED_FILE`, then
    /// the built-in seed data.
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show dashboard statistics
    Dashboard,
    /// List workshop dates and their time slots
    Setup,
    /// List customer registrations
    Customers {
        /// Case-insensitive parent name, or phone substring
        #[arg(short, long)]
        search: Option<String>,

        /// Exact workshop date label (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Exact workshop time label
        #[arg(short, long)]
        time: Option<String>,
    },
    /// Apply an action script to the snapshot
    Replay {
        /// Script file (YAML or JSON list of actions)
        script: PathBuf,

        /// Reject actions that would break a capacity bound or reference
        /// missing entities
        #[arg(long)]
        strict: bool,

        /// Write the resulting snapshot as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check the snapshot for invariant violations
    Check {
        /// Replay this script (leniently) before checking
        #[arg(long)]
        script: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    let json_layer = json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_target(false));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = CliConfig::from_env()?;
    let seed = cli.seed.or(config.seed_file);
    let state = files::load_state(seed.as_deref()).await?;

    match cli.command {
        Commands::Dashboard => commands::dashboard::show(&state),
        Commands::Setup => commands::setup::show(&state),
        Commands::Customers { search, date, time } => {
            let filter = commands::customers::build_filter(search, date, time);
            commands::customers::show(&state, &filter);
        }
        Commands::Replay {
            script,
            strict,
            output,
        } => {
            let actions = files::load_script(&script).await?;
            let outcome = commands::replay::run(state, actions, strict || config.strict)?;
            commands::replay::report(&outcome);
            if let Some(output) = output {
                files::write_snapshot(&output, &outcome.state).await?;
            }
        }
        Commands::Check { script } => {
            let state = match script {
                Some(script) => {
                    let actions = files::load_script(&script).await?;
                    let outcome = commands::replay::run(state, actions, false)?;
                    commands::replay::report(&outcome);
                    outcome.state.as_ref().clone()
                }
                None => state,
            };
            commands::check::run(&state)?;
        }
    }
    Ok(())
}
