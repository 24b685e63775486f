//! Robot Cameraman CLI: offline tooling for the control core.
//!
//! Usage:
//!   cameraman replay <FILE>    Replay recorded detections through the mode manager
//!   cameraman config           Show the effective configuration

use std::path::PathBuf;

use cameraman_model::modes::StrategyKind;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "cameraman",
    about = "Pan/tilt/zoom control for a camera gimbal following a subject",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to $XDG_CONFIG_HOME/cameraman/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSONL file of per-frame detections and print the resulting speeds
    Replay {
        /// Path to the JSONL frame file
        path: PathBuf,

        /// Frame rate the detections were recorded at
        #[arg(
            long,
            default_value = "15",
            value_parser = clap::value_parser!(u32).range(1..=1000)
        )]
        fps: u32,

        /// Pace frames in real time instead of simulating the clock
        #[arg(long)]
        realtime: bool,

        /// Strategy family: simple|configurable
        #[arg(long)]
        strategy: Option<StrategyKind>,

        /// Dead-band radius in pixels
        #[arg(long)]
        variance: Option<f64>,
    },

    /// Print the effective configuration as JSON
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = commands::load_config(cli.config.as_deref())?;
    let mut config = loaded.config;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    cameraman_common::logging::init_logging(&config.logging);
    if let Some(warning) = loaded.warning {
        tracing::warn!("{warning}");
    }

    match cli.command {
        Commands::Replay {
            path,
            fps,
            realtime,
            strategy,
            variance,
        } => {
            if let Some(strategy) = strategy {
                config.tracking.strategy = strategy;
            }
            if let Some(variance) = variance {
                config.tracking.variance = variance;
            }
            commands::replay::run(path, fps, realtime, &config).await
        }
        Commands::Config => commands::config::run(&config),
    }
}
