//! space-rover - drive a rover across its grid from the command line
//!
//! Usage: `space-rover [--config <path>] <commands>`
//!
//! Without `--config` the rover reads `space-rover.toml` from the working
//! directory when present, and falls back to the built-in 5x5 grid otherwise.
//!
//! Exit codes: `0` success, `1` rejected or failed command line, `2` usage
//! error, `3` invalid configuration.

use clap::Parser;
use space_rover::{PoseReport, RoverError, SpaceRoverConfig, describe_failure};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "space-rover.toml";

/// Drive a rover across its grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (default: ./space-rover.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Command line to execute, e.g. "FFRFF"
    commands: String,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("space_rover=info")),
        )
        .init();

    let args = Args::parse();

    match drive(&args) {
        Ok(report) => match serde_json::to_string(&report) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        },
        Err(e @ RoverError::Config(_)) => {
            error!("Invalid configuration: {}", e);
            eprintln!("{e}");
            ExitCode::from(3)
        }
        Err(e) => {
            eprintln!("{}", describe_failure(&e));
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<SpaceRoverConfig, RoverError> {
    let config = match path {
        Some(path) => SpaceRoverConfig::load(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            SpaceRoverConfig::load(Path::new(DEFAULT_CONFIG_PATH))?
        }
        None => {
            info!("Using default configuration");
            SpaceRoverConfig::default()
        }
    };
    Ok(config)
}

fn drive(args: &Args) -> Result<PoseReport, RoverError> {
    let interpreter = load_config(args.config.as_deref())?.build_interpreter()?;
    let pose = interpreter.run(&args.commands)?;
    Ok(PoseReport::from(pose))
}
