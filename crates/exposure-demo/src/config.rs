//! Application configuration for the demo.

use std::path::PathBuf;

use clap::Parser;
use exposure_core::EngineConfig;

use crate::DemoError;

/// Widest aperture offered when no config file is given.
const DEFAULT_MIN_F: f64 = 2.0;
/// Narrowest aperture offered when no config file is given.
const DEFAULT_MAX_F: f64 = 32.0;

/// Starting exposure: f/5.6, 1/100 s, ISO 100, no bias.
pub const BASELINE: (f64, f64, f64, f64) = (5.6, 1.0 / 100.0, 100.0, 0.0);

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(author, version, about = "Line-oriented JSON driver for the exposure engine")]
pub struct AppConfig {
    /// JSON engine config. Missing fields use the full canonical span.
    #[arg(long, env = "EXPOSURE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the status line to stderr after every command.
    #[arg(long)]
    pub verbose: bool,
}

impl AppConfig {
    /// Load the engine config from `--config`, or fall back to f/2–f/32 with
    /// the full shutter span.
    pub fn engine_config(&self) -> Result<EngineConfig, DemoError> {
        match &self.config {
            Some(path) => {
                tracing::info!("loading engine config from {}", path.display());
                let json = std::fs::read_to_string(path)?;
                Ok(EngineConfig::from_json(&json)?)
            }
            None => Ok(EngineConfig::default().with_aperture(DEFAULT_MIN_F, DEFAULT_MAX_F)),
        }
    }
}
