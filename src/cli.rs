//! Command-line interface for noughts.

use clap::Parser;
use noughts::{ConfigError, GameConfig};
use std::path::PathBuf;
use tracing::instrument;

/// Default configuration file, read only if present.
const DEFAULT_CONFIG: &str = "noughts.toml";

/// Noughts and crosses against a random computer opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Console noughts and crosses with a file-backed leaderboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to noughts.toml if it exists)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Leaderboard file, overriding the config
    #[arg(short, long)]
    pub leaderboard: Option<PathBuf>,

    /// Seed for the computer's moves, overriding the config
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Loads the config file and applies command-line overrides.
    ///
    /// An explicitly named config file must exist; the default one may not.
    #[instrument(skip(self))]
    pub fn resolve_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::from_file_or_default(DEFAULT_CONFIG)?,
        };
        if let Some(path) = &self.leaderboard {
            config = config.with_leaderboard_path(path);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config)
    }
}
