//! Noughts and crosses - console entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use noughts::{App, Console, LeaderboardStore};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing();

    let config = cli.resolve_config()?;
    info!(
        leaderboard = %config.leaderboard_path().display(),
        seed = ?config.seed(),
        "Configuration resolved"
    );

    // Seeded once per process.
    let rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };

    let store = LeaderboardStore::new(config.leaderboard_path());
    let mut app = App::new(Console::stdio(), store, rng);
    app.run()
}

/// Logs go to stderr so they never interleave with the game on stdout.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
