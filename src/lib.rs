//! Noughts and crosses library - console game against a random opponent
//!
//! # Architecture
//!
//! - **Games**: board, rules and the match loop
//! - **Players**: human (console input) and random computer move providers
//! - **Leaderboard**: name-to-score mapping stored as a JSON file
//! - **App**: the menu-driven session tying them together
//!
//! # Example
//!
//! ```no_run
//! use noughts::{App, Console, LeaderboardStore};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn example() -> anyhow::Result<()> {
//! let store = LeaderboardStore::new("leaderboard.txt");
//! let mut app = App::new(Console::stdio(), store, StdRng::seed_from_u64(7));
//! app.run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod app;
mod config;
mod console;
mod games;
mod leaderboard;
mod menu;
mod players;

// Crate-level exports - Session
pub use app::App;
pub use menu::MenuChoice;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console I/O
pub use console::{Console, Transcript};

// Crate-level exports - Game types
pub use games::noughts::{
    Board, LINES, Mark, Match, MatchOutcome, Position, Square, Turn, has_win, is_draw,
    legal_moves,
};

// Crate-level exports - Players
pub use players::{HumanPlayer, Player, RandomPlayer};

// Crate-level exports - Leaderboard
pub use leaderboard::{
    Leaderboard, LeaderboardEntry, LeaderboardError, LeaderboardErrorKind, LeaderboardStore,
};
