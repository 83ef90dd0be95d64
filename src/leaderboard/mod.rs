//! Persistent name-to-score leaderboard.

mod error;
mod models;
mod store;

pub use error::{LeaderboardError, LeaderboardErrorKind};
pub use models::{Leaderboard, LeaderboardEntry};
pub use store::LeaderboardStore;
