//! Player trait and implementations.

mod human;
mod random;

pub use human::HumanPlayer;
pub use random::RandomPlayer;

use crate::Console;
use crate::games::noughts::{Board, Position};
use anyhow::Result;

/// Trait for anything that can choose a move.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// The returned position is always empty on `board`.
    fn choose_move(&mut self, board: &Board, console: &mut Console) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
