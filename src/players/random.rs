//! Computer player that picks uniformly among empty squares.

use super::Player;
use crate::Console;
use crate::games::noughts::{Board, Position, legal_moves};
use anyhow::Result;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Random-move computer player.
///
/// Owns its random source so a seeded generator gives a reproducible game.
#[derive(Debug, Clone)]
pub struct RandomPlayer<R> {
    name: String,
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    /// Creates a new random player drawing from `rng`.
    pub fn new(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    #[instrument(skip(self, board, _console), fields(player = %self.name))]
    fn choose_move(&mut self, board: &Board, _console: &mut Console) -> Result<Position> {
        let moves = legal_moves(board);
        let pos = moves
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(position = ?pos, candidates = moves.len(), "Computer chose position");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Transcript;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn console() -> Console {
        Console::new(Cursor::new(""), Transcript::new())
    }

    #[test]
    fn test_always_picks_an_empty_square() {
        let board = Board::from_rows([['X', 'O', ' '], ['X', ' ', 'O'], [' ', 'X', 'O']]);
        let allowed = legal_moves(&board);
        let mut computer = RandomPlayer::new("Computer", StdRng::seed_from_u64(7));
        let mut console = console();

        for _ in 0..200 {
            let pos = computer.choose_move(&board, &mut console).unwrap();
            assert!(allowed.contains(&pos));
        }
    }

    #[test]
    fn test_single_square_left() {
        let board = Board::from_rows([['X', 'O', 'X'], ['X', 'O', 'O'], ['O', 'X', ' ']]);
        let mut computer = RandomPlayer::new("Computer", StdRng::seed_from_u64(1));
        let pos = computer.choose_move(&board, &mut console()).unwrap();
        assert_eq!(pos, Position::BottomRight);
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomPlayer::new("A", StdRng::seed_from_u64(42));
        let mut b = RandomPlayer::new("B", StdRng::seed_from_u64(42));
        let mut console = console();
        for _ in 0..20 {
            assert_eq!(
                a.choose_move(&board, &mut console).unwrap(),
                b.choose_move(&board, &mut console).unwrap()
            );
        }
    }

    #[test]
    fn test_full_board_is_an_error() {
        let board = Board::from_rows([['X', 'O', 'X'], ['X', 'O', 'O'], ['O', 'X', 'X']]);
        let mut computer = RandomPlayer::new("Computer", StdRng::seed_from_u64(3));
        assert!(computer.choose_move(&board, &mut console()).is_err());
    }
}
