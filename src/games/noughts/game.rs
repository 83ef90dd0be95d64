//! One match between the human and the computer.

use super::rules::{has_win, is_draw};
use super::types::{Board, Mark, MatchOutcome, Square};
use crate::Console;
use crate::players::Player;
use anyhow::Result;
use tracing::{debug, info, instrument};

/// Where a match currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Waiting on the given mark to move.
    ToMove(Mark),
    /// Match is over.
    Finished(MatchOutcome),
}

/// A single match. Owns its board for the whole match.
///
/// The human plays [`Mark::X`] and always moves first; the computer plays
/// [`Mark::O`]. A match cannot be resumed once it has finished.
#[derive(Debug, Clone)]
pub struct Match {
    board: Board,
    turn: Turn,
}

impl Match {
    /// Creates a match on a fresh board.
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Creates a match, clearing whatever `board` held.
    pub fn from_board(mut board: Board) -> Self {
        board.initialise();
        Self {
            board,
            turn: Turn::ToMove(Mark::X),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns whose turn it is, or the outcome.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Plays the match to completion and returns its outcome.
    ///
    /// Each half-turn places a mark, renders the board, then checks for a
    /// win by that mark before checking for a draw.
    #[instrument(skip_all, fields(human = %human.name(), computer = %computer.name()))]
    pub fn play(
        mut self,
        human: &mut dyn Player,
        computer: &mut dyn Player,
        console: &mut Console,
    ) -> Result<MatchOutcome> {
        info!("Starting match");

        loop {
            let mark = match self.turn {
                Turn::ToMove(mark) => mark,
                Turn::Finished(outcome) => {
                    console.say(outcome)?;
                    info!(?outcome, score = outcome.score(), "Match finished");
                    return Ok(outcome);
                }
            };

            let player: &mut dyn Player = match mark {
                Mark::X => &mut *human,
                Mark::O => {
                    console.say("Computer move:")?;
                    &mut *computer
                }
            };

            self.half_turn(mark, player, console)?;
        }
    }

    /// Places one mark and advances the turn.
    fn half_turn(
        &mut self,
        mark: Mark,
        player: &mut dyn Player,
        console: &mut Console,
    ) -> Result<()> {
        let pos = player.choose_move(&self.board, console)?;
        if !self.board.is_empty(pos) {
            anyhow::bail!("{} chose occupied square {}", player.name(), pos);
        }

        self.board.set(pos, Square::Occupied(mark));
        debug!(%mark, position = ?pos, "Mark placed");
        console.write(self.board.render())?;

        self.turn = if has_win(&self.board, mark) {
            Turn::Finished(MatchOutcome::won_by(mark))
        } else if is_draw(&self.board) {
            Turn::Finished(MatchOutcome::Draw)
        } else {
            Turn::ToMove(mark.opponent())
        };
        Ok(())
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}
