//! Noughts and crosses: board, rules and the match loop.

mod game;
mod position;
mod rules;
mod types;

pub use game::{Match, Turn};
pub use position::Position;
pub use rules::{LINES, has_win, is_draw, legal_moves};
pub use types::{Board, Mark, MatchOutcome, Square};
