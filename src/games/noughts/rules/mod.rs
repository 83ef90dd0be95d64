//! Game rules for noughts and crosses.
//!
//! Pure functions for evaluating a board. Rules are separated from board
//! storage so the game loop and the move providers share one definition.

pub mod draw;
pub mod win;

pub use draw::{is_draw, legal_moves};
pub use win::{LINES, has_win};
