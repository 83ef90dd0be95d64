//! Core domain types for noughts and crosses.

use super::position::Position;
use tracing::instrument;

/// Mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Crosses, played by the human (moves first).
    X,
    /// Noughts, played by the computer.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Character drawn for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(mark) => mark.symbol(),
        }
    }
}

/// Horizontal rule drawn above, between and below rows.
const RULE: &str = " ----------- ";

/// 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from rows of symbols (`'X'`, `'O'`, anything else is empty).
    pub fn from_rows(rows: [[char; 3]; 3]) -> Self {
        let mut board = Self::new();
        for pos in Position::ALL {
            let square = match rows[pos.row()][pos.col()] {
                'X' => Square::Occupied(Mark::X),
                'O' => Square::Occupied(Mark::O),
                _ => Square::Empty,
            };
            board.set(pos, square);
        }
        board
    }

    /// Resets every square to empty.
    #[instrument(skip(self))]
    pub fn initialise(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a fixed-width grid, one line per row plus rules.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(RULE);
        out.push('\n');
        for row in self.squares.chunks(3) {
            let cells: Vec<String> = row.iter().map(|s| s.symbol().to_string()).collect();
            out.push_str(&format!("| {} |\n", cells.join(" | ")));
            out.push_str(RULE);
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Result of a finished match, from the human's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchOutcome {
    /// The human completed a line.
    PlayerWon,
    /// The computer completed a line.
    ComputerWon,
    /// Board filled with no line.
    Draw,
}

impl MatchOutcome {
    /// Score recorded for this outcome: +1, -1 or 0.
    pub fn score(self) -> i64 {
        match self {
            MatchOutcome::PlayerWon => 1,
            MatchOutcome::ComputerWon => -1,
            MatchOutcome::Draw => 0,
        }
    }

    /// Outcome for the side holding `mark` completing a line.
    pub fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::X => MatchOutcome::PlayerWon,
            Mark::O => MatchOutcome::ComputerWon,
        }
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::PlayerWon => write!(f, "You won!"),
            MatchOutcome::ComputerWon => write!(f, "You lose!"),
            MatchOutcome::Draw => write!(f, "It's a draw!"),
        }
    }
}
