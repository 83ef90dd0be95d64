//! Board coordinates and the 1-9 keypad mapping.

use tracing::instrument;

/// A position on the board.
///
/// Numbered 1-9 on the keypad, left to right and top to bottom, which maps
/// to `row = (n - 1) / 3` and `col = (n - 1) % 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Top-left (key 1)
    TopLeft,
    /// Top-center (key 2)
    TopCenter,
    /// Top-right (key 3)
    TopRight,
    /// Middle-left (key 4)
    MiddleLeft,
    /// Center (key 5)
    Center,
    /// Middle-right (key 6)
    MiddleRight,
    /// Bottom-left (key 7)
    BottomLeft,
    /// Bottom-center (key 8)
    BottomCenter,
    /// Bottom-right (key 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from row and column, each 0-2.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Creates position from a keypad number (1-9).
    #[instrument]
    pub fn from_key(key: i64) -> Option<Self> {
        if (1..=9).contains(&key) {
            let n = (key - 1) as usize;
            Self::from_row_col(n / 3, n % 3)
        } else {
            None
        }
    }

    /// Keypad number (1-9) for this position.
    pub fn key(self) -> u8 {
        self.to_index() as u8 + 1
    }

    /// Row, 0-2.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column, 0-2.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping_matches_row_col() {
        for key in 1..=9i64 {
            let pos = Position::from_key(key).unwrap();
            assert_eq!(pos.row(), ((key - 1) / 3) as usize);
            assert_eq!(pos.col(), ((key - 1) % 3) as usize);
            assert_eq!(i64::from(pos.key()), key);
        }
    }

    #[test]
    fn test_key_out_of_range() {
        assert_eq!(Position::from_key(0), None);
        assert_eq!(Position::from_key(10), None);
        assert_eq!(Position::from_key(-4), None);
    }

    #[test]
    fn test_row_col_bounds() {
        assert_eq!(Position::from_row_col(2, 2), Some(Position::BottomRight));
        assert_eq!(Position::from_row_col(3, 0), None);
    }
}
