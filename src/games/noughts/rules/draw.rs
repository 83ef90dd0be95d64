//! Draw detection and legal-move enumeration.

use super::super::{Board, Position, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// Callers check for a win first: a full board with a completed line is a
/// win, not a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Returns every empty position, in row-major order.
#[instrument(skip(board))]
pub fn legal_moves(board: &Board) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::super::Mark;
    use super::super::win::has_win;
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_draw(&board));
        assert_eq!(legal_moves(&board).len(), 9);
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Mark::X));
        assert!(!is_draw(&board));
        let moves = legal_moves(&board);
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&Position::Center));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::from_rows([['X', 'O', 'X'], ['O', 'X', 'X'], ['O', 'X', 'O']]);
        assert!(is_draw(&board));
        assert!(legal_moves(&board).is_empty());
        assert!(!has_win(&board, Mark::X));
        assert!(!has_win(&board, Mark::O));
    }

    #[test]
    fn test_full_board_with_line_is_full() {
        let board = Board::from_rows([['X', 'X', 'X'], ['O', 'O', 'X'], ['X', 'O', 'O']]);
        assert!(is_draw(&board));
        assert!(has_win(&board, Mark::X));
    }
}
