//! Draw detection logic for tic-tac-toe.

use super::win::has_won;
use crate::{Board, Mark, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board on which neither mark holds a line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !has_won(board, Mark::X) && !has_won(board, Mark::O)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    const X: Square = Square::Occupied(Mark::X);
    const O: Square = Square::Occupied(Mark::O);
    const E: Square = Square::Empty;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(Position::Center, Mark::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::from_rows([[X, O, X], [O, X, X], [O, X, O]]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        // X X X / O O X / X O O
        let board = Board::from_rows([[X, X, X], [O, O, X], [X, O, O]]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_one_gap_is_not_draw() {
        let board = Board::from_rows([[X, O, X], [O, X, X], [O, X, E]]);
        assert!(!is_draw(&board));
    }
}
