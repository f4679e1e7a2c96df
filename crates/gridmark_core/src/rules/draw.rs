//! Stalemate detection logic.

use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a stalemate. The session only consults
/// this after win detection, so a final move that both fills the board and
/// completes a line is scored as a win.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::cell::Cell;
    use crate::types::Player;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Cell::new(1, 1).unwrap(), Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board_without_line_is_stalemate() {
        // X X O
        // O O X
        // X X O
        let marks = [
            Player::X,
            Player::X,
            Player::O,
            Player::O,
            Player::O,
            Player::X,
            Player::X,
            Player::X,
            Player::O,
        ];
        let mut board = Board::new();
        for (cell, player) in Cell::ALL.into_iter().zip(marks) {
            board.set(cell, Square::Occupied(player));
        }
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), None);
    }
}
