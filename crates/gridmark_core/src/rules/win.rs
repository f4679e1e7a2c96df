//! Win detection logic.

use crate::cell::Cell;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Checks whether `player` has a completed line through `cell`.
///
/// This is the hot path after a move: only the row, the column, and any
/// diagonal passing through the just-played cell can have been completed,
/// so only those lines are inspected.
#[instrument(skip(board))]
pub fn wins_through(board: &Board, cell: Cell, player: Player) -> bool {
    let mine = |c: Cell| board.get(c) == Square::Occupied(player);
    let (row, col) = (cell.row(), cell.col());

    if (0..3).all(|c| mine(Cell::at(row, c))) {
        return true;
    }
    if (0..3).all(|r| mine(Cell::at(r, col))) {
        return true;
    }
    // Main diagonal runs through (0,0)-(1,1)-(2,2), anti through (2,0)-(1,1)-(0,2).
    if row == col && (0..3).all(|i| mine(Cell::at(i, i))) {
        return true;
    }
    if row + col == 2 && (0..3).all(|i| mine(Cell::at(i, 2 - i))) {
        return true;
    }

    false
}

/// Checks for a winner anywhere on the board.
///
/// Scans all 8 lines; `Some(player)` if that player has three in a row.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    const LINES: [[Cell; 3]; 8] = [
        // Rows
        [Cell::at(0, 0), Cell::at(0, 1), Cell::at(0, 2)],
        [Cell::at(1, 0), Cell::at(1, 1), Cell::at(1, 2)],
        [Cell::at(2, 0), Cell::at(2, 1), Cell::at(2, 2)],
        // Columns
        [Cell::at(0, 0), Cell::at(1, 0), Cell::at(2, 0)],
        [Cell::at(0, 1), Cell::at(1, 1), Cell::at(2, 1)],
        [Cell::at(0, 2), Cell::at(1, 2), Cell::at(2, 2)],
        // Diagonals
        [Cell::at(0, 0), Cell::at(1, 1), Cell::at(2, 2)],
        [Cell::at(2, 0), Cell::at(1, 1), Cell::at(0, 2)],
    ];

    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: u8, col: u8) -> Cell {
        Cell::new(row, col).unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(cell(0, 0), Square::Occupied(Player::X));
        board.set(cell(0, 1), Square::Occupied(Player::X));
        board.set(cell(0, 2), Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), Some(Player::X));
        assert!(wins_through(&board, cell(0, 1), Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(cell(2, 0), Square::Occupied(Player::O));
        board.set(cell(1, 1), Square::Occupied(Player::O));
        board.set(cell(0, 2), Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), Some(Player::O));
        assert!(wins_through(&board, cell(0, 2), Player::O));
    }

    #[test]
    fn test_wins_through_only_sees_own_marks() {
        let mut board = Board::new();
        board.set(cell(1, 0), Square::Occupied(Player::X));
        board.set(cell(1, 1), Square::Occupied(Player::O));
        board.set(cell(1, 2), Square::Occupied(Player::X));
        assert!(!wins_through(&board, cell(1, 2), Player::X));
    }

    #[test]
    fn test_wins_through_checks_diagonal_only_from_diagonal_cell() {
        let mut board = Board::new();
        board.set(cell(0, 0), Square::Occupied(Player::X));
        board.set(cell(1, 1), Square::Occupied(Player::X));
        board.set(cell(2, 2), Square::Occupied(Player::X));
        assert!(wins_through(&board, cell(1, 1), Player::X));
        // An off-diagonal cell sees no completed row or column here.
        assert!(!wins_through(&board, cell(0, 1), Player::X));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let mut board = Board::new();
        board.set(cell(0, 0), Square::Occupied(Player::X));
        board.set(cell(0, 1), Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), None);
        assert!(!wins_through(&board, cell(0, 1), Player::X));
    }
}
