//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A position on the board, identified by zero-based (row, col).
///
/// Construction is the single bounds check in the crate: a `Cell` always
/// names one of the nine squares, so board access is infallible. Rendered
/// cells carry their `Cell` so a frontend can attribute clicks back to a
/// board position.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Creates a cell, returning `None` unless both coordinates are 0-2.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    /// Infallible constructor for coordinates known to be in range.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        assert!(row < 3 && col < 3);
        Self { row, col }
    }

    /// Row index (0-2).
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major index into the board (0-8).
    pub fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }

    /// All nine cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell::at(0, 0),
        Cell::at(0, 1),
        Cell::at(0, 2),
        Cell::at(1, 0),
        Cell::at(1, 1),
        Cell::at(1, 2),
        Cell::at(2, 0),
        Cell::at(2, 1),
        Cell::at(2, 2),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_coordinates() {
        let cell = Cell::new(2, 0).unwrap();
        assert_eq!(cell.row(), 2);
        assert_eq!(cell.col(), 0);
        assert_eq!(cell.index(), 6);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(Cell::new(3, 0).is_none());
        assert!(Cell::new(0, 3).is_none());
    }

    #[test]
    fn test_all_covers_board_in_row_major_order() {
        assert_eq!(Cell::ALL.len(), 9);
        for (i, cell) in Cell::ALL.iter().enumerate() {
            assert_eq!(cell.index(), i);
        }
    }
}
