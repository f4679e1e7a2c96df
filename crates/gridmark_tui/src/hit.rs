//! Click-to-cell attribution.

use gridmark_core::Cell;
use ratatui::layout::{Position, Rect};

/// Screen rectangles of the nine board cells, captured during the last
/// draw pass. This is how clicks are attributed: a rendered cell keeps its
/// `Cell` tag, and anything outside every rectangle is not a cell.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoardLayout {
    cells: [[Rect; 3]; 3],
}

impl BoardLayout {
    /// Records where `cell` was drawn.
    pub fn place(&mut self, cell: Cell, area: Rect) {
        self.cells[cell.row() as usize][cell.col() as usize] = area;
    }

    /// Resolves a terminal coordinate to the board cell under it, or
    /// `None` for clicks outside the grid (separators included).
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Cell> {
        let position = Position::new(column, row);
        Cell::ALL.into_iter().find(|cell| {
            self.cells[cell.row() as usize][cell.col() as usize].contains(position)
        })
    }
}
