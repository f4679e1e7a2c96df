//! The rendering capability surface the engine drives.

use crate::cell::Cell;
use crate::score::Scoreboard;
use crate::types::{Board, Player};

/// Operations a frontend provides so the [`Session`](crate::Session) can
/// reflect state changes.
///
/// The engine is generic over this trait and never touches a real display,
/// which keeps it unit-testable with a recording fake. Implementations are
/// expected to be dumb: validation (occupied cells, waiting windows) is the
/// engine's job, and the view only mirrors what it is told.
pub trait GameView {
    /// (Re)builds the 3x3 grid for the given board. Called once when the
    /// session starts; each rendered cell must stay attributable to its
    /// [`Cell`] so clicks can be routed back to the engine.
    fn render_board(&mut self, board: &Board);

    /// Places a visual mark for `player` at `cell`. The engine only calls
    /// this for a cell it has just verified to be empty.
    fn render_mark(&mut self, cell: Cell, player: Player);

    /// Removes all marks, leaving the grid structure intact.
    fn clear_board(&mut self);

    /// Creates the persistent per-player win counters, seeded from `score`.
    fn render_scoreboard(&mut self, score: &Scoreboard);

    /// Refreshes the displayed count for exactly `player`.
    fn update_score(&mut self, score: &Scoreboard, player: Player);

    /// Shows the end-of-round message: "<player> wins!" for a winner,
    /// "Nobody wins!" for a stalemate.
    fn render_message(&mut self, winner: Option<Player>);

    /// Removes the end-of-round message. The engine always pairs this with
    /// an earlier [`render_message`](GameView::render_message); calling it
    /// with no message showing must be a no-op.
    fn clear_message(&mut self);
}
