//! Retained view-model implementing the engine's view surface.

use gridmark_core::{Board, Cell, GameView, Player, Scoreboard};

/// What the terminal currently shows: marks, score counters, and the
/// optional end-of-round message.
///
/// The engine mutates this through [`GameView`]; the draw pass in
/// [`ui`](crate::ui) reads it back each frame. It holds no game logic and
/// never second-guesses the engine.
#[derive(Debug, Default)]
pub struct TuiView {
    marks: [[Option<Player>; 3]; 3],
    x_score: u32,
    o_score: u32,
    message: Option<String>,
}

impl TuiView {
    /// Creates an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// The mark shown at `cell`, if any.
    pub fn mark(&self, cell: Cell) -> Option<Player> {
        self.marks[cell.row() as usize][cell.col() as usize]
    }

    /// The displayed win count for `player`.
    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_score,
            Player::O => self.o_score,
        }
    }

    /// The end-of-round message, if one is showing.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl GameView for TuiView {
    fn render_board(&mut self, board: &Board) {
        for cell in Cell::ALL {
            self.marks[cell.row() as usize][cell.col() as usize] =
                match board.get(cell) {
                    gridmark_core::Square::Empty => None,
                    gridmark_core::Square::Occupied(player) => Some(player),
                };
        }
    }

    fn render_mark(&mut self, cell: Cell, player: Player) {
        self.marks[cell.row() as usize][cell.col() as usize] = Some(player);
    }

    fn clear_board(&mut self) {
        self.marks = [[None; 3]; 3];
    }

    fn render_scoreboard(&mut self, score: &Scoreboard) {
        self.x_score = score.get(Player::X);
        self.o_score = score.get(Player::O);
    }

    fn update_score(&mut self, score: &Scoreboard, player: Player) {
        match player {
            Player::X => self.x_score = score.get(player),
            Player::O => self.o_score = score.get(player),
        }
    }

    fn render_message(&mut self, winner: Option<Player>) {
        self.message = Some(match winner {
            Some(player) => format!("{player} wins!"),
            None => "Nobody wins!".to_string(),
        });
    }

    fn clear_message(&mut self) {
        self.message = None;
    }
}
