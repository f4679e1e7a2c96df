//! Session score and round outcomes.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Win counts for both players.
///
/// Scores accumulate across rounds within a session and are never
/// persisted outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
}

impl Scoreboard {
    /// Creates a scoreboard with both counts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the win count for the given player.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Credits the given player with one win.
    pub fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x_wins += 1,
            Player::O => self.o_wins += 1,
        }
    }
}

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// The player completed a line.
    #[display("{_0} wins!")]
    Winner(Player),
    /// The board filled with no completed line.
    #[display("Nobody wins!")]
    Stalemate,
}

impl Outcome {
    /// Returns the winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(player),
            Outcome::Stalemate => None,
        }
    }
}
