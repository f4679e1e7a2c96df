//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from board
//! storage so the session state machine and tests share one definition of
//! winning and stalemate.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{check_winner, wins_through};
