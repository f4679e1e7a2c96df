//! Pure tic-tac-toe engine for gridmark.
//!
//! The engine owns all game state (board, current player, score, round
//! phase) and drives a frontend through the [`GameView`] capability trait,
//! so any rendering surface can host a game without the engine knowing
//! about terminals or widgets.
//!
//! # Architecture
//!
//! - **Types**: `Player`, `Square`, `Board`, plus `Cell` coordinates
//! - **Rules**: pure win/stalemate predicates over a board
//! - **View**: the `GameView` trait a renderer implements
//! - **Clock**: injectable time source and the round-reset timer
//! - **Session**: the round-lifecycle state machine tying it together
//!
//! # Example
//!
//! ```
//! use gridmark_core::{Cell, ClickOutcome, GameView, MonotonicClock, Session};
//!
//! # struct Headless;
//! # impl GameView for Headless {
//! #     fn render_board(&mut self, _: &gridmark_core::Board) {}
//! #     fn render_mark(&mut self, _: Cell, _: gridmark_core::Player) {}
//! #     fn clear_board(&mut self) {}
//! #     fn render_scoreboard(&mut self, _: &gridmark_core::Scoreboard) {}
//! #     fn update_score(&mut self, _: &gridmark_core::Scoreboard, _: gridmark_core::Player) {}
//! #     fn render_message(&mut self, _: Option<gridmark_core::Player>) {}
//! #     fn clear_message(&mut self) {}
//! # }
//! let mut session = Session::new(Headless, MonotonicClock::new());
//! let cell = Cell::new(1, 1).unwrap();
//! assert!(matches!(session.handle_click(cell), ClickOutcome::Placed));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod clock;
pub mod rules;
mod score;
mod session;
mod types;
mod view;

pub use cell::Cell;
pub use clock::{Clock, MonotonicClock, RESET_DELAY, ResetTimer};
pub use score::{Outcome, Scoreboard};
pub use session::{ClickOutcome, IgnoreReason, Session};
pub use types::{Board, Player, Square};
pub use view::GameView;
