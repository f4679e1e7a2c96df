//! Round-lifecycle state machine.
//!
//! A [`Session`] owns the board, the current player, the scoreboard, and
//! the round phase, and drives a [`GameView`] to reflect every change.
//! Rounds cycle indefinitely: play until a win or stalemate, show the
//! result for [`RESET_DELAY`](crate::RESET_DELAY), then clear the board
//! and play again. Scores carry across rounds.

use crate::cell::Cell;
use crate::clock::{Clock, RESET_DELAY, ResetTimer};
use crate::rules;
use crate::score::{Outcome, Scoreboard};
use crate::types::{Board, Player, Square};
use crate::view::GameView;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Why a click was ignored rather than played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// A round just ended; the reset timer has not fired yet.
    #[display("round transition in progress")]
    Waiting,
    /// The clicked cell already holds a mark.
    #[display("cell already occupied")]
    Occupied,
}

/// What a click did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The mark was placed and play continues with the other player.
    Placed,
    /// The mark was placed and it ended the round.
    RoundOver(Outcome),
    /// Nothing changed.
    Ignored(IgnoreReason),
}

/// Round phase. `RoundEnd` is the "waiting" window of the game: input is
/// ignored and a reset is pending.
#[derive(Debug, Clone, Copy)]
enum Phase {
    Active,
    RoundEnd { outcome: Outcome, timer: ResetTimer },
}

/// A running game session: the explicitly constructed context holding all
/// mutable state, in place of any global singleton.
///
/// `V` is the rendering surface, `C` the time source. The session calls
/// into the view on every state change and never reads from it.
#[derive(Debug)]
pub struct Session<V, C> {
    board: Board,
    current: Player,
    score: Scoreboard,
    phase: Phase,
    reset_delay: Duration,
    view: V,
    clock: C,
}

impl<V: GameView, C: Clock> Session<V, C> {
    /// Starts a session with the standard reset delay. Renders the
    /// scoreboard and the empty board; X moves first.
    pub fn new(view: V, clock: C) -> Self {
        Self::with_reset_delay(view, clock, RESET_DELAY)
    }

    /// Starts a session with a custom delay between round end and reset.
    pub fn with_reset_delay(mut view: V, clock: C, reset_delay: Duration) -> Self {
        let board = Board::new();
        let score = Scoreboard::new();
        view.render_scoreboard(&score);
        view.render_board(&board);
        Self {
            board,
            current: Player::X,
            score,
            phase: Phase::Active,
            reset_delay,
            view,
            clock,
        }
    }

    /// Handles a click on the given cell.
    ///
    /// No-op while the round-end window is open or when the cell is
    /// occupied. Otherwise places the current player's mark and advances
    /// the state machine: a completed line through the clicked cell wins
    /// the round, a full board without one is a stalemate, and anything
    /// else passes the turn.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn handle_click(&mut self, cell: Cell) -> ClickOutcome {
        if self.is_waiting() {
            debug!("ignoring click during round transition");
            return ClickOutcome::Ignored(IgnoreReason::Waiting);
        }
        if !self.board.is_empty(cell) {
            debug!("ignoring click on occupied cell");
            return ClickOutcome::Ignored(IgnoreReason::Occupied);
        }

        let player = self.current;
        self.board.set(cell, Square::Occupied(player));
        self.view.render_mark(cell, player);

        if rules::wins_through(&self.board, cell, player) {
            self.score.record_win(player);
            self.view.update_score(&self.score, player);
            return ClickOutcome::RoundOver(self.end_round(Outcome::Winner(player)));
        }
        if rules::is_full(&self.board) {
            return ClickOutcome::RoundOver(self.end_round(Outcome::Stalemate));
        }

        self.current = player.opponent();
        ClickOutcome::Placed
    }

    /// Fires the pending reset once its delay has elapsed.
    ///
    /// Call this every event-loop tick; it returns `true` when a reset ran.
    /// The current player deliberately carries over, so whoever was next to
    /// move (the winner after a win, the last mover after a stalemate)
    /// opens the following round.
    #[instrument(skip(self))]
    pub fn poll(&mut self) -> bool {
        let due = matches!(
            self.phase,
            Phase::RoundEnd { timer, .. } if timer.is_due(self.clock.now())
        );
        if !due {
            return false;
        }

        debug!("reset timer fired, starting next round");
        self.view.clear_message();
        self.view.clear_board();
        self.board.clear();
        self.phase = Phase::Active;
        true
    }

    fn end_round(&mut self, outcome: Outcome) -> Outcome {
        info!(%outcome, "round over");
        self.view.render_message(outcome.winner());
        let timer = ResetTimer::start(self.clock.now(), self.reset_delay);
        self.phase = Phase::RoundEnd { outcome, timer };
        outcome
    }

    /// The board as the engine sees it.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose move is next expected.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Win counts for both players.
    pub fn score(&self) -> &Scoreboard {
        &self.score
    }

    /// Whether the session is in the round-end window, ignoring input.
    pub fn is_waiting(&self) -> bool {
        matches!(self.phase, Phase::RoundEnd { .. })
    }

    /// The outcome of the round currently being displayed, if any.
    pub fn round_outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Active => None,
            Phase::RoundEnd { outcome, .. } => Some(outcome),
        }
    }

    /// Read access to the view, for frontends that draw from it.
    pub fn view(&self) -> &V {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell as StdCell;
    use std::rc::Rc;

    struct NullView;

    impl GameView for NullView {
        fn render_board(&mut self, _: &Board) {}
        fn render_mark(&mut self, _: Cell, _: Player) {}
        fn clear_board(&mut self) {}
        fn render_scoreboard(&mut self, _: &Scoreboard) {}
        fn update_score(&mut self, _: &Scoreboard, _: Player) {}
        fn render_message(&mut self, _: Option<Player>) {}
        fn clear_message(&mut self) {}
    }

    #[derive(Clone, Default)]
    struct FakeClock(Rc<StdCell<Duration>>);

    impl FakeClock {
        fn advance(&self, by: Duration) {
            self.0.set(self.0.get() + by);
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> Duration {
            self.0.get()
        }
    }

    fn cell(row: u8, col: u8) -> Cell {
        Cell::new(row, col).unwrap()
    }

    #[test]
    fn test_turns_alternate_on_plain_moves() {
        let mut session = Session::new(NullView, FakeClock::default());
        assert_eq!(session.current_player(), Player::X);
        session.handle_click(cell(0, 0));
        assert_eq!(session.current_player(), Player::O);
        session.handle_click(cell(1, 1));
        assert_eq!(session.current_player(), Player::X);
    }

    #[test]
    fn test_occupied_cell_keeps_turn_and_board() {
        let mut session = Session::new(NullView, FakeClock::default());
        session.handle_click(cell(0, 0));
        let before = session.board().clone();
        let outcome = session.handle_click(cell(0, 0));
        assert_eq!(outcome, ClickOutcome::Ignored(IgnoreReason::Occupied));
        assert_eq!(session.board(), &before);
        assert_eq!(session.current_player(), Player::O);
    }

    #[test]
    fn test_win_enters_waiting_and_reset_restores_active() {
        let clock = FakeClock::default();
        let mut session = Session::new(NullView, clock.clone());
        // X takes the top row, O plays elsewhere.
        session.handle_click(cell(0, 0));
        session.handle_click(cell(1, 0));
        session.handle_click(cell(0, 1));
        session.handle_click(cell(1, 1));
        let outcome = session.handle_click(cell(0, 2));
        assert_eq!(
            outcome,
            ClickOutcome::RoundOver(Outcome::Winner(Player::X))
        );
        assert!(session.is_waiting());
        assert_eq!(session.score().get(Player::X), 1);

        assert!(!session.poll());
        clock.advance(RESET_DELAY);
        assert!(session.poll());
        assert!(!session.is_waiting());
        assert_eq!(session.board(), &Board::new());
        // The winner, not the loser, opens the next round.
        assert_eq!(session.current_player(), Player::X);
    }
}
