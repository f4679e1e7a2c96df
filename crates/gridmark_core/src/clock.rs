//! Time source abstraction and the round-reset timer.

use std::time::{Duration, Instant};

/// How long a finished round stays on screen before the board resets.
pub const RESET_DELAY: Duration = Duration::from_millis(2500);

/// Monotonic time source with an arbitrary origin.
///
/// The session reads time only through this trait, so tests substitute a
/// settable clock and drive round transitions deterministically.
pub trait Clock {
    /// Elapsed time since the clock's origin.
    fn now(&self) -> Duration;
}

/// Production clock backed by [`Instant`].
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Creates a clock whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A pending board reset, scheduled when a round ends.
///
/// The timer is plain data: it records when it fires and is polled from
/// the event loop rather than running on a background thread. Dropping it
/// (by leaving the round-end phase) cancels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTimer {
    fires_at: Duration,
}

impl ResetTimer {
    /// Schedules a timer to fire `delay` after `now`.
    pub fn start(now: Duration, delay: Duration) -> Self {
        Self {
            fires_at: now + delay,
        }
    }

    /// Whether the timer has reached its deadline.
    pub fn is_due(&self, now: Duration) -> bool {
        now >= self.fires_at
    }

    /// The instant (in clock time) at which the timer fires.
    pub fn fires_at(&self) -> Duration {
        self.fires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_not_due_before_deadline() {
        let timer = ResetTimer::start(Duration::from_secs(1), Duration::from_millis(2500));
        assert!(!timer.is_due(Duration::from_millis(3499)));
        assert!(timer.is_due(Duration::from_millis(3500)));
        assert!(timer.is_due(Duration::from_secs(10)));
    }

    #[test]
    fn test_monotonic_clock_advances() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
