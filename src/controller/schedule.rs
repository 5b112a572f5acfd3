//! Deferred automated turns.
//!
//! The computer's move is played after a short delay so a human can follow
//! it. A pending turn is plain data: the driver decides when time has
//! passed and asks the controller to fire it. Each pending turn carries the
//! game generation it was scheduled in, so a turn scheduled before a
//! restart can never act on the new game.

use std::time::{Duration, Instant};

/// An automated turn waiting to be played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingTurn {
    /// Game generation the turn belongs to.
    pub generation: u64,
    /// Earliest instant the turn may be played.
    pub due: Instant,
}

impl PendingTurn {
    /// Schedule a turn `delay` after `now`.
    #[must_use]
    pub fn new(generation: u64, now: Instant, delay: Duration) -> Self {
        Self {
            generation,
            due: now + delay,
        }
    }

    /// Check if the turn may be played at `now`.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }

    /// Time left until the turn is due (zero if already due).
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.due.saturating_duration_since(now)
    }
}
