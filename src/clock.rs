//! Per-turn countdown
//!
//! The engine itself has no notion of time. A front end keeps a
//! [`TurnClock`], polls it, and calls
//! [`TurnEngine::expire_turn`](crate::engine::TurnEngine::expire_turn) once it
//! runs out. Every method takes `now` explicitly so the clock is
//! deterministic under test.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct TurnClock {
    limit: Duration,
    started: Instant,
}

impl TurnClock {
    pub fn new(limit: Duration, now: Instant) -> Self {
        Self {
            limit,
            started: now,
        }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Start a fresh turn
    pub fn restart(&mut self, now: Instant) {
        self.started = now;
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    /// Time left, zero once expired
    pub fn remaining(&self, now: Instant) -> Duration {
        self.limit.saturating_sub(self.elapsed(now))
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.elapsed(now) >= self.limit
    }
}
