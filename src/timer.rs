//! A repeating timer for driving animation ticks from an event loop.
use std::time::{Duration, Instant};

/// Fires once every `interval`, as long as it is not cancelled.
///
/// The ticker never sleeps by itself. The owning loop waits for [`Ticker::remaining`] (for
/// instance while polling for input) and then calls [`Ticker::fire`].
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next: Instant,
    ticks: u64,
    cancelled: bool,
}

impl Ticker {
    /// A ticker whose first tick is due one `interval` after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next: now + interval,
            ticks: 0,
            cancelled: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next tick is due; zero if it is already due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Consumes a due tick. Returns `true` if one was due.
    ///
    /// Ticks stay on their original schedule, unless the caller is late by a whole
    /// interval or more: then the missed ticks are dropped and the schedule restarts at `now`.
    pub fn fire(&mut self, now: Instant) -> bool {
        if self.cancelled || now < self.next {
            return false;
        }
        self.next += self.interval;
        if self.next <= now {
            log::debug!(
                "ticker {:?} behind, skipping missed ticks",
                now.duration_since(self.next)
            );
            self.next = now + self.interval;
        }
        self.ticks += 1;
        true
    }

    /// Stops the ticker for good.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Number of ticks fired so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
