//! Countdown timing discipline
//!
//! A single integer countdown drives both round formats: re-armed per
//! question in Millionaire, armed once as a global budget in the warm-up
//! round. The countdown knows nothing about modes, modals or pausing
//! rules; the game controller decides when `tick` is called. What the
//! countdown itself guarantees is that the remaining value never goes
//! negative and that expiry is reported exactly once per arming.

use serde::{Deserialize, Serialize};

/// Result of advancing a [`Countdown`] by one second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still counting; carries the post-decrement remaining value
    Running(u32),
    /// This tick consumed the final second; reported exactly once
    Expired,
    /// The countdown had already expired earlier; the tick was ignored
    Spent,
}

/// A one-shot countdown in whole seconds
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Countdown {
    /// Seconds left; never negative
    remaining: u32,
    /// Latch ensuring the expiry outcome fires only once per arming
    expired: bool,
}

impl Countdown {
    /// Arms a countdown with the given number of seconds
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            expired: false,
        }
    }

    /// Seconds left on the clock
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether the countdown has run out
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Re-arms the countdown with a fresh value and clears the expiry latch
    pub fn reset(&mut self, seconds: u32) {
        self.remaining = seconds;
        self.expired = false;
    }

    /// Advances the countdown by one second
    ///
    /// Returns [`TickOutcome::Expired`] exactly once, on the tick that
    /// consumes the final second; ticks after that are reported as
    /// [`TickOutcome::Spent`] and leave the value untouched.
    pub fn tick(&mut self) -> TickOutcome {
        if self.expired {
            return TickOutcome::Spent;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.expired = true;
            TickOutcome::Expired
        } else {
            TickOutcome::Running(self.remaining)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_to_expiry() {
        let mut countdown = Countdown::new(3);
        assert_eq!(countdown.tick(), TickOutcome::Running(2));
        assert_eq!(countdown.tick(), TickOutcome::Running(1));
        assert_eq!(countdown.tick(), TickOutcome::Expired);
        assert!(countdown.is_expired());
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn test_expiry_fires_exactly_once() {
        let mut countdown = Countdown::new(1);
        assert_eq!(countdown.tick(), TickOutcome::Expired);
        assert_eq!(countdown.tick(), TickOutcome::Spent);
        assert_eq!(countdown.tick(), TickOutcome::Spent);
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn test_zero_armed_countdown_expires_on_first_tick() {
        let mut countdown = Countdown::new(0);
        assert_eq!(countdown.tick(), TickOutcome::Expired);
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn test_reset_rearms_after_expiry() {
        let mut countdown = Countdown::new(1);
        assert_eq!(countdown.tick(), TickOutcome::Expired);
        countdown.reset(30);
        assert!(!countdown.is_expired());
        assert_eq!(countdown.remaining(), 30);
        assert_eq!(countdown.tick(), TickOutcome::Running(29));
    }

    #[test]
    fn test_remaining_never_negative() {
        let mut countdown = Countdown::new(2);
        for _ in 0..10 {
            countdown.tick();
            assert!(countdown.remaining() <= 2);
        }
        assert_eq!(countdown.remaining(), 0);
    }
}
