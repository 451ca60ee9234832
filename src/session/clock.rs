//! Elapsed-time counter.
//!
//! The clock doesn't read wall time. An external one-second ticker calls
//! `tick`; the session stops the clock when the game finishes and
//! restarts it on a new game.

use serde::{Deserialize, Serialize};

/// Seconds elapsed in the current game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElapsedClock {
    seconds: u64,
    running: bool,
}

impl Default for ElapsedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ElapsedClock {
    /// A running clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            seconds: 0,
            running: true,
        }
    }

    /// Advance by one second if running. Returns whether it advanced.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.seconds += 1;
        }
        self.running
    }

    /// Stop counting. The value is kept.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Reset to zero and start counting.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_and_stop() {
        let mut clock = ElapsedClock::new();
        assert!(clock.tick());
        assert!(clock.tick());
        assert_eq!(clock.seconds(), 2);

        clock.stop();
        assert!(!clock.tick());
        assert_eq!(clock.seconds(), 2);
        assert!(!clock.is_running());
    }

    #[test]
    fn test_restart() {
        let mut clock = ElapsedClock::new();
        clock.tick();
        clock.stop();

        clock.restart();
        assert_eq!(clock.seconds(), 0);
        assert!(clock.is_running());
    }
}
