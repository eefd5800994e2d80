use core::num::Saturating;
use serde::{Deserialize, Serialize};

/// Elapsed-time counter, advanced one unit per tick while running.
///
/// Ticks come from outside (an interval in the browser, direct calls in tests), a stopped timer
/// ignores them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timer {
    elapsed: Saturating<u32>,
    running: bool,
}

impl Timer {
    pub const fn new() -> Self {
        Self {
            elapsed: Saturating(0),
            running: false,
        }
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed.0
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns whether the timer was stopped before.
    pub fn start(&mut self) -> bool {
        !core::mem::replace(&mut self.running, true)
    }

    /// Returns whether the timer was running before.
    pub fn stop(&mut self) -> bool {
        core::mem::replace(&mut self.running, false)
    }

    /// Returns the new running state.
    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns whether the elapsed time changed.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.elapsed += 1;
        }
        self.running
    }
}
