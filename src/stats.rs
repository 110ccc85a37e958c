//! Per-module outcome tally
//!
//! Kept alongside the controller so a host (or the console driver) can show
//! how a session went.

use serde::{Deserialize, Serialize};

/// Counts of everything that happened to one module instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModuleStats {
    pub activations: u32,
    /// Presses that hit the correct button while active
    pub correct: u32,
    /// Presses that hit the wrong button while active
    pub incorrect: u32,
    pub timeouts: u32,
    /// Deactivations with no verdict
    pub deactivations: u32,
    /// Presses while inactive
    pub ignored_presses: u32,
}

impl ModuleStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strikes handed to the host
    pub fn strikes(&self) -> u32 {
        self.incorrect + self.timeouts
    }

    /// Passes handed to the host (every active press passes)
    pub fn passes(&self) -> u32 {
        self.correct + self.incorrect
    }

    /// Activations that ended with a press or a timeout
    pub fn resolved(&self) -> u32 {
        self.correct + self.incorrect + self.timeouts
    }

    /// Fraction of resolved activations solved correctly
    pub fn solve_rate(&self) -> Option<f32> {
        let resolved = self.resolved();
        if resolved == 0 {
            None
        } else {
            Some(self.correct as f32 / resolved as f32)
        }
    }
}
