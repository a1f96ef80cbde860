//! Scheduler configuration.

use serde::{Deserialize, Serialize};

/// Global simulation parameters shared by every algorithm run.
///
/// Threaded explicitly into each run; never mutated by an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Cost charged when the running process changes.
    pub context_switch: i64,
    /// Round Robin time slice.
    pub quantum: i64,
}

impl SchedulerConfig {
    /// Creates a configuration.
    pub fn new(context_switch: i64, quantum: i64) -> Self {
        Self {
            context_switch,
            quantum,
        }
    }

    /// Sets the context-switch cost.
    pub fn with_context_switch(mut self, context_switch: i64) -> Self {
        self.context_switch = context_switch;
        self
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::new(1, 1)
    }
}
