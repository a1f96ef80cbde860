//! Process model.
//!
//! A process is one CPU-bound task in the simulated batch. Its definition
//! is immutable once loaded: engines never write back into it, they produce
//! a fresh [`Schedule`](super::Schedule) instead.

use serde::{Deserialize, Serialize};

/// A process definition.
///
/// # Time Representation
/// All times are integer time units relative to the simulation epoch (t=0).
/// The rendered report labels them as milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique positive identifier (display only).
    pub id: u32,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time the process requires.
    pub burst_time: i64,
}

impl Process {
    /// Creates a process definition.
    pub fn new(id: u32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
        }
    }

    /// Earliest possible completion time, ignoring contention and switches.
    #[inline]
    pub fn earliest_finish(&self) -> i64 {
        self.arrival_time + self.burst_time
    }
}

/// Returns indices of `processes` in stable arrival order.
///
/// Equal arrival times keep their original relative order.
pub(crate) fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..processes.len()).collect();
    indices.sort_by_key(|&i| processes[i].arrival_time);
    indices
}
