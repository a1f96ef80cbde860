//! CPU scheduling engines and schedule metrics.
//!
//! Three disciplines share one uniform entry point, [`Algorithm::run`]:
//!
//! | Algorithm | Preemptive | Selection |
//! |-----------|-----------|-----------|
//! | FCFS | No | Earliest arrival, input order on ties |
//! | SRT | Yes, at arrivals | Least remaining time, earlier arrival on ties |
//! | Round Robin | Yes, every quantum | FIFO ready queue |
//!
//! Each run takes an immutable process snapshot and returns a fresh
//! [`Schedule`]. Running any algorithm repeatedly over the same definitions
//! always yields the same result.
//!
//! # Context switches
//!
//! Engines charge `context_switch` time units to the clock at the points
//! their discipline defines and record every charge in the schedule, so
//! [`ScheduleMetrics`] can use the true switch overhead.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod metrics;
mod round_robin;
mod srt;

pub use fcfs::FcfsScheduler;
pub use metrics::{ProcessMetrics, ScheduleMetrics};
pub use round_robin::RoundRobinScheduler;
pub use srt::SrtScheduler;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ScheduleError;
use crate::models::{Process, Schedule, SchedulerConfig};
use crate::validation::validate_input;

/// A CPU scheduling discipline.
///
/// Implementations receive validated, non-empty input and must produce a
/// complete schedule.
pub trait CpuScheduler: fmt::Debug {
    /// Short name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Simulates the discipline over `processes`.
    fn schedule(&self, processes: &[Process], config: &SchedulerConfig) -> Schedule;

    /// Long name.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// The closed set of supported algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Preemptive Shortest-Remaining-Time.
    Srt,
    /// Round Robin with the configured quantum.
    RoundRobin,
}

impl Algorithm {
    /// All algorithms, in menu order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Fcfs, Algorithm::Srt, Algorithm::RoundRobin];

    /// Validates the input and runs the algorithm.
    ///
    /// # Errors
    /// - [`ScheduleError::EmptyWorkload`] if `processes` is empty.
    /// - [`ScheduleError::InvalidInput`] if definitions or config are invalid.
    pub fn run(
        &self,
        config: &SchedulerConfig,
        processes: &[Process],
    ) -> Result<Schedule, ScheduleError> {
        if processes.is_empty() {
            return Err(ScheduleError::EmptyWorkload);
        }
        validate_input(processes, config).map_err(ScheduleError::InvalidInput)?;

        let schedule = self.engine().schedule(processes, config);
        info!(
            algorithm = self.name(),
            processes = processes.len(),
            makespan = schedule.makespan(),
            context_switches = schedule.context_switch_count,
            "schedule complete"
        );
        Ok(schedule)
    }

    /// Short name.
    pub fn name(&self) -> &'static str {
        self.engine().name()
    }

    /// Long name.
    pub fn description(&self) -> &'static str {
        self.engine().description()
    }

    fn engine(&self) -> &'static dyn CpuScheduler {
        match self {
            Algorithm::Fcfs => &FcfsScheduler,
            Algorithm::Srt => &SrtScheduler,
            Algorithm::RoundRobin => &RoundRobinScheduler,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Algorithm::Fcfs),
            "srt" | "srtf" => Ok(Algorithm::Srt),
            "rr" | "round-robin" | "round_robin" | "roundrobin" => Ok(Algorithm::RoundRobin),
            other => Err(format!(
                "unknown algorithm '{other}' (expected fcfs, srt or rr)"
            )),
        }
    }
}
