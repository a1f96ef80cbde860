//! CPU scheduling domain models.
//!
//! Provides the input definitions and the simulation result types.
//!
//! # Ownership
//!
//! | Type | Role | Mutated by engines? |
//! |------|------|---------------------|
//! | Process | Input definition | Never |
//! | SchedulerConfig | Global parameters | Never |
//! | Schedule | One run's result | Built by exactly one engine run |

mod config;
mod process;
mod schedule;

pub use config::SchedulerConfig;
pub use process::Process;
pub use schedule::{ProcessRecord, Schedule, Slice};

pub(crate) use process::arrival_order;
