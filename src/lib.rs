//! CPU scheduling simulator.
//!
//! Simulates a fixed batch of processes under First-Come-First-Served,
//! preemptive Shortest-Remaining-Time and Round Robin, then derives
//! per-process and aggregate performance metrics. Nothing is executed;
//! the engines only compute timestamps on an integer clock.
//!
//! # Modules
//!
//! - **`models`**: `Process`, `SchedulerConfig`, and the `Schedule` result
//! - **`scheduler`**: the three engines behind `Algorithm::run`, plus
//!   `ScheduleMetrics`
//! - **`validation`**: input integrity checks
//! - **`input`**: process file parsing and writing
//! - **`report`**: text and JSON rendering
//! - **`session`**: the interactive menu loop
//! - **`workload`**: seeded random process sets
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::{Process, SchedulerConfig};
//! use cpu_schedule::scheduler::{Algorithm, ScheduleMetrics};
//!
//! let processes = vec![
//!     Process::new(1, 0, 5),
//!     Process::new(2, 1, 3),
//!     Process::new(3, 2, 1),
//! ];
//! let config = SchedulerConfig::new(1, 2);
//!
//! let schedule = Algorithm::Fcfs.run(&config, &processes).unwrap();
//! assert_eq!(schedule.record(3).unwrap().finish_time, Some(11));
//!
//! let metrics = ScheduleMetrics::calculate(&schedule, &config).unwrap();
//! assert_eq!(metrics.total_waiting_time, 13);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

pub mod error;
pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod session;
pub mod validation;
pub mod workload;

pub use error::ScheduleError;
