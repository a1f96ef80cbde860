//! Schedule performance metrics.
//!
//! Derives per-process and aggregate indicators from a completed schedule.
//! Engines never compute these; they only produce timestamps.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | finish - arrival |
//! | Waiting | turnaround - burst |
//! | Response | start - arrival |
//! | Active time | max(finish) - arrival of the first record |
//! | CPU utilization | 100 * (active - switch time) / active |
//! | Throughput | processes / active time |
//!
//! Utilization uses the switch time the engine actually charged. The
//! uniform `context_switch * (n - 1)` estimate is kept alongside as
//! `nominal_switch_time` for comparison.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ScheduleError;
use crate::models::{Schedule, SchedulerConfig};

/// Metrics for one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub id: u32,
    /// First dispatch time.
    pub start_time: i64,
    /// Completion time.
    pub finish_time: i64,
    /// Time spent ready but not running.
    pub waiting_time: i64,
    /// Time from arrival to completion.
    pub turnaround_time: i64,
    /// Time from arrival to first dispatch.
    pub response_time: i64,
}

/// Aggregate schedule performance indicators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Per-process rows, in schedule record order.
    pub processes: Vec<ProcessMetrics>,
    /// Sum of waiting times.
    pub total_waiting_time: i64,
    /// Sum of turnaround times.
    pub total_turnaround_time: i64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Window from the first record's arrival to the last completion.
    pub active_time: i64,
    /// Context switches charged by the engine.
    pub context_switch_count: usize,
    /// Time charged for those switches.
    pub context_switch_time: i64,
    /// `context_switch * (n - 1)`: one switch per adjacent record pair.
    pub nominal_switch_time: i64,
    /// Percentage of the active window not spent switching (0.0..=100.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit of the active window.
    pub throughput: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from a completed schedule.
    ///
    /// # Errors
    /// - [`ScheduleError::EmptyWorkload`] if the schedule has no records.
    /// - [`ScheduleError::IncompleteSchedule`] if any process never finished.
    pub fn calculate(schedule: &Schedule, config: &SchedulerConfig) -> Result<Self, ScheduleError> {
        let first = schedule
            .records
            .first()
            .ok_or(ScheduleError::EmptyWorkload)?;

        let mut processes = Vec::with_capacity(schedule.len());
        for record in &schedule.records {
            let (Some(start_time), Some(finish_time)) = (record.start_time, record.finish_time)
            else {
                return Err(ScheduleError::IncompleteSchedule(record.id));
            };
            let turnaround_time = finish_time - record.arrival_time;
            processes.push(ProcessMetrics {
                id: record.id,
                start_time,
                finish_time,
                waiting_time: turnaround_time - record.burst_time,
                turnaround_time,
                response_time: start_time - record.arrival_time,
            });
        }

        let count = processes.len() as f64;
        let total_waiting_time: i64 = processes.iter().map(|p| p.waiting_time).sum();
        let total_turnaround_time: i64 = processes.iter().map(|p| p.turnaround_time).sum();
        let total_response_time: i64 = processes.iter().map(|p| p.response_time).sum();

        let active_time = schedule.makespan() - first.arrival_time;
        let nominal_switch_time = config.context_switch * (processes.len() as i64 - 1);
        if nominal_switch_time != schedule.context_switch_time {
            debug!(
                charged = schedule.context_switch_time,
                nominal = nominal_switch_time,
                "switch time differs from one-per-adjacent-pair estimate"
            );
        }

        let (cpu_utilization, throughput) = if active_time > 0 {
            let busy = (active_time - schedule.context_switch_time) as f64;
            (
                (100.0 * busy / active_time as f64).clamp(0.0, 100.0),
                count / active_time as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Ok(Self {
            processes,
            total_waiting_time,
            total_turnaround_time,
            avg_waiting_time: total_waiting_time as f64 / count,
            avg_turnaround_time: total_turnaround_time as f64 / count,
            avg_response_time: total_response_time as f64 / count,
            active_time,
            context_switch_count: schedule.context_switch_count,
            context_switch_time: schedule.context_switch_time,
            nominal_switch_time,
            cpu_utilization,
            throughput,
        })
    }

    /// Row for one process.
    pub fn process(&self, id: u32) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|p| p.id == id)
    }
}
