//! Input validation for scheduling runs.
//!
//! Checks process definitions and configuration before any engine runs.
//! Detects:
//! - Empty workloads
//! - Duplicate or zero process IDs
//! - Negative arrival times and non-positive bursts
//! - Negative context-switch cost and non-positive quantum
//! - Workloads whose simulated clock would overflow
//!
//! All problems are collected, not just the first.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Process, SchedulerConfig};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyWorkload,
    /// Two processes share the same ID.
    DuplicateId,
    /// Process ID is zero.
    InvalidId,
    /// Arrival time is before the simulation epoch.
    NegativeArrival,
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Context-switch cost is negative.
    NegativeContextSwitch,
    /// Round Robin quantum is zero or negative.
    NonPositiveQuantum,
    /// Simulated times or their sums would not fit in `i64`.
    TimeOverflow,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the process definitions and configuration of a run.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. No zero process IDs
/// 4. Arrival times are non-negative
/// 5. Burst times are positive
/// 6. Context-switch cost is non-negative
/// 7. Quantum is positive
/// 8. The latest possible finish time, and the sum of all turnaround
///    times, fit in `i64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process], config: &SchedulerConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkload,
            "No processes to schedule",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidId,
                "Process ID must be positive",
            ));
        } else if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process P{} has negative arrival time {}", p.id, p.arrival_time),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process P{} has non-positive burst time {}", p.id, p.burst_time),
            ));
        }
    }

    if let Err(config_errors) = validate_config(config) {
        errors.extend(config_errors);
    }

    if errors.is_empty() && simulation_horizon(processes, config).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Arrival, burst and context-switch times are too large to simulate",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the simulation parameters alone.
///
/// Checks that the context-switch cost is non-negative and the quantum is
/// positive.
pub fn validate_config(config: &SchedulerConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.context_switch < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeContextSwitch,
            format!("Context switch cost must be non-negative, got {}", config.context_switch),
        ));
    }

    if config.quantum <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Quantum must be positive, got {}", config.quantum),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on every clock value any engine can reach.
///
/// The clock only moves by idling up to an arrival, executing a burst, or
/// charging a switch. Switches are bounded by `ceil(burst / quantum) + 1`
/// per process. `None` if the bound, or `n` times it (the largest metric
/// sum), overflows. Assumes positive bursts and quantum.
fn simulation_horizon(processes: &[Process], config: &SchedulerConfig) -> Option<i64> {
    let mut max_arrival = 0i64;
    let mut total_burst = 0i64;
    let mut dispatches = 0i64;
    for p in processes {
        max_arrival = max_arrival.max(p.arrival_time);
        total_burst = total_burst.checked_add(p.burst_time)?;
        let slices = p.burst_time / config.quantum + i64::from(p.burst_time % config.quantum != 0);
        dispatches = dispatches.checked_add(slices)?.checked_add(1)?;
    }

    let horizon = max_arrival
        .checked_add(total_burst)?
        .checked_add(config.context_switch.checked_mul(dispatches)?)?;
    horizon.checked_mul(i64::try_from(processes.len()).ok()?)?;
    Some(horizon)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ]
    }

    fn has_kind(errors: &[ValidationError], kind: ValidationErrorKind) -> bool {
        errors.iter().any(|e| e.kind == kind)
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_processes(), &SchedulerConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_context_switch_is_valid() {
        let config = SchedulerConfig::new(0, 1);
        assert!(validate_input(&sample_processes(), &config).is_ok());
    }

    #[test]
    fn test_empty_workload() {
        let errors = validate_input(&[], &SchedulerConfig::default()).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::EmptyWorkload));
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new(1, 0, 5), Process::new(1, 2, 3)];
        let errors = validate_input(&processes, &SchedulerConfig::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("1")));
    }

    #[test]
    fn test_zero_id() {
        let processes = vec![Process::new(0, 0, 5)];
        let errors = validate_input(&processes, &SchedulerConfig::default()).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::InvalidId));
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![Process::new(1, -1, 5)];
        let errors = validate_input(&processes, &SchedulerConfig::default()).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_non_positive_burst() {
        let processes = vec![Process::new(1, 0, 0), Process::new(2, 0, -3)];
        let errors = validate_input(&processes, &SchedulerConfig::default()).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::NonPositiveBurst)
                .count(),
            2
        );
    }

    #[test]
    fn test_bad_config() {
        let config = SchedulerConfig::new(-1, 0);
        let errors = validate_input(&sample_processes(), &config).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::NegativeContextSwitch));
        assert!(has_kind(&errors, ValidationErrorKind::NonPositiveQuantum));
    }

    #[test]
    fn test_validate_config_alone() {
        assert!(validate_config(&SchedulerConfig::new(0, 1)).is_ok());
        let errors = validate_config(&SchedulerConfig::new(-3, 2)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeContextSwitch);
    }

    #[test]
    fn test_time_overflow() {
        let processes = vec![Process::new(1, i64::MAX - 2, 5)];
        let errors = validate_input(&processes, &SchedulerConfig::new(0, 1)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_time_overflow_from_switch_cost() {
        let processes = vec![Process::new(1, 0, 4), Process::new(2, 0, 4)];
        let config = SchedulerConfig::new(i64::MAX / 4, 1);
        let errors = validate_input(&processes, &config).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::TimeOverflow));
    }

    #[test]
    fn test_time_overflow_from_metric_sums() {
        // Each finish fits, but three turnarounds summed do not.
        let big = i64::MAX / 2;
        let processes = vec![
            Process::new(1, 0, big / 4),
            Process::new(2, 0, big / 4),
            Process::new(3, 0, big / 4),
        ];
        let errors = validate_input(&processes, &SchedulerConfig::new(0, big)).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::TimeOverflow));
    }

    #[test]
    fn test_large_times_within_range() {
        let processes = vec![Process::new(1, 1_000_000_000, 1_000_000), Process::new(2, 0, 7)];
        assert!(validate_input(&processes, &SchedulerConfig::new(1_000, 10)).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![Process::new(1, -2, 0), Process::new(1, 0, 1)];
        let errors = validate_input(&processes, &SchedulerConfig::new(0, -5)).unwrap_err();
        assert!(errors.len() >= 4);
    }
}
