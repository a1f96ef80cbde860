//! Error types for scheduling runs and input loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors produced by the library.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScheduleError {
    /// No processes to schedule or measure.
    #[error("no processes to schedule")]
    EmptyWorkload,

    /// A schedule still has unfinished processes.
    #[error("process P{0} has not finished")]
    IncompleteSchedule(u32),

    /// Input definitions or configuration failed validation.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// Process file content is malformed.
    #[error("parse error at record {record}: {message}")]
    Parse {
        /// 1-based record number (0 = the count header).
        record: usize,
        /// Human-readable description.
        message: String,
    },

    /// Process file could not be read or written.
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl ScheduleError {
    /// Creates a parse error.
    pub fn parse(record: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            record,
            message: message.into(),
        }
    }

    /// Creates an I/O error for a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ScheduleError::EmptyWorkload.to_string(),
            "no processes to schedule"
        );
        assert_eq!(
            ScheduleError::parse(2, "expected integer").to_string(),
            "parse error at record 2: expected integer"
        );
    }

    #[test]
    fn test_invalid_input_joins_messages() {
        let err = ScheduleError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate process ID: 1"),
            ValidationError::new(ValidationErrorKind::NonPositiveQuantum, "Quantum must be positive"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid input: Duplicate process ID: 1; Quantum must be positive"
        );
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = ScheduleError::io(
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("missing.txt"));
    }
}
