//! Process file format.
//!
//! ```text
//! 3
//! 1 0 5
//! 2 1 3
//! 3 2 1
//! ```
//!
//! The first integer is the process count `n`, followed by `n` records of
//! `id arrival_time burst_time`. Any whitespace separates tokens; line
//! structure is not significant. Tokens after the last record are ignored.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::ScheduleError;
use crate::models::Process;

/// Parses process definitions from file content.
///
/// Only structure is checked here; value ranges are checked by
/// [`validate_input`](crate::validation::validate_input).
pub fn parse_processes(content: &str) -> Result<Vec<Process>, ScheduleError> {
    let mut tokens = content.split_whitespace();

    let count_token = tokens
        .next()
        .ok_or_else(|| ScheduleError::parse(0, "missing process count"))?;
    let count: usize = count_token
        .parse()
        .map_err(|_| ScheduleError::parse(0, format!("invalid process count '{count_token}'")))?;

    let mut processes = Vec::new();
    for record in 1..=count {
        let mut field = |name: &str| {
            tokens.next().ok_or_else(|| {
                ScheduleError::parse(
                    record,
                    format!("missing {name} (expected {count} records)"),
                )
            })
        };
        let id_token = field("id")?;
        let arrival_token = field("arrival time")?;
        let burst_token = field("burst time")?;

        let id = id_token
            .parse()
            .map_err(|_| ScheduleError::parse(record, format!("invalid id '{id_token}'")))?;
        let arrival = arrival_token.parse().map_err(|_| {
            ScheduleError::parse(record, format!("invalid arrival time '{arrival_token}'"))
        })?;
        let burst = burst_token.parse().map_err(|_| {
            ScheduleError::parse(record, format!("invalid burst time '{burst_token}'"))
        })?;
        processes.push(Process::new(id, arrival, burst));
    }

    let trailing = tokens.count();
    if trailing > 0 {
        warn!(trailing, "ignoring tokens after the last process record");
    }
    Ok(processes)
}

/// Reads and parses a process file.
pub fn load_processes(path: impl AsRef<Path>) -> Result<Vec<Process>, ScheduleError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| ScheduleError::io(path, e))?;
    let processes = parse_processes(&content)?;
    debug!(path = %path.display(), count = processes.len(), "loaded processes");
    Ok(processes)
}

/// Renders process definitions in the file format.
pub fn format_processes(processes: &[Process]) -> String {
    let mut out = format!("{}\n", processes.len());
    for p in processes {
        out.push_str(&format!("{} {} {}\n", p.id, p.arrival_time, p.burst_time));
    }
    out
}

/// Writes process definitions to a file.
pub fn save_processes(path: impl AsRef<Path>, processes: &[Process]) -> Result<(), ScheduleError> {
    let path = path.as_ref();
    fs::write(path, format_processes(processes)).map_err(|e| ScheduleError::io(path, e))
}
