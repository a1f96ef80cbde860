//! Text and JSON rendering of a scheduling run.
//!
//! Floating-point values are rendered with two decimals. Times carry an
//! `ms` label.

use std::fmt;

use serde::Serialize;

use crate::models::{Schedule, SchedulerConfig};
use crate::scheduler::{Algorithm, ScheduleMetrics};

/// Everything produced by one algorithm run, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    /// Algorithm that produced the schedule.
    pub algorithm: Algorithm,
    /// Parameters of the run.
    pub config: &'a SchedulerConfig,
    /// Simulation result.
    pub schedule: &'a Schedule,
    /// Derived metrics.
    pub metrics: &'a ScheduleMetrics,
    #[serde(skip)]
    timeline: bool,
}

impl<'a> Report<'a> {
    /// Creates a report.
    pub fn new(
        algorithm: Algorithm,
        config: &'a SchedulerConfig,
        schedule: &'a Schedule,
        metrics: &'a ScheduleMetrics,
    ) -> Self {
        Self {
            algorithm,
            config,
            schedule,
            metrics,
            timeline: false,
        }
    }

    /// Also renders the execution slice timeline.
    pub fn with_timeline(mut self, timeline: bool) -> Self {
        self.timeline = timeline;
        self
    }

    /// Serializes the whole run as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn write_gantt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gantt Chart:")?;
        let entries: Vec<String> = self
            .schedule
            .records
            .iter()
            .map(|r| {
                format!(
                    "[P{} ({} - {})]",
                    r.id,
                    display_time(r.start_time),
                    display_time(r.finish_time)
                )
            })
            .collect();
        writeln!(f, "{}", entries.join(" "))
    }

    fn write_timeline(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nTimeline:")?;
        for slice in &self.schedule.slices {
            writeln!(f, "  [{} - {}] P{}", slice.start, slice.end, slice.process_id)?;
        }
        Ok(())
    }

    fn write_table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nDetailed Metrics for Each Process:")?;
        writeln!(
            f,
            "{:<10}{:<15}{:<15}{}",
            "Process", "Finish Time", "Waiting Time", "Turnaround Time"
        )?;
        for row in &self.metrics.processes {
            writeln!(
                f,
                "{:<10}{:<15}{:<15}{}",
                format!("P{}", row.id),
                row.finish_time,
                row.waiting_time,
                row.turnaround_time
            )?;
        }
        Ok(())
    }

    fn write_averages(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.metrics;
        writeln!(f, "\nAverage Metrics:")?;
        writeln!(f, "Average Waiting Time: {:.2} ms", m.avg_waiting_time)?;
        writeln!(f, "Average Turnaround Time: {:.2} ms", m.avg_turnaround_time)?;
        writeln!(f, "Average Response Time: {:.2} ms", m.avg_response_time)?;
        writeln!(
            f,
            "Context Switches: {} ({} ms)",
            m.context_switch_count, m.context_switch_time
        )?;
        writeln!(f, "Throughput: {:.2} processes/ms", m.throughput)?;
        writeln!(f, "CPU Utilization: {:.2}%", m.cpu_utilization)
    }
}

fn display_time(time: Option<i64>) -> String {
    time.map_or_else(|| "-".to_string(), |t| t.to_string())
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n=== {} ===", self.algorithm.description())?;
        writeln!(
            f,
            "Context switch: {} ms, quantum: {} ms\n",
            self.config.context_switch, self.config.quantum
        )?;
        self.write_gantt(f)?;
        if self.timeline {
            self.write_timeline(f)?;
        }
        self.write_table(f)?;
        self.write_averages(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use pretty_assertions::assert_eq;

    fn fcfs_example() -> (SchedulerConfig, Schedule, ScheduleMetrics) {
        let config = SchedulerConfig::new(1, 2);
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ];
        let schedule = Algorithm::Fcfs.run(&config, &processes).unwrap();
        let metrics = ScheduleMetrics::calculate(&schedule, &config).unwrap();
        (config, schedule, metrics)
    }

    #[test]
    fn test_render_fcfs_report() {
        let (config, schedule, metrics) = fcfs_example();
        let text = Report::new(Algorithm::Fcfs, &config, &schedule, &metrics).to_string();

        let expected = "\n=== First-Come, First-Served ===
Context switch: 1 ms, quantum: 2 ms

Gantt Chart:
[P1 (0 - 5)] [P2 (6 - 9)] [P3 (10 - 11)]

Detailed Metrics for Each Process:
Process   Finish Time    Waiting Time   Turnaround Time
P1        5              0              5
P2        9              5              8
P3        11             8              9

Average Metrics:
Average Waiting Time: 4.33 ms
Average Turnaround Time: 7.33 ms
Average Response Time: 4.33 ms
Context Switches: 2 (2 ms)
Throughput: 0.27 processes/ms
CPU Utilization: 81.82%
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_timeline() {
        let (config, schedule, metrics) = fcfs_example();
        let text = Report::new(Algorithm::Fcfs, &config, &schedule, &metrics)
            .with_timeline(true)
            .to_string();
        assert!(text.contains("Timeline:\n  [0 - 5] P1\n  [6 - 9] P2\n  [10 - 11] P3\n"));
    }

    #[test]
    fn test_report_json() {
        let (config, schedule, metrics) = fcfs_example();
        let json = Report::new(Algorithm::Fcfs, &config, &schedule, &metrics)
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["algorithm"], "fcfs");
        assert_eq!(value["config"]["context_switch"], 1);
        assert_eq!(value["schedule"]["records"][2]["finish_time"], 11);
        assert_eq!(value["metrics"]["total_waiting_time"], 13);
        assert!(value.get("timeline").is_none());
    }

    #[test]
    fn test_display_time_unset() {
        assert_eq!(display_time(None), "-");
        assert_eq!(display_time(Some(4)), "4");
    }
}
