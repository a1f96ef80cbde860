//! First-Come-First-Served scheduling.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time.
//! 2. Run each to completion in that order, idling until its arrival if the
//!    CPU is ahead of it.
//! 3. Charge one context switch between consecutive processes.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the simulation.

use tracing::debug;

use super::CpuScheduler;
use crate::models::{arrival_order, Process, Schedule, SchedulerConfig};

/// Non-preemptive arrival-order scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl CpuScheduler for FcfsScheduler {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &[Process], config: &SchedulerConfig) -> Schedule {
        let order = arrival_order(processes);
        let mut schedule = Schedule::for_processes(order.iter().map(|&i| &processes[i]));
        let last = schedule.records.len().saturating_sub(1);
        let mut clock = 0;

        for pos in 0..schedule.records.len() {
            let record = &mut schedule.records[pos];
            if clock < record.arrival_time {
                debug!(from = clock, to = record.arrival_time, "cpu idle");
                clock = record.arrival_time;
            }

            let id = record.id;
            let start = clock;
            let finish = start + record.burst_time;
            record.mark_dispatched(start);
            record.remaining_time = 0;
            record.finish_time = Some(finish);
            schedule.add_slice(id, start, finish);
            debug!(process = id, start, finish, "dispatched to completion");

            clock = finish;
            if pos != last {
                clock += config.context_switch;
                schedule.charge_switch(config.context_switch);
            }
        }

        schedule
    }

    fn description(&self) -> &'static str {
        "First-Come, First-Served"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(processes: &[Process], context_switch: i64) -> Schedule {
        FcfsScheduler.schedule(processes, &SchedulerConfig::new(context_switch, 1))
    }

    fn times(schedule: &Schedule, id: u32) -> (i64, i64) {
        let r = schedule.record(id).unwrap();
        (r.start_time.unwrap(), r.finish_time.unwrap())
    }

    #[test]
    fn test_fcfs_example() {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ];
        let schedule = run(&processes, 1);

        assert_eq!(times(&schedule, 1), (0, 5));
        assert_eq!(times(&schedule, 2), (6, 9));
        assert_eq!(times(&schedule, 3), (10, 11));
        assert_eq!(schedule.record(1).unwrap().waiting_time(), Some(0));
        assert_eq!(schedule.record(2).unwrap().waiting_time(), Some(5));
        assert_eq!(schedule.record(3).unwrap().waiting_time(), Some(8));
        assert_eq!(schedule.context_switch_count, 2);
        assert_eq!(schedule.context_switch_time, 2);
    }

    #[test]
    fn test_fcfs_sorts_by_arrival() {
        let processes = vec![
            Process::new(1, 6, 2),
            Process::new(2, 0, 3),
            Process::new(3, 1, 1),
        ];
        let schedule = run(&processes, 0);
        let ids: Vec<u32> = schedule.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(times(&schedule, 2), (0, 3));
        assert_eq!(times(&schedule, 3), (3, 4));
        assert_eq!(times(&schedule, 1), (6, 8));
    }

    #[test]
    fn test_fcfs_ties_keep_input_order() {
        let processes = vec![
            Process::new(9, 0, 1),
            Process::new(4, 0, 1),
            Process::new(7, 0, 1),
        ];
        let schedule = run(&processes, 0);
        let ids: Vec<u32> = schedule.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 4, 7]);
    }

    #[test]
    fn test_fcfs_elapsed_without_gaps() {
        let processes = vec![
            Process::new(1, 0, 4),
            Process::new(2, 0, 2),
            Process::new(3, 1, 3),
            Process::new(4, 2, 5),
        ];
        let cs = 2;
        let schedule = run(&processes, cs);
        let total_burst: i64 = processes.iter().map(|p| p.burst_time).sum();
        assert_eq!(schedule.makespan(), total_burst + 3 * cs);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let processes = vec![Process::new(1, 0, 2), Process::new(2, 10, 2)];
        let schedule = run(&processes, 1);
        // Switch cost is absorbed by the idle gap
        assert_eq!(times(&schedule, 2), (10, 12));
    }

    #[test]
    fn test_fcfs_single_late_process() {
        let processes = vec![Process::new(1, 3, 2)];
        let schedule = run(&processes, 5);
        assert_eq!(times(&schedule, 1), (3, 5));
        assert_eq!(schedule.context_switch_count, 0);
        assert!(schedule.is_complete());
    }
}
