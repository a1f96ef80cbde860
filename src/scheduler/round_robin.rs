//! Round Robin scheduling.
//!
//! # Algorithm
//!
//! A FIFO ready queue of record positions, each admitted exactly once.
//!
//! 1. Admit every process that has arrived by t=0, in input order.
//! 2. Dequeue the head. Charge a context switch if the previous dispatch was
//!    a different process, then stamp `start_time` on first dispatch.
//! 3. Execute `min(remaining, quantum)`.
//! 4. Admit processes that arrived by the new clock (input order), then
//!    re-enqueue the preempted process behind them. A finished process is
//!    not re-enqueued.
//! 5. If the queue drains while processes are still to arrive, jump the
//!    clock to the earliest of them.
//!
//! Newcomers go ahead of the incumbent at the same boundary. Every dispatch
//! is its own slice in the timeline.

use std::collections::VecDeque;

use tracing::debug;

use super::CpuScheduler;
use crate::models::{Process, ProcessRecord, Schedule, SchedulerConfig};

/// Quantum-sliced FIFO scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobinScheduler;

/// Pushes every not-yet-queued record that has arrived by `clock`.
fn admit(
    records: &[ProcessRecord],
    queued: &mut [bool],
    ready: &mut VecDeque<usize>,
    clock: i64,
) {
    for (pos, record) in records.iter().enumerate() {
        if !queued[pos] && record.arrival_time <= clock {
            queued[pos] = true;
            ready.push_back(pos);
        }
    }
}

impl CpuScheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, processes: &[Process], config: &SchedulerConfig) -> Schedule {
        let mut schedule = Schedule::for_processes(processes);
        let cs = config.context_switch;
        let quantum = config.quantum;

        let mut queued = vec![false; schedule.records.len()];
        let mut ready: VecDeque<usize> = VecDeque::new();
        let mut clock = 0;
        let mut previous: Option<usize> = None;

        admit(&schedule.records, &mut queued, &mut ready, clock);

        loop {
            let Some(pos) = ready.pop_front() else {
                let pending = schedule
                    .records
                    .iter()
                    .zip(&queued)
                    .filter(|&(_, &q)| !q)
                    .map(|(r, _)| r.arrival_time)
                    .min();
                match pending {
                    Some(arrival) => {
                        debug!(from = clock, to = arrival, "cpu idle");
                        clock = clock.max(arrival);
                        admit(&schedule.records, &mut queued, &mut ready, clock);
                        continue;
                    }
                    None => break,
                }
            };

            if previous.is_some_and(|p| p != pos) {
                clock += cs;
                schedule.charge_switch(cs);
            }

            let record = &mut schedule.records[pos];
            record.mark_dispatched(clock);
            let run = record.remaining_time.min(quantum);
            record.remaining_time -= run;
            let id = record.id;
            let start = clock;
            clock += run;

            let finished = record.remaining_time == 0;
            if finished {
                record.finish_time = Some(clock);
                debug!(process = id, finish = clock, "completed");
            }
            schedule.add_dispatch(id, start, clock);

            admit(&schedule.records, &mut queued, &mut ready, clock);
            if !finished {
                ready.push_back(pos);
            }
            previous = Some(pos);
        }

        schedule
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}
