//! Preemptive Shortest-Remaining-Time scheduling.
//!
//! # Algorithm
//!
//! The ready set is a min-heap keyed by `(remaining_time, arrival_time)`.
//! Instead of stepping one time unit at a time, the running process executes
//! until whichever comes first: its completion, or the next arrival. Between
//! those two events its rank among already-admitted processes cannot change.
//!
//! 1. Admit every process with `arrival_time <= clock`.
//! 2. If nothing is ready, jump the clock to the next arrival.
//! 3. Pop the minimum; stamp `start_time` on first dispatch.
//! 4. Execute `min(remaining, next_arrival - clock)`.
//! 5. On completion, charge a context switch if the previous dispatch was a
//!    different process and the completion does not coincide with the next
//!    arrival. Otherwise push the process back.
//!
//! Preemption at an arrival boundary is free; only completions charge.
//!
//! # Complexity
//! O(n log n): every iteration ends at a completion or an arrival.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use super::CpuScheduler;
use crate::models::{arrival_order, Process, ProcessRecord, Schedule, SchedulerConfig};

/// Heap entry: `(remaining_time, arrival_time, position)`.
///
/// `position` indexes the arrival-sorted record list and breaks the
/// remaining ties deterministically.
type ReadyKey = Reverse<(i64, i64, usize)>;

fn ready_key(record: &ProcessRecord, pos: usize) -> ReadyKey {
    Reverse((record.remaining_time, record.arrival_time, pos))
}

/// Whether a newly admitted process takes the CPU immediately at the cost
/// of a switch: it must not already be the ready-set minimum and its whole
/// burst plus the switch must undercut the minimum's remaining time.
fn admission_preempts(
    newcomer: usize,
    newcomer_burst: i64,
    context_switch: i64,
    minimum: usize,
    minimum_remaining: i64,
) -> bool {
    minimum != newcomer && newcomer_burst + context_switch < minimum_remaining
}

/// Preemptive shortest-remaining-time scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SrtScheduler;

impl CpuScheduler for SrtScheduler {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn schedule(&self, processes: &[Process], config: &SchedulerConfig) -> Schedule {
        let order = arrival_order(processes);
        let mut schedule = Schedule::for_processes(order.iter().map(|&i| &processes[i]));
        let cs = config.context_switch;
        let n = schedule.records.len();

        let mut ready: BinaryHeap<ReadyKey> = BinaryHeap::new();
        let mut clock = 0;
        let mut next = 0;
        let mut previous: Option<usize> = None;

        while next < n || !ready.is_empty() {
            while next < n && schedule.records[next].arrival_time <= clock {
                ready.push(ready_key(&schedule.records[next], next));
                if let Some(&Reverse((min_remaining, _, min_pos))) = ready.peek() {
                    let burst = schedule.records[next].burst_time;
                    if admission_preempts(next, burst, cs, min_pos, min_remaining) {
                        clock += cs;
                        schedule.charge_switch(cs);
                        schedule.records[next].mark_dispatched(clock);
                    }
                }
                next += 1;
            }

            let Some(Reverse((_, _, pos))) = ready.pop() else {
                if next < n {
                    let arrival = schedule.records[next].arrival_time;
                    debug!(from = clock, to = arrival, "cpu idle");
                    clock = arrival;
                }
                continue;
            };

            let next_arrival = (next < n).then(|| schedule.records[next].arrival_time);
            let record = &mut schedule.records[pos];
            record.mark_dispatched(clock);

            let run = match next_arrival {
                Some(arrival) => record.remaining_time.min(arrival - clock),
                None => record.remaining_time,
            };
            record.remaining_time -= run;
            let id = record.id;
            let start = clock;
            clock += run;

            if record.remaining_time == 0 {
                record.finish_time = Some(clock);
                debug!(process = id, finish = clock, "completed");
                schedule.add_slice(id, start, clock);

                let switched = previous.is_some_and(|p| p != pos);
                let work_left = next < n || !ready.is_empty();
                if switched && work_left && next_arrival != Some(clock) {
                    clock += cs;
                    schedule.charge_switch(cs);
                }
            } else {
                let key = ready_key(record, pos);
                schedule.add_slice(id, start, clock);
                ready.push(key);
            }
            previous = Some(pos);
        }

        schedule
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}
