//! Schedule (simulation result) model.
//!
//! A schedule is the output of one engine run: per-process timing records,
//! the timeline of execution slices, and the context-switch cost the engine
//! actually charged. It is owned exclusively by the run that produced it.

use serde::{Deserialize, Serialize};

use super::Process;

/// Result of simulating one algorithm over a process snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// One record per process, in the engine's collection order.
    pub records: Vec<ProcessRecord>,
    /// Execution slices in time order. See [`Schedule::add_slice`] and
    /// [`Schedule::add_dispatch`] for when slices merge.
    pub slices: Vec<Slice>,
    /// Number of context switches charged.
    pub context_switch_count: usize,
    /// Total time spent in context switches.
    pub context_switch_time: i64,
}

/// Timing state of one process within a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Process identifier.
    pub id: u32,
    /// Arrival time (copied from the definition).
    pub arrival_time: i64,
    /// Burst time (copied from the definition).
    pub burst_time: i64,
    /// Work left; zero once the process has finished.
    pub remaining_time: i64,
    /// Clock value at first dispatch. `None` = never ran.
    pub start_time: Option<i64>,
    /// Clock value at completion. `None` = not finished.
    pub finish_time: Option<i64>,
}

/// A contiguous interval during which one process held the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Running process.
    pub process_id: u32,
    /// Slice start.
    pub start: i64,
    /// Slice end (exclusive).
    pub end: i64,
}

impl Slice {
    /// Slice length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl ProcessRecord {
    /// Fresh, unscheduled record for a process definition.
    pub fn from_process(process: &Process) -> Self {
        Self {
            id: process.id,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            remaining_time: process.burst_time,
            start_time: None,
            finish_time: None,
        }
    }

    /// Whether the process has completed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finish_time.is_some()
    }

    /// Stamps the first dispatch time; later dispatches keep the original.
    pub fn mark_dispatched(&mut self, clock: i64) {
        self.start_time.get_or_insert(clock);
    }

    /// `finish - arrival`, once finished.
    pub fn turnaround_time(&self) -> Option<i64> {
        self.finish_time.map(|f| f - self.arrival_time)
    }

    /// `turnaround - burst`, once finished.
    pub fn waiting_time(&self) -> Option<i64> {
        self.turnaround_time().map(|t| t - self.burst_time)
    }

    /// `start - arrival`, once dispatched.
    pub fn response_time(&self) -> Option<i64> {
        self.start_time.map(|s| s - self.arrival_time)
    }
}

impl Schedule {
    /// Creates an unscheduled result with one record per process, in the
    /// given order.
    pub fn for_processes<'a>(processes: impl IntoIterator<Item = &'a Process>) -> Self {
        Self {
            records: processes
                .into_iter()
                .map(ProcessRecord::from_process)
                .collect(),
            ..Self::default()
        }
    }

    /// Appends an execution slice, merging with the previous one when the
    /// same process continues without a gap.
    pub fn add_slice(&mut self, process_id: u32, start: i64, end: i64) {
        if end <= start {
            return;
        }
        if let Some(last) = self.slices.last_mut() {
            if last.process_id == process_id && last.end == start {
                last.end = end;
                return;
            }
        }
        self.slices.push(Slice {
            process_id,
            start,
            end,
        });
    }

    /// Appends one dispatch as its own slice, never merging with the
    /// previous one.
    pub fn add_dispatch(&mut self, process_id: u32, start: i64, end: i64) {
        if end > start {
            self.slices.push(Slice {
                process_id,
                start,
                end,
            });
        }
    }

    /// Records one context-switch charge.
    pub fn charge_switch(&mut self, cost: i64) {
        self.context_switch_count += 1;
        self.context_switch_time += cost;
    }

    /// Latest finish time (0 if nothing finished).
    pub fn makespan(&self) -> i64 {
        self.records
            .iter()
            .filter_map(|r| r.finish_time)
            .max()
            .unwrap_or(0)
    }

    /// Whether every process ran to completion.
    pub fn is_complete(&self) -> bool {
        self.records
            .iter()
            .all(|r| r.is_finished() && r.remaining_time == 0)
    }

    /// Finds the record for a process.
    pub fn record(&self, id: u32) -> Option<&ProcessRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Execution slices of one process, in time order.
    pub fn slices_for(&self, id: u32) -> Vec<&Slice> {
        self.slices.iter().filter(|s| s.process_id == id).collect()
    }

    /// Total time the CPU spent executing processes.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the schedule has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let processes = [Process::new(1, 0, 3), Process::new(2, 1, 2)];
        let mut s = Schedule::for_processes(&processes);
        s.records[0].mark_dispatched(0);
        s.add_slice(1, 0, 3);
        s.records[0].remaining_time = 0;
        s.records[0].finish_time = Some(3);
        s.charge_switch(1);
        s.records[1].mark_dispatched(4);
        s.add_slice(2, 4, 6);
        s.records[1].remaining_time = 0;
        s.records[1].finish_time = Some(6);
        s
    }

    #[test]
    fn test_record_from_process() {
        let r = ProcessRecord::from_process(&Process::new(7, 2, 5));
        assert_eq!(r.id, 7);
        assert_eq!(r.remaining_time, 5);
        assert_eq!(r.start_time, None);
        assert_eq!(r.finish_time, None);
        assert!(!r.is_finished());
        assert_eq!(r.waiting_time(), None);
    }

    #[test]
    fn test_mark_dispatched_keeps_first() {
        let mut r = ProcessRecord::from_process(&Process::new(1, 0, 5));
        r.mark_dispatched(2);
        r.mark_dispatched(9);
        assert_eq!(r.start_time, Some(2));
        assert_eq!(r.response_time(), Some(2));
    }

    #[test]
    fn test_record_derived_times() {
        let s = sample_schedule();
        let r = s.record(2).unwrap();
        assert_eq!(r.turnaround_time(), Some(5));
        assert_eq!(r.waiting_time(), Some(3));
        assert_eq!(r.response_time(), Some(3));
    }

    #[test]
    fn test_schedule_makespan_and_completion() {
        let s = sample_schedule();
        assert_eq!(s.makespan(), 6);
        assert!(s.is_complete());
        assert_eq!(s.len(), 2);
        assert_eq!(s.context_switch_count, 1);
        assert_eq!(s.context_switch_time, 1);
    }

    #[test]
    fn test_add_slice_merges_contiguous() {
        let mut s = Schedule::default();
        s.add_slice(1, 0, 1);
        s.add_slice(1, 1, 3);
        s.add_slice(2, 3, 4);
        s.add_slice(1, 5, 6);
        s.add_slice(1, 6, 6); // empty, ignored
        assert_eq!(s.slices.len(), 3);
        assert_eq!(s.slices[0], Slice { process_id: 1, start: 0, end: 3 });
        assert_eq!(s.slices_for(1).len(), 2);
        assert_eq!(s.busy_time(), 5);
    }

    #[test]
    fn test_add_dispatch_keeps_contiguous() {
        let mut s = Schedule::default();
        s.add_dispatch(1, 0, 2);
        s.add_dispatch(1, 2, 4);
        s.add_dispatch(1, 4, 4); // empty, ignored
        assert_eq!(
            s.slices,
            vec![
                Slice { process_id: 1, start: 0, end: 2 },
                Slice { process_id: 1, start: 2, end: 4 },
            ]
        );
        assert_eq!(s.busy_time(), 4);
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::default();
        assert_eq!(s.makespan(), 0);
        assert!(s.is_empty());
        assert!(s.is_complete());
        assert!(s.record(1).is_none());
    }

    #[test]
    fn test_incomplete_schedule() {
        let s = Schedule::for_processes(&[Process::new(1, 0, 2)]);
        assert!(!s.is_complete());
    }
}
