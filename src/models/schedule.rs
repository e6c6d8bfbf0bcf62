//! Schedule (solution) model.
//!
//! A run of any simulator produces two things: an append-only Gantt trace
//! of processor occupancy, and one result row per process.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId, Tick};

/// A contiguous interval during which one process held the processor.
///
/// Covers the half-open tick range `[start, stop)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlice {
    /// Running process.
    pub process_id: ProcessId,
    /// First tick of the interval.
    pub start: Tick,
    /// Tick after the last one in the interval.
    pub stop: Tick,
}

impl TimeSlice {
    /// Creates a new time slice.
    pub fn new(process_id: ProcessId, start: Tick, stop: Tick) -> Self {
        Self {
            process_id,
            start,
            stop,
        }
    }

    /// Number of ticks covered.
    #[inline]
    pub fn duration(&self) -> Tick {
        self.stop - self.start
    }
}

/// Ordered log of processor occupancy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GanttTrace {
    slices: Vec<TimeSlice>,
}

impl GanttTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    ///
    /// Slices must be pushed in non-decreasing `start` order.
    pub fn push(&mut self, slice: TimeSlice) {
        debug_assert!(
            self.slices.last().map_or(true, |last| last.start <= slice.start),
            "gantt slices out of order"
        );
        self.slices.push(slice);
    }

    /// All slices in order.
    pub fn slices(&self) -> &[TimeSlice] {
        &self.slices
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether no slice was recorded.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Slices belonging to one process.
    pub fn slices_for(&self, process_id: ProcessId) -> Vec<&TimeSlice> {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Total ticks covered by all slices.
    pub fn covered_ticks(&self) -> Tick {
        self.slices.iter().map(TimeSlice::duration).sum()
    }

    /// Latest stop tick (0 for an empty trace).
    pub fn makespan(&self) -> Tick {
        self.slices.iter().map(|s| s.stop).max().unwrap_or(0)
    }

    /// Whether every slice starts exactly where the previous one stopped.
    pub fn is_contiguous(&self) -> bool {
        self.slices.windows(2).all(|w| w[0].stop == w[1].start)
    }

    /// Whether no two slices overlap.
    pub fn is_non_overlapping(&self) -> bool {
        self.slices.windows(2).all(|w| w[0].stop <= w[1].start)
    }
}

/// Final timing result for one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Process identifier.
    pub process_id: ProcessId,
    /// Process priority.
    pub priority: i64,
    /// Burst duration.
    pub burst_duration: Tick,
    /// Arrival tick.
    pub arrival_time: Tick,
    /// Ticks spent eligible but not running.
    pub waiting_time: Tick,
    /// Ticks from arrival to completion.
    pub turnaround_time: Tick,
    /// Tick at which the process finished.
    pub completion_time: Tick,
}

impl ScheduleRow {
    /// Builds the row for `process` finishing at `completion_time`.
    ///
    /// Turnaround is measured from arrival; waiting time is whatever part
    /// of it the process did not spend running.
    pub fn completed(process: &Process, completion_time: Tick) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            process_id: process.id,
            priority: process.priority,
            burst_duration: process.burst_duration,
            arrival_time: process.arrival_time,
            waiting_time: turnaround_time - process.burst_duration,
            turnaround_time,
            completion_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trace() -> GanttTrace {
        let mut g = GanttTrace::new();
        g.push(TimeSlice::new(1, 0, 2));
        g.push(TimeSlice::new(2, 2, 4));
        g.push(TimeSlice::new(1, 4, 9));
        g
    }

    #[test]
    fn test_slice_duration() {
        assert_eq!(TimeSlice::new(7, 3, 8).duration(), 5);
    }

    #[test]
    fn test_trace_coverage() {
        let g = sample_trace();
        assert_eq!(g.len(), 3);
        assert_eq!(g.covered_ticks(), 9);
        assert_eq!(g.makespan(), 9);
        assert!(g.is_contiguous());
        assert!(g.is_non_overlapping());
    }

    #[test]
    fn test_slices_for_process() {
        let g = sample_trace();
        assert_eq!(g.slices_for(1).len(), 2);
        assert_eq!(g.slices_for(2).len(), 1);
        assert!(g.slices_for(99).is_empty());
    }

    #[test]
    fn test_gap_is_not_contiguous() {
        let mut g = GanttTrace::new();
        g.push(TimeSlice::new(1, 0, 2));
        g.push(TimeSlice::new(2, 3, 4));
        assert!(!g.is_contiguous());
        assert!(g.is_non_overlapping());
    }

    #[test]
    fn test_empty_trace() {
        let g = GanttTrace::new();
        assert!(g.is_empty());
        assert_eq!(g.makespan(), 0);
        assert_eq!(g.covered_ticks(), 0);
        assert!(g.is_contiguous());
    }

    #[test]
    fn test_completed_row() {
        let p = Process::new(4, 4, 5).with_priority(2);
        let row = ScheduleRow::completed(&p, 11);
        assert_eq!(row.turnaround_time, 6);
        assert_eq!(row.waiting_time, 2);
        assert_eq!(row.completion_time, 11);
        assert_eq!(row.priority, 2);
        assert_eq!(row.turnaround_time, row.waiting_time + row.burst_duration);
    }
}
