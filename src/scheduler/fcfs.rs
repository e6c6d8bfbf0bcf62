//! First-come, first-served.
//!
//! Non-preemptive; processes run to completion in catalog order. The
//! caller is responsible for sorting the catalog by arrival time
//! ([`Catalog::sorted_by_arrival`]); the simulator runs whatever order it
//! is given and only logs a warning for unsorted input.
//!
//! # Complexity
//! O(n), one pass through the catalog.

use tracing::{debug, info, warn};

use super::{Algorithm, RunSummary, ScheduleOutcome};
use crate::error::ScheduleError;
use crate::models::{Catalog, GanttTrace, ScheduleRow, TimeSlice};
use crate::validation::ensure_schedulable;

/// Simulates FCFS over `catalog`.
///
/// Each process starts at the later of its arrival and the previous
/// completion, so waiting time is never negative. When the processor is
/// idle before an arrival, the Gantt trace has a gap there.
pub fn simulate(catalog: &Catalog) -> Result<ScheduleOutcome, ScheduleError> {
    ensure_schedulable(catalog)?;
    if !catalog.is_sorted_by_arrival() {
        warn!("FCFS catalog is not sorted by arrival time; running in catalog order");
    }

    let mut clock = 0;
    let mut gantt = GanttTrace::new();
    let mut rows = Vec::with_capacity(catalog.len());

    for process in catalog {
        let start = clock.max(process.arrival_time);
        let completion = start + process.burst_duration;

        gantt.push(TimeSlice::new(process.id, start, completion));
        let row = ScheduleRow::completed(process, completion);
        debug!(
            process = process.id,
            start,
            completion,
            wait = row.waiting_time,
            "completed"
        );
        rows.push(row);
        clock = completion;
    }

    let summary = RunSummary::calculate(&rows);
    info!(
        algorithm = Algorithm::Fcfs.name(),
        average_wait = summary.average_wait,
        average_turnaround = summary.average_turnaround,
        throughput = summary.throughput,
        "run finished"
    );

    Ok(ScheduleOutcome {
        algorithm: Algorithm::Fcfs,
        title: Algorithm::Fcfs.title().to_string(),
        gantt,
        rows,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn waits(outcome: &ScheduleOutcome) -> Vec<i64> {
        outcome.rows.iter().map(|r| r.waiting_time).collect()
    }

    #[test]
    fn test_back_to_back() {
        let catalog = Catalog::new(vec![Process::new(1, 5, 0), Process::new(2, 3, 5)]);
        let outcome = simulate(&catalog).unwrap();

        assert_eq!(waits(&outcome), vec![0, 0]);
        let turnaround: Vec<_> = outcome.rows.iter().map(|r| r.turnaround_time).collect();
        assert_eq!(turnaround, vec![5, 3]);
        let completion: Vec<_> = outcome.rows.iter().map(|r| r.completion_time).collect();
        assert_eq!(completion, vec![5, 8]);
        assert_eq!(
            outcome.gantt.slices(),
            &[TimeSlice::new(1, 0, 5), TimeSlice::new(2, 5, 8)]
        );
    }

    #[test]
    fn test_convoy_effect() {
        // Textbook: P1=24, P2=3, P3=3 all at t=0 → waits 0, 24, 27.
        let catalog = Catalog::new(vec![
            Process::new(1, 24, 0),
            Process::new(2, 3, 0),
            Process::new(3, 3, 0),
        ]);
        let outcome = simulate(&catalog).unwrap();
        assert_eq!(waits(&outcome), vec![0, 24, 27]);
        assert!((outcome.summary.average_wait - 17.0).abs() < 1e-10);
        assert!((outcome.summary.average_turnaround - 27.0).abs() < 1e-10);
        assert!((outcome.summary.throughput - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_waiting_for_previous_completion() {
        let catalog = Catalog::new(vec![
            Process::new(1, 6, 0),
            Process::new(2, 2, 1),
            Process::new(3, 4, 3),
        ]);
        let outcome = simulate(&catalog).unwrap();
        assert_eq!(waits(&outcome), vec![0, 5, 5]);
        assert!(outcome.gantt.is_contiguous());
    }

    #[test]
    fn test_idle_gap_before_late_arrival() {
        let catalog = Catalog::new(vec![Process::new(1, 2, 0), Process::new(2, 3, 5)]);
        let outcome = simulate(&catalog).unwrap();
        assert_eq!(waits(&outcome), vec![0, 0]);
        assert_eq!(outcome.rows[1].completion_time, 8);
        assert!(!outcome.gantt.is_contiguous());
        assert_eq!(outcome.gantt.covered_ticks(), 5);
        assert!((outcome.summary.throughput - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_completion_at_tick_range_limit() {
        let catalog = Catalog::new(vec![
            Process::new(1, i64::MAX - 1, 0),
            Process::new(2, 1, 0),
        ]);
        let outcome = simulate(&catalog).unwrap();
        assert_eq!(outcome.rows[1].completion_time, i64::MAX);
        assert_eq!(waits(&outcome), vec![0, i64::MAX - 1]);
        assert!(outcome.summary.average_turnaround > 0.0);
    }

    #[test]
    fn test_catalog_order_is_execution_order() {
        // Not sorted by arrival: FCFS still runs P1 first.
        let catalog = Catalog::new(vec![Process::new(1, 2, 3), Process::new(2, 2, 0)]);
        let outcome = simulate(&catalog).unwrap();
        assert_eq!(outcome.gantt.slices()[0], TimeSlice::new(1, 3, 5));
        assert_eq!(outcome.rows[1].waiting_time, 5);
    }
}
