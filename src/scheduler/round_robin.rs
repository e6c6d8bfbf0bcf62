//! Round-robin scheduling.
//!
//! A circular cursor walks the catalog. The process under the cursor runs
//! until it has used a full quantum or finished; the cursor then advances
//! to the next process with work left, wrapping past the end. If every
//! other process is done, the cursor comes back around to the same one and
//! its Gantt slice simply continues.
//!
//! # Arrival handling
//!
//! The classic cursor only asks "does this process have work left?", not
//! "has it arrived?" ([`CursorPolicy::IgnoreArrival`], the default). With a
//! late arrival in the catalog that means a process can be dispatched
//! before its arrival tick, which then shows up as a negative waiting time;
//! the simulator logs a warning each time the cursor lands on such a process.
//! [`CursorPolicy::ArrivedOnly`] makes the cursor skip processes that have
//! not arrived, idling the processor when none has.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::engine::{self, TickPolicy};
use super::{Algorithm, ScheduleOutcome};
use crate::dispatching::DispatchContext;
use crate::error::ScheduleError;
use crate::models::{Catalog, Tick};
use crate::validation::ensure_schedulable;

/// Which processes the round-robin cursor may stop at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorPolicy {
    /// Any process with work left, arrived or not.
    #[default]
    IgnoreArrival,
    /// Only processes that have arrived and have work left.
    ArrivedOnly,
}

/// Round-robin tick policy.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    quantum: Tick,
    cursor_policy: CursorPolicy,
    /// Catalog index where the next cursor search begins.
    cursor: usize,
    running: Option<usize>,
    ticks_on_current: Tick,
    early_dispatches: usize,
}

impl RoundRobin {
    /// Creates a policy with the given quantum.
    pub fn new(quantum: NonZeroU32) -> Self {
        Self {
            quantum: Tick::from(quantum.get()),
            cursor_policy: CursorPolicy::default(),
            cursor: 0,
            running: None,
            ticks_on_current: 0,
            early_dispatches: 0,
        }
    }

    /// Sets the cursor policy.
    pub fn with_cursor_policy(mut self, policy: CursorPolicy) -> Self {
        self.cursor_policy = policy;
        self
    }

    /// Quantum in ticks.
    pub fn quantum(&self) -> Tick {
        self.quantum
    }

    /// Number of times the cursor dispatched a process before its arrival.
    pub fn early_dispatches(&self) -> usize {
        self.early_dispatches
    }

    fn must_advance(&self, ctx: &DispatchContext<'_>) -> bool {
        match self.running {
            None => true,
            Some(current) => {
                self.ticks_on_current == self.quantum || ctx.remaining[current] == 0
            }
        }
    }

    /// First stoppable index at or after the cursor, wrapping around.
    fn next_candidate(&self, ctx: &DispatchContext<'_>) -> Option<usize> {
        let n = ctx.catalog.len();
        (0..n)
            .map(|offset| (self.cursor + offset) % n)
            .find(|&index| match self.cursor_policy {
                CursorPolicy::IgnoreArrival => ctx.remaining[index] > 0,
                CursorPolicy::ArrivedOnly => ctx.is_eligible(index),
            })
    }
}

impl RoundRobin {
    fn warn_if_early(&mut self, ctx: &DispatchContext<'_>, index: usize) {
        let Some(process) = ctx.catalog.get(index) else {
            return;
        };
        if !process.has_arrived(ctx.tick) {
            self.early_dispatches += 1;
            warn!(
                tick = ctx.tick,
                process = process.id,
                arrival = process.arrival_time,
                "round-robin dispatched a process before its arrival"
            );
        }
    }
}

impl TickPolicy for RoundRobin {
    fn select(&mut self, ctx: &DispatchContext<'_>) -> Option<usize> {
        if self.must_advance(ctx) {
            self.running = self.next_candidate(ctx);
            self.ticks_on_current = 0;
            if let Some(index) = self.running {
                self.cursor = (index + 1) % ctx.catalog.len();
                self.warn_if_early(ctx, index);
            }
        }

        let current = self.running?;
        self.ticks_on_current += 1;
        Some(current)
    }
}

/// Simulates round-robin over `catalog`.
pub fn simulate(
    catalog: &Catalog,
    quantum: NonZeroU32,
    cursor_policy: CursorPolicy,
) -> Result<ScheduleOutcome, ScheduleError> {
    ensure_schedulable(catalog)?;
    let mut policy = RoundRobin::new(quantum).with_cursor_policy(cursor_policy);
    engine::run(catalog, Algorithm::RoundRobin, &mut policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Process, TimeSlice};
    use crate::scheduler::DEFAULT_QUANTUM;
    use test_log::test;

    fn quantum(q: u32) -> NonZeroU32 {
        NonZeroU32::new(q).unwrap()
    }

    fn waits(outcome: &ScheduleOutcome) -> Vec<i64> {
        outcome.rows.iter().map(|r| r.waiting_time).collect()
    }

    #[test]
    fn test_textbook_quantum_four() {
        let catalog = Catalog::new(vec![
            Process::new(1, 24, 0),
            Process::new(2, 3, 0),
            Process::new(3, 3, 0),
        ]);
        let outcome = simulate(&catalog, DEFAULT_QUANTUM, CursorPolicy::IgnoreArrival).unwrap();

        assert_eq!(waits(&outcome), vec![6, 4, 7]);
        assert!((outcome.summary.average_wait - 17.0 / 3.0).abs() < 1e-10);
        assert_eq!(
            outcome.gantt.slices(),
            &[
                TimeSlice::new(1, 0, 4),
                TimeSlice::new(2, 4, 7),
                TimeSlice::new(3, 7, 10),
                TimeSlice::new(1, 10, 30),
            ]
        );
    }

    #[test]
    fn test_preempted_slice_starts_at_quantum_boundary() {
        let catalog = Catalog::new(vec![Process::new(1, 6, 0), Process::new(2, 5, 0)]);
        let outcome = simulate(&catalog, quantum(2), CursorPolicy::IgnoreArrival).unwrap();
        assert_eq!(
            outcome.gantt.slices(),
            &[
                TimeSlice::new(1, 0, 2),
                TimeSlice::new(2, 2, 4),
                TimeSlice::new(1, 4, 6),
                TimeSlice::new(2, 6, 8),
                TimeSlice::new(1, 8, 10),
                TimeSlice::new(2, 10, 11),
            ]
        );
        for slice in &outcome.gantt.slices()[..5] {
            assert_eq!(slice.duration(), 2);
        }
        assert_eq!(waits(&outcome), vec![4, 6]);
    }

    #[test]
    fn test_quantum_one_alternates() {
        let catalog = Catalog::new(vec![Process::new(1, 2, 0), Process::new(2, 2, 0)]);
        let outcome = simulate(&catalog, quantum(1), CursorPolicy::IgnoreArrival).unwrap();
        let order: Vec<_> = outcome
            .gantt
            .slices()
            .iter()
            .map(|s| s.process_id)
            .collect();
        assert_eq!(order, vec![1, 2, 1, 2]);
    }

    #[test]
    fn test_cursor_skips_finished_processes() {
        let catalog = Catalog::new(vec![
            Process::new(1, 1, 0),
            Process::new(2, 6, 0),
            Process::new(3, 2, 0),
        ]);
        let outcome = simulate(&catalog, quantum(3), CursorPolicy::IgnoreArrival).unwrap();
        assert_eq!(
            outcome.gantt.slices(),
            &[
                TimeSlice::new(1, 0, 1),
                TimeSlice::new(2, 1, 4),
                TimeSlice::new(3, 4, 6),
                TimeSlice::new(2, 6, 9),
            ]
        );
    }

    #[test]
    fn test_ignore_arrival_dispatches_early() {
        let catalog = Catalog::new(vec![Process::new(1, 2, 0), Process::new(2, 2, 10)]);
        let outcome = simulate(&catalog, DEFAULT_QUANTUM, CursorPolicy::IgnoreArrival).unwrap();
        // P2 runs at t=2 even though it arrives at t=10.
        assert_eq!(outcome.gantt.slices()[1], TimeSlice::new(2, 2, 4));
        assert_eq!(outcome.rows[1].waiting_time, -8);
        assert_eq!(
            outcome.rows[1].turnaround_time,
            outcome.rows[1].waiting_time + outcome.rows[1].burst_duration
        );
    }

    #[test]
    fn test_early_dispatch_counted_once_per_turn() {
        // P2 runs ticks 2..6 before arriving at 10: one dispatch, four ticks.
        let catalog = Catalog::new(vec![Process::new(1, 2, 0), Process::new(2, 4, 10)]);
        let mut policy = RoundRobin::new(DEFAULT_QUANTUM);
        let outcome = engine::run(&catalog, Algorithm::RoundRobin, &mut policy).unwrap();
        assert_eq!(outcome.gantt.slices()[1], TimeSlice::new(2, 2, 6));
        assert_eq!(policy.early_dispatches(), 1);

        let mut arrived_only =
            RoundRobin::new(DEFAULT_QUANTUM).with_cursor_policy(CursorPolicy::ArrivedOnly);
        engine::run(&catalog, Algorithm::RoundRobin, &mut arrived_only).unwrap();
        assert_eq!(arrived_only.early_dispatches(), 0);
    }

    #[test]
    fn test_arrived_only_waits_for_arrival() {
        let catalog = Catalog::new(vec![Process::new(1, 2, 0), Process::new(2, 2, 10)]);
        let outcome = simulate(&catalog, DEFAULT_QUANTUM, CursorPolicy::ArrivedOnly).unwrap();
        assert_eq!(
            outcome.gantt.slices(),
            &[TimeSlice::new(1, 0, 2), TimeSlice::new(2, 10, 12)]
        );
        assert_eq!(waits(&outcome), vec![0, 0]);
    }

    #[test]
    fn test_arrived_only_first_process_late() {
        let catalog = Catalog::new(vec![
            Process::new(1, 3, 2),
            Process::new(2, 5, 0),
            Process::new(3, 2, 1),
        ]);
        let outcome = simulate(&catalog, quantum(2), CursorPolicy::ArrivedOnly).unwrap();
        assert_eq!(
            outcome.gantt.slices(),
            &[
                TimeSlice::new(2, 0, 2),
                TimeSlice::new(3, 2, 4),
                TimeSlice::new(1, 4, 6),
                TimeSlice::new(2, 6, 8),
                TimeSlice::new(1, 8, 9),
                TimeSlice::new(2, 9, 10),
            ]
        );
        assert!(outcome.gantt.is_contiguous());
    }

    #[test]
    fn test_policy_defaults() {
        let rr = RoundRobin::new(DEFAULT_QUANTUM);
        assert_eq!(rr.quantum(), 4);
        assert_eq!(CursorPolicy::default(), CursorPolicy::IgnoreArrival);
    }
}
