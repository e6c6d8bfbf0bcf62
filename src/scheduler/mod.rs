//! Single-processor scheduling simulators.
//!
//! Four classical algorithms over a fixed batch of processes. Each run is a
//! pure function of the read-only [`Catalog`] and its own local state, so
//! runs never interfere and may execute in any order.
//!
//! # Algorithms
//!
//! | Algorithm | Preemptive | Selection |
//! |-----------|-----------|-----------|
//! | FCFS | no | catalog order |
//! | SJF | on shorter arrival | shortest remaining burst |
//! | Priority | yes | lowest priority value, then shortest remaining |
//! | Round-robin | on quantum expiry | circular cursor |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod engine;
pub mod fcfs;
mod kpi;
pub mod priority;
pub mod round_robin;
pub mod sjf;

pub use engine::{RulePolicy, TickPolicy};
pub use kpi::{MetricsAccumulator, RunSummary};
pub use round_robin::{CursorPolicy, RoundRobin};

use std::io::Write;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::{Catalog, GanttTrace, ScheduleRow};
use crate::report;

/// Default round-robin quantum in ticks.
pub const DEFAULT_QUANTUM: NonZeroU32 = match NonZeroU32::new(4) {
    Some(q) => q,
    None => unreachable!(),
};

/// The available scheduling algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-come, first-served.
    Fcfs,
    /// Shortest job first, re-evaluated every tick.
    Sjf,
    /// Preemptive priority with shortest-remaining tie-break.
    Priority,
    /// Round-robin with a fixed quantum.
    RoundRobin,
}

impl Algorithm {
    /// All algorithms in report order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    /// Short machine-friendly name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sjf => "sjf",
            Algorithm::Priority => "priority",
            Algorithm::RoundRobin => "rr",
        }
    }

    /// Default report title.
    pub fn title(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-come, first-serve",
            Algorithm::Sjf => "Shortest-job-first",
            Algorithm::Priority => "Priority",
            Algorithm::RoundRobin => "Round-robin",
        }
    }
}

/// Tunables shared by all runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Round-robin quantum in ticks.
    pub quantum: NonZeroU32,
    /// How the round-robin cursor treats processes that have not arrived.
    pub round_robin_cursor: CursorPolicy,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            round_robin_cursor: CursorPolicy::default(),
        }
    }
}

impl SchedulerConfig {
    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: NonZeroU32) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the round-robin cursor policy.
    pub fn with_cursor_policy(mut self, policy: CursorPolicy) -> Self {
        self.round_robin_cursor = policy;
        self
    }
}

/// Result of one simulation run, ready for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Algorithm that produced this outcome.
    pub algorithm: Algorithm,
    /// Report title.
    pub title: String,
    /// Processor occupancy over time.
    pub gantt: GanttTrace,
    /// One row per process, in catalog order.
    pub rows: Vec<ScheduleRow>,
    /// Averages and throughput.
    pub summary: RunSummary,
}

impl ScheduleOutcome {
    /// Replaces the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Simulates `algorithm` over `catalog`.
///
/// # Errors
/// [`ScheduleError::EmptyCatalog`] or [`ScheduleError::Invalid`] when the
/// catalog violates the simulator preconditions.
pub fn simulate(
    algorithm: Algorithm,
    catalog: &Catalog,
    config: &SchedulerConfig,
) -> Result<ScheduleOutcome, ScheduleError> {
    match algorithm {
        Algorithm::Fcfs => fcfs::simulate(catalog),
        Algorithm::Sjf => sjf::simulate(catalog),
        Algorithm::Priority => priority::simulate(catalog),
        Algorithm::RoundRobin => {
            round_robin::simulate(catalog, config.quantum, config.round_robin_cursor)
        }
    }
}

/// Simulates `algorithm`, then writes its titled report to `w`.
pub fn schedule_with<W: Write>(
    w: &mut W,
    title: &str,
    algorithm: Algorithm,
    catalog: &Catalog,
    config: &SchedulerConfig,
) -> Result<ScheduleOutcome, ScheduleError> {
    let outcome = simulate(algorithm, catalog, config)?.with_title(title);
    report::render(w, &outcome)?;
    Ok(outcome)
}

/// Runs first-come, first-served and writes the report to `w`.
///
/// # Example
/// ```
/// use cpu_schedule::models::{Catalog, Process};
/// use cpu_schedule::scheduler::fcfs_schedule;
///
/// let catalog = Catalog::new(vec![Process::new(1, 5, 0), Process::new(2, 3, 5)]);
/// let mut out = Vec::new();
/// let outcome = fcfs_schedule(&mut out, "First-come, first-serve", &catalog).unwrap();
/// assert_eq!(outcome.rows[1].completion_time, 8);
/// assert!(String::from_utf8(out).unwrap().contains("Gantt schedule"));
/// ```
pub fn fcfs_schedule<W: Write>(
    w: &mut W,
    title: &str,
    catalog: &Catalog,
) -> Result<ScheduleOutcome, ScheduleError> {
    schedule_with(w, title, Algorithm::Fcfs, catalog, &SchedulerConfig::default())
}

/// Runs shortest-job-first and writes the report to `w`.
pub fn sjf_schedule<W: Write>(
    w: &mut W,
    title: &str,
    catalog: &Catalog,
) -> Result<ScheduleOutcome, ScheduleError> {
    schedule_with(w, title, Algorithm::Sjf, catalog, &SchedulerConfig::default())
}

/// Runs preemptive priority scheduling and writes the report to `w`.
pub fn priority_schedule<W: Write>(
    w: &mut W,
    title: &str,
    catalog: &Catalog,
) -> Result<ScheduleOutcome, ScheduleError> {
    schedule_with(w, title, Algorithm::Priority, catalog, &SchedulerConfig::default())
}

/// Runs round-robin with the default quantum of 4 and writes the report to `w`.
pub fn round_robin_schedule<W: Write>(
    w: &mut W,
    title: &str,
    catalog: &Catalog,
) -> Result<ScheduleOutcome, ScheduleError> {
    schedule_with(w, title, Algorithm::RoundRobin, catalog, &SchedulerConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Process, Tick};
    use crate::workload::WorkloadSpec;

    fn fixture() -> Catalog {
        Catalog::new(vec![
            Process::new(1, 7, 0).with_priority(2),
            Process::new(2, 4, 2).with_priority(1),
            Process::new(3, 1, 4).with_priority(3),
            Process::new(4, 4, 5).with_priority(1),
        ])
    }

    fn assert_invariants(catalog: &Catalog, outcome: &ScheduleOutcome) {
        assert_eq!(outcome.rows.len(), catalog.len());
        for (row, process) in outcome.rows.iter().zip(catalog) {
            assert_eq!(row.process_id, process.id);
            assert_eq!(
                row.turnaround_time,
                row.waiting_time + row.burst_duration,
                "{:?} P{}",
                outcome.algorithm,
                row.process_id
            );
            assert_eq!(row.completion_time, row.arrival_time + row.turnaround_time);
        }

        let gantt = &outcome.gantt;
        assert!(gantt.is_non_overlapping(), "{:?}", outcome.algorithm);
        assert_eq!(gantt.covered_ticks(), catalog.total_burst());
        for process in catalog {
            let ran: Tick = gantt
                .slices_for(process.id)
                .iter()
                .map(|s| s.duration())
                .sum();
            assert_eq!(ran, process.burst_duration);
        }
    }

    #[test]
    fn test_all_algorithms_hold_invariants() {
        let catalog = fixture();
        let config = SchedulerConfig::default();
        for algorithm in Algorithm::ALL {
            let outcome = simulate(algorithm, &catalog, &config).unwrap();
            assert_eq!(outcome.algorithm, algorithm);
            assert_invariants(&catalog, &outcome);
            // Fully loaded from t=0: no idle gaps.
            assert!(outcome.gantt.is_contiguous(), "{algorithm:?}");
        }
    }

    #[test]
    fn test_invariants_on_generated_workloads() {
        let config = SchedulerConfig::default().with_cursor_policy(CursorPolicy::ArrivedOnly);
        for seed in 0..25 {
            let catalog = WorkloadSpec::default().with_ticks(40).generate(seed);
            if catalog.is_empty() {
                continue;
            }
            for algorithm in Algorithm::ALL {
                let outcome = simulate(algorithm, &catalog, &config).unwrap();
                assert_invariants(&catalog, &outcome);
                for row in &outcome.rows {
                    assert!(row.waiting_time >= 0, "seed {seed} {algorithm:?}");
                }
            }
        }
    }

    #[test]
    fn test_runs_are_independent() {
        let catalog = fixture();
        let config = SchedulerConfig::default();
        let first = simulate(Algorithm::Sjf, &catalog, &config).unwrap();
        let _ = simulate(Algorithm::RoundRobin, &catalog, &config).unwrap();
        let again = simulate(Algorithm::Sjf, &catalog, &config).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_empty_catalog_fails_fast() {
        let config = SchedulerConfig::default();
        for algorithm in Algorithm::ALL {
            let err = simulate(algorithm, &Catalog::default(), &config).unwrap_err();
            assert!(matches!(err, ScheduleError::EmptyCatalog));
        }
    }

    #[test]
    fn test_zero_burst_fails_fast() {
        let catalog = Catalog::new(vec![Process::new(1, 3, 0), Process::new(2, 0, 1)]);
        let config = SchedulerConfig::default();
        for algorithm in Algorithm::ALL {
            let err = simulate(algorithm, &catalog, &config).unwrap_err();
            assert!(matches!(err, ScheduleError::Invalid(_)));
        }
    }

    #[test]
    fn test_unrepresentable_timeline_fails_fast() {
        let catalog = Catalog::new(vec![Process::new(1, i64::MAX, 0), Process::new(2, 1, 0)]);
        let config = SchedulerConfig::default();
        for algorithm in Algorithm::ALL {
            let err = simulate(algorithm, &catalog, &config).unwrap_err();
            assert!(matches!(err, ScheduleError::Invalid(_)), "{algorithm:?}");
        }
    }

    #[test]
    fn test_entry_points_write_reports() {
        let catalog = fixture();
        let mut out = Vec::new();
        fcfs_schedule(&mut out, "FCFS", &catalog).unwrap();
        sjf_schedule(&mut out, "SJF", &catalog).unwrap();
        priority_schedule(&mut out, "Prio", &catalog).unwrap();
        let rr = round_robin_schedule(&mut out, "RR", &catalog).unwrap();
        assert_eq!(rr.title, "RR");

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Gantt schedule").count(), 4);
        assert_eq!(text.matches("Schedule table").count(), 4);
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!(Algorithm::RoundRobin.name(), "rr");
        assert_eq!(Algorithm::Fcfs.title(), "First-come, first-serve");
        assert_eq!(DEFAULT_QUANTUM.get(), 4);
        let json = serde_json::to_string(&Algorithm::RoundRobin).unwrap();
        assert_eq!(json, "\"round_robin\"");
    }
}
