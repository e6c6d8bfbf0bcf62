//! Run metrics.
//!
//! Accumulates per-process results while a simulator runs, then reduces
//! them to the standard single-processor indicators.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average wait | Σ waiting time / n |
//! | Average turnaround | Σ (completion - arrival) / n |
//! | Throughput | n / last completion tick |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{ScheduleRow, Tick};

/// Summary indicators of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Mean waiting time (ticks).
    pub average_wait: f64,
    /// Mean turnaround time (ticks).
    pub average_turnaround: f64,
    /// Completed processes per tick.
    pub throughput: f64,
}

impl RunSummary {
    /// Computes the summary from completed rows.
    ///
    /// Returns all zeros for an empty slice.
    pub fn calculate(rows: &[ScheduleRow]) -> Self {
        let mut metrics = MetricsAccumulator::new(rows.len());
        for (index, row) in rows.iter().enumerate() {
            metrics.record(index, *row);
        }
        metrics.summary()
    }
}

/// Running totals and per-process rows for one simulation run.
///
/// Rows are indexed by catalog position and each is filled exactly once,
/// at the tick the process completes.
#[derive(Debug, Clone)]
pub struct MetricsAccumulator {
    rows: Vec<Option<ScheduleRow>>,
    total_wait: i128,
    total_turnaround: i128,
    last_completion: Tick,
    completed: usize,
}

impl MetricsAccumulator {
    /// Creates an accumulator for `process_count` processes.
    pub fn new(process_count: usize) -> Self {
        Self {
            rows: vec![None; process_count],
            total_wait: 0,
            total_turnaround: 0,
            last_completion: 0,
            completed: 0,
        }
    }

    /// Records the final row of the process at catalog index `index`.
    pub fn record(&mut self, index: usize, row: ScheduleRow) {
        debug_assert!(self.rows[index].is_none(), "row recorded twice");
        self.total_wait += i128::from(row.waiting_time);
        self.total_turnaround += i128::from(row.turnaround_time);
        self.last_completion = self.last_completion.max(row.completion_time);
        self.completed += 1;
        self.rows[index] = Some(row);
    }

    /// Number of processes that have completed.
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Whether every process has completed.
    pub fn is_complete(&self) -> bool {
        self.completed == self.rows.len()
    }

    /// Latest completion tick recorded so far.
    pub fn last_completion(&self) -> Tick {
        self.last_completion
    }

    /// Reduces the totals to averages and throughput.
    pub fn summary(&self) -> RunSummary {
        let count = self.rows.len() as f64;
        if self.rows.is_empty() || self.last_completion == 0 {
            return RunSummary {
                average_wait: 0.0,
                average_turnaround: 0.0,
                throughput: 0.0,
            };
        }

        RunSummary {
            average_wait: self.total_wait as f64 / count,
            average_turnaround: self.total_turnaround as f64 / count,
            throughput: count / self.last_completion as f64,
        }
    }

    /// Returns the rows in catalog order.
    ///
    /// # Errors
    /// The catalog index of the first process without a row.
    pub fn into_rows(self) -> Result<Vec<ScheduleRow>, usize> {
        self.rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| row.ok_or(index))
            .collect()
    }
}
