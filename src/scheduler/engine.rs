//! Tick-driven simulation engine.
//!
//! Shared by the SJF, priority and round-robin simulators. A
//! [`TickPolicy`] picks the process that owns the processor for each tick;
//! the engine does the bookkeeping that follows from that choice.
//!
//! # Algorithm
//!
//! For every tick `t` until all processes complete:
//! 1. Ask the policy for a catalog index (or `None` to idle).
//! 2. If the choice differs from the previous tick's and the previous
//!    process still has work, close its Gantt slice at `t`.
//! 3. Run the chosen process for one tick.
//! 4. If it just reached zero remaining, close its slice at `t + 1` and
//!    record its row with completion `t + 1`.
//!
//! The loop is bounded by [`Catalog::horizon`], so it always terminates.

use tracing::{debug, info, trace};

use super::kpi::MetricsAccumulator;
use super::{Algorithm, ScheduleOutcome};
use crate::dispatching::{select_best, DispatchContext, SelectionRule};
use crate::error::ScheduleError;
use crate::models::{Catalog, GanttTrace, ScheduleRow, Tick, TimeSlice};

/// Decides which process runs at each tick.
pub trait TickPolicy {
    /// Returns the catalog index to run at `ctx.tick`, or `None` to idle.
    ///
    /// The returned process must be one with remaining work.
    fn select(&mut self, ctx: &DispatchContext<'_>) -> Option<usize>;
}

/// Adapts a [`SelectionRule`] to a [`TickPolicy`]: every tick, the best
/// eligible process by the rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct RulePolicy<R>(pub R);

impl<R: SelectionRule> TickPolicy for RulePolicy<R> {
    fn select(&mut self, ctx: &DispatchContext<'_>) -> Option<usize> {
        select_best(&self.0, ctx)
    }
}

/// Mutable state of one simulation run.
#[derive(Debug)]
pub(crate) struct TickEngine<'a> {
    catalog: &'a Catalog,
    remaining: Vec<Tick>,
    running: Option<usize>,
    streak_start: Tick,
    gantt: GanttTrace,
    metrics: MetricsAccumulator,
}

impl<'a> TickEngine<'a> {
    pub(crate) fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            remaining: catalog.iter().map(|p| p.burst_duration).collect(),
            running: None,
            streak_start: 0,
            gantt: GanttTrace::new(),
            metrics: MetricsAccumulator::new(catalog.len()),
        }
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.metrics.is_complete()
    }

    /// Advances the simulation by one tick with `selected` on the processor.
    pub(crate) fn step(&mut self, tick: Tick, selected: Option<usize>) {
        if selected != self.running {
            if let Some(prev) = self.running.filter(|&i| self.remaining[i] > 0) {
                let process = &self.catalog.as_slice()[prev];
                debug!(
                    tick,
                    process = process.id,
                    remaining = self.remaining[prev],
                    "preempted"
                );
                self.gantt
                    .push(TimeSlice::new(process.id, self.streak_start, tick));
            }
            self.running = selected;
            self.streak_start = tick;
        }

        let Some(current) = selected else {
            trace!(tick, "processor idle");
            return;
        };

        debug_assert!(self.remaining[current] > 0, "selected a finished process");
        self.remaining[current] -= 1;

        if self.remaining[current] == 0 {
            let process = &self.catalog.as_slice()[current];
            let completion = tick + 1;
            self.gantt
                .push(TimeSlice::new(process.id, self.streak_start, completion));
            let row = ScheduleRow::completed(process, completion);
            debug!(
                tick = completion,
                process = process.id,
                wait = row.waiting_time,
                turnaround = row.turnaround_time,
                "completed"
            );
            self.metrics.record(current, row);
        }
    }

    pub(crate) fn finish(
        self,
        algorithm: Algorithm,
        horizon: Tick,
    ) -> Result<ScheduleOutcome, ScheduleError> {
        let summary = self.metrics.summary();
        let catalog = self.catalog;
        let rows = self
            .metrics
            .into_rows()
            .map_err(|index| ScheduleError::Unfinished {
                process_id: catalog.as_slice()[index].id,
                horizon,
            })?;

        info!(
            algorithm = algorithm.name(),
            average_wait = summary.average_wait,
            average_turnaround = summary.average_turnaround,
            throughput = summary.throughput,
            "run finished"
        );

        Ok(ScheduleOutcome {
            algorithm,
            title: algorithm.title().to_string(),
            gantt: self.gantt,
            rows,
            summary,
        })
    }
}

/// Runs `policy` over `catalog` until every process completes.
///
/// The catalog must already be validated.
pub(crate) fn run<P: TickPolicy>(
    catalog: &Catalog,
    algorithm: Algorithm,
    policy: &mut P,
) -> Result<ScheduleOutcome, ScheduleError> {
    let horizon = catalog.horizon();
    let mut engine = TickEngine::new(catalog);

    for tick in 0..horizon {
        if engine.is_finished() {
            break;
        }
        let ctx = DispatchContext::new(tick, catalog, &engine.remaining);
        let selected = policy.select(&ctx);
        engine.step(tick, selected);
    }

    engine.finish(algorithm, horizon)
}
