//! Shortest job first.
//!
//! Tick-driven: every tick, the eligible process (arrived, work left) with
//! the smallest remaining burst gets the processor; ties go to the process
//! declared first. Since the choice is re-made every tick, a shorter
//! arrival takes over at the next tick boundary and the displaced process
//! resumes later, which makes this shortest-remaining-time-first in effect.

use super::engine::{self, RulePolicy};
use super::{Algorithm, ScheduleOutcome};
use crate::dispatching::rules::ShortestRemaining;
use crate::error::ScheduleError;
use crate::models::Catalog;
use crate::validation::ensure_schedulable;

/// Simulates SJF over `catalog`.
pub fn simulate(catalog: &Catalog) -> Result<ScheduleOutcome, ScheduleError> {
    ensure_schedulable(catalog)?;
    engine::run(catalog, Algorithm::Sjf, &mut RulePolicy(ShortestRemaining))
}
