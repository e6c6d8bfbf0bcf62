//! Preemptive priority scheduling.
//!
//! Same tick-driven structure as SJF, with a different selection key:
//! lowest `priority` value first, then smallest remaining burst, then
//! catalog order. A newly arrived process with a lower priority value
//! takes the processor at the next tick boundary.

use super::engine::{self, RulePolicy};
use super::{Algorithm, ScheduleOutcome};
use crate::dispatching::rules::PriorityThenShortest;
use crate::error::ScheduleError;
use crate::models::Catalog;
use crate::validation::ensure_schedulable;

/// Simulates preemptive priority scheduling over `catalog`.
pub fn simulate(catalog: &Catalog) -> Result<ScheduleOutcome, ScheduleError> {
    ensure_schedulable(catalog)?;
    engine::run(
        catalog,
        Algorithm::Priority,
        &mut RulePolicy(PriorityThenShortest),
    )
}
