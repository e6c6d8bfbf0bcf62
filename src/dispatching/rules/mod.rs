//! Built-in selection rules.
//!
//! # Score Convention
//! All rules return lower keys for processes that should run first.

use super::SelectionRule;
use crate::models::{Process, Tick};

/// Shortest Remaining Time.
///
/// Prioritizes the eligible process with the least work left. Because the
/// choice is re-evaluated every tick, a newly arrived shorter process takes
/// over at the next tick boundary.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    type Key = Tick;

    fn name(&self) -> &'static str {
        "SRT"
    }

    fn key(&self, _process: &Process, remaining: Tick) -> Self::Key {
        remaining
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

/// Priority with shortest-remaining tie-break.
///
/// Lowest `priority` value first; among equal priorities, the process with
/// less work left.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityThenShortest;

impl SelectionRule for PriorityThenShortest {
    type Key = (i64, Tick);

    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &Process, remaining: Tick) -> Self::Key {
        (process.priority, remaining)
    }

    fn description(&self) -> &'static str {
        "Lowest priority value, then Shortest Remaining Time"
    }
}
