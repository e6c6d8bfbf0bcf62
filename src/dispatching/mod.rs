//! Selection rules for the tick-driven simulators.
//!
//! Every tick, the SJF and priority simulators scan the catalog and hand
//! the processor to the best eligible process. "Best" is decided by a
//! [`SelectionRule`]; eligibility (arrived, work remaining) is decided by
//! the [`DispatchContext`].
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{select_best, DispatchContext};
//! use cpu_schedule::dispatching::rules;
//! use cpu_schedule::models::{Catalog, Process};
//!
//! let catalog = Catalog::new(vec![Process::new(1, 7, 0), Process::new(2, 4, 0)]);
//! let remaining = [7, 4];
//! let ctx = DispatchContext::new(0, &catalog, &remaining);
//! assert_eq!(select_best(&rules::ShortestRemaining, &ctx), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod context;
pub mod rules;

pub use context::DispatchContext;

use crate::models::{Process, Tick};
use std::fmt::Debug;

/// A rule that ranks eligible processes.
///
/// # Key Convention
/// **Lower key = higher priority.** Among equal keys the process declared
/// first in the catalog wins, so rules never need an index component.
pub trait SelectionRule: Send + Sync + Debug {
    /// Ordering key; the minimum is selected.
    type Key: Ord;

    /// Rule name (e.g., "SRT").
    fn name(&self) -> &'static str;

    /// Ranks a process given its remaining burst.
    fn key(&self, process: &Process, remaining: Tick) -> Self::Key;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Returns the catalog index of the best eligible process.
///
/// `None` means no process is eligible at this tick and the processor idles.
pub fn select_best<R: SelectionRule>(rule: &R, ctx: &DispatchContext<'_>) -> Option<usize> {
    let mut best: Option<(R::Key, usize)> = None;

    for (index, process) in ctx.catalog.iter().enumerate() {
        if !ctx.is_eligible(index) {
            continue;
        }
        let key = rule.key(process, ctx.remaining[index]);
        if best.as_ref().map_or(true, |(best_key, _)| key < *best_key) {
            best = Some((key, index));
        }
    }

    best.map(|(_, index)| index)
}
