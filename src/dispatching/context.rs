//! Per-tick dispatch context.

use crate::models::{Catalog, Tick};

/// Simulation state visible to selection rules at one tick.
#[derive(Debug, Clone, Copy)]
pub struct DispatchContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,
    /// The process catalog.
    pub catalog: &'a Catalog,
    /// Remaining burst per catalog index.
    pub remaining: &'a [Tick],
}

impl<'a> DispatchContext<'a> {
    /// Creates a context at the given tick.
    pub fn new(tick: Tick, catalog: &'a Catalog, remaining: &'a [Tick]) -> Self {
        debug_assert_eq!(catalog.len(), remaining.len());
        Self {
            tick,
            catalog,
            remaining,
        }
    }

    /// Whether the process at `index` has arrived and still needs the processor.
    pub fn is_eligible(&self, index: usize) -> bool {
        self.remaining[index] > 0
            && self
                .catalog
                .get(index)
                .is_some_and(|p| p.has_arrived(self.tick))
    }
}
