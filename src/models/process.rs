//! Process and catalog model.
//!
//! A process is an immutable batch job: it becomes eligible at its arrival
//! tick and needs `burst_duration` ticks of processor time. The catalog is
//! the ordered, read-only list of processes that every simulator consumes.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Simulation time in ticks.
pub type Tick = i64;

/// Process identifier as declared by the input.
pub type ProcessId = i64;

/// A process to be scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: Tick,
    /// Total processor ticks required.
    pub burst_duration: Tick,
    /// Scheduling priority (lower = more important). Defaults to 0.
    pub priority: i64,
}

impl Process {
    /// Creates a process with priority 0.
    ///
    /// Argument order follows the input record layout: id, burst, arrival.
    pub fn new(id: ProcessId, burst_duration: Tick, arrival_time: Tick) -> Self {
        Self {
            id,
            arrival_time,
            burst_duration,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `tick`.
    #[inline]
    pub fn has_arrived(&self, tick: Tick) -> bool {
        self.arrival_time <= tick
    }
}

/// Ordered, read-only list of processes.
///
/// Catalog order is significant: FCFS executes in it, and the tick-driven
/// simulators break ties by it (earliest declared wins).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    processes: Vec<Process>,
}

impl Catalog {
    /// Creates a catalog, preserving the given order.
    pub fn new(processes: Vec<Process>) -> Self {
        Self { processes }
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the catalog holds no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Process at catalog index `index`.
    pub fn get(&self, index: usize) -> Option<&Process> {
        self.processes.get(index)
    }

    /// Iterates in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    /// All processes as a slice.
    pub fn as_slice(&self) -> &[Process] {
        &self.processes
    }

    /// Sum of all burst durations, saturating at `Tick::MAX`.
    pub fn total_burst(&self) -> Tick {
        self.processes
            .iter()
            .fold(0, |acc: Tick, p| acc.saturating_add(p.burst_duration))
    }

    /// Latest arrival tick (0 for an empty catalog).
    pub fn max_arrival(&self) -> Tick {
        self.processes
            .iter()
            .map(|p| p.arrival_time)
            .max()
            .unwrap_or(0)
    }

    /// Upper bound on the simulated timeline.
    ///
    /// The processor can idle at most until the last arrival, after which
    /// every remaining burst tick runs back to back. Saturates at
    /// `Tick::MAX`; see [`Catalog::checked_horizon`].
    pub fn horizon(&self) -> Tick {
        self.checked_horizon().unwrap_or(Tick::MAX)
    }

    /// [`Catalog::horizon`], or `None` if it does not fit in a [`Tick`].
    pub fn checked_horizon(&self) -> Option<Tick> {
        self.processes
            .iter()
            .try_fold(self.max_arrival(), |acc, p| acc.checked_add(p.burst_duration))
    }

    /// Whether arrival times are non-decreasing in catalog order.
    pub fn is_sorted_by_arrival(&self) -> bool {
        self.processes
            .windows(2)
            .all(|w| w[0].arrival_time <= w[1].arrival_time)
    }

    /// Returns a copy stably sorted by arrival time.
    pub fn sorted_by_arrival(&self) -> Self {
        let mut processes = self.processes.clone();
        processes.sort_by_key(|p| p.arrival_time);
        Self { processes }
    }
}

impl FromIterator<Process> for Catalog {
    fn from_iter<I: IntoIterator<Item = Process>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}
