//! Seeded synthetic workloads.
//!
//! Each tick in `0..ticks` admits a new process with probability
//! `arrival_rate`. An admitted process is short with probability
//! `short_rate` and long otherwise, and draws a priority uniformly from
//! `0..=max_priority`. Ids count up from 1 in arrival order, so the
//! generated catalog is already sorted for FCFS.
//!
//! ```
//! use cpu_schedule::workload::WorkloadSpec;
//!
//! let spec = WorkloadSpec::default().with_ticks(50);
//! assert_eq!(spec.generate(7), spec.generate(7));
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::{Catalog, Process, Tick};

/// Parameters of a Bernoulli-arrival workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    /// Number of ticks during which processes may arrive.
    pub ticks: Tick,
    /// Per-tick arrival probability.
    pub arrival_rate: f64,
    /// Probability that an arrival is a short process.
    pub short_rate: f64,
    /// Burst of a short process.
    pub short_burst: Tick,
    /// Burst of a long process.
    pub long_burst: Tick,
    /// Largest priority value drawn.
    pub max_priority: i64,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            ticks: 100,
            arrival_rate: 0.1,
            short_rate: 0.8,
            short_burst: 2,
            long_burst: 20,
            max_priority: 5,
        }
    }
}

impl WorkloadSpec {
    /// Sets the arrival window length.
    pub fn with_ticks(mut self, ticks: Tick) -> Self {
        self.ticks = ticks;
        self
    }

    /// Sets the per-tick arrival probability.
    pub fn with_arrival_rate(mut self, rate: f64) -> Self {
        self.arrival_rate = rate;
        self
    }

    /// Sets the probability that an arrival is short.
    pub fn with_short_rate(mut self, rate: f64) -> Self {
        self.short_rate = rate;
        self
    }

    /// Sets the short and long burst durations.
    pub fn with_bursts(mut self, short: Tick, long: Tick) -> Self {
        self.short_burst = short;
        self.long_burst = long;
        self
    }

    /// Sets the largest priority value drawn.
    pub fn with_max_priority(mut self, max_priority: i64) -> Self {
        self.max_priority = max_priority;
        self
    }

    /// Generates a catalog. The same seed always yields the same catalog.
    pub fn generate(&self, seed: u64) -> Catalog {
        let mut rng = StdRng::seed_from_u64(seed);
        let max_priority = self.max_priority.max(0);
        let mut processes = Vec::new();

        for tick in 0..self.ticks {
            if rng.random::<f64>() >= self.arrival_rate {
                continue;
            }
            let burst = if rng.random::<f64>() < self.short_rate {
                self.short_burst
            } else {
                self.long_burst
            };
            let priority = rng.random_range(0..=max_priority);
            let id = processes.len() as i64 + 1;
            processes.push(Process::new(id, burst, tick).with_priority(priority));
        }

        Catalog::new(processes)
    }
}
