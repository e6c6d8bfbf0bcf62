//! CPU scheduling simulator.
//!
//! Simulates four classic single-processor policies over a catalog of
//! processes and reports, for each run, a Gantt trace, per-process waiting
//! and turnaround times and the run averages and throughput.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Catalog`, `TimeSlice`,
//!   `GanttTrace`, `ScheduleRow`
//! - **`dispatching`**: Selection rules ranking the eligible processes at a tick
//! - **`scheduler`**: FCFS, SJF, Priority and Round-Robin simulators, the
//!   shared tick engine and run metrics
//! - **`validation`**: Input integrity checks (empty catalog, duplicate IDs,
//!   non-positive bursts, negative arrivals)
//! - **`report`**: Text and JSON rendering of outcomes
//! - **`loader`**: Comma-separated process list input
//! - **`workload`**: Seeded synthetic catalogs
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::{Catalog, Process};
//! use cpu_schedule::scheduler::{simulate, Algorithm, SchedulerConfig};
//!
//! let catalog = Catalog::new(vec![
//!     Process::new(1, 24, 0),
//!     Process::new(2, 3, 0),
//!     Process::new(3, 3, 0),
//! ]);
//! let outcome = simulate(Algorithm::Fcfs, &catalog, &SchedulerConfig::default()).unwrap();
//! assert_eq!(outcome.summary.average_wait, 17.0);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin, Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum, Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{LoadError, ScheduleError};
pub use scheduler::{
    fcfs_schedule, priority_schedule, round_robin_schedule, sjf_schedule, Algorithm,
    ScheduleOutcome, SchedulerConfig,
};
