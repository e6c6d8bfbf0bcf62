//! CPU scheduling domain models.
//!
//! Provides the input and output data types shared by every simulator:
//! the read-only process catalog on one side, the Gantt trace and
//! per-process schedule rows on the other.
//!
//! # Domain Mappings
//!
//! | cpu-schedule | Textbook term | Output column |
//! |--------------|---------------|---------------|
//! | Process | Job / PCB | ID, Priority, Burst, Arrival |
//! | Catalog | Ready list (batch) | |
//! | TimeSlice | Gantt bar | |
//! | ScheduleRow | Result line | Wait, Turnaround, Exit |
//!
//! # Time Representation
//! All times are integer simulation ticks relative to t=0.

mod process;
mod schedule;

pub use process::{Catalog, Process, ProcessId, Tick};
pub use schedule::{GanttTrace, ScheduleRow, TimeSlice};
