//! Error types.

use thiserror::Error;

use crate::models::ProcessId;
use crate::validation::ValidationError;

/// Failure of a simulation run.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// The catalog holds no process; averages and throughput are undefined.
    #[error("empty schedule: the process catalog is empty")]
    EmptyCatalog,
    /// The catalog failed validation.
    #[error("invalid process catalog: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
    /// A process still had work left when the timeline ended.
    #[error("process {process_id} did not finish within {horizon} ticks")]
    Unfinished {
        /// The unfinished process.
        process_id: ProcessId,
        /// Last simulated tick bound.
        horizon: i64,
    },
    /// Writing the report failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Serializing the report failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure while reading a process list.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Opening or reading the source failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A record had neither three nor four fields.
    #[error("line {line}: expected 3 or 4 fields (id, burst, arrival[, priority]), found {found}")]
    FieldCount {
        /// 1-based line number.
        line: usize,
        /// Number of fields on the line.
        found: usize,
    },
    /// A field was not an integer.
    #[error("line {line}: field {field} is not an integer: {source}")]
    InvalidInteger {
        /// 1-based line number.
        line: usize,
        /// Name of the offending field.
        field: &'static str,
        /// Underlying parse failure.
        #[source]
        source: std::num::ParseIntError,
    },
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
