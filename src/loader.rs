//! Process list loading.
//!
//! Reads comma-separated records, one process per line:
//!
//! ```text
//! id, burst, arrival[, priority]
//! ```
//!
//! Blank lines are skipped and fields are trimmed. A missing priority
//! defaults to 0. Values are parsed but not validated; the simulators do
//! that before running.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::LoadError;
use crate::models::{Catalog, Process};

const FIELD_NAMES: [&str; 4] = ["id", "burst", "arrival", "priority"];

/// Reads a catalog from delimited text.
pub fn load_catalog<R: BufRead>(reader: R) -> Result<Catalog, LoadError> {
    let mut processes = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        processes.push(parse_record(index + 1, &line)?);
    }

    debug!(processes = processes.len(), "loaded process catalog");
    Ok(Catalog::new(processes))
}

/// Reads a catalog from the file at `path`.
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<Catalog, LoadError> {
    let file = File::open(path)?;
    load_catalog(BufReader::new(file))
}

/// Formats a catalog in the same layout [`load_catalog`] reads.
pub fn to_csv(catalog: &Catalog) -> String {
    catalog
        .iter()
        .map(|p| {
            format!(
                "{},{},{},{}\n",
                p.id, p.burst_duration, p.arrival_time, p.priority
            )
        })
        .collect()
}

fn parse_record(line: usize, record: &str) -> Result<Process, LoadError> {
    let fields: Vec<&str> = record.split(',').map(str::trim).collect();
    if !(3..=4).contains(&fields.len()) {
        return Err(LoadError::FieldCount {
            line,
            found: fields.len(),
        });
    }

    let parse = |i: usize| -> Result<i64, LoadError> {
        fields[i]
            .parse::<i64>()
            .map_err(|source| LoadError::InvalidInteger {
                line,
                field: FIELD_NAMES[i],
                source,
            })
    };

    let mut process = Process::new(parse(0)?, parse(1)?, parse(2)?);
    if fields.len() == 4 {
        process = process.with_priority(parse(3)?);
    }
    Ok(process)
}
