//! Input validation for process catalogs.
//!
//! Checks the preconditions every simulator relies on before the first
//! tick is simulated. Detects:
//! - Empty catalogs
//! - Duplicate process IDs
//! - Zero or negative burst durations
//! - Negative arrival times
//! - Timelines too long to represent in a `Tick`
//!
//! A catalog that passes has a finite, statically known timeline
//! (`Catalog::horizon`), so every simulation loop terminates.

use std::collections::HashSet;

use crate::error::ScheduleError;
use crate::models::Catalog;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The catalog has no processes.
    EmptyCatalog,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process needs zero or fewer ticks.
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
    /// The last arrival plus the total burst exceeds `Tick::MAX`.
    HorizonOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process catalog.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. Every burst duration is strictly positive
/// 4. Every arrival time is non-negative
/// 5. The timeline bound (`max_arrival + Σ burst`) fits in a `Tick`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();

    if catalog.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCatalog,
            "Process catalog is empty",
        ));
    }

    let mut ids = HashSet::new();
    for p in catalog {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_duration <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process {} has non-positive burst duration {}",
                    p.id, p.burst_duration
                ),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {} has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }
    }

    if catalog.checked_horizon().is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            format!(
                "Last arrival {} plus total burst overflows the tick range",
                catalog.max_arrival()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Runs [`validate_catalog`] and maps failures to a [`ScheduleError`].
///
/// An empty catalog is reported as [`ScheduleError::EmptyCatalog`] on its own.
pub(crate) fn ensure_schedulable(catalog: &Catalog) -> Result<(), ScheduleError> {
    if catalog.is_empty() {
        return Err(ScheduleError::EmptyCatalog);
    }
    validate_catalog(catalog).map_err(ScheduleError::Invalid)
}
