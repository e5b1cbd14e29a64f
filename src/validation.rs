//! Input validation for simulation requests.
//!
//! Checks a process list and algorithm parameters before any algorithm
//! runs. Detects:
//! - Empty process sets
//! - Negative arrival times
//! - Zero or negative burst times
//! - Zero or negative Round-Robin quanta
//! - Process sets whose simulated time would not fit in `Ticks`
//! - Processes without a priority when a priority algorithm is selected
//!
//! A malformed process set is never simulated; all problems are collected
//! and reported together.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Process, ProcessId, Ticks};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessSet,
    /// A process arrives before tick 0.
    NegativeArrival,
    /// A process has a burst of zero or less.
    NonPositiveBurst,
    /// Round-Robin quantum is zero or less.
    NonPositiveQuantum,
    /// A priority algorithm was asked to run on a process with no priority.
    MissingPriority,
    /// Round-Robin was requested without a quantum.
    MissingQuantum,
    /// Random workload parameters describe an empty range.
    InvalidWorkload,
    /// A serialized request could not be parsed.
    InvalidRequest,
    /// Simulated time or its totals would overflow `Ticks`.
    TickOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process list.
///
/// Checks:
/// 1. At least one process
/// 2. Every arrival is `>= 0`
/// 3. Every burst is `> 0`
/// 4. `n × (max arrival + Σ burst)` fits in `Ticks`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "Process set is empty",
        ));
    }

    for (index, process) in processes.iter().enumerate() {
        let label = ProcessId(index).label();
        if process.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process {label} has negative arrival time {}",
                    process.arrival
                ),
            ));
        }
        if process.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process {label} has non-positive burst time {}",
                    process.burst
                ),
            ));
        }
    }

    if errors.is_empty() && time_bound(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TickOverflow,
            "Arrival and burst times are too large to simulate without overflow",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// No run can end later than `max(arrival) + Σ burst`. Every completion,
/// turnaround and response is bounded by that, so every total is bounded
/// by `n` times it.
fn time_bound(processes: &[Process]) -> Option<Ticks> {
    let latest = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
    let work = processes
        .iter()
        .try_fold(0 as Ticks, |acc, p| acc.checked_add(p.burst))?;
    let end = latest.checked_add(work)?;
    end.checked_mul(Ticks::try_from(processes.len()).ok()?)
}

/// Validates a Round-Robin time quantum.
pub fn validate_quantum(quantum: Ticks) -> ValidationResult {
    if quantum <= 0 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Round-Robin quantum must be positive, got {quantum}"),
        )]);
    }
    Ok(())
}

/// Checks that every process carries a priority.
///
/// Used by the two priority algorithms; the others ignore priorities.
pub fn validate_priorities(processes: &[Process]) -> ValidationResult {
    let errors: Vec<ValidationError> = processes
        .iter()
        .enumerate()
        .filter(|(_, p)| p.priority.is_none())
        .map(|(index, _)| {
            ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("Process {} has no priority", ProcessId(index).label()),
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
