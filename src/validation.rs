//! Input validation for scheduling runs.
//!
//! Checks the caller's input contract before any scheduling work starts.
//! Detects:
//! - Duplicate process IDs
//! - Zero (or negative) burst times
//! - Negative arrival times
//! - Workloads whose clock would leave the `i64` range
//! - Round Robin quanta below 1
//!
//! An empty process list is not an error for the schedulers: they return
//! an empty schedule. `EmptyInput` is reported only by callers that
//! require at least one process.

use std::collections::HashSet;
use std::fmt;

use crate::models::ProcessInput;

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
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyInput,
    /// Round Robin quantum below 1.
    InvalidQuantum,
    /// Two processes share the same ID.
    DuplicateProcessId,
    /// A process requires no CPU time.
    ZeroBurstTime,
    /// A process arrives before t=0.
    NegativeArrivalTime,
    /// Latest arrival plus total burst does not fit in an `i64`.
    TimeOverflow,
    /// An algorithm name could not be parsed.
    UnknownAlgorithm,
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
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process list.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. Every burst time is at least 1
/// 3. No arrival time is negative
/// 4. Latest arrival plus total burst fits in an `i64`
///
/// The clock never passes the latest arrival plus the total burst, so
/// check 4 bounds every time value a scheduler computes.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[ProcessInput]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();
    let mut latest_arrival = 0i64;
    let mut total_burst = Some(0i64);

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateProcessId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_time < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurstTime,
                format!("Process {} has burst time {}", p.id, p.burst_time),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrivalTime,
                format!("Process {} arrives at {}", p.id, p.arrival_time),
            ));
        }

        latest_arrival = latest_arrival.max(p.arrival_time);
        if p.burst_time > 0 {
            total_burst = total_burst.and_then(|t| t.checked_add(p.burst_time));
        }
    }

    if total_burst
        .and_then(|t| t.checked_add(latest_arrival))
        .is_none()
    {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!("Latest arrival {latest_arrival} plus total burst exceeds {}", i64::MAX),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a process list that must contain at least one process.
pub fn validate_non_empty(processes: &[ProcessInput]) -> ValidationResult {
    if processes.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "No processes supplied",
        )]);
    }
    validate_input(processes)
}

/// Validates a Round Robin quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum < 1 {
        Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Quantum must be at least 1, got {quantum}"),
        )])
    } else {
        Ok(())
    }
}
