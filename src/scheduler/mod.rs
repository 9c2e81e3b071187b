//! CPU schedulers, metrics, and algorithm comparison.
//!
//! Provides the three uniprocessor scheduling disciplines and the
//! performance metrics computed from their output.
//!
//! # Algorithms
//!
//! | Scheduler | Preemptive | Selection |
//! |-----------|-----------|-----------|
//! | `FcfsScheduler` | No | Earliest arrival (stable) |
//! | `SjfScheduler` | No | Shortest burst among arrived (first minimum) |
//! | `RoundRobinScheduler` | Yes | FIFO ready queue, fixed quantum |
//!
//! Every scheduler is a pure function of its input: it borrows the
//! process list, never mutates it, and returns a fresh `ScheduleResult`.
//!
//! # Metrics
//!
//! `AggregateMetrics` computes average waiting time, average turnaround
//! time, and CPU utilization from a completed schedule.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod algorithm;
mod compare;
mod fcfs;
mod kpi;
mod round_robin;
mod sjf;

pub use algorithm::Algorithm;
pub use compare::{Comparison, ComparisonEntry};
pub use fcfs::FcfsScheduler;
pub use kpi::{AggregateMetrics, MetricsError};
pub use round_robin::{RoundRobinScheduler, DEFAULT_QUANTUM};
pub use sjf::SjfScheduler;

use log::warn;
use std::fmt::Debug;

use crate::models::{ExecutionSegment, ProcessInput, ProcessResult, ScheduleResult};
use crate::validation::{validate_input, validate_quantum, ValidationError, ValidationResult};

/// Result of a scheduling call: a schedule, or every input contract violation found.
pub type ScheduleOutcome = Result<ScheduleResult, Vec<ValidationError>>;

/// A uniprocessor scheduling discipline.
pub trait Scheduler: Send + Sync + Debug {
    /// Algorithm name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Schedules `processes` and returns the final records and trace.
    ///
    /// Input order is the tie-break order. Empty input yields an empty
    /// schedule; invalid input is rejected before any work is done.
    fn schedule(&self, processes: &[ProcessInput]) -> ScheduleOutcome;
}

/// Validates input for a scheduler, logging any rejection.
fn check_input(scheduler: &str, processes: &[ProcessInput]) -> ValidationResult {
    validate_input(processes).inspect_err(|errors| log_rejection(scheduler, errors))
}

/// Validates a Round Robin quantum, logging any rejection.
fn check_quantum(scheduler: &str, quantum: i64) -> ValidationResult {
    validate_quantum(quantum).inspect_err(|errors| log_rejection(scheduler, errors))
}

fn log_rejection(scheduler: &str, errors: &[ValidationError]) {
    if let Some(first) = errors.first() {
        warn!(
            "{scheduler}: rejected input with {} error(s): {first}",
            errors.len()
        );
    }
}

/// Runs `process` to completion starting at `start_time`, recording one
/// segment and its final result. Returns the completion time.
fn run_to_completion(schedule: &mut ScheduleResult, process: &ProcessInput, start_time: i64) -> i64 {
    let segment = ExecutionSegment::new(process.id, start_time, process.burst_time);
    schedule.add_segment(segment);
    schedule.add_process(ProcessResult::from_input(
        process,
        start_time,
        segment.completion_time,
    ));
    segment.completion_time
}
