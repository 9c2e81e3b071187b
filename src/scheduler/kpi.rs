//! Schedule performance metrics.
//!
//! Computes aggregate indicators from a completed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | mean(turnaround - burst) |
//! | Avg Turnaround Time | mean(completion - arrival) |
//! | CPU Utilization | total burst / last segment completion × 100 |
//! | Throughput | processes / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::ScheduleResult;

/// Aggregate performance of one schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateMetrics {
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Busy time over elapsed time, in percent (0..=100).
    pub cpu_utilization_percent: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Completion time of the last segment.
    pub makespan: i64,
}

/// Errors from metric computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsError {
    /// The schedule has no processes or no timeline.
    NoData,
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoData => write!(f, "no scheduled processes to measure"),
        }
    }
}

impl std::error::Error for MetricsError {}

impl AggregateMetrics {
    /// Computes metrics from a completed schedule.
    ///
    /// Utilization is 0 when the last segment completes at t=0.
    ///
    /// # Errors
    /// [`MetricsError::NoData`] if the schedule has no processes or no segments.
    pub fn calculate(schedule: &ScheduleResult) -> Result<Self, MetricsError> {
        if schedule.processes.is_empty() || schedule.timeline.is_empty() {
            return Err(MetricsError::NoData);
        }

        let n = schedule.processes.len() as f64;
        let total_waiting: f64 = schedule.processes.iter().map(|p| p.waiting_time as f64).sum();
        let total_turnaround: f64 = schedule
            .processes
            .iter()
            .map(|p| p.turnaround_time as f64)
            .sum();
        let makespan = schedule.makespan();

        let (cpu_utilization_percent, throughput) = if makespan > 0 {
            (
                schedule.total_burst() as f64 / makespan as f64 * 100.0,
                n / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Ok(Self {
            avg_waiting_time: total_waiting / n,
            avg_turnaround_time: total_turnaround / n,
            cpu_utilization_percent,
            throughput,
            makespan,
        })
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, min_utilization_percent: f64) -> bool {
        self.avg_waiting_time <= max_avg_waiting
            && self.cpu_utilization_percent >= min_utilization_percent
    }
}
