//! Side-by-side comparison of all three algorithms on one workload.

use log::debug;
use serde::{Deserialize, Serialize};

use super::{check_quantum, log_rejection, AggregateMetrics, Algorithm};
use crate::models::{ProcessInput, ScheduleResult};
use crate::validation::{validate_non_empty, ValidationError, ValidationErrorKind};

/// One algorithm's outcome within a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    /// Algorithm that produced this entry.
    pub algorithm: Algorithm,
    /// Resulting schedule.
    pub schedule: ScheduleResult,
    /// Metrics of `schedule`.
    pub metrics: AggregateMetrics,
}

/// FCFS, SJF and Round Robin results for the same input.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::ProcessInput;
/// use cpu_schedule::scheduler::{Algorithm, Comparison};
///
/// let processes = vec![ProcessInput::new(1, 0, 8), ProcessInput::new(2, 0, 1)];
/// let comparison = Comparison::run(&processes, 2).unwrap();
/// assert_eq!(comparison.entries.len(), 3);
/// assert_eq!(comparison.recommended(), Some(Algorithm::Sjf));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Entries in FCFS, SJF, RR order.
    pub entries: Vec<ComparisonEntry>,
}

impl Comparison {
    /// Schedules `processes` with every algorithm.
    ///
    /// Each scheduler reads the same immutable input; none can observe
    /// another's work.
    ///
    /// # Errors
    /// All input violations, including an empty process list.
    pub fn run(processes: &[ProcessInput], quantum: i64) -> Result<Self, Vec<ValidationError>> {
        check_quantum("compare", quantum)?;
        validate_non_empty(processes).inspect_err(|errors| log_rejection("compare", errors))?;

        let algorithms = [
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::RoundRobin { quantum },
        ];

        let mut entries = Vec::with_capacity(algorithms.len());
        for algorithm in algorithms {
            let schedule = algorithm.run(processes)?;
            let metrics = AggregateMetrics::calculate(&schedule).map_err(|e| {
                vec![ValidationError::new(
                    ValidationErrorKind::EmptyInput,
                    e.to_string(),
                )]
            })?;
            debug!(
                "compare: {algorithm} avg wait {:.2}, avg turnaround {:.2}",
                metrics.avg_waiting_time, metrics.avg_turnaround_time
            );
            entries.push(ComparisonEntry {
                algorithm,
                schedule,
                metrics,
            });
        }

        Ok(Self { entries })
    }

    /// Algorithm with the lowest average waiting time.
    ///
    /// Ties go to the earlier entry.
    pub fn recommended(&self) -> Option<Algorithm> {
        let mut best: Option<&ComparisonEntry> = None;
        for entry in &self.entries {
            match best {
                Some(b) if entry.metrics.avg_waiting_time >= b.metrics.avg_waiting_time => {}
                _ => best = Some(entry),
            }
        }
        best.map(|e| e.algorithm)
    }

    /// Finds the entry for an algorithm by short name ("FCFS", "SJF", "RR").
    pub fn entry(&self, name: &str) -> Option<&ComparisonEntry> {
        self.entries
            .iter()
            .find(|e| e.algorithm.name().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ProcessInput> {
        vec![
            ProcessInput::new(1, 0, 8),
            ProcessInput::new(2, 1, 4),
            ProcessInput::new(3, 2, 9),
            ProcessInput::new(4, 3, 5),
        ]
    }

    #[test]
    fn test_compare_entries_in_order() {
        let c = Comparison::run(&sample(), 2).unwrap();
        let names: Vec<_> = c.entries.iter().map(|e| e.algorithm.name()).collect();
        assert_eq!(names, vec!["FCFS", "SJF", "RR"]);
    }

    #[test]
    fn test_compare_metrics_match_individual_runs() {
        let processes = sample();
        let c = Comparison::run(&processes, 3).unwrap();
        let rr = Algorithm::RoundRobin { quantum: 3 }.run(&processes).unwrap();
        assert_eq!(c.entry("rr").unwrap().schedule, rr);
        assert_eq!(
            c.entry("RR").unwrap().metrics,
            AggregateMetrics::calculate(&rr).unwrap()
        );
    }

    #[test]
    fn test_recommended_sjf() {
        let c = Comparison::run(&sample(), 2).unwrap();
        // FCFS avg wait 8.75, SJF 7.75
        let fcfs = c.entry("FCFS").unwrap().metrics.avg_waiting_time;
        assert!((fcfs - 8.75).abs() < 1e-10);
        assert_eq!(c.recommended(), Some(Algorithm::Sjf));
    }

    #[test]
    fn test_recommended_tie_goes_to_first() {
        // Single process: every algorithm waits 0
        let c = Comparison::run(&[ProcessInput::new(1, 0, 3)], 2).unwrap();
        assert_eq!(c.recommended(), Some(Algorithm::Fcfs));
    }

    #[test]
    fn test_compare_rejects_empty() {
        let errors = Comparison::run(&[], 2).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyInput);
    }

    #[test]
    fn test_compare_rejects_bad_quantum() {
        let errors = Comparison::run(&sample(), 0).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidQuantum);
    }

    #[test]
    fn test_compare_rejects_time_overflow() {
        let processes = vec![ProcessInput::new(1, i64::MAX, 1)];
        let errors = Comparison::run(&processes, 2).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_recommended_empty() {
        let c = Comparison {
            entries: Vec::new(),
        };
        assert_eq!(c.recommended(), None);
    }
}
