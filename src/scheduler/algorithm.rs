//! Algorithm selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{
    FcfsScheduler, RoundRobinScheduler, ScheduleOutcome, Scheduler, SjfScheduler, DEFAULT_QUANTUM,
};
use crate::models::ProcessInput;
use crate::validation::{validate_quantum, ValidationError, ValidationErrorKind};

/// A scheduling discipline and its parameters.
///
/// Parses from `fcfs`, `sjf`, `rr`, `rr:<quantum>`, `round-robin` or
/// `round-robin:<quantum>` (case-insensitive). Without an explicit
/// quantum, Round Robin uses 2.
///
/// ```
/// use cpu_schedule::scheduler::Algorithm;
///
/// let algo: Algorithm = "rr:3".parse().unwrap();
/// assert_eq!(algo, Algorithm::RoundRobin { quantum: 3 });
/// assert_eq!(algo.to_string(), "Round Robin (Q=3)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Round Robin with a fixed quantum.
    RoundRobin {
        /// Time slice per dispatch.
        quantum: i64,
    },
}

impl Algorithm {
    /// Short name ("FCFS", "SJF", "RR").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::RoundRobin { .. } => "RR",
        }
    }

    /// Builds the matching scheduler.
    pub fn scheduler(&self) -> Box<dyn Scheduler> {
        match *self {
            Self::Fcfs => Box::new(FcfsScheduler::new()),
            Self::Sjf => Box::new(SjfScheduler::new()),
            Self::RoundRobin { quantum } => Box::new(RoundRobinScheduler::new(quantum)),
        }
    }

    /// Schedules `processes` with this algorithm.
    pub fn run(&self, processes: &[ProcessInput]) -> ScheduleOutcome {
        self.scheduler().schedule(processes)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fcfs => write!(f, "FCFS"),
            Self::Sjf => write!(f, "SJF"),
            Self::RoundRobin { quantum } => write!(f, "Round Robin (Q={quantum})"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let (name, quantum) = match lower.split_once(':') {
            Some((name, q)) => (name.trim(), Some(q.trim())),
            None => (lower.as_str(), None),
        };

        match (name, quantum) {
            ("fcfs", None) => Ok(Self::Fcfs),
            ("sjf", None) => Ok(Self::Sjf),
            ("rr" | "round-robin" | "roundrobin", None) => Ok(Self::RoundRobin {
                quantum: DEFAULT_QUANTUM,
            }),
            ("rr" | "round-robin" | "roundrobin", Some(q)) => {
                let quantum: i64 = q.parse().map_err(|_| {
                    ValidationError::new(
                        ValidationErrorKind::InvalidQuantum,
                        format!("Quantum is not an integer: {q}"),
                    )
                })?;
                validate_quantum(quantum).map_err(|mut errors| errors.remove(0))?;
                Ok(Self::RoundRobin { quantum })
            }
            _ => Err(ValidationError::new(
                ValidationErrorKind::UnknownAlgorithm,
                format!("Unknown scheduling algorithm: {s}"),
            )),
        }
    }
}
