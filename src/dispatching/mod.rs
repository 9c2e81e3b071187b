//! Dispatching rules and rule engine for process selection.
//!
//! The non-preemptive schedulers pick the next process by evaluating a
//! dispatching rule over the candidates: FCFS orders by arrival (FIFO),
//! SJF by burst length (SPT).
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{rules, RuleEngine};
//! use cpu_schedule::models::ProcessInput;
//!
//! let engine = RuleEngine::new().with_rule(rules::Spt);
//! let processes = [ProcessInput::new(1, 0, 8), ProcessInput::new(2, 0, 3)];
//! assert_eq!(engine.select_best(processes.len(), |i| &processes[i]), Some(1));
//! assert_eq!(engine.sort_indices(&processes), vec![1, 0]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::ProcessInput;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first). Scores are integers
/// so that ties are exact.
pub type RuleScore = i64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should be dispatched first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a process.
    fn evaluate(&self, process: &ProcessInput) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
