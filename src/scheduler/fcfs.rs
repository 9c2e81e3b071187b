//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time (FIFO rule).
//! 2. Walk the sorted list with a clock starting at 0; if the clock is
//!    behind the next arrival, the CPU idles until it.
//! 3. Each process runs its full burst; one segment per process.
//!
//! # Complexity
//! O(n log n)

use log::debug;

use super::{check_input, run_to_completion, ScheduleOutcome, Scheduler};
use crate::dispatching::{rules, RuleEngine};
use crate::models::{ProcessInput, ScheduleResult};

/// Non-preemptive arrival-order scheduler.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::ProcessInput;
/// use cpu_schedule::scheduler::{FcfsScheduler, Scheduler};
///
/// let processes = vec![ProcessInput::new(1, 2, 3), ProcessInput::new(2, 0, 4)];
/// let schedule = FcfsScheduler::new().schedule(&processes).unwrap();
/// assert_eq!(schedule.dispatch_order(), vec![2, 1]);
/// assert_eq!(schedule.makespan(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct FcfsScheduler {
    rule_engine: RuleEngine,
}

impl FcfsScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self {
            rule_engine: RuleEngine::new().with_rule(rules::Fifo),
        }
    }
}

impl Default for FcfsScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for FcfsScheduler {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &[ProcessInput]) -> ScheduleOutcome {
        check_input(self.name(), processes)?;

        let mut schedule = ScheduleResult::new();
        let mut current_time = 0;

        for idx in self.rule_engine.sort_indices(processes) {
            let process = &processes[idx];
            if current_time < process.arrival_time {
                current_time = process.arrival_time;
            }
            current_time = run_to_completion(&mut schedule, process, current_time);
        }

        debug!(
            "FCFS: scheduled {} processes, makespan {}",
            schedule.process_count(),
            schedule.makespan()
        );
        Ok(schedule)
    }
}
