//! Shortest-Job-First scheduler (non-preemptive).
//!
//! # Algorithm
//!
//! 1. Collect the processes that have arrived by the current time.
//! 2. If none have, jump the clock to the earliest remaining arrival.
//! 3. Otherwise pick the shortest burst (SPT rule); equal bursts go to
//!    the process earliest in input order.
//! 4. Run it to completion, even if a shorter job arrives meanwhile.
//!
//! # Complexity
//! O(n²)

use log::{debug, trace};

use super::{check_input, run_to_completion, ScheduleOutcome, Scheduler};
use crate::dispatching::{rules, RuleEngine};
use crate::models::{ProcessInput, ScheduleResult};

/// Non-preemptive shortest-burst-first scheduler.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::ProcessInput;
/// use cpu_schedule::scheduler::{Scheduler, SjfScheduler};
///
/// let processes = vec![
///     ProcessInput::new(1, 0, 8),
///     ProcessInput::new(2, 1, 4),
///     ProcessInput::new(3, 2, 9),
///     ProcessInput::new(4, 3, 5),
/// ];
/// let schedule = SjfScheduler::new().schedule(&processes).unwrap();
/// assert_eq!(schedule.dispatch_order(), vec![1, 2, 4, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct SjfScheduler {
    rule_engine: RuleEngine,
}

impl SjfScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self {
            rule_engine: RuleEngine::new().with_rule(rules::Spt),
        }
    }
}

impl Default for SjfScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for SjfScheduler {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, processes: &[ProcessInput]) -> ScheduleOutcome {
        check_input(self.name(), processes)?;

        let mut schedule = ScheduleResult::new();
        let mut remaining: Vec<ProcessInput> = processes.to_vec();
        let mut current_time = 0;

        while !remaining.is_empty() {
            let arrived: Vec<usize> = (0..remaining.len())
                .filter(|&i| remaining[i].arrival_time <= current_time)
                .collect();

            let Some(best) = self
                .rule_engine
                .select_best(arrived.len(), |i| &remaining[arrived[i]])
            else {
                let next_arrival = remaining
                    .iter()
                    .map(|p| p.arrival_time)
                    .min()
                    .unwrap_or(current_time);
                trace!("SJF: idle {current_time} -> {next_arrival}");
                current_time = next_arrival;
                continue;
            };

            // Vec::remove keeps input order for the next scan
            let process = remaining.remove(arrived[best]);
            trace!("SJF: dispatch P{} at {current_time}", process.id);
            current_time = run_to_completion(&mut schedule, &process, current_time);
        }

        debug!(
            "SJF: scheduled {} processes, makespan {}",
            schedule.process_count(),
            schedule.makespan()
        );
        Ok(schedule)
    }
}
