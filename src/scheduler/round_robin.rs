//! Round Robin scheduler (preemptive, fixed quantum).
//!
//! # Algorithm
//!
//! 1. Admit, in input order, every arrived process that is neither
//!    queued nor finished.
//! 2. If the ready queue is empty, jump the clock to the earliest
//!    unfinished arrival and go back to 1.
//! 3. Dequeue the head and run it for `min(quantum, remaining)`.
//! 4. Admit processes that arrived during the slice.
//! 5. Requeue the process at the tail unless it finished.
//!
//! Step 4 runs before step 5: a process arriving during (or exactly at
//! the end of) a slice is queued ahead of the process whose quantum just
//! expired.
//!
//! Queue membership is tracked per input position, never by comparing
//! process records.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::{check_input, check_quantum, ScheduleOutcome, Scheduler};
use crate::models::{ExecutionSegment, ProcessInput, ProcessResult, ScheduleResult};

/// Default time quantum.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Preemptive Round Robin scheduler.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::ProcessInput;
/// use cpu_schedule::scheduler::{RoundRobinScheduler, Scheduler};
///
/// let processes = vec![
///     ProcessInput::new(1, 0, 5),
///     ProcessInput::new(2, 1, 3),
///     ProcessInput::new(3, 2, 1),
/// ];
/// let schedule = RoundRobinScheduler::new(2).schedule(&processes).unwrap();
/// assert_eq!(schedule.dispatch_order(), vec![1, 2, 3, 1, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRobinScheduler {
    quantum: i64,
}

/// Per-process simulation state.
#[derive(Debug, Clone, Copy)]
struct RunState {
    remaining: i64,
    first_dispatch: Option<i64>,
    finish: Option<i64>,
    queued: bool,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given quantum.
    ///
    /// The quantum is checked when scheduling, not here.
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }

    /// Sets the quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// The configured quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Default for RoundRobinScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_QUANTUM)
    }
}

impl Scheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, processes: &[ProcessInput]) -> ScheduleOutcome {
        check_quantum(self.name(), self.quantum)?;
        check_input(self.name(), processes)?;

        let mut state: Vec<RunState> = processes
            .iter()
            .map(|p| RunState {
                remaining: p.burst_time,
                first_dispatch: None,
                finish: None,
                queued: false,
            })
            .collect();
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut completion_order: Vec<usize> = Vec::with_capacity(processes.len());
        let mut schedule = ScheduleResult::new();
        let mut current_time = 0;

        while completion_order.len() < processes.len() {
            admit(processes, &mut state, &mut queue, current_time, None);

            let Some(idx) = queue.pop_front() else {
                let next_arrival = processes
                    .iter()
                    .zip(&state)
                    .filter(|(_, s)| s.finish.is_none())
                    .map(|(p, _)| p.arrival_time)
                    .min();
                match next_arrival {
                    Some(t) => {
                        trace!("RR: idle {current_time} -> {t}");
                        current_time = t;
                        continue;
                    }
                    None => break,
                }
            };
            state[idx].queued = false;

            let process = &processes[idx];
            let run = &mut state[idx];
            if run.first_dispatch.is_none() {
                run.first_dispatch = Some(current_time);
            }

            let slice = self.quantum.min(run.remaining);
            trace!("RR: P{} runs {slice} at {current_time}", process.id);
            schedule.add_segment(ExecutionSegment::new(process.id, current_time, slice));
            current_time += slice;
            run.remaining -= slice;

            admit(processes, &mut state, &mut queue, current_time, Some(idx));

            let run = &mut state[idx];
            if run.remaining == 0 {
                run.finish = Some(current_time);
                completion_order.push(idx);
            } else {
                run.queued = true;
                queue.push_back(idx);
            }
        }

        for idx in completion_order {
            let run = &state[idx];
            if let (Some(start), Some(finish)) = (run.first_dispatch, run.finish) {
                schedule.add_process(ProcessResult::from_input(&processes[idx], start, finish));
            }
        }

        debug!(
            "RR(q={}): scheduled {} processes in {} slices, makespan {}",
            self.quantum,
            schedule.process_count(),
            schedule.segment_count(),
            schedule.makespan()
        );
        Ok(schedule)
    }
}

/// Appends, in input order, every arrived process that is not queued,
/// not finished, and not `running`.
fn admit(
    processes: &[ProcessInput],
    state: &mut [RunState],
    queue: &mut VecDeque<usize>,
    now: i64,
    running: Option<usize>,
) {
    for (i, (p, s)) in processes.iter().zip(state.iter_mut()).enumerate() {
        if !s.queued && s.finish.is_none() && Some(i) != running && p.arrival_time <= now {
            s.queued = true;
            queue.push_back(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::test_support::assert_well_formed;
    use crate::validation::ValidationErrorKind;

    fn run(processes: &[ProcessInput], quantum: i64) -> ScheduleResult {
        RoundRobinScheduler::new(quantum).schedule(processes).unwrap()
    }

    fn spans(schedule: &ScheduleResult) -> Vec<(u32, i64, i64)> {
        schedule
            .timeline
            .iter()
            .map(|s| (s.id, s.start_time, s.completion_time))
            .collect()
    }

    #[test]
    fn test_rr_basic_trace() {
        let processes = vec![
            ProcessInput::new(1, 0, 5),
            ProcessInput::new(2, 1, 3),
            ProcessInput::new(3, 2, 1),
        ];
        let schedule = run(&processes, 2);

        assert_eq!(
            spans(&schedule),
            vec![
                (1, 0, 2),
                (2, 2, 4),
                (3, 4, 5),
                (1, 5, 7),
                (2, 7, 8),
                (1, 8, 9),
            ]
        );

        let p1 = schedule.process(1).unwrap();
        assert_eq!((p1.start_time, p1.completion_time, p1.waiting_time), (0, 9, 4));
        let p2 = schedule.process(2).unwrap();
        assert_eq!((p2.start_time, p2.completion_time, p2.waiting_time), (2, 8, 4));
        let p3 = schedule.process(3).unwrap();
        assert_eq!((p3.start_time, p3.completion_time, p3.waiting_time), (4, 5, 2));

        // Results in completion order
        let ids: Vec<_> = schedule.processes.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_well_formed(&processes, &schedule);
    }

    #[test]
    fn test_rr_arrival_at_slice_end_goes_before_requeue() {
        // P2 arrives exactly when P1's quantum expires
        let processes = vec![ProcessInput::new(1, 0, 4), ProcessInput::new(2, 2, 2)];
        let schedule = run(&processes, 2);
        assert_eq!(spans(&schedule), vec![(1, 0, 2), (2, 2, 4), (1, 4, 6)]);
    }

    #[test]
    fn test_rr_queued_processes_go_before_new_arrivals() {
        let processes = vec![
            ProcessInput::new(1, 0, 3),
            ProcessInput::new(2, 0, 3),
            ProcessInput::new(3, 1, 1),
        ];
        let schedule = run(&processes, 2);
        // P2 was already queued at t=0; P3 arrives during P1's slice
        assert_eq!(schedule.dispatch_order(), vec![1, 2, 3, 1, 2]);
        assert_well_formed(&processes, &schedule);
    }

    #[test]
    fn test_rr_admits_in_input_order_not_arrival_order() {
        // P3 arrives before P2; both are admitted when P1's slice ends
        let processes = vec![
            ProcessInput::new(1, 0, 4),
            ProcessInput::new(2, 2, 1),
            ProcessInput::new(3, 1, 1),
        ];
        let schedule = run(&processes, 4);
        assert_eq!(schedule.dispatch_order(), vec![1, 2, 3]);
        assert_eq!(spans(&schedule), vec![(1, 0, 4), (2, 4, 5), (3, 5, 6)]);
        assert_well_formed(&processes, &schedule);
    }

    #[test]
    fn test_rr_start_time_is_first_dispatch() {
        let processes = vec![ProcessInput::new(1, 0, 6)];
        let schedule = run(&processes, 2);
        assert_eq!(schedule.segment_count(), 3);
        let p1 = schedule.process(1).unwrap();
        assert_eq!(p1.start_time, 0);
        assert_eq!(p1.completion_time, 6);
    }

    #[test]
    fn test_rr_idle_jump() {
        let processes = vec![ProcessInput::new(1, 0, 1), ProcessInput::new(2, 5, 3)];
        let schedule = run(&processes, 2);
        assert_eq!(spans(&schedule), vec![(1, 0, 1), (2, 5, 7), (2, 7, 8)]);
        assert_eq!(schedule.idle_gaps(), vec![(1, 5)]);
        assert_well_formed(&processes, &schedule);
    }

    #[test]
    fn test_rr_late_first_arrival() {
        let processes = vec![ProcessInput::new(1, 5, 3)];
        let schedule = run(&processes, 4);
        assert_eq!(spans(&schedule), vec![(1, 5, 8)]);
    }

    #[test]
    fn test_rr_large_quantum_matches_fcfs_order() {
        let processes = vec![
            ProcessInput::new(1, 0, 3),
            ProcessInput::new(2, 1, 2),
            ProcessInput::new(3, 2, 4),
        ];
        let schedule = run(&processes, 100);
        assert_eq!(schedule.dispatch_order(), vec![1, 2, 3]);
        assert_eq!(schedule.segment_count(), 3);
    }

    #[test]
    fn test_rr_quantum_one() {
        let processes = vec![ProcessInput::new(1, 0, 2), ProcessInput::new(2, 0, 2)];
        let schedule = run(&processes, 1);
        assert_eq!(schedule.dispatch_order(), vec![1, 2, 1, 2]);
        assert_well_formed(&processes, &schedule);
    }

    #[test]
    fn test_rr_identical_records_are_distinct() {
        // Same arrival and burst; only ids differ
        let processes = vec![
            ProcessInput::new(1, 0, 3),
            ProcessInput::new(2, 0, 3),
            ProcessInput::new(3, 0, 3),
        ];
        let schedule = run(&processes, 2);
        assert_eq!(schedule.dispatch_order(), vec![1, 2, 3, 1, 2, 3]);
        assert_well_formed(&processes, &schedule);
    }

    #[test]
    fn test_rr_invalid_quantum() {
        let processes = vec![ProcessInput::new(1, 0, 3)];
        let errors = RoundRobinScheduler::new(0).schedule(&processes).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidQuantum);
    }

    #[test]
    fn test_rr_rejects_arrival_at_end_of_time_range() {
        let processes = vec![ProcessInput::new(1, i64::MAX, 1)];
        let errors = RoundRobinScheduler::new(2).schedule(&processes).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        let schedule = run(&[ProcessInput::new(1, i64::MAX - 3, 3)], 2);
        assert_eq!(
            spans(&schedule),
            vec![(1, i64::MAX - 3, i64::MAX - 1), (1, i64::MAX - 1, i64::MAX)]
        );
    }

    #[test]
    fn test_rr_empty_input() {
        assert!(run(&[], 2).is_empty());
    }

    #[test]
    fn test_rr_default_quantum() {
        assert_eq!(RoundRobinScheduler::default().quantum(), DEFAULT_QUANTUM);
        assert_eq!(RoundRobinScheduler::default().with_quantum(5).quantum(), 5);
    }
}
