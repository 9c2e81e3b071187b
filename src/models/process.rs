//! Process model.
//!
//! A process is a single CPU burst to be scheduled on one processor.
//! `ProcessInput` is what the caller supplies; `ProcessResult` is what a
//! scheduler produces once the process has run to completion.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// Caller-assigned process identifier.
pub type ProcessId = u32;

/// A process to be scheduled.
///
/// Input order matters: it is the tie-break ordering whenever no other
/// rule distinguishes two processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInput {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Earliest time the process may begin execution.
    pub arrival_time: i64,
    /// Total CPU time required (≥ 1).
    pub burst_time: i64,
}

impl ProcessInput {
    /// Creates a new process.
    pub fn new(id: ProcessId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
        }
    }
}

/// A completed process with its timing results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process identifier.
    pub id: ProcessId,
    /// Arrival time (copied from input).
    pub arrival_time: i64,
    /// Burst time (copied from input).
    pub burst_time: i64,
    /// Time of the first dispatch.
    pub start_time: i64,
    /// Time the last unit of work finished.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
}

impl ProcessResult {
    /// Builds a result from its input and the observed start/completion times.
    ///
    /// Turnaround and waiting times are derived, never supplied.
    pub fn from_input(input: &ProcessInput, start_time: i64, completion_time: i64) -> Self {
        let turnaround_time = completion_time - input.arrival_time;
        Self {
            id: input.id,
            arrival_time: input.arrival_time,
            burst_time: input.burst_time,
            start_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - input.burst_time,
        }
    }

    /// Time between arrival and first dispatch.
    #[inline]
    pub fn response_time(&self) -> i64 {
        self.start_time - self.arrival_time
    }

    /// The input this result was produced from.
    pub fn input(&self) -> ProcessInput {
        ProcessInput::new(self.id, self.arrival_time, self.burst_time)
    }
}

/// Caller-owned list of processes with a monotonically increasing id counter.
///
/// Ids start at 1 and are never reused until [`ProcessSet::clear`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSet {
    processes: Vec<ProcessInput>,
    next_id: ProcessId,
}

impl ProcessSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            processes: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a process and returns its assigned id.
    pub fn add(&mut self, arrival_time: i64, burst_time: i64) -> ProcessId {
        let id = self.next_id;
        self.processes.push(ProcessInput::new(id, arrival_time, burst_time));
        self.next_id += 1;
        id
    }

    /// Removes all processes and resets the id counter.
    pub fn clear(&mut self) {
        self.processes.clear();
        self.next_id = 1;
    }

    /// Processes in insertion order.
    pub fn as_slice(&self) -> &[ProcessInput] {
        &self.processes
    }

    /// Iterates processes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProcessInput> {
        self.processes.iter()
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the set has no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

impl Default for ProcessSet {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a ProcessSet {
    type Item = &'a ProcessInput;
    type IntoIter = std::slice::Iter<'a, ProcessInput>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_derived_fields() {
        let input = ProcessInput::new(1, 2, 3);
        let r = ProcessResult::from_input(&input, 4, 7);
        assert_eq!(r.turnaround_time, 5);
        assert_eq!(r.waiting_time, 2);
        assert_eq!(r.response_time(), 2);
        assert_eq!(r.input(), input);
    }

    #[test]
    fn test_process_set_ids() {
        let mut set = ProcessSet::new();
        assert_eq!(set.add(0, 5), 1);
        assert_eq!(set.add(1, 3), 2);
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice()[1], ProcessInput::new(2, 1, 3));

        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.add(4, 1), 1);
    }

    #[test]
    fn test_process_set_default_starts_at_one() {
        let mut set = ProcessSet::default();
        assert_eq!(set.add(0, 1), 1);
        assert_eq!(set.add(0, 1), 2);
    }

    #[test]
    fn test_process_set_iter() {
        let mut set = ProcessSet::new();
        set.add(0, 2);
        set.add(3, 4);
        let bursts: Vec<i64> = set.iter().map(|p| p.burst_time).collect();
        assert_eq!(bursts, vec![2, 4]);
        assert_eq!((&set).into_iter().count(), 2);
    }
}
