//! Schedule (solution) model.
//!
//! A schedule is the complete outcome of one scheduling run: the final
//! record of every process plus the time-ordered execution trace.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ProcessId, ProcessResult};

/// One contiguous run of a process on the CPU.
///
/// FCFS and SJF emit one segment per process; Round Robin emits one per
/// quantum slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSegment {
    /// Process that ran.
    pub id: ProcessId,
    /// Segment start.
    pub start_time: i64,
    /// Segment end.
    pub completion_time: i64,
    /// Segment length (`completion_time - start_time`).
    pub burst_time: i64,
}

impl ExecutionSegment {
    /// Creates a segment covering `[start_time, start_time + length)`.
    pub fn new(id: ProcessId, start_time: i64, length: i64) -> Self {
        Self {
            id,
            start_time,
            completion_time: start_time + length,
            burst_time: length,
        }
    }
}

/// Output of a scheduling run.
///
/// Created fresh by each call and never mutated by the engine afterwards.
/// `processes` holds one entry per input process in the order the
/// scheduler finished them; `timeline` is in time order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Final process records.
    pub processes: Vec<ProcessResult>,
    /// Execution trace.
    pub timeline: Vec<ExecutionSegment>,
}

impl ScheduleResult {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a finished process.
    pub fn add_process(&mut self, result: ProcessResult) {
        self.processes.push(result);
    }

    /// Appends a segment to the trace.
    pub fn add_segment(&mut self, segment: ExecutionSegment) {
        self.timeline.push(segment);
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty() && self.timeline.is_empty()
    }

    /// Number of process records.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// Number of trace segments.
    pub fn segment_count(&self) -> usize {
        self.timeline.len()
    }

    /// Completion time of the last segment (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.timeline.last().map_or(0, |s| s.completion_time)
    }

    /// Sum of burst times over all process records, saturating at `i64::MAX`.
    pub fn total_burst(&self) -> i64 {
        self.processes
            .iter()
            .fold(0i64, |acc, p| acc.saturating_add(p.burst_time))
    }

    /// Finds the record for a process.
    pub fn process(&self, id: ProcessId) -> Option<&ProcessResult> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// All segments belonging to one process, in time order.
    pub fn segments_for(&self, id: ProcessId) -> Vec<&ExecutionSegment> {
        self.timeline.iter().filter(|s| s.id == id).collect()
    }

    /// Process ids in dispatch order (one entry per segment).
    pub fn dispatch_order(&self) -> Vec<ProcessId> {
        self.timeline.iter().map(|s| s.id).collect()
    }

    /// Per-process `(start, end)` intervals, keyed by id.
    pub fn intervals_by_process(&self) -> BTreeMap<ProcessId, Vec<(i64, i64)>> {
        let mut intervals: BTreeMap<ProcessId, Vec<(i64, i64)>> = BTreeMap::new();
        for s in &self.timeline {
            intervals
                .entry(s.id)
                .or_default()
                .push((s.start_time, s.completion_time));
        }
        intervals
    }

    /// Spans in `[0, makespan)` during which the CPU was idle.
    pub fn idle_gaps(&self) -> Vec<(i64, i64)> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for s in &self.timeline {
            if s.start_time > cursor {
                gaps.push((cursor, s.start_time));
            }
            cursor = cursor.max(s.completion_time);
        }
        gaps
    }

    /// Total idle time before the makespan.
    pub fn idle_time(&self) -> i64 {
        self.idle_gaps().iter().map(|(start, end)| end - start).sum()
    }
}
