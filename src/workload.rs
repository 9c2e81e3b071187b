//! Random workload generation.
//!
//! Produces process sets with uniformly drawn arrival and burst times,
//! for demos and for exercising the schedulers.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::ProcessSet;

/// Generates random process sets.
///
/// Defaults: 5 processes, arrivals in `0..=8`, bursts in `1..=7`.
///
/// # Example
///
/// ```
/// use cpu_schedule::workload::WorkloadGenerator;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let set = WorkloadGenerator::new().with_count(3).generate(&mut rng);
/// assert_eq!(set.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Arrival time range.
    pub arrival_range: RangeInclusive<i64>,
    /// Burst time range.
    pub burst_range: RangeInclusive<i64>,
}

impl WorkloadGenerator {
    /// Creates a generator with the default settings.
    pub fn new() -> Self {
        Self {
            count: 5,
            arrival_range: 0..=8,
            burst_range: 1..=7,
        }
    }

    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the arrival time range. Negative bounds are clamped to 0.
    pub fn with_arrival_range(mut self, range: RangeInclusive<i64>) -> Self {
        self.arrival_range = normalize(range, 0);
        self
    }

    /// Sets the burst time range. Bounds below 1 are clamped to 1.
    pub fn with_burst_range(mut self, range: RangeInclusive<i64>) -> Self {
        self.burst_range = normalize(range, 1);
        self
    }

    /// Draws a process set with ids `1..=count`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> ProcessSet {
        let mut set = ProcessSet::new();
        for _ in 0..self.count {
            let arrival = draw(rng, &self.arrival_range);
            let burst = draw(rng, &self.burst_range);
            set.add(arrival, burst);
        }
        set
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Samples `range`, falling back to its start when it is empty.
fn draw<R: Rng>(rng: &mut R, range: &RangeInclusive<i64>) -> i64 {
    if range.is_empty() {
        *range.start()
    } else {
        rng.random_range(range.clone())
    }
}

/// Orders the bounds and clamps them to `floor`.
fn normalize(range: RangeInclusive<i64>, floor: i64) -> RangeInclusive<i64> {
    let (a, b) = range.into_inner();
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    lo.max(floor)..=hi.max(floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::test_support::assert_well_formed;
    use crate::scheduler::{
        AggregateMetrics, FcfsScheduler, RoundRobinScheduler, Scheduler, SjfScheduler,
    };
    use crate::validation::validate_input;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_defaults() {
        let mut rng = SmallRng::seed_from_u64(42);
        let set = WorkloadGenerator::new().generate(&mut rng);
        assert_eq!(set.len(), 5);
        for (i, p) in set.iter().enumerate() {
            assert_eq!(p.id as usize, i + 1);
            assert!((0..=8).contains(&p.arrival_time));
            assert!((1..=7).contains(&p.burst_time));
        }
        assert!(validate_input(set.as_slice()).is_ok());
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let generator = WorkloadGenerator::new().with_count(10);
        let a = generator.generate(&mut SmallRng::seed_from_u64(1));
        let b = generator.generate(&mut SmallRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_range_normalization() {
        let generator = WorkloadGenerator::new()
            .with_arrival_range(5..=-3)
            .with_burst_range(-2..=0);
        assert_eq!(generator.arrival_range, 0..=5);
        assert_eq!(generator.burst_range, 1..=1);

        let set = generator.generate(&mut SmallRng::seed_from_u64(3));
        assert!(set.iter().all(|p| p.burst_time == 1));
    }

    #[test]
    fn test_zero_count() {
        let set = WorkloadGenerator::new()
            .with_count(0)
            .generate(&mut SmallRng::seed_from_u64(0));
        assert!(set.is_empty());
    }

    #[test]
    fn test_random_workloads_schedule_well_formed() {
        let generator = WorkloadGenerator::new()
            .with_count(12)
            .with_arrival_range(0..=30)
            .with_burst_range(1..=9);
        let mut rng = SmallRng::seed_from_u64(2024);

        for round in 0..200 {
            let set = generator.generate(&mut rng);
            let processes = set.as_slice();
            let quantum = 1 + (round % 4) as i64;

            let schedulers: [Box<dyn Scheduler>; 3] = [
                Box::new(FcfsScheduler::new()),
                Box::new(SjfScheduler::new()),
                Box::new(RoundRobinScheduler::new(quantum)),
            ];
            for scheduler in &schedulers {
                let schedule = scheduler.schedule(processes).unwrap();
                assert_well_formed(processes, &schedule);

                let m = AggregateMetrics::calculate(&schedule).unwrap();
                assert!(m.cpu_utilization_percent <= 100.0);
                assert!(m.cpu_utilization_percent > 0.0);
                if schedule.idle_gaps().is_empty() {
                    assert_eq!(m.cpu_utilization_percent, 100.0);
                }
            }

            // Non-preemptive schedulers emit one segment per process
            let fcfs = FcfsScheduler::new().schedule(processes).unwrap();
            let sjf = SjfScheduler::new().schedule(processes).unwrap();
            assert_eq!(fcfs.segment_count(), processes.len());
            assert_eq!(sjf.segment_count(), processes.len());
        }
    }
}
