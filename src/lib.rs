//! Uniprocessor CPU scheduling simulator.
//!
//! Simulates First-Come-First-Served, non-preemptive Shortest-Job-First,
//! and preemptive Round Robin over a statically known set of processes,
//! producing per-process timing results, aggregate metrics, and an
//! execution trace suitable for Gantt-style rendering.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessInput`, `ProcessResult`,
//!   `ExecutionSegment`, `ScheduleResult`, `ProcessSet`
//! - **`dispatching`**: Selection rules (FIFO, SPT) and the rule engine
//! - **`scheduler`**: FCFS, SJF and Round Robin schedulers, metrics,
//!   algorithm selection and comparison
//! - **`validation`**: Input contract checks (duplicate IDs, bursts, quantum)
//! - **`workload`**: Random workload generation
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::ProcessSet;
//! use cpu_schedule::scheduler::{AggregateMetrics, Algorithm};
//!
//! let mut processes = ProcessSet::new();
//! processes.add(0, 5);
//! processes.add(1, 3);
//! processes.add(2, 1);
//!
//! let schedule = Algorithm::RoundRobin { quantum: 2 }
//!     .run(processes.as_slice())
//!     .unwrap();
//! let metrics = AggregateMetrics::calculate(&schedule).unwrap();
//! assert_eq!(schedule.makespan(), 9);
//! assert!((metrics.cpu_utilization_percent - 100.0).abs() < 1e-10);
//! ```
//!
//! # Logging
//!
//! Emits records through the `log` facade (`debug` per run, `trace` per
//! dispatch). No logger is installed by this crate.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;
