//! Scheduling domain models.
//!
//! Provides the data types shared by every scheduling algorithm: the
//! process records a caller submits, the records a scheduler returns,
//! and the execution trace used for metrics and visualization.
//!
//! # Lifecycle
//!
//! | Type | Produced by | Consumed by |
//! |------|-------------|-------------|
//! | `ProcessInput` / `ProcessSet` | Caller | Schedulers |
//! | `ProcessResult` | Schedulers | Metrics, presentation |
//! | `ExecutionSegment` | Schedulers | Metrics, Gantt rendering |
//! | `ScheduleResult` | Schedulers | Metrics, presentation |

mod process;
mod schedule;

pub use process::{ProcessId, ProcessInput, ProcessResult, ProcessSet};
pub use schedule::{ExecutionSegment, ScheduleResult};
