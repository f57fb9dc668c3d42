/*!
 * Scheduling Simulator Library
 * Discrete-time CPU scheduling simulation with pluggable policies
 */

pub mod core;
pub mod process;
pub mod scheduler;

// Re-exports
pub use crate::core::errors::{ProcessError, ProcessResult, SchedulerError, SchedulerResult};
pub use crate::core::types::{Priority, Time};
pub use process::{Process, ProcessSpec, ProcessStatus};
pub use scheduler::{ExecutionReport, Policy, Scheduler, TraceRow};
