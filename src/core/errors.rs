/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::types::{Priority, Time};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Process operation result
pub type ProcessResult<T> = Result<T, ProcessError>;

/// Scheduler operation result
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// Process attribute validation errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ProcessError {
    #[error("process name should not be blank")]
    #[diagnostic(
        code(process::blank_name),
        help("Give every process a non-empty, non-whitespace name.")
    )]
    BlankName,

    #[error("execution time should be higher than 0. Got {0} instead")]
    #[diagnostic(
        code(process::invalid_execution_time),
        help("A process must require at least one time unit of CPU.")
    )]
    InvalidExecutionTime(Time),

    #[error("priority level should be higher than 0. Got {0} instead")]
    #[diagnostic(
        code(process::invalid_priority_level),
        help("Priority levels start at 1.")
    )]
    InvalidPriorityLevel(Priority),
}

/// Scheduler validation errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("the queue does not contain any processes")]
    #[diagnostic(
        code(scheduler::empty_process_queue),
        help("Add at least one process before running the simulation.")
    )]
    EmptyProcessQueue,

    #[error("none of the processes have an arrival time of 0")]
    #[diagnostic(
        code(scheduler::no_process_arriving_at_zero),
        help("The simulation starts at time 0; some process must arrive then.")
    )]
    NoProcessArrivingAtZero,

    #[error("quantum length should be higher than 0. Got {0} instead")]
    #[diagnostic(
        code(scheduler::invalid_quantum_length),
        help("Round robin needs a quantum of at least one time unit.")
    )]
    InvalidQuantumLength(Time),

    #[error("invalid process: {0}")]
    #[diagnostic(code(scheduler::invalid_process))]
    InvalidProcess(#[from] ProcessError),
}
