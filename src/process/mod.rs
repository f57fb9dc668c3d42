/*!
 * Process Module
 * The simulated job entity and its state machine
 */

use crate::core::errors::{ProcessError, ProcessResult};
use crate::core::types::{Priority, Time};
use std::fmt;

mod types;

pub use types::{ProcessSpec, ProcessStatus};

/// One simulated job.
///
/// Identity attributes (`name`, `execution_time`, `priority_level`,
/// `arrival_time`) are validated once at construction and immutable
/// afterwards. The remaining fields are simulation state, mutated exclusively
/// by the scheduling engine through the `pub(crate)` transition methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    name: String,
    execution_time: Time,
    priority_level: Priority,
    arrival_time: Time,
    remaining_execution_time: Time,
    enqueue_time: Time,
    conclusion_time: Time,
    quantum_progress: Time,
    status: ProcessStatus,
}

impl Process {
    /// Create a process, validating every attribute.
    ///
    /// Fails with the first offending field: blank name, zero execution time,
    /// or zero priority level. Negative times are unrepresentable by type.
    pub fn new(
        name: impl Into<String>,
        execution_time: Time,
        priority_level: Priority,
        arrival_time: Time,
    ) -> ProcessResult<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ProcessError::BlankName);
        }

        if execution_time < 1 {
            return Err(ProcessError::InvalidExecutionTime(execution_time));
        }

        if priority_level < 1 {
            return Err(ProcessError::InvalidPriorityLevel(priority_level));
        }

        let mut process = Self {
            name,
            execution_time,
            priority_level,
            arrival_time,
            remaining_execution_time: 0,
            enqueue_time: 0,
            conclusion_time: 0,
            quantum_progress: 0,
            status: ProcessStatus::Ready,
        };
        process.reset();

        Ok(process)
    }

    /// Restore the process to its pre-run condition. Idempotent.
    pub fn reset(&mut self) {
        self.remaining_execution_time = self.execution_time;
        self.enqueue_time = 0;
        // Corrected to the actual step at termination; the initial value is
        // the no-wait lower bound.
        self.conclusion_time = self.arrival_time + self.execution_time;
        self.quantum_progress = 0;
        self.status = ProcessStatus::Ready;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn execution_time(&self) -> Time {
        self.execution_time
    }

    pub fn priority_level(&self) -> Priority {
        self.priority_level
    }

    pub fn arrival_time(&self) -> Time {
        self.arrival_time
    }

    pub fn remaining_execution_time(&self) -> Time {
        self.remaining_execution_time
    }

    pub fn enqueue_time(&self) -> Time {
        self.enqueue_time
    }

    pub fn conclusion_time(&self) -> Time {
        self.conclusion_time
    }

    pub fn quantum_progress(&self) -> Time {
        self.quantum_progress
    }

    pub fn status(&self) -> ProcessStatus {
        self.status
    }

    /// Total time from arrival to termination
    pub fn turnaround_time(&self) -> Time {
        self.conclusion_time - self.arrival_time
    }

    /// Time spent not running while eligible
    pub fn wait_time(&self) -> Time {
        self.turnaround_time() - self.execution_time
    }

    pub fn is_ready(&self) -> bool {
        self.status == ProcessStatus::Ready
    }

    pub fn is_waiting(&self) -> bool {
        self.status == ProcessStatus::Waiting
    }

    pub fn is_running(&self) -> bool {
        self.status == ProcessStatus::Running
    }

    pub fn was_interrupted(&self) -> bool {
        self.status == ProcessStatus::Interrupted
    }

    pub fn is_terminated(&self) -> bool {
        self.status == ProcessStatus::Terminated
    }

    /// READY/INTERRUPTED -> WAITING, stamping the enqueue time
    pub(crate) fn wait(&mut self, now: Time) {
        debug_assert!(self.is_ready() || self.was_interrupted());
        self.status = ProcessStatus::Waiting;
        self.enqueue_time = now;
    }

    /// WAITING -> RUNNING, on selection from the ready queue head
    pub(crate) fn start_running(&mut self) {
        debug_assert!(self.is_waiting());
        self.status = ProcessStatus::Running;
    }

    /// RUNNING -> INTERRUPTED, on a policy preemption decision
    pub(crate) fn interrupt(&mut self) {
        debug_assert!(self.is_running());
        self.status = ProcessStatus::Interrupted;
    }

    /// RUNNING -> TERMINATED, stamping the actual conclusion step
    pub(crate) fn conclude(&mut self, now: Time) {
        debug_assert!(self.is_running() && self.remaining_execution_time == 0);
        self.status = ProcessStatus::Terminated;
        self.conclusion_time = now;
        self.quantum_progress = 0;
    }

    /// Burn one unit of CPU. Only ever called on the running process.
    pub(crate) fn consume_time_unit(&mut self) {
        debug_assert!(self.is_running() && self.remaining_execution_time > 0);
        self.remaining_execution_time -= 1;
    }

    /// Count one consecutive running unit toward the round-robin quantum
    pub(crate) fn advance_quantum(&mut self) {
        self.quantum_progress += 1;
    }

    pub(crate) fn reset_quantum(&mut self) {
        self.quantum_progress = 0;
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Process(name={}, execution_time={}, priority_level={}, arrival_time={})",
            self.name, self.execution_time, self.priority_level, self.arrival_time
        )
    }
}

impl TryFrom<ProcessSpec> for Process {
    type Error = ProcessError;

    fn try_from(spec: ProcessSpec) -> ProcessResult<Self> {
        Self::new(
            spec.name,
            spec.execution_time,
            spec.priority_level,
            spec.arrival_time,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_process_starts_ready() {
        let process = Process::new("P1", 5, 2, 3).unwrap();

        assert_eq!(process.status(), ProcessStatus::Ready);
        assert_eq!(process.remaining_execution_time(), 5);
        assert_eq!(process.conclusion_time(), 8);
        assert_eq!(process.quantum_progress(), 0);
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(Process::new("", 5, 1, 0), Err(ProcessError::BlankName));
        assert_eq!(Process::new("   ", 5, 1, 0), Err(ProcessError::BlankName));
    }

    #[test]
    fn test_zero_execution_time_rejected() {
        assert_eq!(
            Process::new("P1", 0, 1, 0),
            Err(ProcessError::InvalidExecutionTime(0))
        );
    }

    #[test]
    fn test_zero_priority_level_rejected() {
        assert_eq!(
            Process::new("P1", 5, 0, 0),
            Err(ProcessError::InvalidPriorityLevel(0))
        );
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut process = Process::new("P1", 4, 1, 2).unwrap();

        process.wait(2);
        process.start_running();
        process.consume_time_unit();
        process.advance_quantum();

        process.reset();
        let snapshot = process.clone();
        process.reset();

        assert_eq!(process, snapshot);
        assert!(process.is_ready());
        assert_eq!(process.remaining_execution_time(), 4);
    }

    #[test]
    fn test_lifecycle_metrics() {
        let mut process = Process::new("P1", 2, 1, 1).unwrap();

        process.wait(1);
        process.start_running();
        process.consume_time_unit();
        process.consume_time_unit();
        process.conclude(5);

        assert!(process.is_terminated());
        assert_eq!(process.turnaround_time(), 4);
        assert_eq!(process.wait_time(), 2);
    }

    #[test]
    fn test_spec_conversion_validates() {
        let spec = ProcessSpec::new("P1", 3, 2, 0);
        let process = Process::try_from(spec).unwrap();
        assert_eq!(process.name(), "P1");

        let bad = ProcessSpec::new("P2", 0, 2, 0);
        assert!(Process::try_from(bad).is_err());
    }
}
