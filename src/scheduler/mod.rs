/*!
 * Scheduling Engine
 * Owns the process collection and runs the time-stepped simulation loop
 */

use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::Time;
use crate::process::{Process, ProcessSpec};
use log::info;
use std::fmt;

mod operations;
mod policy;
mod report;

pub use policy::{Policy, DEFAULT_QUANTUM_LENGTH};
pub use report::{ExecutionReport, TraceRow};

/// Discrete-time scheduling engine.
///
/// The engine owns every `Process` for the whole run; `ready_queue` and
/// `current` index into `processes` and are recomputed each simulated step.
/// Fully synchronous and single-threaded: the clock is a loop counter, and
/// at most one process is RUNNING at any step by construction.
#[derive(Debug, Clone)]
pub struct Scheduler {
    policy: Policy,
    processes: Vec<Process>,
    ready_queue: Vec<usize>,
    current: Option<usize>,
}

impl Scheduler {
    /// Create an engine over an ordered process collection.
    ///
    /// Validates the policy configuration and the queue composition (at least
    /// one process, some process arriving at time 0), then resets every
    /// process so the instance is ready to run.
    pub fn new(policy: Policy, processes: Vec<Process>) -> SchedulerResult<Self> {
        policy.validate()?;

        let mut scheduler = Self {
            policy,
            processes,
            ready_queue: Vec::new(),
            current: None,
        };

        scheduler.assert_queue_validity()?;
        scheduler.reset();

        info!(
            "{} initialized with {} processes",
            policy.name(),
            scheduler.number_of_processes()
        );

        Ok(scheduler)
    }

    /// Create an engine from external process specifications,
    /// validating each one.
    pub fn from_specs(policy: Policy, specs: Vec<ProcessSpec>) -> SchedulerResult<Self> {
        let processes = specs
            .into_iter()
            .map(|spec| Process::try_from(spec).map_err(SchedulerError::from))
            .collect::<SchedulerResult<Vec<_>>>()?;

        Self::new(policy, processes)
    }

    /// Append a process to the collection. Insertion order is preserved and
    /// doubles as the universal tie-break order.
    pub fn add_process(&mut self, process: Process) {
        self.processes.push(process);
    }

    /// Reset every process and clear the run state. `run` calls this, so a
    /// policy instance can be rerun deterministically.
    pub fn reset(&mut self) {
        for process in &mut self.processes {
            process.reset();
        }

        self.ready_queue.clear();
        self.current = None;
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn number_of_processes(&self) -> usize {
        self.processes.len()
    }

    /// Sum of every process's execution time. Upper-bounds the number of
    /// simulated units needed under no-idle scheduling.
    pub fn total_execution_time(&self) -> Time {
        self.processes
            .iter()
            .map(|process| process.execution_time())
            .sum()
    }

    /// Precondition check, run at construction and before every simulation.
    pub(crate) fn assert_queue_validity(&self) -> SchedulerResult<()> {
        if self.processes.is_empty() {
            return Err(SchedulerError::EmptyProcessQueue);
        }

        if !self
            .processes
            .iter()
            .any(|process| process.arrival_time() == 0)
        {
            return Err(SchedulerError::NoProcessArrivingAtZero);
        }

        Ok(())
    }

    pub(crate) fn is_executing_a_process(&self) -> bool {
        self.current.is_some()
    }

    pub(crate) fn ready_queue_is_empty(&self) -> bool {
        self.ready_queue.is_empty()
    }
}

impl fmt::Display for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Processes: {})",
            self.policy.name(),
            self.number_of_processes()
        )
    }
}
