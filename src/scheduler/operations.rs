/*!
 * Engine Operations
 * The simulation loop, state transitions, and aggregate metrics
 */

use super::report::{ExecutionReport, TraceRow};
use super::Scheduler;
use crate::core::errors::SchedulerResult;
use crate::core::types::Time;
use log::{debug, info, trace};

impl Scheduler {
    /// Execute the full simulation, yielding one trace row per process per
    /// simulated time unit.
    ///
    /// Runs `total_execution_time + 1` steps: the sum of execution times
    /// bounds the running opportunities needed, and the extra unit covers the
    /// step on which the last decrement is observed as a termination.
    /// Re-invoking `run` resets all mutable state first, so the same inputs
    /// always reproduce the same trace.
    pub fn run(&mut self) -> SchedulerResult<ExecutionReport> {
        self.assert_queue_validity()?;
        self.reset();

        let horizon = self.total_execution_time();
        info!(
            "{}: simulating {} processes over {} time units",
            self.policy().name(),
            self.number_of_processes(),
            horizon + 1
        );

        let mut report =
            ExecutionReport::with_capacity(self.number_of_processes() * (horizon as usize + 1));

        for step in 0..=horizon {
            self.simulate_scheduling_step(step);
            self.report_step_status(step, &mut report);
        }

        info!("{}: run complete", self.policy().name());

        Ok(report)
    }

    /// Mean wait time over all processes. Executes a full simulation.
    pub fn average_wait_time(&mut self) -> SchedulerResult<f64> {
        self.run()?;

        let total: u64 = self
            .processes
            .iter()
            .map(|process| u64::from(process.wait_time()))
            .sum();

        Ok(total as f64 / self.number_of_processes() as f64)
    }

    /// Mean turnaround time over all processes. Executes a full simulation.
    pub fn average_turnaround_time(&mut self) -> SchedulerResult<f64> {
        self.run()?;

        let total: u64 = self
            .processes
            .iter()
            .map(|process| u64::from(process.turnaround_time()))
            .sum();

        Ok(total as f64 / self.number_of_processes() as f64)
    }

    /// One simulated time unit: update statuses, refresh the ready queue,
    /// decide who runs, then account the round-robin quantum.
    fn simulate_scheduling_step(&mut self, step: Time) {
        self.update_process_statuses(step);
        self.refresh_ready_queue();
        self.determine_current_running_process();

        if self.policy.tracks_quantum() {
            if let Some(index) = self.current {
                self.processes[index].advance_quantum();
            }
        }
    }

    /// Burn one unit on the running process, admit arrivals and re-queue
    /// interrupted processes, and observe terminations.
    fn update_process_statuses(&mut self, step: Time) {
        if let Some(index) = self.current {
            self.processes[index].consume_time_unit();
        }

        for process in &mut self.processes {
            if process.was_interrupted() || (process.is_ready() && process.arrival_time() == step)
            {
                process.wait(step);
                trace!("{} enqueued at t={}", process.name(), step);
            }

            if process.is_running() && process.remaining_execution_time() == 0 {
                process.conclude(step);
                debug!("{} terminated at t={}", process.name(), step);
            }
        }

        // The slot frees up the step its occupant terminates.
        if let Some(index) = self.current {
            if self.processes[index].is_terminated() {
                self.current = None;
            }
        }
    }

    /// Rebuild the ready queue from the WAITING processes.
    ///
    /// Collected in stored order, sorted ascending by enqueue time, then
    /// stably by the policy key, so FIFO is the tie-break among equals.
    fn refresh_ready_queue(&mut self) {
        self.ready_queue = self
            .processes
            .iter()
            .enumerate()
            .filter(|(_, process)| process.is_waiting())
            .map(|(index, _)| index)
            .collect();

        self.ready_queue
            .sort_by_key(|&index| self.processes[index].enqueue_time());

        self.policy
            .sort_ready_queue(&mut self.ready_queue, &self.processes);
    }

    /// Apply the policy's preemption decision, then fill an idle slot from
    /// the head of the ready queue.
    fn determine_current_running_process(&mut self) {
        // Quantum expiry interrupts even with an empty ready queue; the CPU
        // then idles one unit while the process re-queues.
        if let Some(index) = self.current {
            if self.policy.quantum_expired(&self.processes[index]) {
                self.processes[index].reset_quantum();
                self.interrupt_current(index);
            }
        }

        if let (Some(index), Some(&head)) = (self.current, self.ready_queue.first()) {
            if self
                .policy
                .should_preempt(&self.processes[index], &self.processes[head])
            {
                self.interrupt_current(index);
            }
        }

        if !self.is_executing_a_process() && !self.ready_queue_is_empty() {
            let head = self.ready_queue.remove(0);
            self.processes[head].start_running();
            self.current = Some(head);
            debug!("{} selected to run", self.processes[head].name());
        }
    }

    fn interrupt_current(&mut self, index: usize) {
        self.processes[index].interrupt();
        self.current = None;
        debug!("{} preempted", self.processes[index].name());
    }

    /// Emit one row per process for this step, in stored process order.
    fn report_step_status(&self, step: Time, report: &mut ExecutionReport) {
        for process in &self.processes {
            report.push(TraceRow {
                time: step,
                process_name: process.name().to_string(),
                process_status: process.status(),
                remaining_execution_time: process.remaining_execution_time(),
                quantum_progress: process.quantum_progress(),
            });
        }
    }
}
