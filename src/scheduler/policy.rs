/*!
 * Scheduling Policies
 * Queue ordering and preemption decisions for each policy variant
 */

use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::Time;
use crate::process::Process;

/// Default round-robin quantum length
pub const DEFAULT_QUANTUM_LENGTH: Time = 2;

/// Scheduling policy
///
/// Each variant customizes two extension points of the engine: the ready
/// queue ordering and, for the preemptive variants, the predicate that
/// decides whether the running process should be interrupted. All orderings
/// are stable sorts over a queue already in FIFO order by enqueue time, so
/// ties always break first-in-first-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Runs processes in arrival order. Non-preemptive.
    FirstComeFirstServe,
    /// Picks the shortest job next. Non-preemptive.
    ShortestJobFirst,
    /// Preemptive SJF: a strictly shorter arrival interrupts the running job.
    ShortestRemainingTimeFirst,
    /// FIFO with a fixed time slice per turn.
    RoundRobin { quantum_length: Time },
    /// Runs the most prioritary waiting process to completion.
    PriorityCooperative { use_reverse_priority: bool },
    /// Like cooperative priority, but a strictly more prioritary arrival
    /// interrupts the running job.
    PriorityPreemptive { use_reverse_priority: bool },
}

impl Policy {
    /// Round robin with the default quantum of two time units
    pub fn round_robin_default() -> Self {
        Policy::RoundRobin {
            quantum_length: DEFAULT_QUANTUM_LENGTH,
        }
    }

    /// Priority scheduling defaults to reverse priority: higher level wins
    pub fn priority_cooperative_default() -> Self {
        Policy::PriorityCooperative {
            use_reverse_priority: true,
        }
    }

    pub fn priority_preemptive_default() -> Self {
        Policy::PriorityPreemptive {
            use_reverse_priority: true,
        }
    }

    /// Human-readable algorithm name
    pub fn name(&self) -> &'static str {
        match self {
            Policy::FirstComeFirstServe => "First Come First Serve Scheduler",
            Policy::ShortestJobFirst => "Shortest Job First Scheduler",
            Policy::ShortestRemainingTimeFirst => "Shortest Remaining Time First Scheduler",
            Policy::RoundRobin { .. } => "Round Robin Scheduler",
            Policy::PriorityCooperative { .. } => "Priority Cooperative Scheduler",
            Policy::PriorityPreemptive { .. } => "Priority Preemptive Scheduler",
        }
    }

    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Policy::ShortestRemainingTimeFirst
                | Policy::RoundRobin { .. }
                | Policy::PriorityPreemptive { .. }
        )
    }

    /// Validate policy configuration. Checked at engine construction.
    pub(crate) fn validate(&self) -> SchedulerResult<()> {
        match self {
            Policy::RoundRobin { quantum_length } if *quantum_length < 1 => {
                Err(SchedulerError::InvalidQuantumLength(*quantum_length))
            }
            _ => Ok(()),
        }
    }

    /// Order the ready queue.
    ///
    /// `queue` holds indices into `processes` and arrives sorted ascending by
    /// enqueue time; every policy sort is stable, so that FIFO order is the
    /// universal tie-break.
    pub(crate) fn sort_ready_queue(&self, queue: &mut [usize], processes: &[Process]) {
        match self {
            Policy::FirstComeFirstServe => {
                queue.sort_by_key(|&i| processes[i].arrival_time());
            }
            Policy::ShortestJobFirst | Policy::ShortestRemainingTimeFirst => {
                queue.sort_by_key(|&i| processes[i].remaining_execution_time());
            }
            Policy::RoundRobin { .. } => {
                // Already FIFO by enqueue time.
            }
            Policy::PriorityCooperative {
                use_reverse_priority,
            }
            | Policy::PriorityPreemptive {
                use_reverse_priority,
            } => {
                if *use_reverse_priority {
                    queue.sort_by(|&a, &b| {
                        processes[b].priority_level().cmp(&processes[a].priority_level())
                    });
                } else {
                    queue.sort_by_key(|&i| processes[i].priority_level());
                }
            }
        }
    }

    /// Should `head` (the front of the ready queue) take over from `running`?
    ///
    /// Ties never preempt: strict inequalities throughout. The round-robin
    /// decision ignores the queue entirely and is handled by
    /// `quantum_expired`, since its interrupt fires even with an empty queue.
    pub(crate) fn should_preempt(&self, running: &Process, head: &Process) -> bool {
        match self {
            Policy::ShortestRemainingTimeFirst => {
                head.remaining_execution_time() < running.remaining_execution_time()
            }
            Policy::PriorityPreemptive {
                use_reverse_priority: true,
            } => running.priority_level() < head.priority_level(),
            Policy::PriorityPreemptive {
                use_reverse_priority: false,
            } => running.priority_level() > head.priority_level(),
            _ => false,
        }
    }

    /// Round-robin quantum expiry check for the running process
    pub(crate) fn quantum_expired(&self, running: &Process) -> bool {
        match self {
            Policy::RoundRobin { quantum_length } => {
                running.quantum_progress() == *quantum_length
            }
            _ => false,
        }
    }

    /// Whether this policy accounts consecutive running units
    pub(crate) fn tracks_quantum(&self) -> bool {
        matches!(self, Policy::RoundRobin { .. })
    }
}
