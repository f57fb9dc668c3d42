/*!
 * Process Types
 * Status machine labels and the external process specification
 */

use crate::core::types::{Priority, Time};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process status
///
/// READY means created but not yet arrived; WAITING means eligible and sitting
/// in the ready queue; INTERRUPTED is the one-step limbo a preempted process
/// passes through before re-entering the queue. TERMINATED is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    Ready,
    Waiting,
    Running,
    Interrupted,
    Terminated,
}

impl ProcessStatus {
    /// Human-readable label used in trace rows
    pub fn label(&self) -> &'static str {
        match self {
            ProcessStatus::Ready => "ready",
            ProcessStatus::Waiting => "waiting",
            ProcessStatus::Running => "running",
            ProcessStatus::Interrupted => "interrupted",
            ProcessStatus::Terminated => "terminated",
        }
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// External construction interface: one process specification as plain data
///
/// Collaborators (file import, GUI) hand collections of these to a policy
/// constructor. Conversion into a `Process` performs the attribute validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    pub name: String,
    pub execution_time: Time,
    pub priority_level: Priority,
    pub arrival_time: Time,
}

impl ProcessSpec {
    pub fn new(
        name: impl Into<String>,
        execution_time: Time,
        priority_level: Priority,
        arrival_time: Time,
    ) -> Self {
        Self {
            name: name.into(),
            execution_time,
            priority_level,
            arrival_time,
        }
    }
}
