/*!
 * Execution Report
 * The tabular trace produced by a simulation run
 */

use crate::core::types::Time;
use crate::process::ProcessStatus;
use serde::{Deserialize, Serialize};

/// One (process, time unit) observation.
///
/// `quantum_progress` is only meaningful under round robin and reported as 0
/// elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TraceRow {
    pub time: Time,
    pub process_name: String,
    pub process_status: ProcessStatus,
    pub remaining_execution_time: Time,
    pub quantum_progress: Time,
}

/// Full execution trace: one row per process per simulated time unit,
/// ordered by time, then by the stored process order.
///
/// This is the sole artifact consumed by reporting and plotting
/// collaborators; it serializes to JSON rows for export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ExecutionReport {
    rows: Vec<TraceRow>,
}

impl ExecutionReport {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, row: TraceRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[TraceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows observed at one simulated time unit
    pub fn rows_at(&self, time: Time) -> impl Iterator<Item = &TraceRow> {
        self.rows.iter().filter(move |row| row.time == time)
    }

    /// The timeline of a single process
    pub fn rows_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a TraceRow> {
        self.rows.iter().filter(move |row| row.process_name == name)
    }
}
