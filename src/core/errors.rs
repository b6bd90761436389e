/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::Pid;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulation request errors with serialization support
///
/// Every variant is an invalid-input condition detected before the
/// simulation loop starts. No run is ever partially executed.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimError {
    #[error("Process set is empty")]
    #[diagnostic(
        code(sim::empty_workload),
        help("Supply at least one process to simulate.")
    )]
    EmptyWorkload,

    #[error("Process {pid} has non-positive burst {burst}")]
    #[diagnostic(
        code(sim::invalid_burst),
        help("Burst time must be a positive integer number of ticks.")
    )]
    InvalidBurst { pid: Pid, burst: i64 },

    #[error("Process {pid} has negative arrival {arrival}")]
    #[diagnostic(
        code(sim::negative_arrival),
        help("Arrival time must be zero or greater.")
    )]
    NegativeArrival { pid: Pid, arrival: i64 },

    #[error("Invalid quantum {0} for round-robin")]
    #[diagnostic(
        code(sim::invalid_quantum),
        help("Round-robin quantum must be at least 1 tick.")
    )]
    InvalidQuantum(i64),

    #[error("Unknown scheduling policy '{0}'")]
    #[diagnostic(
        code(sim::unknown_policy),
        help("Valid: fcfs, sjf, srtf, priority, priority_preemptive, focus, focus_preemptive, round_robin")
    )]
    UnknownPolicy(String),

    #[error("Duplicate process id {0}")]
    #[diagnostic(
        code(sim::duplicate_pid),
        help("Process ids are used as tie-breakers and must be unique.")
    )]
    DuplicatePid(Pid),

    #[error("Too many processes: {count} exceeds limit {limit}")]
    #[diagnostic(
        code(sim::too_many_processes),
        help("Split the workload into smaller simulation requests.")
    )]
    TooManyProcesses { count: usize, limit: usize },

    #[error("Schedule end time overflows the clock at process {pid}")]
    #[diagnostic(
        code(sim::horizon_overflow),
        help("The latest arrival plus the sum of all bursts must fit in an unsigned 64-bit tick count.")
    )]
    HorizonOverflow { pid: Pid },
}

impl SimError {
    /// Whether the error was caused by caller input
    ///
    /// Always true: the simulation itself performs no I/O and has no
    /// retryable failures.
    pub const fn is_invalid_input(&self) -> bool {
        true
    }

    /// Stable snake_case kind, matching the serialized `error_type` tag
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EmptyWorkload => "empty_workload",
            Self::InvalidBurst { .. } => "invalid_burst",
            Self::NegativeArrival { .. } => "negative_arrival",
            Self::InvalidQuantum(_) => "invalid_quantum",
            Self::UnknownPolicy(_) => "unknown_policy",
            Self::DuplicatePid(_) => "duplicate_pid",
            Self::TooManyProcesses { .. } => "too_many_processes",
            Self::HorizonOverflow { .. } => "horizon_overflow",
        }
    }
}
