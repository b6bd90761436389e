/*!
 * Simulation Events
 * Chronological transition stream emitted by the driver
 */

use crate::core::types::{Pid, Ticks};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Processor state transition observed during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SimEvent {
    /// No eligible process between `from` and `to`
    Idle { from: Ticks, to: Ticks },
    /// Process put on the processor
    Dispatched { pid: Pid, at: Ticks, remaining: Ticks },
    /// Process taken off the processor with work left
    Preempted { pid: Pid, at: Ticks, remaining: Ticks },
    /// Process consumed its whole burst
    Completed { pid: Pid, at: Ticks },
}

impl SimEvent {
    /// Instant the transition happened
    pub fn at(&self) -> Ticks {
        match self {
            Self::Idle { from, .. } => *from,
            Self::Dispatched { at, .. } | Self::Preempted { at, .. } | Self::Completed { at, .. } => {
                *at
            }
        }
    }

    pub fn pid(&self) -> Option<Pid> {
        match self {
            Self::Idle { .. } => None,
            Self::Dispatched { pid, .. } | Self::Preempted { pid, .. } | Self::Completed { pid, .. } => {
                Some(*pid)
            }
        }
    }
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle { from, to } => write!(f, "t={} CPU idle until t={}", from, to),
            Self::Dispatched { pid, at, remaining } => {
                write!(f, "t={} P{} dispatched (remaining={})", at, pid, remaining)
            }
            Self::Preempted { pid, at, remaining } => {
                write!(f, "t={} P{} preempted (remaining={})", at, pid, remaining)
            }
            Self::Completed { pid, at } => write!(f, "t={} P{} completed", at, pid),
        }
    }
}
