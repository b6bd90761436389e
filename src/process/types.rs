/*!
 * Process Types
 * Caller-facing process specifications and per-process results
 */

use crate::core::types::{Pid, Priority, Ticks};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Process specification as supplied by the caller
///
/// Times are signed so that malformed input can be rejected instead of
/// being silently wrapped or clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub id: Pid,
    #[serde(default)]
    pub name: String,
    pub arrival: i64,
    pub burst: i64,
    #[serde(default)]
    pub priority: Priority,
}

impl ProcessSpec {
    /// Create an unnamed process with priority 0
    pub fn new(id: Pid, arrival: i64, burst: i64) -> Self {
        Self {
            id,
            name: String::new(),
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Create a named process with priority 0
    pub fn named(id: Pid, name: &str, arrival: i64, burst: i64) -> Self {
        Self::new(id, arrival, burst).with_name(name)
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_owned();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Name used for display, falling back to `P<id>` when unnamed
    pub fn display_name(&self) -> Cow<'_, str> {
        display_name(&self.name, self.id)
    }
}

fn display_name(name: &str, id: Pid) -> Cow<'_, str> {
    if name.trim().is_empty() {
        Cow::Owned(format!("P{}", id))
    } else {
        Cow::Borrowed(name)
    }
}

/// Process lifecycle state during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Not running; either not yet arrived, ready, or preempted
    Waiting,
    /// Occupying the processor
    Running,
    /// All burst time consumed; immutable from here on
    Completed,
}

/// Final per-process outcome of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    pub id: Pid,
    pub name: String,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub priority: Priority,
    /// Instant the last unit of burst finished
    pub completion: Ticks,
    /// Time spent eligible but not running (`turnaround - burst`)
    pub waiting: Ticks,
    /// `completion - arrival`
    pub turnaround: Ticks,
    /// Time from arrival to first dispatch
    pub response: Ticks,
}

impl ProcessResult {
    /// Name used for display, falling back to `P<id>` when unnamed
    pub fn display_name(&self) -> Cow<'_, str> {
        display_name(&self.name, self.id)
    }
}
