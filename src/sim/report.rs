/*!
 * Simulation Report
 * Pure result value returned to callers of a run
 */

use super::event::SimEvent;
use crate::core::types::{Pid, Ticks};
use crate::process::ProcessResult;
use crate::scheduler::{Policy, TimeQuantum};
use crate::timeline::{Metrics, Segment};
use serde::{Deserialize, Serialize};

/// Outcome of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub policy: Policy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<TimeQuantum>,
    pub timeline: Vec<Segment>,
    /// Per-process results in input order
    pub processes: Vec<ProcessResult>,
    pub metrics: Metrics,
    pub events: Vec<SimEvent>,
}

impl Report {
    pub fn process(&self, pid: Pid) -> Option<&ProcessResult> {
        self.processes.iter().find(|p| p.id == pid)
    }

    /// Segments occupied by `pid`, in order
    pub fn segments_for(&self, pid: Pid) -> impl Iterator<Item = &Segment> {
        self.timeline
            .iter()
            .filter(move |s| s.occupant.pid() == Some(pid))
    }

    /// Total processor time granted to `pid`
    pub fn time_for(&self, pid: Pid) -> Ticks {
        self.segments_for(pid).map(Segment::duration).sum()
    }

    /// Compact one-line timeline, e.g. `P1:0-4 P2:4-7`
    pub fn timeline_line(&self) -> String {
        self.timeline
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
