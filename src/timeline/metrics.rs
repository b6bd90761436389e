/*!
 * Run Metrics
 * Aggregate performance figures derived from a completed run
 */

use super::segment::Segment;
use crate::core::types::Ticks;
use crate::process::ProcessResult;
use serde::{Deserialize, Serialize};

/// Aggregate metrics for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    pub avg_response: f64,
    /// End of the last segment
    pub total_time: Ticks,
    pub busy_time: Ticks,
    pub idle_time: Ticks,
    /// Fraction of `total_time` the processor was busy
    pub utilization: f64,
    /// Switches between two different processes (idle gaps skipped)
    pub context_switches: usize,
    /// Processes taken off the processor before finishing
    pub preemptions: usize,
}

impl Metrics {
    /// Aggregate completed results and the run's timeline
    ///
    /// Returns `None` when there is nothing to average.
    pub fn compute(
        results: &[ProcessResult],
        segments: &[Segment],
        preemptions: usize,
    ) -> Option<Self> {
        if results.is_empty() {
            return None;
        }

        let count = results.len() as f64;
        // Per-process figures fit in `Ticks`, but their totals may not
        let sum = |f: fn(&ProcessResult) -> Ticks| results.iter().map(|r| f(r) as f64).sum::<f64>();

        let total_time = segments.last().map(|s| s.end).unwrap_or(0);
        let idle_time: Ticks = segments
            .iter()
            .filter(|s| s.occupant.is_idle())
            .map(Segment::duration)
            .sum();
        let busy_time = total_time - idle_time;

        let utilization = if total_time == 0 {
            0.0
        } else {
            busy_time as f64 / total_time as f64
        };

        Some(Self {
            avg_waiting: sum(|r| r.waiting) / count,
            avg_turnaround: sum(|r| r.turnaround) / count,
            avg_response: sum(|r| r.response) / count,
            total_time,
            busy_time,
            idle_time,
            utilization,
            context_switches: count_switches(segments),
            preemptions,
        })
    }
}

fn count_switches(segments: &[Segment]) -> usize {
    let mut previous = None;
    let mut switches = 0;
    for pid in segments.iter().filter_map(|s| s.occupant.pid()) {
        if previous.is_some_and(|p| p != pid) {
            switches += 1;
        }
        previous = Some(pid);
    }
    switches
}
