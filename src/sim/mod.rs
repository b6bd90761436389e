/*!
 * Simulation Module
 * Entry points for running scheduling policies over a process set
 */

mod driver;
mod event;
mod report;

pub use driver::{Driver, RunOutput};
pub use event::SimEvent;
pub use report::Report;

use crate::core::errors::SimError;
use crate::core::types::SimResult;
use crate::process::{ProcessSpec, Registry};
use crate::scheduler::{strategy_for, Policy, SimParams};
use crate::timeline::Metrics;
use std::thread;
use tracing::{info, info_span};
use uuid::Uuid;

/// Simulate one policy over `specs`
///
/// The input slice is never mutated; each call works on its own copy.
/// Invalid input is rejected before the run starts.
pub fn simulate(specs: &[ProcessSpec], policy: Policy, params: SimParams) -> SimResult<Report> {
    let registry = Registry::from_specs(specs)?;
    let quantum = params.resolve_quantum(policy)?;

    let run_id = Uuid::new_v4();
    let span = info_span!(
        "simulate",
        run_id = %run_id,
        policy = policy.as_str(),
        processes = specs.len()
    );
    let _entered = span.enter();

    let strategy = strategy_for(policy, quantum.unwrap_or_default());
    let output = Driver::new(registry, strategy).run(policy.dispatch());

    let processes = output.registry.results();
    let preemptions = output
        .events
        .iter()
        .filter(|e| matches!(e, SimEvent::Preempted { .. }))
        .count();
    let metrics = Metrics::compute(&processes, &output.timeline, preemptions)
        .ok_or(SimError::EmptyWorkload)?;

    info!(
        total_time = metrics.total_time,
        avg_waiting = metrics.avg_waiting,
        avg_turnaround = metrics.avg_turnaround,
        segments = output.timeline.len(),
        "simulation finished"
    );

    Ok(Report {
        policy,
        quantum,
        timeline: output.timeline,
        processes,
        metrics,
        events: output.events,
    })
}

/// Simulate a policy given by name
pub fn simulate_named(specs: &[ProcessSpec], policy: &str, params: SimParams) -> SimResult<Report> {
    simulate(specs, policy.parse()?, params)
}

/// Run every policy over the same input
///
/// Runs execute in parallel on independent copies; reports come back in
/// `Policy::ALL` order.
pub fn compare(specs: &[ProcessSpec], params: SimParams) -> SimResult<Vec<Report>> {
    thread::scope(|scope| {
        let handles: Vec<_> = Policy::ALL
            .iter()
            .map(|&policy| scope.spawn(move || simulate(specs, policy, params)))
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect()
    })
}
