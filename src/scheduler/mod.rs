/*!
 * Scheduler Module
 * Scheduling policy identifiers and per-policy selection strategies
 */

pub mod policy;
pub mod strategy;
pub mod types;

// Re-export public API
pub use policy::{
    FirstComeFirstServed, Focus, FocusPreemptive, PriorityNonPreemptive, PriorityPreemptive,
    RoundRobin, ShortestJobFirst, ShortestRemainingTimeFirst,
};
pub use strategy::{Choice, SelectionStrategy};
pub use types::{Dispatch, Policy, SimParams, TimeQuantum};

/// Build the selection strategy for a policy
///
/// `quantum` is only consulted for Round-Robin.
pub fn strategy_for(policy: Policy, quantum: TimeQuantum) -> Box<dyn SelectionStrategy> {
    match policy {
        Policy::Fcfs => Box::new(FirstComeFirstServed),
        Policy::Sjf => Box::new(ShortestJobFirst),
        Policy::Priority => Box::new(PriorityNonPreemptive),
        Policy::Focus => Box::new(Focus),
        Policy::RoundRobin => Box::new(RoundRobin::new(quantum)),
        Policy::Srtf => Box::new(ShortestRemainingTimeFirst),
        Policy::PriorityPreemptive => Box::new(PriorityPreemptive),
        Policy::FocusPreemptive => Box::new(FocusPreemptive),
    }
}
