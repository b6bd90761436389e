/*!
 * Non-Preemptive Policies
 * Choose once among arrived processes and run the choice to completion
 */

use crate::core::types::{Slot, Ticks};
use crate::process::{Entry, Registry};
use crate::scheduler::strategy::{idle_or_drained, Choice, SelectionStrategy};

/// Run the eligible process with the smallest key for its whole remaining time
fn run_min_by_key<K, F>(now: Ticks, registry: &Registry, key: F) -> Choice
where
    K: Ord,
    F: Fn(Slot, &Entry) -> K,
{
    match registry
        .eligible(now)
        .min_by_key(|&(slot, entry)| key(slot, entry))
    {
        Some((slot, entry)) => Choice::Run {
            slot,
            slice: entry.remaining,
        },
        None => idle_or_drained(registry),
    }
}

/// First-come first-served: earliest arrival, then smallest id
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstComeFirstServed;

impl SelectionStrategy for FirstComeFirstServed {
    fn name(&self) -> &'static str {
        "First-Come First-Served"
    }

    fn select(&mut self, now: Ticks, registry: &Registry, _incumbent: Option<Slot>) -> Choice {
        run_min_by_key(now, registry, |_, e| e.fifo_key())
    }
}

/// Shortest burst first, then earliest arrival, then registration order
#[derive(Debug, Default, Clone, Copy)]
pub struct ShortestJobFirst;

impl SelectionStrategy for ShortestJobFirst {
    fn name(&self) -> &'static str {
        "Shortest Job First"
    }

    fn select(&mut self, now: Ticks, registry: &Registry, _incumbent: Option<Slot>) -> Choice {
        run_min_by_key(now, registry, |slot, e| (e.burst, e.arrival, slot))
    }
}

/// Lowest priority value first, then earliest arrival, then registration order
#[derive(Debug, Default, Clone, Copy)]
pub struct PriorityNonPreemptive;

impl SelectionStrategy for PriorityNonPreemptive {
    fn name(&self) -> &'static str {
        "Priority (Non-Preemptive)"
    }

    fn select(&mut self, now: Ticks, registry: &Registry, _incumbent: Option<Slot>) -> Choice {
        run_min_by_key(now, registry, |slot, e| (e.priority, e.arrival, slot))
    }
}

/// Focus mode: lowest priority value, then earliest arrival, then smallest id
#[derive(Debug, Default, Clone, Copy)]
pub struct Focus;

impl SelectionStrategy for Focus {
    fn name(&self) -> &'static str {
        "Focus (Non-Preemptive)"
    }

    fn select(&mut self, now: Ticks, registry: &Registry, _incumbent: Option<Slot>) -> Choice {
        run_min_by_key(now, registry, |_, e| (e.priority, e.arrival, e.pid))
    }
}
