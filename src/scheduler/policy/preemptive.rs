/*!
 * Preemptive Policies
 * Re-evaluated every tick; the incumbent keeps the processor on exact ties
 */

use crate::core::types::{Slot, Ticks};
use crate::process::{Entry, Registry};
use crate::scheduler::strategy::{idle_or_drained, Choice, SelectionStrategy};

/// Pick the eligible process with the smallest key for one tick
///
/// A different process only takes over on strict improvement. Among
/// non-incumbents with equal keys, earliest arrival then smallest id wins.
fn run_min_keep_incumbent<K, F>(
    now: Ticks,
    registry: &Registry,
    incumbent: Option<Slot>,
    key: F,
) -> Choice
where
    K: Ord,
    F: Fn(&Entry) -> K,
{
    let best = registry
        .eligible(now)
        .min_by_key(|(_, entry)| (key(entry), entry.fifo_key()));

    let Some((best_slot, best_entry)) = best else {
        return idle_or_drained(registry);
    };

    let slot = match incumbent {
        Some(current)
            if registry.entry(current).is_eligible(now)
                && key(registry.entry(current)) == key(best_entry) =>
        {
            current
        }
        _ => best_slot,
    };

    Choice::Run { slot, slice: 1 }
}

/// Shortest remaining time first
#[derive(Debug, Default, Clone, Copy)]
pub struct ShortestRemainingTimeFirst;

impl SelectionStrategy for ShortestRemainingTimeFirst {
    fn name(&self) -> &'static str {
        "Shortest Remaining Time First"
    }

    fn select(&mut self, now: Ticks, registry: &Registry, incumbent: Option<Slot>) -> Choice {
        run_min_keep_incumbent(now, registry, incumbent, |e| e.remaining)
    }
}

/// Lowest priority value, re-evaluated every tick
#[derive(Debug, Default, Clone, Copy)]
pub struct PriorityPreemptive;

impl SelectionStrategy for PriorityPreemptive {
    fn name(&self) -> &'static str {
        "Priority (Preemptive)"
    }

    fn select(&mut self, now: Ticks, registry: &Registry, incumbent: Option<Slot>) -> Choice {
        run_min_keep_incumbent(now, registry, incumbent, |e| e.priority)
    }
}

/// Lowest priority value, then shortest remaining time, re-evaluated every tick
#[derive(Debug, Default, Clone, Copy)]
pub struct FocusPreemptive;

impl SelectionStrategy for FocusPreemptive {
    fn name(&self) -> &'static str {
        "Focus (Preemptive)"
    }

    fn select(&mut self, now: Ticks, registry: &Registry, incumbent: Option<Slot>) -> Choice {
        run_min_keep_incumbent(now, registry, incumbent, |e| (e.priority, e.remaining))
    }
}
