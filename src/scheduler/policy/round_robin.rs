/*!
 * Round-Robin Policy
 * FIFO ready queue with a fixed time quantum
 */

use crate::core::types::{Slot, Ticks};
use crate::process::Registry;
use crate::scheduler::strategy::{idle_or_drained, Choice, SelectionStrategy};
use crate::scheduler::types::TimeQuantum;
use std::collections::VecDeque;

/// Round-Robin strategy
///
/// Arrivals are admitted to the back of the ready queue in (arrival, id)
/// order. A process whose slice expires is re-queued behind everything
/// that arrived during that slice.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    quantum: TimeQuantum,
    ready: VecDeque<Slot>,
    // Slots sorted by arrival; `admitted` is the cursor into it
    arrivals: Option<Vec<Slot>>,
    admitted: usize,
}

impl RoundRobin {
    pub fn new(quantum: TimeQuantum) -> Self {
        Self {
            quantum,
            ready: VecDeque::new(),
            arrivals: None,
            admitted: 0,
        }
    }

    /// Snapshot of the ready queue, front first
    pub fn ready_queue(&self) -> impl Iterator<Item = Slot> + '_ {
        self.ready.iter().copied()
    }

    /// Move every process that has arrived by `now` onto the ready queue
    fn admit(&mut self, now: Ticks, registry: &Registry) {
        let arrivals = self
            .arrivals
            .get_or_insert_with(|| registry.arrival_order());

        // Sorted by arrival, so newly arrived processes are contiguous
        while let Some(&slot) = arrivals.get(self.admitted) {
            if registry.entry(slot).arrival > now {
                break;
            }
            self.ready.push_back(slot);
            self.admitted += 1;
        }
    }
}

impl SelectionStrategy for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn select(&mut self, now: Ticks, registry: &Registry, _incumbent: Option<Slot>) -> Choice {
        self.admit(now, registry);

        match self.ready.pop_front() {
            Some(slot) => Choice::Run {
                slot,
                slice: registry.entry(slot).remaining.min(self.quantum.ticks()),
            },
            None => idle_or_drained(registry),
        }
    }

    fn on_slice_end(&mut self, now: Ticks, registry: &Registry, slot: Slot) {
        // New arrivals go ahead of the process whose slice just ended
        self.admit(now, registry);

        if registry.entry(slot).remaining > 0 {
            self.ready.push_back(slot);
        }
    }
}
