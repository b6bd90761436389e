/*!
 * Process Registry
 * Working copy of a run's process set with mutable run state
 */

use super::types::{ProcessResult, ProcessSpec, ProcessState};
use super::validation::validate_specs;
use crate::core::types::{Pid, Priority, SimResult, Slot, Ticks};

/// Run-state entry for one process
#[derive(Debug, Clone)]
pub struct Entry {
    pub pid: Pid,
    pub name: String,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub priority: Priority,
    pub remaining: Ticks,
    pub state: ProcessState,
    pub first_run: Option<Ticks>,
    pub completion: Option<Ticks>,
    pub waiting: Option<Ticks>,
    pub turnaround: Option<Ticks>,
}

impl Entry {
    fn from_spec(spec: &ProcessSpec) -> Self {
        // Validated upstream: arrival >= 0, burst > 0
        let arrival = spec.arrival as Ticks;
        let burst = spec.burst as Ticks;
        Self {
            pid: spec.id,
            name: spec.name.clone(),
            arrival,
            burst,
            priority: spec.priority,
            remaining: burst,
            state: ProcessState::Waiting,
            first_run: None,
            completion: None,
            waiting: None,
            turnaround: None,
        }
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.state == ProcessState::Completed
    }

    /// Arrived by `now` and still has work left
    #[inline]
    pub fn is_eligible(&self, now: Ticks) -> bool {
        self.arrival <= now && self.remaining > 0
    }

    /// Final tie-break key shared by every policy: earliest arrival, then smallest id
    #[inline]
    pub fn fifo_key(&self) -> (Ticks, Pid) {
        (self.arrival, self.pid)
    }
}

/// Process registry owned by a single simulation run
///
/// Slots are stable indices in registration order.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<Entry>,
    completed: usize,
}

impl Registry {
    /// Validate caller input and build a fresh working copy
    pub fn from_specs(specs: &[ProcessSpec]) -> SimResult<Self> {
        validate_specs(specs)?;
        Ok(Self {
            entries: specs.iter().map(Entry::from_spec).collect(),
            completed: 0,
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entry(&self, slot: Slot) -> &Entry {
        &self.entries[slot]
    }

    /// All processes that have not completed, with their slots
    pub fn incomplete(&self) -> impl Iterator<Item = (Slot, &Entry)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.is_completed())
    }

    /// Processes that have arrived by `now` and still have remaining time
    pub fn eligible(&self, now: Ticks) -> impl Iterator<Item = (Slot, &Entry)> {
        self.entries
            .iter()
            .enumerate()
            .filter(move |(_, e)| e.is_eligible(now))
    }

    /// Earliest arrival among incomplete processes
    pub fn next_arrival(&self) -> Option<Ticks> {
        self.incomplete().map(|(_, e)| e.arrival).min()
    }

    /// Slots ordered by arrival, then id
    pub fn arrival_order(&self) -> Vec<Slot> {
        let mut order: Vec<Slot> = (0..self.entries.len()).collect();
        order.sort_by_key(|&slot| self.entries[slot].fifo_key());
        order
    }

    pub fn all_completed(&self) -> bool {
        self.completed == self.entries.len()
    }

    pub fn completed_count(&self) -> usize {
        self.completed
    }

    /// Put a process on the processor
    pub fn dispatch(&mut self, slot: Slot, now: Ticks) {
        let entry = &mut self.entries[slot];
        debug_assert!(
            entry.state != ProcessState::Completed,
            "Completed process {} cannot be dispatched",
            entry.pid
        );
        debug_assert!(
            entry.arrival <= now,
            "Process {} dispatched at {} before arrival {}",
            entry.pid,
            now,
            entry.arrival
        );
        entry.state = ProcessState::Running;
        entry.first_run.get_or_insert(now);
    }

    /// Consume `ticks` of the running process's remaining time
    ///
    /// Returns the time still remaining afterwards.
    pub fn run_for(&mut self, slot: Slot, ticks: Ticks) -> Ticks {
        let entry = &mut self.entries[slot];
        debug_assert_eq!(
            entry.state,
            ProcessState::Running,
            "Process {} must be running to consume time",
            entry.pid
        );
        debug_assert!(
            ticks <= entry.remaining,
            "Process {} overran its burst",
            entry.pid
        );
        entry.remaining -= ticks;
        entry.remaining
    }

    /// Take a running process off the processor without completing it
    pub fn preempt(&mut self, slot: Slot) {
        let entry = &mut self.entries[slot];
        debug_assert!(
            entry.state == ProcessState::Running && entry.remaining > 0,
            "Only an unfinished running process {} can be preempted",
            entry.pid
        );
        entry.state = ProcessState::Waiting;
    }

    /// Mark a process completed at `now` and fix its metrics
    pub fn complete(&mut self, slot: Slot, now: Ticks) {
        let entry = &mut self.entries[slot];
        debug_assert_eq!(
            entry.remaining, 0,
            "Process {} completed with time remaining",
            entry.pid
        );
        debug_assert!(
            entry.state == ProcessState::Running,
            "Process {} must have been running before marked complete",
            entry.pid
        );

        let turnaround = now - entry.arrival;
        entry.state = ProcessState::Completed;
        entry.completion = Some(now);
        entry.turnaround = Some(turnaround);
        entry.waiting = Some(turnaround - entry.burst);
        self.completed += 1;
    }

    /// Per-process results in registration order
    ///
    /// Only completed processes are reported.
    pub fn results(&self) -> Vec<ProcessResult> {
        self.entries
            .iter()
            .filter_map(|e| {
                Some(ProcessResult {
                    id: e.pid,
                    name: e.name.clone(),
                    arrival: e.arrival,
                    burst: e.burst,
                    priority: e.priority,
                    completion: e.completion?,
                    waiting: e.waiting?,
                    turnaround: e.turnaround?,
                    response: e.first_run? - e.arrival,
                })
            })
            .collect()
    }
}
