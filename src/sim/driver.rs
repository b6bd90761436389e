/*!
 * Simulation Driver
 * Time-advancing loops that consult a selection strategy and record the timeline
 */

use super::event::SimEvent;
use crate::core::types::{Slot, Ticks};
use crate::process::Registry;
use crate::scheduler::{Choice, Dispatch, SelectionStrategy};
use crate::timeline::{Occupant, Segment, Timeline};
use tracing::{debug, trace};

/// Everything a finished run produced
#[derive(Debug)]
pub struct RunOutput {
    pub registry: Registry,
    pub timeline: Vec<Segment>,
    pub events: Vec<SimEvent>,
}

/// Single-processor simulation driver
///
/// Owns the run's registry for its whole lifetime. No pacing or delay is
/// applied; the run completes at full speed.
pub struct Driver<S: SelectionStrategy + ?Sized> {
    registry: Registry,
    strategy: Box<S>,
    timeline: Timeline,
    events: Vec<SimEvent>,
    now: Ticks,
}

impl<S: SelectionStrategy + ?Sized> Driver<S> {
    pub fn new(registry: Registry, strategy: Box<S>) -> Self {
        let capacity = registry.len() * 2;
        Self {
            registry,
            strategy,
            timeline: Timeline::new(),
            events: Vec::with_capacity(capacity),
            now: 0,
        }
    }

    /// Run until every process has completed
    pub fn run(mut self, dispatch: Dispatch) -> RunOutput {
        debug!(
            strategy = self.strategy.name(),
            dispatch = ?dispatch,
            processes = self.registry.len(),
            "driver started"
        );

        match dispatch {
            Dispatch::WholeBurst => self.run_whole_burst(),
            Dispatch::UnitTime => self.run_unit_time(),
        }

        debug_assert!(self.registry.all_completed(), "Driver exited with work left");
        debug!(now = self.now, segments = self.timeline.segments().len(), "driver finished");

        RunOutput {
            registry: self.registry,
            timeline: self.timeline.into_segments(),
            events: self.events,
        }
    }

    /// Each decision runs for its whole slice: a full burst or one quantum
    fn run_whole_burst(&mut self) {
        loop {
            match self.strategy.select(self.now, &self.registry, None) {
                Choice::Drained => break,
                Choice::Idle { until } => self.idle(until),
                Choice::Run { slot, slice } => {
                    let start = self.now;
                    self.dispatch(slot);

                    let remaining = self.registry.run_for(slot, slice);
                    self.now += slice;

                    let pid = self.registry.entry(slot).pid;
                    self.timeline.push(Occupant::Process(pid), start, self.now);

                    if remaining == 0 {
                        self.complete(slot);
                    } else {
                        self.preempt(slot);
                    }

                    self.strategy.on_slice_end(self.now, &self.registry, slot);
                }
            }
        }
    }

    /// Re-evaluate the choice every tick, switching mid-burst when told to
    fn run_unit_time(&mut self) {
        let mut current: Option<Slot> = None;

        loop {
            match self.strategy.select(self.now, &self.registry, current) {
                Choice::Drained => break,
                Choice::Idle { until } => {
                    debug_assert!(current.is_none(), "Idle while a process is running");
                    self.idle(until);
                }
                Choice::Run { slot, .. } => {
                    if current != Some(slot) {
                        if let Some(previous) = current.take() {
                            self.timeline.close(self.now);
                            self.preempt(previous);
                        }
                        let pid = self.registry.entry(slot).pid;
                        self.dispatch(slot);
                        self.timeline.open(Occupant::Process(pid), self.now);
                        current = Some(slot);
                    }

                    let remaining = self.registry.run_for(slot, 1);
                    self.now += 1;
                    trace!(now = self.now, slot, remaining, "tick");

                    if remaining == 0 {
                        self.timeline.close(self.now);
                        self.complete(slot);
                        current = None;
                    }
                }
            }
        }
    }

    /// Jump the clock straight to `until`, recording one idle segment
    fn idle(&mut self, until: Ticks) {
        debug_assert!(until > self.now, "Idle must move the clock forward");
        debug!(from = self.now, to = until, "cpu idle");

        self.timeline.push(Occupant::Idle, self.now, until);
        self.events.push(SimEvent::Idle {
            from: self.now,
            to: until,
        });
        self.now = until;
    }

    fn dispatch(&mut self, slot: Slot) {
        self.registry.dispatch(slot, self.now);
        let entry = self.registry.entry(slot);
        debug!(pid = entry.pid, now = self.now, remaining = entry.remaining, "dispatched");
        self.events.push(SimEvent::Dispatched {
            pid: entry.pid,
            at: self.now,
            remaining: entry.remaining,
        });
    }

    fn preempt(&mut self, slot: Slot) {
        self.registry.preempt(slot);
        let entry = self.registry.entry(slot);
        debug!(pid = entry.pid, now = self.now, remaining = entry.remaining, "preempted");
        self.events.push(SimEvent::Preempted {
            pid: entry.pid,
            at: self.now,
            remaining: entry.remaining,
        });
    }

    fn complete(&mut self, slot: Slot) {
        self.registry.complete(slot, self.now);
        let pid = self.registry.entry(slot).pid;
        debug!(pid, now = self.now, "completed");
        self.events.push(SimEvent::Completed { pid, at: self.now });
    }
}
