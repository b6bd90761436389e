/*!
 * Selection Strategy
 * Interface between the simulation driver and a scheduling policy
 */

use crate::core::types::{Slot, Ticks};
use crate::process::Registry;

/// Decision returned by a strategy for the current instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Run `slot` for up to `slice` ticks
    Run { slot: Slot, slice: Ticks },
    /// Nothing eligible; the processor idles until `until`
    Idle { until: Ticks },
    /// Every process has completed
    Drained,
}

/// Policy decision logic consulted by the driver
///
/// Strategies only read the registry; all mutation is done by the driver.
pub trait SelectionStrategy {
    /// Human-readable policy name for logs
    fn name(&self) -> &'static str;

    /// Choose what occupies the processor at `now`
    ///
    /// `incumbent` is the process that held the processor during the
    /// previous tick, if it is still unfinished.
    fn select(&mut self, now: Ticks, registry: &Registry, incumbent: Option<Slot>) -> Choice;

    /// Notification that `slot` finished a slice ending at `now`
    ///
    /// The registry already reflects the slice (remaining time, completion).
    fn on_slice_end(&mut self, _now: Ticks, _registry: &Registry, _slot: Slot) {}
}

/// Idle until the earliest pending arrival, or report the pool drained
pub(crate) fn idle_or_drained(registry: &Registry) -> Choice {
    match registry.next_arrival() {
        Some(until) => Choice::Idle { until },
        None => Choice::Drained,
    }
}
