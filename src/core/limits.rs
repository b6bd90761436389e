/*!
 * Simulator Limits and Constants
 *
 * Centralized location for input bounds and defaults.
 */

use super::types::Ticks;

// =============================================================================
// WORKLOAD LIMITS
// =============================================================================

/// Maximum number of processes accepted in a single simulation request
/// Unit-time dispatch scans the whole pool every tick, so the pool is capped
pub const MAX_PROCESSES: usize = 10_000;

// =============================================================================
// ROUND-ROBIN
// =============================================================================

/// Quantum used when Round-Robin is requested without an explicit quantum
pub const DEFAULT_QUANTUM: Ticks = 2;

/// Smallest legal Round-Robin quantum
pub const MIN_QUANTUM: i64 = 1;
