/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process identifier as supplied by the caller
pub type Pid = u32;

/// Discrete simulated time (one unit = one processor tick)
pub type Ticks = u64;

/// Scheduling priority (lower value is more urgent)
pub type Priority = i32;

/// Index of a process inside a run's working registry
pub type Slot = usize;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, super::errors::SimError>;
