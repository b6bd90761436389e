/*!
 * CPU Scheduling Simulator Library
 * Deterministic single-processor simulation of classic scheduling policies
 */

pub mod config;
pub mod core;
pub mod monitoring;
pub mod process;
pub mod scheduler;
pub mod sim;
pub mod timeline;

// Re-exports
pub use crate::core::{Pid, Priority, SimError, SimResult, Ticks};
pub use config::{ConfigError, OutputFormat, SimConfig};
pub use monitoring::init_tracing;
pub use process::{ProcessResult, ProcessSpec, ProcessState};
pub use scheduler::{Policy, SimParams, TimeQuantum};
pub use sim::{compare, simulate, simulate_named, Report, SimEvent};
pub use timeline::{Metrics, Occupant, Segment};
