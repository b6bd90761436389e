/*!
 * Timeline Module
 * Processor occupancy recording and run metrics
 */

mod metrics;
mod segment;

pub use metrics::Metrics;
pub use segment::{is_contiguous, Occupant, Segment, Timeline};
