/*!
 * Scheduling Policies
 * One selection strategy per supported policy
 */

mod non_preemptive;
mod preemptive;
mod round_robin;

pub use non_preemptive::{FirstComeFirstServed, Focus, PriorityNonPreemptive, ShortestJobFirst};
pub use preemptive::{FocusPreemptive, PriorityPreemptive, ShortestRemainingTimeFirst};
pub use round_robin::RoundRobin;
