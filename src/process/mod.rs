/*!
 * Process Module
 * Process specifications, run-state registry and input validation
 */

pub mod registry;
pub mod types;
pub mod validation;

// Re-export for convenience
pub use registry::{Entry, Registry};
pub use types::{ProcessResult, ProcessSpec, ProcessState};
pub use validation::validate_specs;
