/*!
 * Workload Validation
 * Reject malformed simulation input before any run starts
 */

use super::types::ProcessSpec;
use crate::core::errors::SimError;
use crate::core::limits::MAX_PROCESSES;
use crate::core::types::{SimResult, Ticks};
use std::collections::HashSet;

/// Validate a full process set
///
/// Checks run in input order and the first violation is reported.
pub fn validate_specs(specs: &[ProcessSpec]) -> SimResult<()> {
    if specs.is_empty() {
        return Err(SimError::EmptyWorkload);
    }

    if specs.len() > MAX_PROCESSES {
        return Err(SimError::TooManyProcesses {
            count: specs.len(),
            limit: MAX_PROCESSES,
        });
    }

    let mut seen = HashSet::with_capacity(specs.len());
    for spec in specs {
        if !seen.insert(spec.id) {
            return Err(SimError::DuplicatePid(spec.id));
        }
        validate_spec(spec)?;
    }

    validate_horizon(specs)
}

/// Ensure the latest possible completion instant fits in `Ticks`
///
/// No schedule can end later than the last arrival plus every burst, so
/// the driver clock and per-process figures stay in range once this holds.
fn validate_horizon(specs: &[ProcessSpec]) -> SimResult<()> {
    let latest_arrival = specs.iter().map(|s| s.arrival as Ticks).max().unwrap_or(0);

    specs.iter().try_fold(latest_arrival, |horizon, spec| {
        horizon
            .checked_add(spec.burst as Ticks)
            .ok_or(SimError::HorizonOverflow { pid: spec.id })
    })?;

    Ok(())
}

/// Validate a single process specification
pub(super) fn validate_spec(spec: &ProcessSpec) -> SimResult<()> {
    if spec.arrival < 0 {
        return Err(SimError::NegativeArrival {
            pid: spec.id,
            arrival: spec.arrival,
        });
    }

    if spec.burst <= 0 {
        return Err(SimError::InvalidBurst {
            pid: spec.id,
            burst: spec.burst,
        });
    }

    Ok(())
}
