//! Evenly spaced sampling.
//!
//! Boundary curves are drawn from a fixed number of samples spread evenly
//! across their domain, endpoints included. The final sample is pinned to
//! `stop` exactly so that endpoint checks do not depend on rounding.

use crate::error::AppError;

/// Generate `steps` evenly spaced points between `start` and `stop` (inclusive).
pub fn linspace(start: f64, stop: f64, steps: usize) -> Result<Vec<f64>, AppError> {
    if !(start.is_finite() && stop.is_finite()) {
        return Err(AppError::usage(format!(
            "Invalid sample range: start={start}, stop={stop} (must be finite)."
        )));
    }
    if steps < 2 {
        return Err(AppError::usage(format!("Sample count must be >= 2 (got {steps}).")));
    }

    let step = (stop - start) / (steps as f64 - 1.0);
    let mut out = Vec::with_capacity(steps);
    for i in 0..steps - 1 {
        out.push(start + step * i as f64);
    }
    out.push(stop);
    Ok(out)
}
