//! Likelihood scans over the sound horizon.
//!
//! Holding the theory distance fixed and sweeping `rdrag` traces the profile
//! through `alpha ∝ 1 / rdrag`. Points are evaluated in parallel against one
//! shared evaluator; output order follows the input grid.

use rayon::prelude::*;

use crate::domain::{EvaluationRequest, ScanPoint};
use crate::error::AppError;
use crate::likelihood::AlphaLikelihood;
use crate::math::linspace;

/// Evaluate the likelihood at `steps` evenly spaced `rdrag` values in
/// `[rdrag_min, rdrag_max]`, with a flat distance curve equal to `predicted_dm`.
pub fn scan_rdrag(
    like: &AlphaLikelihood,
    predicted_dm: f64,
    rdrag_min: f64,
    rdrag_max: f64,
    steps: usize,
) -> Result<Vec<ScanPoint>, AppError> {
    if !(rdrag_min.is_finite() && rdrag_max.is_finite() && rdrag_min > 0.0 && rdrag_max > rdrag_min) {
        return Err(AppError::new(
            2,
            format!("Invalid rdrag range: min={rdrag_min}, max={rdrag_max} (must be finite, >0, and max>min)."),
        ));
    }
    if steps < 2 {
        return Err(AppError::new(2, "Scan steps must be >= 2."));
    }

    let distances = vec![predicted_dm; like.redshifts().len()];
    let grid = linspace(rdrag_min, rdrag_max, steps);

    let points: Vec<ScanPoint> = grid
        .par_iter()
        .map(|&rdrag| {
            let request = EvaluationRequest::new(distances.clone(), rdrag);
            let eval = like.evaluate(&request);
            ScanPoint {
                rdrag,
                alpha: eval.alpha,
                chi2: eval.chi2,
                logp: eval.logp,
            }
        })
        .collect();

    Ok(points)
}

/// Scan point with the highest log-likelihood, ignoring non-finite values.
pub fn best_point(points: &[ScanPoint]) -> Option<ScanPoint> {
    points
        .iter()
        .filter(|p| p.logp.is_finite())
        .max_by(|a, b| a.logp.partial_cmp(&b.logp).unwrap_or(std::cmp::Ordering::Equal))
        .copied()
}
