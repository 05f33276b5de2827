//! One-dimensional piecewise-linear interpolation.
//!
//! Queries outside `[xp[0], xp[last]]` are clamped to the boundary values
//! (flat extrapolation). A `NaN` query yields `NaN`.

/// Interpolate `fp` (sampled at strictly increasing `xp`) at `x`.
///
/// Returns `NaN` when the inputs are empty or have mismatched lengths.
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    if x.is_nan() || xp.is_empty() || xp.len() != fp.len() {
        return f64::NAN;
    }

    let last = xp.len() - 1;
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[last] {
        return fp[last];
    }

    // xp[0] < x < xp[last], so 1 <= i <= last.
    let i = xp.partition_point(|&v| v <= x);
    let (x0, x1) = (xp[i - 1], xp[i]);
    let (y0, y1) = (fp[i - 1], fp[i]);
    y0 + (x - x0) * (y1 - y0) / (x1 - x0)
}
