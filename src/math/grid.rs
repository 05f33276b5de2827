//! Evenly spaced sample grids.

/// Generate `n` evenly spaced points between `start` and `stop` (inclusive).
///
/// The last point is pinned to `stop` so the grid never overshoots the range
/// through accumulated rounding.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as f64 - 1.0);
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            out[n - 1] = stop;
            out
        }
    }
}
