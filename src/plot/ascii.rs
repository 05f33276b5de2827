//! ASCII plotting of the chi-squared profile for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - tabulated profile: `-` line through the nodes
//! - predicted alpha (optional): `|` column with `*` at its chi2

use crate::io::table::CalibrationTable;

/// Render the profile, optionally marking a predicted alpha.
pub fn render_profile_plot(
    table: &CalibrationTable,
    marker: Option<f64>,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (a_min, a_max) = table.alpha_range();
    let curve: Vec<(f64, f64)> = table
        .alpha()
        .iter()
        .zip(table.chi2().iter())
        .map(|(&a, &c)| (a, c))
        .collect();

    let (y_min, y_max) = y_range(&curve).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];
    draw_curve(&mut grid, &curve, a_min, a_max, y_min, y_max);

    let marker = marker
        .filter(|a| a.is_finite())
        .map(|a| (a, table.chi2_at(a)));

    if let Some((alpha, chi2)) = marker {
        let x = map_x(alpha, a_min, a_max, width);
        for row in grid.iter_mut() {
            if row[x] == ' ' {
                row[x] = '|';
            }
        }
        let y = map_y(chi2, y_min, y_max, height);
        grid[y][x] = '*';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: alpha=[{a_min:.3}, {a_max:.3}] | chi2=[{y_min:.2}, {y_max:.2}]\n"
    ));
    if let Some((alpha, chi2)) = marker {
        out.push_str(&format!("Marker: alpha={alpha:.3} chi2={chi2:.3}\n"));
    }

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn y_range(curve: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for &(_, y) in curve {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(a: f64, a_min: f64, a_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((a - a_min) / (a_max - a_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], a_min: f64, a_max: f64, y_min: f64, y_max: f64) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(a, y) in curve {
        let x = map_x(a, a_min, a_max, width);
        let yy = map_y(y, y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, x, yy, '-');
        } else {
            grid[yy][x] = '-';
        }
        prev = Some((x, yy));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CalibrationTable {
        CalibrationTable::from_columns(vec![0.8, 1.0, 1.2], vec![10.0, 0.0, 10.0]).unwrap()
    }

    #[test]
    fn profile_golden_snapshot_small() {
        let txt = render_profile_plot(&table(), Some(1.1), 11, 5);
        let expected = concat!(
            "Plot: alpha=[0.800, 1.200] | chi2=[-0.50, 10.50]\n",
            "Marker: alpha=1.100 chi2=5.000\n",
            "-       | -\n",
            " -      |- \n",
            "  --   -*  \n",
            "    - - |  \n",
            "     -  |  \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn non_finite_marker_is_skipped() {
        let txt = render_profile_plot(&table(), Some(f64::INFINITY), 11, 5);
        assert!(!txt.contains("Marker"));
        assert!(!txt.contains('*'));
    }

    #[test]
    fn out_of_range_marker_sits_on_edge() {
        let txt = render_profile_plot(&table(), Some(0.5), 11, 5);
        let first_row = txt.lines().nth(2).unwrap();
        assert!(first_row.starts_with('*'), "{txt}");
    }
}
