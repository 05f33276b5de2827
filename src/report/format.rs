//! Formatted terminal output for the `bao` commands.
//!
//! We keep formatting code in one place so:
//! - the likelihood code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{Evaluation, ScanPoint};
use crate::likelihood::AlphaLikelihood;

/// Format the loaded profile and evaluator configuration.
pub fn format_summary(like: &AlphaLikelihood) -> String {
    let config = like.config();
    let table = like.table();
    let (a_min, a_max) = table.alpha_range();

    let mut out = String::new();
    out.push_str("=== bao - DES Y3 BAO alpha likelihood ===\n");
    out.push_str(&format!("Profile: {}\n", config.data_path.display()));
    out.push_str(&format!(
        "Method: {} (column {}) | available: {}\n",
        table.method(),
        config.chi2_column,
        table.methods().join(", ")
    ));
    out.push_str(&format!(
        "Rows: n={} | alpha=[{a_min:.4}, {a_max:.4}]\n",
        table.len()
    ));
    out.push_str(&format!(
        "z_eff: {} | fiducial r_s={} Mpc, D_A={} Mpc, D_M={:.3} Mpc\n",
        config.redshift,
        config.fiducial.rs,
        config.fiducial.da,
        like.fiducial_dm()
    ));
    out.push_str(&format!(
        "Grid: {} points in z=[{}, {}] for `{}`\n",
        config.grid.points, config.grid.z_min, config.grid.z_max, config.distance_quantity
    ));
    out
}

/// Format one evaluation breakdown.
pub fn format_evaluation(eval: &Evaluation, rdrag: f64) -> String {
    let mut out = String::new();
    out.push_str(&format!("rdrag        = {rdrag:.4} Mpc\n"));
    out.push_str(&format!("D_M(z_eff)   = {:.4} Mpc\n", eval.predicted_dm));
    out.push_str(&format!("alpha        = {:.6}\n", eval.alpha));
    out.push_str(&format!("chi2(alpha)  = {:.6}\n", eval.chi2));
    out.push_str(&format!("logp         = {:.6}\n", eval.logp));
    out
}

/// Format scan rows as a table, marking the best finite point with `*`.
pub fn format_scan(points: &[ScanPoint], best: Option<&ScanPoint>) -> String {
    let mut out = String::new();
    out.push_str(format!("  {:>12} {:>12} {:>12} {:>12}\n", "rdrag", "alpha", "chi2", "logp").trim_end());
    out.push('\n');
    out.push_str(format!("  {:-<12} {:-<12} {:-<12} {:-<12}\n", "", "", "", "").trim_end());
    out.push('\n');

    for p in points {
        let chosen = if best.is_some_and(|b| b.rdrag == p.rdrag) { "*" } else { " " };
        out.push_str(&format!(
            "{chosen} {:>12.4} {:>12.6} {:>12.4} {:>12.4}\n",
            p.rdrag, p.alpha, p.chi2, p.logp
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LikelihoodConfig;
    use crate::io::table::CalibrationTable;

    #[test]
    fn summary_mentions_range_and_grid() {
        let table = CalibrationTable::from_columns(vec![0.8, 1.2], vec![3.0, 4.0]).unwrap();
        let like = AlphaLikelihood::with_table(LikelihoodConfig::default(), table);
        let txt = format_summary(&like);
        assert!(txt.contains("alpha=[0.8000, 1.2000]"), "{txt}");
        assert!(txt.contains("150 points"), "{txt}");
        assert!(txt.contains("angular_diameter_distance"), "{txt}");
    }

    #[test]
    fn scan_table_marks_best_row() {
        let points = [
            ScanPoint { rdrag: 140.0, alpha: 1.05, chi2: 2.0, logp: -1.0 },
            ScanPoint { rdrag: 150.0, alpha: 0.98, chi2: 0.5, logp: -0.25 },
        ];
        let txt = format_scan(&points, Some(&points[1]));
        let rows: Vec<&str> = txt.lines().skip(2).collect();
        assert!(rows[0].starts_with(' '));
        assert!(rows[1].starts_with('*'));
    }
}
