//! Export likelihood scans to CSV or JSON.
//!
//! The CSV is meant to be easy to consume in spreadsheets or plotting scripts;
//! the JSON carries run metadata alongside the points.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::Utc;

use crate::domain::{ScanFile, ScanPoint};
use crate::error::AppError;
use crate::likelihood::AlphaLikelihood;

/// Write scan points to a CSV file.
pub fn write_scan_csv(path: &Path, points: &[ScanPoint]) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(4, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    writeln!(file, "rdrag,alpha,chi2,logp")
        .map_err(|e| AppError::new(4, format!("Failed to write export CSV header: {e}")))?;

    for p in points {
        writeln!(file, "{:.6},{:.10},{:.6},{:.6}", p.rdrag, p.alpha, p.chi2, p.logp)
            .map_err(|e| AppError::new(4, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

/// Write scan points plus run metadata to a JSON file.
pub fn write_scan_json(
    path: &Path,
    like: &AlphaLikelihood,
    predicted_dm: f64,
    points: &[ScanPoint],
) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(4, format!("Failed to create export JSON '{}': {e}", path.display())))?;

    let scan = ScanFile {
        tool: "bao".to_string(),
        generated_at: Utc::now(),
        redshift: like.config().redshift,
        predicted_dm,
        fiducial: like.config().fiducial,
        chi2_method: like.table().method().to_string(),
        points: points.to_vec(),
    };

    serde_json::to_writer_pretty(file, &scan)
        .map_err(|e| AppError::new(4, format!("Failed to write export JSON: {e}")))?;

    Ok(())
}

/// Pick the writer from the file extension (`.json`, anything else is CSV).
pub fn write_scan(
    path: &Path,
    like: &AlphaLikelihood,
    predicted_dm: f64,
    points: &[ScanPoint],
) -> Result<(), AppError> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        write_scan_json(path, like, predicted_dm, points)
    } else {
        write_scan_csv(path, points)
    }
}
