//! Read tabulated distance curves.
//!
//! A distance curve CSV has a header row and two named columns, `z` and
//! `d_a` (aliases `da`, `distance`), in Mpc. It stands in for a theory code
//! when evaluating the likelihood from the command line.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::error::AppError;
use crate::math::interp;

#[derive(Debug, Deserialize)]
struct CurveRow {
    z: f64,
    #[serde(alias = "da", alias = "distance")]
    d_a: f64,
}

/// Distances sampled at strictly increasing redshifts.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceCurve {
    z: Vec<f64>,
    distance: Vec<f64>,
}

impl DistanceCurve {
    pub fn new(z: Vec<f64>, distance: Vec<f64>) -> Result<Self, AppError> {
        if z.len() != distance.len() {
            return Err(AppError::new(2, "Distance curve: z and d_a lengths differ."));
        }
        if z.len() < 2 {
            return Err(AppError::new(2, "Distance curve needs at least 2 points."));
        }
        if z.windows(2).any(|w| !(w[1] > w[0])) {
            return Err(AppError::new(2, "Distance curve: z must be strictly increasing."));
        }
        Ok(Self { z, distance })
    }

    /// Flat curve: the same distance at every redshift.
    pub fn constant(distance: f64, z_min: f64, z_max: f64) -> Self {
        Self {
            z: vec![z_min, z_max],
            distance: vec![distance, distance],
        }
    }

    /// Distances at `redshifts`, linear between samples and clamped outside.
    pub fn resample(&self, redshifts: &[f64]) -> Vec<f64> {
        redshifts
            .iter()
            .map(|&z| interp(z, &self.z, &self.distance))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.z.len()
    }

    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }
}

/// Read a distance curve CSV.
pub fn read_distance_curve(path: &Path) -> Result<DistanceCurve, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open distance curve '{}': {e}", path.display()))
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut z = Vec::new();
    let mut distance = Vec::new();
    for (idx, result) in reader.deserialize::<CurveRow>().enumerate() {
        let row = result.map_err(|e| {
            AppError::new(2, format!("Invalid distance curve row at line {}: {e}", idx + 2))
        })?;
        z.push(row.z);
        distance.push(row.d_a);
    }

    DistanceCurve::new(z, distance)
}
