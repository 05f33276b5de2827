//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - owned by the evaluator as immutable configuration
//! - exported to JSON/CSV from the CLI
//! - reused by tests with alternate constants

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::LikelihoodError;
use crate::math::linspace;

/// File name of the DES Y3 chi-squared profile (`D_M / r_s`, Planck 2018 fiducial).
pub const DEFAULT_DATA_FILE: &str = "chi2profile_dvdesy3_cosmoplanck18_covcosmolike.csv";

/// Effective redshift of the DES Y3 BAO measurement.
pub const DEFAULT_REDSHIFT: f64 = 0.835;

/// Fiducial cosmology used when the alpha profile was computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiducialConstants {
    /// Sound horizon at the drag epoch (Mpc).
    pub rs: f64,
    /// Angular-diameter distance at the effective redshift (Mpc).
    pub da: f64,
}

impl Default for FiducialConstants {
    fn default() -> Self {
        Self { rs: 147.6, da: 1616.9 }
    }
}

impl FiducialConstants {
    /// Fiducial `D_M = D_A * (1 + z)`.
    pub fn dm(&self, redshift: f64) -> f64 {
        self.da * (1.0 + redshift)
    }
}

/// Redshift abscissa at which the host is asked for distances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub z_min: f64,
    pub z_max: f64,
    pub points: usize,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            z_min: 0.0,
            z_max: 2.0,
            points: 150,
        }
    }
}

impl GridSpec {
    pub fn redshifts(&self) -> Vec<f64> {
        linspace(self.z_min, self.z_max, self.points)
    }
}

/// Everything the evaluator needs besides the calibration table itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikelihoodConfig {
    /// Location of the chi-squared profile CSV.
    pub data_path: PathBuf,
    /// Column holding the chi-squared method to use (column 0 is alpha).
    pub chi2_column: usize,
    pub redshift: f64,
    pub fiducial: FiducialConstants,
    pub grid: GridSpec,
    /// Provider quantity requested on the grid.
    ///
    /// Kept as a setting: the profile was computed for `D_M`, but the provider
    /// contract asks for `angular_diameter_distance`.
    pub distance_quantity: String,
    /// Provider parameter holding the sound horizon.
    pub rdrag_param: String,
}

impl Default for LikelihoodConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            chi2_column: 1,
            redshift: DEFAULT_REDSHIFT,
            fiducial: FiducialConstants::default(),
            grid: GridSpec::default(),
            distance_quantity: "angular_diameter_distance".to_string(),
            rdrag_param: "rdrag".to_string(),
        }
    }
}

/// The profile ships next to the crate, under `data/`.
pub fn default_data_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join(DEFAULT_DATA_FILE)
}

/// Static declaration of the theory quantities the likelihood needs.
///
/// Serializes to `{"rdrag": null, "angular_diameter_distance": {"z": [...]}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Requirements {
    pub scalar_params: Vec<String>,
    pub distance_quantity: String,
    pub redshifts: Vec<f64>,
}

impl Serialize for Requirements {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct AtRedshifts<'a> {
            z: &'a [f64],
        }

        let mut map = serializer.serialize_map(Some(self.scalar_params.len() + 1))?;
        for name in &self.scalar_params {
            map.serialize_entry(name, &Option::<()>::None)?;
        }
        map.serialize_entry(&self.distance_quantity, &AtRedshifts { z: &self.redshifts })?;
        map.end()
    }
}

/// Theory quantities for a single evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationRequest {
    /// Distance at each point of the grid, same order.
    pub distances: Vec<f64>,
    /// Sound horizon at the drag epoch.
    pub rdrag: f64,
}

impl EvaluationRequest {
    pub fn new(distances: Vec<f64>, rdrag: f64) -> Self {
        Self { distances, rdrag }
    }

    /// Check the request shape against the grid.
    ///
    /// Values are not checked for finiteness; non-finite inputs must surface as
    /// non-finite results.
    pub fn validate(&self, grid_len: usize) -> Result<(), LikelihoodError> {
        if self.distances.len() != grid_len {
            return Err(LikelihoodError::InvalidRequest(format!(
                "expected {grid_len} distances on the redshift grid, got {}",
                self.distances.len()
            )));
        }
        Ok(())
    }
}

/// Intermediate values of one likelihood evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub predicted_dm: f64,
    pub alpha: f64,
    pub chi2: f64,
    pub logp: f64,
}

/// One row of an `rdrag` scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanPoint {
    pub rdrag: f64,
    pub alpha: f64,
    pub chi2: f64,
    pub logp: f64,
}

/// JSON export of a scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub redshift: f64,
    pub predicted_dm: f64,
    pub fiducial: FiducialConstants,
    pub chi2_method: String,
    pub points: Vec<ScanPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_config_matches_des_y3() {
        let config = LikelihoodConfig::default();
        assert_eq!(config.redshift, 0.835);
        assert_eq!(config.chi2_column, 1);
        assert_eq!(config.grid.redshifts().len(), 150);
        assert!(config.data_path.ends_with(DEFAULT_DATA_FILE));
        assert_relative_eq!(config.fiducial.dm(config.redshift), 1616.9 * 1.835, epsilon = 1e-9);
    }

    #[test]
    fn requirements_serialize_as_provider_map() {
        let req = Requirements {
            scalar_params: vec!["rdrag".into()],
            distance_quantity: "angular_diameter_distance".into(),
            redshifts: vec![0.0, 1.0, 2.0],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json["rdrag"].is_null());
        assert_eq!(json["angular_diameter_distance"]["z"], serde_json::json!([0.0, 1.0, 2.0]));
    }

    #[test]
    fn request_validation_checks_length_only() {
        let ok = EvaluationRequest::new(vec![f64::NAN; 3], 0.0);
        assert!(ok.validate(3).is_ok());

        let bad = EvaluationRequest::new(vec![1.0; 2], 147.0);
        assert!(matches!(bad.validate(3), Err(LikelihoodError::InvalidRequest(_))));
    }
}
