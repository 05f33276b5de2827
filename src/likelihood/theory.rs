//! Theory-provider seam.
//!
//! The host owns the cosmology code; the likelihood only pulls the two
//! quantities it declared in its requirements.

use std::collections::HashMap;

use crate::io::curve::DistanceCurve;

/// Theory quantities supplied by the host for the current parameter point.
pub trait TheoryProvider {
    /// Scalar derived parameter (e.g. `rdrag`), if the provider computed it.
    fn get_param(&self, name: &str) -> Option<f64>;

    /// Angular-diameter distances (Mpc) at each of `z`, same order.
    fn get_angular_diameter_distance(&self, z: &[f64]) -> Vec<f64>;
}

/// Provider backed by a fixed distance curve and a set of scalar parameters.
#[derive(Debug, Clone)]
pub struct TabulatedTheory {
    curve: DistanceCurve,
    params: HashMap<String, f64>,
}

impl TabulatedTheory {
    pub fn new(curve: DistanceCurve) -> Self {
        Self {
            curve,
            params: HashMap::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: f64) -> Self {
        self.params.insert(name.into(), value);
        self
    }
}

impl TheoryProvider for TabulatedTheory {
    fn get_param(&self, name: &str) -> Option<f64> {
        self.params.get(name).copied()
    }

    fn get_angular_diameter_distance(&self, z: &[f64]) -> Vec<f64> {
        self.curve.resample(z)
    }
}
