//! Alpha-profile evaluator.
//!
//! One evaluation is:
//!
//! ```text
//! D_M(z_eff) = interp(z_eff, grid, distances)
//! alpha      = (D_M / D_M,fid) * (r_s,fid / r_s)
//! chi2       = interp(alpha, profile)        (flat outside the profile)
//! logp       = -chi2 / 2
//! ```
//!
//! Non-finite inputs are not trapped: `rdrag == 0` gives a non-finite alpha
//! and a `NaN` log-likelihood, which the host is expected to reject.

use tracing::{debug, info, warn};

use crate::domain::{Evaluation, EvaluationRequest, LikelihoodConfig, Requirements};
use crate::error::LikelihoodError;
use crate::io::table::CalibrationTable;
use crate::likelihood::theory::TheoryProvider;
use crate::math::interp;

/// Host-facing likelihood contract.
pub trait Likelihood {
    /// Theory quantities the host must provide before calling `logp`.
    fn get_requirements(&self) -> Requirements;

    /// Log-likelihood at the provider's current parameter point.
    fn logp(&self, provider: &dyn TheoryProvider) -> Result<f64, LikelihoodError>;
}

/// DES Y3 BAO likelihood over a tabulated `chi2(alpha)` profile.
///
/// Immutable once built, so a single instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct AlphaLikelihood {
    config: LikelihoodConfig,
    table: CalibrationTable,
    redshifts: Vec<f64>,
    fiducial_dm: f64,
}

impl AlphaLikelihood {
    /// Load the profile named by `config` and build the evaluator.
    pub fn initialize(config: LikelihoodConfig) -> Result<Self, LikelihoodError> {
        let table = CalibrationTable::load(&config.data_path, config.chi2_column)?;
        Ok(Self::with_table(config, table))
    }

    /// Build the evaluator around an already loaded profile.
    pub fn with_table(config: LikelihoodConfig, table: CalibrationTable) -> Self {
        let (alpha_min, alpha_max) = table.alpha_range();
        info!(alpha_min, "limiting alpha = D_M / r_s values in interpolation");
        info!(alpha_max, "limiting alpha = D_M / r_s values in interpolation");

        let redshifts = config.grid.redshifts();
        let fiducial_dm = config.fiducial.dm(config.redshift);
        Self {
            config,
            table,
            redshifts,
            fiducial_dm,
        }
    }

    pub fn config(&self) -> &LikelihoodConfig {
        &self.config
    }

    pub fn table(&self) -> &CalibrationTable {
        &self.table
    }

    /// Redshift grid on which distances are requested.
    pub fn redshifts(&self) -> &[f64] {
        &self.redshifts
    }

    pub fn fiducial_dm(&self) -> f64 {
        self.fiducial_dm
    }

    /// `alpha = (dm / dm_fid) * (rs_fid / rdrag)`.
    pub fn predict_alpha(&self, predicted_dm: f64, rdrag: f64) -> f64 {
        (predicted_dm / self.fiducial_dm) * (self.config.fiducial.rs / rdrag)
    }

    /// Full breakdown of one evaluation.
    pub fn evaluate(&self, request: &EvaluationRequest) -> Evaluation {
        let predicted_dm = interp(self.config.redshift, &self.redshifts, &request.distances);
        let alpha = self.predict_alpha(predicted_dm, request.rdrag);
        let chi2 = self.table.chi2_at(alpha);
        let logp = -chi2 / 2.0;

        if logp.is_finite() {
            debug!(predicted_dm, alpha, chi2, logp, rdrag = request.rdrag, "evaluated");
        } else {
            warn!(predicted_dm, alpha, rdrag = request.rdrag, "non-finite log-likelihood");
        }

        Evaluation {
            predicted_dm,
            alpha,
            chi2,
            logp,
        }
    }

    /// Log-likelihood for an explicit request.
    pub fn logp_request(&self, request: &EvaluationRequest) -> f64 {
        self.evaluate(request).logp
    }

    /// Pull the declared quantities from `provider` and validate their shape.
    pub fn request_from(&self, provider: &dyn TheoryProvider) -> Result<EvaluationRequest, LikelihoodError> {
        let rdrag = provider.get_param(&self.config.rdrag_param).ok_or_else(|| {
            LikelihoodError::InvalidRequest(format!(
                "provider did not supply `{}`",
                self.config.rdrag_param
            ))
        })?;
        let distances = provider.get_angular_diameter_distance(&self.redshifts);

        let request = EvaluationRequest::new(distances, rdrag);
        request.validate(self.redshifts.len())?;
        Ok(request)
    }
}

impl Likelihood for AlphaLikelihood {
    fn get_requirements(&self) -> Requirements {
        Requirements {
            scalar_params: vec![self.config.rdrag_param.clone()],
            distance_quantity: self.config.distance_quantity.clone(),
            redshifts: self.redshifts.clone(),
        }
    }

    fn logp(&self, provider: &dyn TheoryProvider) -> Result<f64, LikelihoodError> {
        let request = self.request_from(provider)?;
        Ok(self.logp_request(&request))
    }
}
