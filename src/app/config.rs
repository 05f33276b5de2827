//! Configuration layering for the `bao` binary.
//!
//! Precedence, lowest to highest:
//! 1. `LikelihoodConfig::default()` (bundled DES Y3 profile, column 1)
//! 2. `.env` / environment: `DESY3BAO_DATA`, `DESY3BAO_COLUMN`
//! 3. command-line flags

use std::path::PathBuf;

use crate::cli::ProfileArgs;
use crate::domain::LikelihoodConfig;
use crate::error::AppError;

pub const ENV_DATA: &str = "DESY3BAO_DATA";
pub const ENV_COLUMN: &str = "DESY3BAO_COLUMN";

/// Values picked up from the environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvOverrides {
    pub data: Option<PathBuf>,
    pub column: Option<usize>,
}

impl EnvOverrides {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let data = std::env::var_os(ENV_DATA).map(PathBuf::from);
        let column = match std::env::var(ENV_COLUMN) {
            Ok(raw) => Some(raw.trim().parse::<usize>().map_err(|_| {
                AppError::new(2, format!("{ENV_COLUMN} must be a column index, got '{raw}'."))
            })?),
            Err(_) => None,
        };
        Ok(Self { data, column })
    }
}

/// Resolve the evaluator configuration from defaults, environment and flags.
pub fn resolve_config(env: &EnvOverrides, args: &ProfileArgs) -> LikelihoodConfig {
    let mut config = LikelihoodConfig::default();
    if let Some(path) = args.data.clone().or_else(|| env.data.clone()) {
        config.data_path = path;
    }
    if let Some(column) = args.column.or(env.column) {
        config.chi2_column = column;
    }
    config
}
