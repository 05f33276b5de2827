//! Error types.
//!
//! - `LikelihoodError` is what the library surface returns to a host.
//! - `AppError` is the CLI-facing error (message + process exit code).

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the likelihood to its host.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LikelihoodError {
    /// The calibration table could not be loaded. Fatal; no retry.
    #[error("Failed to load calibration table '{}': {reason}", .path.display())]
    DataLoad { path: PathBuf, reason: String },

    /// An in-memory calibration table violates its invariants.
    #[error("Invalid calibration table: {0}")]
    InvalidTable(String),

    /// The theory quantities handed to `logp` do not match the declared requirements.
    #[error("Invalid evaluation request: {0}")]
    InvalidRequest(String),
}

impl LikelihoodError {
    pub fn data_load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::DataLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<LikelihoodError> for AppError {
    fn from(err: LikelihoodError) -> Self {
        let exit_code = match err {
            LikelihoodError::DataLoad { .. } | LikelihoodError::InvalidTable(_) => 2,
            LikelihoodError::InvalidRequest(_) => 3,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn likelihood_errors_map_to_exit_codes() {
        let load: AppError = LikelihoodError::data_load("missing.csv", "not found").into();
        assert_eq!(load.exit_code(), 2);
        assert!(load.to_string().contains("missing.csv"));

        let bad: AppError = LikelihoodError::InvalidRequest("rdrag missing".into()).into();
        assert_eq!(bad.exit_code(), 3);
    }
}
