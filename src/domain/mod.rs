//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - configuration (`LikelihoodConfig`, `FiducialConstants`, `GridSpec`)
//! - the requirements declaration handed to the host (`Requirements`)
//! - per-call request/result types (`EvaluationRequest`, `Evaluation`)
//! - scan export records (`ScanPoint`, `ScanFile`)

pub mod types;

pub use types::*;
