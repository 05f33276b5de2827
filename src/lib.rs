//! `desy3-bao` library crate.
//!
//! The DES Y3 BAO likelihood: a tabulated `chi2(alpha)` profile evaluated at
//! `alpha = (D_M / D_M,fid) * (r_s,fid / r_s)` for theory quantities supplied
//! by a host sampler.
//!
//! The binary (`bao`) is a thin wrapper around this library so that:
//!
//! - the likelihood is testable without spawning processes
//! - hosts can embed `likelihood::AlphaLikelihood` directly

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod likelihood;
pub mod math;
pub mod plot;
pub mod report;
pub mod scan;
