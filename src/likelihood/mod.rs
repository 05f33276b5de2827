//! The DES Y3 BAO alpha likelihood.
//!
//! Responsibilities:
//!
//! - load the chi-squared profile once (`AlphaLikelihood::initialize`)
//! - declare the theory quantities it needs (`get_requirements`)
//! - map theory distances + sound horizon to a log-likelihood (`logp`)

pub mod evaluator;
pub mod theory;

pub use evaluator::*;
pub use theory::*;
