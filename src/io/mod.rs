//! Input/output helpers.
//!
//! - chi-squared profile loading (`table`)
//! - theory distance curves from CSV (`curve`)
//! - scan exports (CSV/JSON) (`export`)

pub mod curve;
pub mod export;
pub mod table;

pub use curve::*;
pub use export::*;
pub use table::*;
