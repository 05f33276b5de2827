//! Numerical helpers: grids and piecewise-linear interpolation.

pub mod grid;
pub mod interp;

pub use grid::*;
pub use interp::*;
