//! Nodal analysis solver.
//!
//! This module turns component records into the admittance system and
//! solves it for node voltages.
//!
//! ## Nodal Analysis
//!
//! With ground as the reference node, Kirchhoff's current law at every other
//! node gives the linear system:
//! ```text
//! Y v = i
//! ```
//!
//! where:
//! - Y is the N x N admittance matrix (conductances in DC)
//! - v is the vector of node voltages relative to ground
//! - i is the net source current injected into each node
//!
//! A two-terminal admittance `g` between nodes `a` and `b` adds `g` on both
//! diagonals and `-g` on both off-diagonals. Terminals on ground are left out.
//!
//! The system is solved as `v = adj(Y) / det(Y) * i`.

mod domain;
mod nodal;
mod stamp;

pub use domain::AnalysisScalar;
pub use nodal::{solve, solve_ac, solve_dc};
pub use stamp::{stamp_admittance, stamp_component, stamp_current};
