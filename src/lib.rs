//! # Nodal Core
//!
//! DC and single-frequency AC nodal analysis of linear electrical networks.
//!
//! This library provides:
//! - Real, Cartesian complex and polar phasor scalars
//! - A generic dense matrix with cofactor determinant, adjoint and inverse
//! - A line-oriented netlist reader with SI unit suffixes and phasor values
//! - Assembly of the nodal admittance system and its solution
//!
//! ## Architecture
//!
//! - [`scalar`] - The [`Scalar`](scalar::Scalar) element trait, [`Cartesian`] and [`Polar`]
//! - [`matrix`] - Generic [`Matrix`] arithmetic
//! - [`netlist`] - Netlist parsing into a nodal system
//! - [`circuit`] - Node naming and the assembled [`NodalSystem`](circuit::NodalSystem)
//! - [`solver`] - Component stamping and voltage solving
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! nodal divider.net
//! nodal --mode ac filter.net
//! ```
//!
//! ### Library
//!
//! ```
//! use nodal_core::{netlist, solver};
//!
//! let system = netlist::parse_dc("A\nR 10 A GND\nI 1 A GND").unwrap();
//! let voltages = solver::solve_dc(&system).unwrap();
//! assert_eq!(voltages[0].0, "A");
//! assert!((voltages[0].1 - 10.0).abs() < 1e-12);
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmNodalAnalysis } from 'nodal_core';
//!
//! const result = new WasmNodalAnalysis(netlist, false);
//! result.voltages();
//! ```

pub mod circuit;
pub mod error;
pub mod matrix;
pub mod netlist;
pub mod scalar;
pub mod solver;

// Re-export main types for convenience
pub use error::{NodalError, Result};
pub use matrix::Matrix;
pub use scalar::{Cartesian, Polar};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmNodalAnalysis;

/// Default name of the reference node
pub const GROUND_NODE: &str = "GND";

/// Lines starting with this prefix (after leading whitespace) are ignored
pub const COMMENT_PREFIX: &str = "//";
