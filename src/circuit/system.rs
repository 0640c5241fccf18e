//! The assembled nodal analysis system.

use super::types::NodeList;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::scalar::{Polar, Scalar};

/// Nodal analysis bundle: node names, `N x N` admittance matrix and
/// `N x 1` net current vector, where `N` is the number of non-ground nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct NodalSystem<T> {
    /// Node names; index `i` labels matrix row/column `i`
    pub nodes: NodeList,
    /// Conductance (DC) or admittance (AC) matrix
    pub matrix: Matrix<T>,
    /// Net current injected into each node
    pub currents: Matrix<T>,
    /// Excitation frequency in Hz (AC only)
    pub frequency: Option<f64>,
}

/// Real-valued system for DC analysis.
pub type DcSystem = NodalSystem<f64>;

/// Phasor-valued system for AC analysis.
pub type AcSystem = NodalSystem<Polar>;

impl<T: Scalar> NodalSystem<T> {
    /// Create an all-zero system for the given nodes.
    pub fn new(nodes: NodeList, frequency: Option<f64>) -> Result<Self> {
        let n = nodes.len();
        Ok(Self {
            matrix: Matrix::new(n, n)?,
            currents: Matrix::new(n, 1)?,
            nodes,
            frequency,
        })
    }

    /// Number of solved (non-ground) nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
