//! Pre-solve checks on an assembled system.

use super::NodalSystem;
use crate::scalar::Scalar;

/// Names of nodes with no admittance to anything.
///
/// Such a node has an all-zero matrix row, which makes the system singular.
pub fn isolated_nodes<T: Scalar>(system: &NodalSystem<T>) -> Vec<&str> {
    let n = system.node_count();
    let data = system.matrix.as_slice();

    (0..n)
        .filter(|&i| data[i * n..(i + 1) * n].iter().all(|v| v.is_zero()))
        .filter_map(|i| system.nodes.name(i))
        .collect()
}
