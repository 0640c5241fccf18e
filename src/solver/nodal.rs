//! Nodal solver: `V = Y^-1 * I`.

use log::{info, warn};

use crate::circuit::{isolated_nodes, AcSystem, DcSystem, NodalSystem};
use crate::error::Result;
use crate::scalar::{Polar, Scalar};

/// Solve an assembled system for its node voltages.
///
/// Returns `(node name, voltage)` pairs in declaration order. Fails with
/// [`SingularMatrix`](crate::error::NodalError::SingularMatrix) when the
/// network has no unique solution, e.g. a node without a path to ground.
pub fn solve<T: Scalar>(system: &NodalSystem<T>) -> Result<Vec<(String, T)>> {
    let floating = isolated_nodes(system);
    if !floating.is_empty() {
        warn!("nodes with no connected admittance: {}", floating.join(", "));
    }

    let inverse = system.matrix.inverse()?;
    let voltages = inverse.matmul(&system.currents)?;
    info!("solved {} node voltages", voltages.rows());

    Ok(system
        .nodes
        .names()
        .iter()
        .cloned()
        .zip(voltages.as_slice().iter().copied())
        .collect())
}

/// Solve a DC system for node voltages.
pub fn solve_dc(system: &DcSystem) -> Result<Vec<(String, f64)>> {
    solve(system)
}

/// Solve an AC system for node voltage phasors.
pub fn solve_ac(system: &AcSystem) -> Result<Vec<(String, Polar)>> {
    solve(system)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NodalError;
    use crate::netlist::{parse_ac, parse_dc};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_ohms_law() {
        let system = parse_dc("A\nR 10 A GND\nI 1 A GND").unwrap();
        let result = solve_dc(&system).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].0, "A");
        assert_relative_eq!(result[0].1, 10.0, max_relative = 1e-12);
    }

    #[test]
    fn test_two_node_assembly() {
        let system = parse_dc("A B\nR 10 A B\nI 1 A B").unwrap();

        assert_eq!(system.matrix.as_slice(), &[0.1, -0.1, -0.1, 0.1]);
        assert_eq!(system.currents.as_slice(), &[1.0, -1.0]);

        // Without a ground reference the system is singular.
        assert!(matches!(solve_dc(&system), Err(NodalError::SingularMatrix)));
    }

    #[test]
    fn test_voltage_divider_ladder() {
        // 1 mA into A; A-B 1k, B-GND 1k, A-GND 2k.
        // Equivalent resistance 2k || 2k = 1k -> V(A) = 1 V, V(B) = 0.5 V.
        let netlist = "\
// ladder
A B
R 1k A B
R 1k B GND
R 2k GND A
I 1m A GND
";
        let result = solve_dc(&parse_dc(netlist).unwrap()).unwrap();
        assert_eq!(result[0].0, "A");
        assert_eq!(result[1].0, "B");
        assert_relative_eq!(result[0].1, 1.0, max_relative = 1e-9);
        assert_relative_eq!(result[1].1, 0.5, max_relative = 1e-9);
    }

    #[test]
    fn test_three_node_network() {
        // Bridge-like network solved by hand with G-matrix
        // [[0.3, -0.1, -0.2], [-0.1, 0.35, -0.25], [-0.2, -0.25, 0.95]] and I = [1, 0, -0.5].
        let netlist = "\
N1 N2 N3
R 10 N1 N2
R 5 N1 N3
R 4 N2 N3
R 2 N3 GND
I 1 N1 GND
I 0.5 GND N3
";
        let system = parse_dc(netlist).unwrap();
        let result = solve_dc(&system).unwrap();

        // Check KCL: G * V == I
        let v: Vec<f64> = result.iter().map(|(_, v)| *v).collect();
        for i in 0..3 {
            let mut sum = 0.0;
            for (j, vj) in v.iter().enumerate() {
                sum += system.matrix.get(i, j).unwrap() * vj;
            }
            assert_abs_diff_eq!(sum, system.currents.get(i, 0).unwrap(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_floating_node_is_singular() {
        let system = parse_dc("A B\nR 10 A GND\nI 1 A GND").unwrap();
        assert!(matches!(solve_dc(&system), Err(NodalError::SingularMatrix)));
    }

    #[test]
    fn test_ac_rc_low_pass_at_corner() {
        // Norton source 1 A into A through R = 1 ohm to ground, C to ground.
        // At f = 1/(2*pi*R*C): Y = 1 + j, V = 1 / (1 + j) = (1/sqrt(2)) at -45 degrees.
        let c = 1e-3;
        let f = 1.0 / (2.0 * PI * c);
        let netlist = format!("A\n{}\nR 1 A GND\nC {} A GND\nI 1 A GND", f, c);

        let system = parse_ac(&netlist).unwrap();
        let result = solve_ac(&system).unwrap();

        let v = result[0].1;
        assert_abs_diff_eq!(v.magnitude(), 1.0 / 2.0_f64.sqrt(), epsilon = 1e-9);
        assert_abs_diff_eq!(v.argument(), -FRAC_PI_4, epsilon = 1e-9);
        assert_abs_diff_eq!(v.real(), 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(v.imaginary(), -0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_ac_phasor_source() {
        // 2 A at 90 degrees into a 5 ohm resistor.
        let system = parse_ac("A\n1k\nR 5 A GND\nI 2,90 A GND").unwrap();
        let v = solve_ac(&system).unwrap()[0].1;
        assert_abs_diff_eq!(v.real(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(v.imaginary(), 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(v.argument(), FRAC_PI_2, epsilon = 1e-9);
    }

    #[test]
    fn test_ac_inductor_and_capacitor_resonance_pair() {
        // R, L and C in parallel to ground at resonance: the reactive parts cancel.
        let l: f64 = 1e-3;
        let c: f64 = 1e-6;
        let f = 1.0 / (2.0 * PI * (l * c).sqrt());
        let netlist = format!("A\n{}\nR 100 A GND\nL {} A GND\nC {} A GND\nI 1 A GND", f, l, c);

        let v = solve_ac(&parse_ac(&netlist).unwrap()).unwrap()[0].1;
        assert_abs_diff_eq!(v.real(), 100.0, epsilon = 1e-6);
        assert_abs_diff_eq!(v.imaginary(), 0.0, epsilon = 1e-6);
    }
}
