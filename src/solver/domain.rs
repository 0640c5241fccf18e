//! Per-analysis element behaviour.
//!
//! DC analysis works on `f64`, AC analysis on [`Polar`] phasors. The two
//! differ in how a value token is decoded and how a component value turns
//! into an admittance; everything else (stamping, inversion, solving) is
//! shared through [`Scalar`].

use std::f64::consts::TAU;

use crate::error::{NodalError, Result};
use crate::netlist::{decode_phasor, decode_value, AnalysisMode, Symbol};
use crate::scalar::{cartesian_to_polar, polar_to_cartesian, Cartesian, One, Polar, Scalar};

/// A [`Scalar`] that can be read from a netlist and stamped.
pub trait AnalysisScalar: Scalar {
    /// The analysis this element type represents.
    const MODE: AnalysisMode;

    /// Decode a component value token.
    fn decode(token: &str) -> Result<Self>;

    /// Admittance of a passive component.
    ///
    /// `frequency` is `Some` in AC analysis. `line` is only used in errors.
    fn admittance(symbol: Symbol, value: Self, frequency: Option<f64>, line: usize) -> Result<Self>;
}

impl AnalysisScalar for f64 {
    const MODE: AnalysisMode = AnalysisMode::Dc;

    fn decode(token: &str) -> Result<Self> {
        decode_value(token)
    }

    fn admittance(symbol: Symbol, value: f64, _frequency: Option<f64>, line: usize) -> Result<f64> {
        match symbol {
            Symbol::Resistor => Ok(1.0 / value),
            Symbol::Inductor | Symbol::Capacitor => Err(NodalError::UnsupportedInDcMode {
                symbol: symbol.as_char(),
                line,
            }),
            Symbol::CurrentSource | Symbol::VoltageSource => Err(NodalError::NotImplemented {
                symbol: symbol.as_char(),
                line,
            }),
        }
    }
}

impl AnalysisScalar for Polar {
    const MODE: AnalysisMode = AnalysisMode::Ac;

    fn decode(token: &str) -> Result<Self> {
        decode_phasor(token)
    }

    fn admittance(symbol: Symbol, value: Polar, frequency: Option<f64>, line: usize) -> Result<Polar> {
        let omega = TAU * frequency.unwrap_or(0.0);

        match symbol {
            // Y = 1 / Z
            Symbol::Resistor => Ok(Polar::one() / value),
            // Y = j * 2*pi*f * C
            Symbol::Capacitor => {
                let y = Cartesian::I * omega * polar_to_cartesian(value);
                Ok(cartesian_to_polar(y))
            }
            // Y = 1 / (j * 2*pi*f * L)
            Symbol::Inductor => {
                let z = Cartesian::I * omega * polar_to_cartesian(value);
                Ok(cartesian_to_polar(1.0 / z))
            }
            Symbol::CurrentSource | Symbol::VoltageSource => Err(NodalError::NotImplemented {
                symbol: symbol.as_char(),
                line,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_dc_admittance() {
        assert_eq!(f64::admittance(Symbol::Resistor, 10.0, None, 1).unwrap(), 0.1);
        assert!(matches!(
            f64::admittance(Symbol::Capacitor, 1e-6, None, 7),
            Err(NodalError::UnsupportedInDcMode { symbol: 'C', line: 7 })
        ));
        assert!(matches!(
            f64::admittance(Symbol::Inductor, 1e-3, None, 2),
            Err(NodalError::UnsupportedInDcMode { symbol: 'L', .. })
        ));
    }

    #[test]
    fn test_capacitor_admittance_leads_by_90_degrees() {
        let f = 1000.0;
        let c = 1e-6;
        let y = Polar::admittance(Symbol::Capacitor, Polar::from(c), Some(f), 1).unwrap();
        assert_abs_diff_eq!(y.magnitude(), 2.0 * PI * f * c, epsilon = 1e-12);
        assert_abs_diff_eq!(y.argument(), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_inductor_admittance_lags_by_90_degrees() {
        let f = 50.0;
        let l = 0.1;
        let y = Polar::admittance(Symbol::Inductor, Polar::from(l), Some(f), 1).unwrap();
        assert_abs_diff_eq!(y.magnitude(), 1.0 / (2.0 * PI * f * l), epsilon = 1e-12);
        assert_abs_diff_eq!(y.argument(), -FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_ac_resistor_accepts_complex_impedance() {
        let z = Polar::from_degrees(20.0, 30.0);
        let y = Polar::admittance(Symbol::Resistor, z, Some(60.0), 1).unwrap();
        assert_abs_diff_eq!(y.magnitude(), 0.05, epsilon = 1e-15);
        assert_abs_diff_eq!(y.argument(), -PI / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_modes() {
        assert_eq!(<f64 as AnalysisScalar>::MODE, AnalysisMode::Dc);
        assert_eq!(<Polar as AnalysisScalar>::MODE, AnalysisMode::Ac);
    }
}
