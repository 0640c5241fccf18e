//! Component stamping into the nodal system.
//!
//! Stamping functions take a matrix by value and return it with one
//! component's contribution applied, so each stamp can be tested without
//! any parsing.

use log::{debug, warn};

use super::AnalysisScalar;
use crate::circuit::{NodalSystem, Terminal};
use crate::error::{NodalError, Result};
use crate::matrix::Matrix;
use crate::netlist::{AnalysisMode, ComponentRecord, Symbol};
use crate::scalar::Scalar;

/// Stamp an admittance `g` between terminals `a` and `b`.
///
/// For each non-ground terminal `x` with opposite terminal `y`:
///   M[x,x] += g
///   M[x,y] -= g   (only if `y` is not ground)
pub fn stamp_admittance<T: Scalar>(
    mut matrix: Matrix<T>,
    g: T,
    a: Terminal,
    b: Terminal,
) -> Result<Matrix<T>> {
    for (this, other) in [(a, b), (b, a)] {
        if let Some(i) = this.index() {
            let diagonal = matrix.get(i, i)? + g;
            matrix.set(i, i, diagonal)?;
            if let Some(j) = other.index() {
                let mutual = matrix.get(i, j)? - g;
                matrix.set(i, j, mutual)?;
            }
        }
    }
    Ok(matrix)
}

/// Stamp a current source: `+current` into `from`, `-current` into `to`.
pub fn stamp_current<T: Scalar>(
    mut currents: Matrix<T>,
    current: T,
    from: Terminal,
    to: Terminal,
) -> Result<Matrix<T>> {
    if let Some(i) = from.index() {
        let injected = currents.get(i, 0)? + current;
        currents.set(i, 0, injected)?;
    }
    if let Some(j) = to.index() {
        let drawn = currents.get(j, 0)? - current;
        currents.set(j, 0, drawn)?;
    }
    Ok(currents)
}

/// Apply one component record to the system.
pub fn stamp_component<T: AnalysisScalar>(
    system: NodalSystem<T>,
    record: &ComponentRecord,
) -> Result<NodalSystem<T>> {
    let [mut a, mut b] = record.terminals;

    if record.symbol == Symbol::VoltageSource {
        return Err(NodalError::NotImplemented {
            symbol: record.symbol.as_char(),
            line: record.line,
        });
    }
    // Checked before decoding, so the value text does not matter.
    if T::MODE == AnalysisMode::Dc && record.symbol.is_reactive() {
        return Err(NodalError::UnsupportedInDcMode {
            symbol: record.symbol.as_char(),
            line: record.line,
        });
    }

    let value = T::decode(&record.value)?;

    if a == b {
        warn!(
            "{} on line {} has both terminals on {} and contributes nothing",
            record.symbol,
            record.line,
            system.nodes.label(a)
        );
    }

    match record.symbol {
        Symbol::CurrentSource => {
            debug!(
                "line {}: I {} from {} to {}",
                record.line,
                value,
                system.nodes.label(a),
                system.nodes.label(b)
            );
            let currents = stamp_current(system.currents, value, a, b)?;
            Ok(NodalSystem { currents, ..system })
        }
        symbol => {
            // Direction agnostic, keep the real node first.
            if symbol == Symbol::Resistor && a.is_ground() {
                std::mem::swap(&mut a, &mut b);
            }
            let g = T::admittance(symbol, value, system.frequency, record.line)?;
            debug!(
                "line {}: {} admittance {} between {} and {}",
                record.line,
                symbol,
                g,
                system.nodes.label(a),
                system.nodes.label(b)
            );
            let matrix = stamp_admittance(system.matrix, g, a, b)?;
            Ok(NodalSystem { matrix, ..system })
        }
    }
}
