//! Netlist reader for nodal analysis.
//!
//! The format is line-oriented. Every non-blank, non-comment line is one of,
//! in order: the node declaration, the frequency (AC only), or a component.
//!
//! # Grammar Overview
//!
//! ```text
//! netlist   = nodes [frequency] { component }
//! nodes     = name { name }
//! frequency = value                       (AC only, Hz, > 0)
//! component = symbol value node node
//! comment   = "//" { any_char }
//!
//! symbol    = "I" | "V" | "R" | "L" | "C"
//! node      = declared name | ground name (default "GND")
//! value     = number [unit_suffix]        (DC)
//!           | value ["," phase_degrees]   (AC)
//! unit_suffix = 'p' | 'n' | 'u' | 'm' | 'k' | 'M' | 'G'
//! ```
//!
//! A current source `I x A B` pushes `x` into `A` and draws it from `B`.
//! In AC analysis the `R` value is the (possibly complex) impedance.
//! Voltage sources are recognized but rejected.
//!
//! # Example
//!
//! ```text
//! // RC low-pass driven by a Norton source
//! IN OUT
//! 1k
//! I 1m,0 IN GND
//! R 1k IN OUT
//! C 100n OUT GND
//! ```

mod lines;
mod parser;
mod record;
mod units;

pub use lines::{content_lines, preprocess, SourceLine};
pub use parser::{parse, Parser};
pub use record::{AnalysisMode, ComponentRecord, NetlistConfig, Symbol};
pub use units::{decode_phasor, decode_value};

use crate::circuit::{AcSystem, DcSystem};
use crate::error::Result;

/// Parse a DC netlist with the default configuration.
pub fn parse_dc(input: &str) -> Result<DcSystem> {
    parse(input, &NetlistConfig::default())
}

/// Parse an AC netlist with the default configuration.
pub fn parse_ac(input: &str) -> Result<AcSystem> {
    parse(input, &NetlistConfig::default())
}

/// Parse a netlist file.
#[cfg(feature = "cli")]
pub fn parse_file<T: crate::solver::AnalysisScalar>(
    path: &std::path::Path,
    config: &NetlistConfig,
) -> Result<crate::circuit::NodalSystem<T>> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::NodalError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content, config)
}
