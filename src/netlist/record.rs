//! Component records and parser configuration.

use std::fmt;

use crate::circuit::Terminal;
use crate::GROUND_NODE;

/// Which analysis a netlist is read for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum AnalysisMode {
    /// Real conductances and currents
    Dc,
    /// Phasor admittances and currents at a single frequency
    Ac,
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisMode::Dc => write!(f, "DC"),
            AnalysisMode::Ac => write!(f, "AC"),
        }
    }
}

/// Component kinds recognized in a netlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `I` - current source
    CurrentSource,
    /// `V` - voltage source
    VoltageSource,
    /// `R` - resistor
    Resistor,
    /// `L` - inductor
    Inductor,
    /// `C` - capacitor
    Capacitor,
}

impl Symbol {
    /// Parse a symbol token. Only the exact single letters are accepted.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "I" => Some(Self::CurrentSource),
            "V" => Some(Self::VoltageSource),
            "R" => Some(Self::Resistor),
            "L" => Some(Self::Inductor),
            "C" => Some(Self::Capacitor),
            _ => None,
        }
    }

    /// The netlist letter for this symbol.
    pub fn as_char(&self) -> char {
        match self {
            Self::CurrentSource => 'I',
            Self::VoltageSource => 'V',
            Self::Resistor => 'R',
            Self::Inductor => 'L',
            Self::Capacitor => 'C',
        }
    }

    /// Inductors and capacitors have frequency-dependent admittance.
    pub fn is_reactive(&self) -> bool {
        matches!(self, Self::Inductor | Self::Capacitor)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One `SYMBOL VALUE NODE1 NODE2` line with its nodes resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRecord {
    /// Component kind
    pub symbol: Symbol,
    /// Raw value token, decoded according to the analysis mode
    pub value: String,
    /// Resolved `[NODE1, NODE2]`
    pub terminals: [Terminal; 2],
    /// Source line number (1-indexed) for error reporting
    pub line: usize,
}

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct NetlistConfig {
    /// Name of the reference node
    pub ground_name: String,
}

impl Default for NetlistConfig {
    fn default() -> Self {
        Self {
            ground_name: GROUND_NODE.to_string(),
        }
    }
}

impl NetlistConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reserved ground node name.
    pub fn with_ground_name(mut self, name: impl Into<String>) -> Self {
        self.ground_name = name.into();
        self
    }
}
