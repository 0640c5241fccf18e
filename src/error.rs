//! Error types for the nodal analysis engine.
//!
//! This module provides a unified error type [`NodalError`] that covers
//! every failure the matrix engine, the netlist parser and the solver can
//! report. All of them are fatal to the current analysis run.

use thiserror::Error;

/// Result type alias using [`NodalError`].
pub type Result<T> = std::result::Result<T, NodalError>;

/// Unified error type for all nodal analysis operations.
#[derive(Error, Debug)]
pub enum NodalError {
    // ============ Matrix Engine Errors ============
    /// A matrix was requested with a zero-sized or ragged shape
    #[error("Invalid matrix dimension: {message}")]
    InvalidDimension { message: String },

    /// Element access outside the matrix
    #[error("Bad coordinate, ({row},{col}) is not within the bounds of a {rows}x{cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Operand shapes are incompatible for the requested operation
    #[error("{operation} requires compatible dimensions, got {left_rows}x{left_cols} and {right_rows}x{right_cols}")]
    DimensionMismatch {
        operation: &'static str,
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// Operation only defined for square matrices
    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Determinant is zero, so no inverse exists
    #[error("Singular matrix - determinant is zero (is every node connected to ground?)")]
    SingularMatrix,

    // ============ Netlist Parsing Errors ============
    /// Input contains no component description at all
    #[error("Netlist has no content")]
    EmptyNetlist,

    /// The ground name was declared as an ordinary node
    #[error("{name} is a reserved node name and cannot be in the node list (line {line})")]
    ReservedName { name: String, line: usize },

    /// AC netlist ended before the frequency line
    #[error("AC analysis requires a frequency line after the node list")]
    MissingFrequency,

    /// Frequency is zero or negative
    #[error("Frequency must be above 0, got '{value}' (line {line})")]
    InvalidFrequency { value: String, line: usize },

    /// Component record does not have exactly four tokens
    #[error("Bad component command, expected 'SYMBOL VALUE NODE1 NODE2' but found {tokens} tokens (line {line})")]
    MalformedRecord { tokens: usize, line: usize },

    /// Component symbol outside {I,V,R,L,C}
    #[error("Symbol: {symbol} is not a valid symbol {{I,V,R,L,C}} (line {line})")]
    UnknownSymbol { symbol: String, line: usize },

    /// Node name declared twice in the node list
    #[error("Node name: {name} is declared more than once (line {line})")]
    DuplicateNode { name: String, line: usize },

    /// Node referenced by a component was never declared
    #[error("Node name: {node} is not found in the initial node name declaration (line {line})")]
    UnknownNode { node: String, line: usize },

    /// Reactive component in a DC netlist
    #[error("Symbol: {symbol} is not allowed in DC analysis {{I,V,R}} (line {line})")]
    UnsupportedInDcMode { symbol: char, line: usize },

    /// Recognized component that has no stamping rule
    #[error("{symbol} is not implemented yet (line {line})")]
    NotImplemented { symbol: char, line: usize },

    /// Value with an unknown unit suffix or a non-numeric body
    #[error("Cannot decode '{value}' as a unit-suffixed number")]
    BadMultiplier { value: String },

    /// Phasor with more than one comma or an empty part
    #[error("Cannot decode '{value}' as a phasor, expected 'magnitude' or 'magnitude,phase'")]
    BadPhasor { value: String },

    // ============ I/O Errors ============
    /// Error reading netlist file
    #[error("Failed to read netlist file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl NodalError {
    /// Create an invalid dimension error
    pub fn invalid_dimension(message: impl Into<String>) -> Self {
        Self::InvalidDimension {
            message: message.into(),
        }
    }

    /// Create a dimension mismatch error from the two operand shapes
    pub fn dimension_mismatch(
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    ) -> Self {
        Self::DimensionMismatch {
            operation,
            left_rows: left.0,
            left_cols: left.1,
            right_rows: right.0,
            right_cols: right.1,
        }
    }

    /// Create a bad multiplier error
    pub fn bad_multiplier(value: impl Into<String>) -> Self {
        Self::BadMultiplier {
            value: value.into(),
        }
    }

    /// Create a bad phasor error
    pub fn bad_phasor(value: impl Into<String>) -> Self {
        Self::BadPhasor {
            value: value.into(),
        }
    }
}
