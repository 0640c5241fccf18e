//! Netlist parser.

use log::{debug, info};

use super::lines::{content_lines, SourceLine};
use super::record::{AnalysisMode, ComponentRecord, NetlistConfig, Symbol};
use super::units::decode_value;
use crate::circuit::{NodalSystem, NodeList, Terminal};
use crate::error::{NodalError, Result};
use crate::solver::{stamp_component, AnalysisScalar};

/// Where the parser is within the netlist.
enum State<T> {
    /// Waiting for the node declaration line
    Nodes,
    /// AC only: nodes are known, waiting for the frequency line
    Frequency(NodeList),
    /// Stamping component records
    Components(NodalSystem<T>),
}

/// Line-by-line netlist parser.
///
/// The element type decides the analysis: `f64` reads a DC netlist,
/// [`Polar`](crate::scalar::Polar) reads an AC netlist with a frequency line.
pub struct Parser<'c, T> {
    config: &'c NetlistConfig,
    state: State<T>,
}

impl<'c, T: AnalysisScalar> Parser<'c, T> {
    /// Create a parser with the given configuration.
    pub fn new(config: &'c NetlistConfig) -> Self {
        Self {
            config,
            state: State::Nodes,
        }
    }

    /// Feed one non-blank line.
    pub fn feed(self, line: SourceLine<'_>) -> Result<Self> {
        let tokens = line.tokens();
        let state = match self.state {
            State::Nodes => {
                let nodes = NodeList::new(tokens, self.config.ground_name.as_str(), line.number)?;
                debug!("line {}: {} nodes declared", line.number, nodes.len());
                match T::MODE {
                    AnalysisMode::Dc => State::Components(NodalSystem::new(nodes, None)?),
                    AnalysisMode::Ac => State::Frequency(nodes),
                }
            }
            State::Frequency(nodes) => {
                let frequency = parse_frequency(&tokens, line.number)?;
                debug!("line {}: frequency {} Hz", line.number, frequency);
                State::Components(NodalSystem::new(nodes, Some(frequency))?)
            }
            State::Components(system) => {
                let record = Self::record(&tokens, &system.nodes, line.number)?;
                State::Components(stamp_component(system, &record)?)
            }
        };

        Ok(Self {
            config: self.config,
            state,
        })
    }

    /// Finish parsing and return the assembled system.
    pub fn finish(self) -> Result<NodalSystem<T>> {
        match self.state {
            State::Nodes => Err(NodalError::EmptyNetlist),
            State::Frequency(_) => Err(NodalError::MissingFrequency),
            State::Components(system) => Ok(system),
        }
    }

    fn record(tokens: &[&str], nodes: &NodeList, line: usize) -> Result<ComponentRecord> {
        let [symbol, value, first, second] = tokens else {
            return Err(NodalError::MalformedRecord {
                tokens: tokens.len(),
                line,
            });
        };

        let symbol = Symbol::from_token(symbol).ok_or_else(|| NodalError::UnknownSymbol {
            symbol: symbol.to_string(),
            line,
        })?;

        Ok(ComponentRecord {
            symbol,
            value: value.to_string(),
            terminals: [resolve(nodes, first, line)?, resolve(nodes, second, line)?],
            line,
        })
    }
}

fn resolve(nodes: &NodeList, name: &str, line: usize) -> Result<Terminal> {
    nodes.resolve(name).ok_or_else(|| NodalError::UnknownNode {
        node: name.to_string(),
        line,
    })
}

fn parse_frequency(tokens: &[&str], line: usize) -> Result<f64> {
    let invalid = || NodalError::InvalidFrequency {
        value: tokens.join(" "),
        line,
    };

    match tokens {
        [token] => {
            let frequency = decode_value(token).map_err(|_| invalid())?;
            if frequency > 0.0 && frequency.is_finite() {
                Ok(frequency)
            } else {
                Err(invalid())
            }
        }
        _ => Err(invalid()),
    }
}

/// Parse a netlist into a nodal system.
///
/// Errors carry the 1-indexed physical line they were found on.
pub fn parse<T: AnalysisScalar>(input: &str, config: &NetlistConfig) -> Result<NodalSystem<T>> {
    let system = content_lines(input)
        .try_fold(Parser::<T>::new(config), Parser::<T>::feed)?
        .finish()?;

    info!(
        "parsed {} netlist: {} nodes, ground {}",
        T::MODE,
        system.node_count(),
        system.nodes.ground()
    );
    Ok(system)
}
