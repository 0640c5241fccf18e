//! Node naming and index resolution.

use crate::error::{NodalError, Result};

/// One end of a two-terminal component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminal {
    /// The reference node, implicitly at 0 V and absent from the matrix.
    Ground,
    /// A solved node, by its row/column index.
    Node(usize),
}

impl Terminal {
    /// Check if this terminal is the ground node.
    pub fn is_ground(&self) -> bool {
        matches!(self, Terminal::Ground)
    }

    /// Matrix index, or `None` for ground.
    pub fn index(&self) -> Option<usize> {
        match self {
            Terminal::Ground => None,
            Terminal::Node(i) => Some(*i),
        }
    }
}

/// Ordered, unique node names, excluding ground.
///
/// The name at index `i` labels row/column `i` of the admittance matrix and
/// row `i` of the current vector.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeList {
    names: Vec<String>,
    ground: String,
}

impl NodeList {
    /// Build a node list from the declaration line.
    ///
    /// `line` is only used for error messages. Fails if a name equals the
    /// ground name or appears twice.
    pub fn new<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        ground: impl Into<String>,
        line: usize,
    ) -> Result<Self> {
        let ground = ground.into();
        let mut list: Vec<String> = Vec::new();

        for name in names {
            let name = name.into();
            if name == ground {
                return Err(NodalError::ReservedName { name, line });
            }
            if list.contains(&name) {
                return Err(NodalError::DuplicateNode { name, line });
            }
            list.push(name);
        }

        if list.is_empty() {
            return Err(NodalError::EmptyNetlist);
        }

        Ok(Self {
            names: list,
            ground,
        })
    }

    /// Number of non-ground nodes.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Node names in declaration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name of the ground node.
    pub fn ground(&self) -> &str {
        &self.ground
    }

    /// Name of the node at `index`.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Name of a terminal: the ground name or the declared node name.
    pub fn label(&self, terminal: Terminal) -> &str {
        match terminal {
            Terminal::Ground => &self.ground,
            Terminal::Node(i) => self.name(i).unwrap_or("?"),
        }
    }

    /// Resolve a node name to a terminal.
    ///
    /// Returns `None` when the name is neither ground nor declared.
    pub fn resolve(&self, name: &str) -> Option<Terminal> {
        if name == self.ground {
            return Some(Terminal::Ground);
        }
        self.names.iter().position(|n| n == name).map(Terminal::Node)
    }
}
