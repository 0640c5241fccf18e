//! Circuit representation shared by the parser and the solver.
//!
//! This module provides the node-name mapping ([`NodeList`], [`Terminal`])
//! and the assembled [`NodalSystem`] that the parser builds and the solver
//! consumes read-only.

mod system;
mod types;
mod validate;

pub use system::{AcSystem, DcSystem, NodalSystem};
pub use types::*;
pub use validate::isolated_nodes;
