//! WASM bindings for Nodal Core.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmNodalAnalysis } from 'nodal_core';
//!
//! await init();
//!
//! const netlist = `
//!   IN OUT
//!   1k
//!   I 1m IN GND
//!   R 1k IN OUT
//!   C 100n OUT GND
//! `;
//!
//! const result = new WasmNodalAnalysis(netlist, true);
//! for (let i = 0; i < result.node_count; i++) {
//!   console.log(result.node_name(i), result.voltages()[i], result.phases()[i]);
//! }
//! ```

use wasm_bindgen::prelude::*;

use crate::error::NodalError;
use crate::netlist;
use crate::solver;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(e: NodalError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Solved node voltages of one netlist.
///
/// DC results have all phases at zero. AC results hold phasor magnitude and
/// phase in radians.
#[wasm_bindgen]
pub struct WasmNodalAnalysis {
    names: Vec<String>,
    magnitudes: Vec<f64>,
    phases: Vec<f64>,
}

#[wasm_bindgen]
impl WasmNodalAnalysis {
    /// Parse and solve a netlist.
    ///
    /// # Arguments
    /// * `netlist` - The netlist text
    /// * `ac` - `true` for AC analysis (a frequency line is expected after the nodes)
    ///
    /// # Returns
    /// The solved voltages, or the parse/solve error message.
    #[wasm_bindgen(constructor)]
    pub fn new(netlist: &str, ac: bool) -> Result<WasmNodalAnalysis, JsValue> {
        if ac {
            let system = netlist::parse_ac(netlist).map_err(to_js)?;
            let voltages = solver::solve_ac(&system).map_err(to_js)?;
            Ok(Self {
                names: voltages.iter().map(|(name, _)| name.clone()).collect(),
                magnitudes: voltages.iter().map(|(_, v)| v.magnitude()).collect(),
                phases: voltages.iter().map(|(_, v)| v.argument()).collect(),
            })
        } else {
            let system = netlist::parse_dc(netlist).map_err(to_js)?;
            let voltages = solver::solve_dc(&system).map_err(to_js)?;
            Ok(Self {
                phases: vec![0.0; voltages.len()],
                names: voltages.iter().map(|(name, _)| name.clone()).collect(),
                magnitudes: voltages.into_iter().map(|(_, v)| v).collect(),
            })
        }
    }

    /// Number of solved nodes.
    #[wasm_bindgen(getter)]
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Name of the node at `index`, in declaration order.
    #[wasm_bindgen]
    pub fn node_name(&self, index: usize) -> Option<String> {
        self.names.get(index).cloned()
    }

    /// Voltages (DC) or phasor magnitudes (AC), in declaration order.
    #[wasm_bindgen]
    pub fn voltages(&self) -> Vec<f64> {
        self.magnitudes.clone()
    }

    /// Phasor phases in radians, in declaration order.
    #[wasm_bindgen]
    pub fn phases(&self) -> Vec<f64> {
        self.phases.clone()
    }

    /// Get the voltage (or magnitude) at a named node.
    ///
    /// # Returns
    /// The voltage at the node, or `undefined` if the node doesn't exist.
    #[wasm_bindgen]
    pub fn node_voltage(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.magnitudes[i])
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
