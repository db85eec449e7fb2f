//! WASM bindings for Kirchhoff Core.
//!
//! This module provides JavaScript-friendly bindings so a browser page can
//! act as the host for the solver.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCircuitSolver } from 'kirchhoff_core';
//!
//! await init();
//!
//! const system = `
//!   10-j5, j5,   12
//!   j5,    8-j3, 0
//! `;
//!
//! try {
//!   const solver = new WasmCircuitSolver(system, 3);
//!   output.textContent = solver.report_text();
//! } catch (err) {
//!   output.textContent = err;
//! }
//! ```

use wasm_bindgen::prelude::*;

use crate::format::Precision;
use crate::input;
use crate::report::{build_report, SolutionReport, SolveConfig};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// A solved mesh system, exposed to JavaScript.
#[wasm_bindgen]
pub struct WasmCircuitSolver {
    report: SolutionReport,
}

#[wasm_bindgen]
impl WasmCircuitSolver {
    /// Solve a system written as augmented rows.
    ///
    /// # Arguments
    /// * `system` - One equation per line: coefficients, then the source value
    /// * `precision` - Fractional digits in the output (0 to 6)
    ///
    /// # Returns
    /// The solved system, or an error string of the form `KIND: detail`.
    #[wasm_bindgen(constructor)]
    pub fn new(system: &str, precision: u8) -> Result<WasmCircuitSolver, JsValue> {
        let to_js = |e: crate::KirchhoffError| JsValue::from_str(&format!("{}: {}", e.kind(), e));

        let request = input::parse_system(system).map_err(to_js)?;
        let precision = Precision::new(precision).map_err(to_js)?;
        let config = SolveConfig::new().with_precision(precision);
        let report = build_report(&request, &config).map_err(to_js)?;

        Ok(WasmCircuitSolver { report })
    }

    /// The full report: solution block and KVL equations.
    #[wasm_bindgen]
    pub fn report_text(&self) -> String {
        self.report.to_string()
    }

    /// Only the `Solution:` block.
    #[wasm_bindgen]
    pub fn solution_text(&self) -> String {
        self.report.solution_text()
    }

    /// KVL equation lines in row order.
    #[wasm_bindgen]
    pub fn equations(&self) -> Vec<String> {
        self.report.equations.clone()
    }

    /// Number of solved mesh currents.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.report.variables.len()
    }

    /// Rectangular text of mesh current `index` (1-based).
    #[wasm_bindgen]
    pub fn current(&self, index: usize) -> Option<String> {
        index
            .checked_sub(1)
            .and_then(|i| self.report.variables.get(i))
            .map(|v| v.rectangular_text.clone())
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
