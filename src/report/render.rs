//! Plain-text rendering of a solution report.

use std::fmt;

use super::{SolutionReport, VariableResult};

/// Unit written after every mesh current.
pub const CURRENT_UNIT: &str = "A";

impl fmt::Display for VariableResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} {CURRENT_UNIT}  ({} ∠ {}° {CURRENT_UNIT})",
            self.index, self.rectangular_text, self.magnitude_text, self.angle_text
        )
    }
}

impl SolutionReport {
    /// The `Solution:` block, one line per mesh current.
    pub fn solution_text(&self) -> String {
        let mut text = String::from("Solution:");
        for variable in &self.variables {
            text.push('\n');
            text.push_str(&variable.to_string());
        }
        text
    }

    /// The `KVL Equations:` block, one line per row.
    pub fn equations_text(&self) -> String {
        let mut text = String::from("KVL Equations:");
        for equation in &self.equations {
            text.push('\n');
            text.push_str(equation);
        }
        text
    }
}

/// Both blocks separated by a blank line, as hosts display and copy it.
impl fmt::Display for SolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n{}", self.solution_text(), self.equations_text())
    }
}
