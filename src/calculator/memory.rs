//! Memory register (MC / MR / M+ / M-)
//!
//! The register is stored as text so that recalling it inserts a number the
//! expression parser accepts. Whole numbers are written without a decimal
//! point; anything else uses the shortest text that parses back to the same
//! `f64`, so repeated M+/M- never accumulates display rounding. It is
//! re-parsed on every update; if it ever fails to parse it is reset to `0`.

use super::Calculator;
use crate::interpreter::format_result;
use tracing::{error, info, warn};

impl Calculator {
    pub fn memory_clear(&mut self) {
        if !self.power_on {
            return;
        }
        self.memory_value = "0".to_string();
        info!("Memory cleared");
    }

    /// Append the memory value to the expression. A shown result is
    /// discarded first.
    pub fn memory_recall(&mut self) -> &str {
        if !self.power_on {
            return &self.current_expression;
        }

        if self.result_shown {
            self.current_expression.clear();
            self.result_shown = false;
        }

        self.current_expression.push_str(&self.memory_value);
        &self.current_expression
    }

    /// Add the last result to memory
    pub fn memory_add(&mut self) -> &str {
        self.update_memory(1.0)
    }

    /// Subtract the last result from memory
    pub fn memory_subtract(&mut self) -> &str {
        self.update_memory(-1.0)
    }

    fn update_memory(&mut self, sign: f64) -> &str {
        if !self.power_on || self.result.is_empty() {
            return &self.memory_value;
        }

        let memory = match self.memory_value.parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                error!(memory = %self.memory_value, "Memory value is not a number, resetting");
                self.memory_value = "0".to_string();
                0.0
            }
        };

        let Ok(current) = self.result.parse::<f64>() else {
            error!(result = %self.result, "Memory update failed: result is not a number");
            return &self.memory_value;
        };

        let updated = memory + sign * current;
        if !updated.is_finite() {
            warn!("Memory update overflowed, keeping previous value");
            return &self.memory_value;
        }

        self.memory_value = register_text(updated);
        info!(memory = %self.memory_value, "Memory updated");
        &self.memory_value
    }
}

/// Exact text for a finite register value
fn register_text(value: f64) -> String {
    if value == value.trunc() {
        return format_result(value);
    }
    // Display for f64 is the shortest decimal that round-trips
    value.to_string()
}
