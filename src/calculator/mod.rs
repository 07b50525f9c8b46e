//! Calculator state and editing operations
//!
//! [`Calculator`] owns everything the keypad can change: the expression
//! being typed, the last result, the memory register, the angle mode and
//! the power switch. The UI holds one instance and calls into it for every
//! key press; each call returns what the display needs to show.
//!
//! # Result-shown convention
//!
//! After a successful [`Calculator::calculate`], the result stays on screen
//! until the next edit. An operator key (`+ - × ÷ ^ %`) then continues a new
//! expression from the result, while any other key starts from scratch.
//!
//! # Power
//!
//! Every operation except [`Calculator::toggle_power`] is a no-op while the
//! calculator is off. Switching off clears the expression and result.

mod history;
mod memory;

pub use history::{History, HistoryEntry};

use crate::interpreter::constants::{DEFAULT_HISTORY_SIZE, ERROR_PLACEHOLDER};
use crate::interpreter::{evaluate, format_result, CalcError};
use crate::parser::ast::Function;
use crate::parser::normalize::{balance_parentheses, normalize};
use crate::parser::{parse_expression, AngleMode};
use tracing::{debug, info, warn};

/// Keys that continue from a shown result instead of replacing it
const CONTINUATION_OPERATORS: [char; 8] = ['+', '-', '×', '÷', '*', '/', '^', '%'];

/// What [`Calculator::calculate`] reports back to the display.
///
/// On success `value` is the formatted result and `message` is empty. On
/// failure `value` is a placeholder (`"Error"`, or empty when there was
/// nothing to evaluate) and `message` explains what went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcOutcome {
    pub success: bool,
    pub value: String,
    pub message: String,
}

impl CalcOutcome {
    fn success(value: String) -> Self {
        CalcOutcome {
            success: true,
            value,
            message: String::new(),
        }
    }

    fn failure(placeholder: &str, error: &CalcError) -> Self {
        CalcOutcome {
            success: false,
            value: placeholder.to_string(),
            message: error.to_string(),
        }
    }

    pub fn into_tuple(self) -> (bool, String, String) {
        (self.success, self.value, self.message)
    }
}

/// The calculator's complete mutable state
#[derive(Debug, Clone)]
pub struct Calculator {
    current_expression: String,
    result: String,
    last_answer: String,
    memory_value: String,
    angle_mode: AngleMode,
    result_shown: bool,
    power_on: bool,
    history: History,
}

impl Calculator {
    /// A powered-off calculator in degree mode
    pub fn new() -> Self {
        Self::with_history_capacity(DEFAULT_HISTORY_SIZE)
    }

    pub fn with_history_capacity(capacity: usize) -> Self {
        Calculator {
            current_expression: String::new(),
            result: String::new(),
            last_answer: "0".to_string(),
            memory_value: "0".to_string(),
            angle_mode: AngleMode::Degrees,
            result_shown: false,
            power_on: false,
            history: History::new(capacity),
        }
    }

    /// Start in `mode` instead of degrees
    pub fn with_angle_mode(mut self, mode: AngleMode) -> Self {
        self.angle_mode = mode;
        self
    }

    // ===== Accessors =====

    pub fn expression(&self) -> &str {
        &self.current_expression
    }

    /// Most recent formatted result; empty when nothing has been calculated
    /// since the last reset or power-off
    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn last_answer(&self) -> &str {
        &self.last_answer
    }

    pub fn memory_value(&self) -> &str {
        &self.memory_value
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn is_result_shown(&self) -> bool {
        self.result_shown
    }

    pub fn is_powered(&self) -> bool {
        self.power_on
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    // ===== Editing =====

    /// Append a digit, operator, parenthesis or constant.
    pub fn insert_text(&mut self, text: &str) -> &str {
        if !self.power_on {
            return &self.current_expression;
        }

        if self.result_shown {
            let continues = text
                .chars()
                .next()
                .is_some_and(|c| CONTINUATION_OPERATORS.contains(&c));
            if continues {
                self.current_expression = self.result.clone();
            } else {
                self.current_expression.clear();
            }
            self.result_shown = false;
        }

        self.current_expression.push_str(text);
        &self.current_expression
    }

    /// Append a function's opening text such as `sin(`. A shown result is
    /// discarded first.
    pub fn insert_function(&mut self, function: Function) -> &str {
        if !self.power_on {
            return &self.current_expression;
        }

        if self.result_shown {
            self.current_expression.clear();
            self.result_shown = false;
        }

        self.current_expression.push_str(function.prefix());
        &self.current_expression
    }

    /// Empty the current expression
    pub fn clear(&mut self) -> &str {
        if self.power_on {
            self.current_expression.clear();
            self.result_shown = false;
        }
        &self.current_expression
    }

    /// Clear expression, result, last answer and history. Returns the new
    /// expression and the text for the result display.
    pub fn reset_all(&mut self) -> (&str, &'static str) {
        if self.power_on {
            self.current_expression.clear();
            self.result.clear();
            self.last_answer = "0".to_string();
            self.result_shown = false;
            self.history.clear();
        }
        (&self.current_expression, "0")
    }

    /// Remove the last function prefix as a unit, otherwise one character.
    /// Does nothing while a result is shown.
    pub fn backspace(&mut self) -> &str {
        if !self.power_on || self.result_shown {
            return &self.current_expression;
        }

        let trailing_function = Function::USER
            .into_iter()
            .find(|f| self.current_expression.ends_with(f.prefix()));

        match trailing_function {
            Some(function) => {
                let keep = self.current_expression.len() - function.prefix().len();
                self.current_expression.truncate(keep);
            }
            None => {
                self.current_expression.pop();
            }
        }

        &self.current_expression
    }

    // ===== Modes =====

    pub fn set_angle_mode(&mut self, mode: AngleMode) -> AngleMode {
        if self.power_on && mode != self.angle_mode {
            self.angle_mode = mode;
            info!(mode = %mode, "Angle mode set");
        }
        self.angle_mode
    }

    /// Set the angle mode from its display name (`DEG` or `RAD`).
    /// Unrecognised names leave the mode unchanged.
    pub fn set_angle_mode_named(&mut self, name: &str) -> AngleMode {
        match name.parse::<AngleMode>() {
            Ok(mode) => self.set_angle_mode(mode),
            Err(()) => {
                debug!(name, "Ignoring unknown angle mode");
                self.angle_mode
            }
        }
    }

    /// Flip the power switch and return the new state
    pub fn toggle_power(&mut self) -> bool {
        self.power_on = !self.power_on;
        info!(power_on = self.power_on, "Power toggled");

        if !self.power_on {
            self.current_expression.clear();
            self.result.clear();
            self.result_shown = false;
        }

        self.power_on
    }

    // ===== Evaluation =====

    /// Rewrite `raw` into canonical expression text using the current
    /// angle mode.
    pub fn prepare_expression(&self, raw: &str) -> String {
        normalize(raw, self.angle_mode)
    }

    /// Evaluate the current expression.
    ///
    /// On success the formatted value becomes the shown result and is added
    /// to the history. On failure the state is left untouched.
    pub fn calculate(&mut self) -> CalcOutcome {
        if !self.power_on {
            return CalcOutcome::failure("", &CalcError::NoExpression);
        }

        match evaluate_input(&self.current_expression, self.angle_mode) {
            Ok(value) => {
                let formatted = format_result(value);
                debug!(expression = %self.current_expression, result = %formatted, "Calculated");

                self.history
                    .push(self.current_expression.clone(), formatted.clone());
                self.result = formatted.clone();
                self.last_answer = formatted.clone();
                self.result_shown = true;

                CalcOutcome::success(formatted)
            }
            Err(CalcError::NoExpression) => CalcOutcome::failure("", &CalcError::NoExpression),
            Err(err) => {
                warn!(
                    kind = err.kind(),
                    expression = %self.current_expression,
                    "Calculation error: {}",
                    err
                );
                CalcOutcome::failure(ERROR_PLACEHOLDER, &err)
            }
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize, auto-close, parse and evaluate user input in one step.
pub fn evaluate_input(raw: &str, mode: AngleMode) -> Result<f64, CalcError> {
    if raw.trim().is_empty() {
        return Err(CalcError::NoExpression);
    }

    let prepared = balance_parentheses(&normalize(raw, mode));
    debug!(expression = %prepared, "Evaluating");

    let expr = parse_expression(&prepared)?;
    evaluate(&expr)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn powered() -> Calculator {
        let mut calc = Calculator::new();
        calc.toggle_power();
        calc
    }

    fn type_in(calc: &mut Calculator, text: &str) {
        calc.insert_text(text);
    }

    #[test]
    fn test_starts_powered_off() {
        let mut calc = Calculator::new();
        assert!(!calc.is_powered());
        assert_eq!(calc.insert_text("7"), "");
        assert_eq!(calc.angle_mode(), AngleMode::Degrees);
    }

    #[test]
    fn test_digit_after_result_starts_fresh() {
        let mut calc = powered();
        type_in(&mut calc, "2+3");
        assert!(calc.calculate().success);
        assert!(calc.is_result_shown());

        assert_eq!(calc.insert_text("7"), "7");
        assert!(!calc.is_result_shown());
    }

    #[test]
    fn test_operator_after_result_continues() {
        let mut calc = powered();
        type_in(&mut calc, "2+3");
        calc.calculate();

        assert_eq!(calc.insert_text("×"), "5×");
        type_in(&mut calc, "2");
        assert_eq!(calc.calculate().value, "10");
    }

    #[test]
    fn test_function_after_result_starts_fresh() {
        let mut calc = powered();
        type_in(&mut calc, "2+3");
        calc.calculate();
        assert_eq!(calc.insert_function(Function::Sqrt), "sqrt(");
    }

    #[test]
    fn test_backspace_removes_function_prefix() {
        let mut calc = powered();
        type_in(&mut calc, "2+");
        calc.insert_function(Function::Cos);
        assert_eq!(calc.backspace(), "2+");
        assert_eq!(calc.backspace(), "2");
        assert_eq!(calc.backspace(), "");
        assert_eq!(calc.backspace(), "");
    }

    #[test]
    fn test_backspace_removes_multibyte_glyph() {
        let mut calc = powered();
        type_in(&mut calc, "6×");
        assert_eq!(calc.backspace(), "6");
    }

    #[test]
    fn test_backspace_ignored_while_result_shown() {
        let mut calc = powered();
        type_in(&mut calc, "12");
        calc.calculate();
        assert_eq!(calc.backspace(), "12");
    }

    #[test]
    fn test_power_off_clears_expression_and_result() {
        let mut calc = powered();
        type_in(&mut calc, "4×4");
        calc.calculate();
        assert!(!calc.toggle_power());
        assert_eq!(calc.expression(), "");
        assert_eq!(calc.result(), "");
        assert!(!calc.is_result_shown());
    }

    #[test]
    fn test_failure_leaves_state_unchanged() {
        let mut calc = powered();
        type_in(&mut calc, "5÷0");
        let outcome = calc.calculate();
        assert!(!outcome.success);
        assert_eq!(outcome.value, "Error");
        assert_eq!(calc.expression(), "5÷0");
        assert!(!calc.is_result_shown());
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_history_records_successes() {
        let mut calc = powered();
        type_in(&mut calc, "1+1");
        calc.calculate();
        let latest = calc.history().latest().unwrap();
        assert_eq!(latest.expression, "1+1");
        assert_eq!(latest.result, "2");
    }

    #[test]
    fn test_angle_mode_by_name() {
        let mut calc = powered();
        assert_eq!(calc.set_angle_mode_named("RAD"), AngleMode::Radians);
        assert_eq!(calc.set_angle_mode_named("GRAD"), AngleMode::Radians);
        assert_eq!(calc.set_angle_mode_named("DEG"), AngleMode::Degrees);
    }

    #[test]
    fn test_evaluate_input() {
        assert_eq!(evaluate_input("2+3×4", AngleMode::Degrees), Ok(14.0));
        assert_eq!(evaluate_input("  ", AngleMode::Degrees), Err(CalcError::NoExpression));
    }

    #[test]
    fn test_spaced_trig_call_uses_degrees() {
        let spaced = evaluate_input("sin (30)", AngleMode::Degrees).unwrap();
        let compact = evaluate_input("sin(30)", AngleMode::Degrees).unwrap();
        assert_eq!(spaced, compact);
        assert!((spaced - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_deep_nesting_is_a_syntax_error() {
        let mut calc = powered();
        type_in(&mut calc, &format!("{}1", "-".repeat(5_000)));
        let outcome = calc.calculate();
        assert!(!outcome.success);
        assert_eq!(outcome.value, "Error");
        assert!(outcome.message.contains("nested too deeply"));

        let err = evaluate_input(&format!("{}1", "(".repeat(200_000)), AngleMode::Degrees);
        assert!(matches!(err, Err(CalcError::Syntax(_))));
    }
}
