//! Calculation error types
//!
//! This module defines [`CalcError`], covering everything that can stop an
//! expression from producing a number. None of these are fatal: the
//! calculator reports the message and the user keeps editing.

use crate::parser::ast::SourceLocation;
use crate::parser::ParseError;
use thiserror::Error;

/// Errors that can occur while preparing or evaluating an expression
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Calculate was pressed with nothing entered (or while powered off)
    #[error("No expression to calculate")]
    NoExpression,

    /// Malformed input: stray operators, empty operands, unknown names
    #[error(transparent)]
    Syntax(#[from] ParseError),

    /// Division by zero, including zero raised to a negative power
    #[error("Division by zero at column {}", location.column)]
    DivisionByZero { location: SourceLocation },

    /// Argument outside a function's domain, e.g. `sqrt(-1)`
    #[error("Math domain error: {message}")]
    Domain {
        message: String,
        location: SourceLocation,
    },

    /// Result too large to represent
    #[error("Numerical result out of range")]
    Overflow { location: SourceLocation },
}

impl CalcError {
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            CalcError::NoExpression => None,
            CalcError::Syntax(err) => Some(err.location),
            CalcError::DivisionByZero { location }
            | CalcError::Domain { location, .. }
            | CalcError::Overflow { location } => Some(*location),
        }
    }

    /// Short category name used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            CalcError::NoExpression => "empty",
            CalcError::Syntax(_) => "syntax",
            CalcError::DivisionByZero { .. } => "division_by_zero",
            CalcError::Domain { .. } => "domain",
            CalcError::Overflow { .. } => "overflow",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let loc = SourceLocation::new(3);
        assert_eq!(
            CalcError::DivisionByZero { location: loc }.to_string(),
            "Division by zero at column 3"
        );
        assert_eq!(CalcError::NoExpression.to_string(), "No expression to calculate");

        let syntax = CalcError::from(ParseError {
            message: "Unexpected ')'".to_string(),
            location: loc,
        });
        assert_eq!(syntax.to_string(), "Syntax error at column 3: Unexpected ')'");
        assert_eq!(syntax.location(), Some(loc));
    }
}
