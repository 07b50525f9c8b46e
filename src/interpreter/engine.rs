//! Tree-walking evaluator
//!
//! Evaluates an [`Expr`] with `f64` arithmetic. Every intermediate result is
//! checked, so a failure is reported at the operation that caused it rather
//! than surfacing later as `NaN` or infinity.

use crate::interpreter::errors::CalcError;
use crate::parser::ast::{BinOp, Expr, Function, SourceLocation, UnOp};

/// Evaluate an expression tree to a finite number
pub fn evaluate(expr: &Expr) -> Result<f64, CalcError> {
    match expr {
        Expr::Number { value, location } => finite(*value, *location),

        Expr::UnaryOp {
            op,
            operand,
            location,
        } => {
            let value = evaluate(operand)?;
            let result = match op {
                UnOp::Neg => -value,
                UnOp::Plus => value,
            };
            finite(result, *location)
        }

        Expr::BinaryOp {
            op,
            left,
            right,
            location,
        } => {
            let lhs = evaluate(left)?;
            let rhs = evaluate(right)?;
            binary_op(*op, lhs, rhs, *location)
        }

        Expr::Call {
            function,
            arg,
            location,
        } => {
            let value = evaluate(arg)?;
            call_function(*function, value, *location)
        }
    }
}

fn binary_op(op: BinOp, lhs: f64, rhs: f64, location: SourceLocation) -> Result<f64, CalcError> {
    let result = match op {
        BinOp::Add => lhs + rhs,
        BinOp::Sub => lhs - rhs,
        BinOp::Mul => lhs * rhs,
        BinOp::Div => {
            if rhs == 0.0 {
                return Err(CalcError::DivisionByZero { location });
            }
            lhs / rhs
        }
        BinOp::Pow => {
            if lhs == 0.0 && rhs < 0.0 {
                return Err(CalcError::DivisionByZero { location });
            }
            if lhs < 0.0 && rhs.fract() != 0.0 {
                return Err(CalcError::Domain {
                    message: format!("{} cannot be raised to the fractional power {}", lhs, rhs),
                    location,
                });
            }
            lhs.powf(rhs)
        }
    };
    finite(result, location)
}

fn call_function(function: Function, value: f64, location: SourceLocation) -> Result<f64, CalcError> {
    let result = match function {
        Function::Sin => value.sin(),
        Function::Cos => value.cos(),
        Function::Tan => value.tan(),
        Function::Sqrt => {
            if value < 0.0 {
                return Err(CalcError::Domain {
                    message: format!("square root of negative number {}", value),
                    location,
                });
            }
            value.sqrt()
        }
        Function::Log10 => {
            if value <= 0.0 {
                return Err(CalcError::Domain {
                    message: format!("logarithm of non-positive number {}", value),
                    location,
                });
            }
            value.log10()
        }
    };
    finite(result, location)
}

fn finite(value: f64, location: SourceLocation) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::Overflow { location })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_expression;

    fn eval(source: &str) -> Result<f64, CalcError> {
        evaluate(&parse_expression(source).unwrap())
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(eval("2+3*4").unwrap(), 14.0);
        assert_eq!(eval("(2+3)*4").unwrap(), 20.0);
        assert_eq!(eval("10-4-3").unwrap(), 3.0);
        assert_eq!(eval("2^3^2").unwrap(), 512.0);
        assert_eq!(eval("-2^2").unwrap(), -4.0);
        assert_eq!(eval("2^-1").unwrap(), 0.5);
        assert_eq!(eval("--3").unwrap(), 3.0);
    }

    #[test]
    fn test_functions() {
        assert_eq!(eval("sqrt(16)").unwrap(), 4.0);
        assert!((eval("log(1000)").unwrap() - 3.0).abs() < 1e-12);
        assert!((eval("sin(30*0.017453292519943295)").unwrap() - 0.5).abs() < 1e-12);
        assert!((eval("cos(0)").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_division_by_zero() {
        assert!(matches!(eval("5/0"), Err(CalcError::DivisionByZero { .. })));
        assert!(matches!(eval("0^-1"), Err(CalcError::DivisionByZero { .. })));
    }

    #[test]
    fn test_domain_errors() {
        assert!(matches!(eval("sqrt(-1)"), Err(CalcError::Domain { .. })));
        assert!(matches!(eval("log(0)"), Err(CalcError::Domain { .. })));
        assert!(matches!(eval("(-8)^0.5"), Err(CalcError::Domain { .. })));
        // Integer exponents of negative bases are fine
        assert_eq!(eval("(-2)^3").unwrap(), -8.0);
    }

    #[test]
    fn test_overflow() {
        assert!(matches!(eval("10^400"), Err(CalcError::Overflow { .. })));
        assert!(matches!(eval("1e308*10"), Err(CalcError::Overflow { .. })));
    }
}
