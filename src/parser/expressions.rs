//! Expression grammar
//!
//! Recursive descent with one method per precedence level, lowest first:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := unary (('*' | '/') unary)*
//! unary      := ('-' | '+') unary | power
//! power      := primary ('^' unary)?
//! primary    := number | function '(' expression ')' | '(' expression ')'
//! ```
//!
//! `power` takes a `unary` on its right, which makes `^` right-associative
//! and lets the exponent carry a sign (`2^-1`), while a leading minus still
//! applies to the whole power (`-2^2` is `-4`).

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_additive()
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let entry_depth = self.depth;
        let mut left = self.parse_multiplicative()?;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::Plus(loc)) {
                BinOp::Add
            } else if self.match_token(&Token::Minus(loc)) {
                BinOp::Sub
            } else {
                break;
            };

            // Each chained operator deepens the left-leaning tree
            self.descend()?;
            let right = Box::new(self.parse_multiplicative()?);
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        self.depth = entry_depth;
        Ok(left)
    }

    /// Parse multiplicative (* /)
    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let entry_depth = self.depth;
        let mut left = self.parse_unary()?;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::Star(loc)) {
                BinOp::Mul
            } else if self.match_token(&Token::Slash(loc)) {
                BinOp::Div
            } else {
                break;
            };

            self.descend()?;
            let right = Box::new(self.parse_unary()?);
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        self.depth = entry_depth;
        Ok(left)
    }

    /// Parse prefix sign
    ///
    /// Every nested sign, exponent and parenthesised group passes through
    /// here, so this is where nesting depth is counted.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        self.descend()?;

        let loc = self.current_location();
        let op = if self.match_token(&Token::Minus(loc)) {
            UnOp::Neg
        } else if self.match_token(&Token::Plus(loc)) {
            UnOp::Plus
        } else {
            let expr = self.parse_power()?;
            self.depth -= 1;
            return Ok(expr);
        };

        let operand = Box::new(self.parse_unary()?);
        self.depth -= 1;
        Ok(Expr::UnaryOp {
            op,
            operand,
            location: loc,
        })
    }

    /// Parse exponentiation (right-associative)
    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_primary()?;

        let loc = self.current_location();
        if self.match_token(&Token::Caret(loc)) {
            let exponent = Box::new(self.parse_unary()?);
            return Ok(Expr::BinaryOp {
                op: BinOp::Pow,
                left: Box::new(base),
                right: exponent,
                location: loc,
            });
        }

        Ok(base)
    }

    /// Parse numbers, function calls and parenthesised groups
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let loc = self.current_location();

        match self.peek().clone() {
            Token::Number(value, _) => {
                self.advance();
                Ok(Expr::Number {
                    value,
                    location: loc,
                })
            }
            Token::Ident(name, _) => {
                self.advance();
                let function = Function::from_name(&name).ok_or_else(|| ParseError {
                    message: format!("Unknown function '{}'", name),
                    location: loc,
                })?;
                self.expect_lparen(&format!("after '{}'", name))?;
                let arg = Box::new(self.parse_expression()?);
                self.expect_rparen(&format!("to close '{}('", name))?;
                Ok(Expr::Call {
                    function,
                    arg,
                    location: loc,
                })
            }
            Token::LParen(_) => {
                self.advance();
                if self.check(&Token::RParen(loc)) {
                    return Err(ParseError {
                        message: "Empty parentheses".to_string(),
                        location: self.current_location(),
                    });
                }
                let inner = self.parse_expression()?;
                self.expect_rparen("to close '('")?;
                Ok(inner)
            }
            other => Err(ParseError {
                message: format!("Expected a number, function or '(', found {}", other),
                location: loc,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::parse_expression;

    fn number(expr: &Expr) -> f64 {
        match expr {
            Expr::Number { value, .. } => *value,
            other => panic!("Expected number, got {:?}", other),
        }
    }

    #[test]
    fn test_left_associative_subtraction() {
        // (10 - 4) - 3
        let expr = parse_expression("10-4-3").unwrap();
        match expr {
            Expr::BinaryOp {
                op: BinOp::Sub,
                left,
                right,
                ..
            } => {
                assert!(matches!(*left, Expr::BinaryOp { op: BinOp::Sub, .. }));
                assert_eq!(number(&right), 3.0);
            }
            other => panic!("Unexpected tree {:?}", other),
        }
    }

    #[test]
    fn test_right_associative_power() {
        // 2 ^ (3 ^ 2)
        let expr = parse_expression("2^3^2").unwrap();
        match expr {
            Expr::BinaryOp {
                op: BinOp::Pow,
                left,
                right,
                ..
            } => {
                assert_eq!(number(&left), 2.0);
                assert!(matches!(*right, Expr::BinaryOp { op: BinOp::Pow, .. }));
            }
            other => panic!("Unexpected tree {:?}", other),
        }
    }

    #[test]
    fn test_negation_wraps_power() {
        let expr = parse_expression("-2^2").unwrap();
        match expr {
            Expr::UnaryOp {
                op: UnOp::Neg,
                operand,
                ..
            } => assert!(matches!(*operand, Expr::BinaryOp { op: BinOp::Pow, .. })),
            other => panic!("Unexpected tree {:?}", other),
        }
    }

    #[test]
    fn test_signed_exponent() {
        let expr = parse_expression("2^-1").unwrap();
        match expr {
            Expr::BinaryOp {
                op: BinOp::Pow,
                right,
                ..
            } => assert!(matches!(*right, Expr::UnaryOp { op: UnOp::Neg, .. })),
            other => panic!("Unexpected tree {:?}", other),
        }
    }

    #[test]
    fn test_nested_calls() {
        let expr = parse_expression("sin(cos(30))").unwrap();
        match expr {
            Expr::Call { function, arg, .. } => {
                assert_eq!(function, Function::Sin);
                assert!(matches!(
                    *arg,
                    Expr::Call {
                        function: Function::Cos,
                        ..
                    }
                ));
            }
            other => panic!("Unexpected tree {:?}", other),
        }
    }

    #[test]
    fn test_only_keypad_functions() {
        let err = parse_expression("rad(180)").unwrap_err();
        assert!(err.message.contains("Unknown function 'rad'"));
    }

    #[test]
    fn test_syntax_errors() {
        assert!(parse_expression("()").is_err());
        assert!(parse_expression("(2+3").is_err());
        assert!(parse_expression("2*/3").is_err());
        assert!(parse_expression("sqrt 4").is_err());
        assert!(parse_expression("2(3)").is_err());
    }
}
