//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, helper methods, and the main parse entry point.
//!
//! # Implementation
//!
//! The grammar rules themselves live in `expressions` as a separate
//! `impl Parser` block, sharing the token cursor defined here.

use crate::parser::ast::*;
use crate::parser::lexer::{LexError, Lexer, Token};
use thiserror::Error;

/// Deepest nesting of parentheses, signs, powers and chained operators the
/// parser accepts. Evaluation recurses once per level, so this also bounds
/// the evaluator's stack use.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Syntax error raised while tokenizing or parsing an expression
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Syntax error at column {}: {message}", location.column)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            message: err.message,
            location: err.location,
        }
    }
}

/// Recursive descent parser for normalized calculator expressions
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    pub(crate) depth: usize,
}

impl Parser {
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self {
            tokens,
            position: 0,
            depth: 0,
        })
    }

    /// Parse the whole input as a single expression.
    ///
    /// Fails on empty input and on anything left over after a complete
    /// expression, such as a stray `)`.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        if self.is_at_end() {
            return Err(ParseError {
                message: "Empty expression".to_string(),
                location: self.current_location(),
            });
        }

        let expr = self.parse_expression()?;

        if !self.is_at_end() {
            return Err(ParseError {
                message: format!("Unexpected {}", self.peek()),
                location: self.current_location(),
            });
        }

        Ok(expr)
    }

    // ===== Helper methods =====

    pub(crate) fn match_token(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(self.peek()) == std::mem::discriminant(token)
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek(), Token::Eof(_))
    }

    pub(crate) fn peek(&self) -> &Token {
        // The lexer always terminates the stream with Eof and advance()
        // never moves past it.
        &self.tokens[self.position]
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position.saturating_sub(1)]
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location()
    }

    /// Enter one more level of nesting. A failed parse is abandoned, so the
    /// caller only restores `depth` on success.
    pub(crate) fn descend(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(ParseError {
                message: "Expression nested too deeply".to_string(),
                location: self.current_location(),
            });
        }
        Ok(())
    }

    pub(crate) fn expect_token(&mut self, token: &Token, message: &str) -> Result<(), ParseError> {
        if self.check(token) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError {
                message: format!("{}, found {}", message, self.peek()),
                location: self.current_location(),
            })
        }
    }

    pub(crate) fn expect_lparen(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(
            &Token::LParen(self.current_location()),
            &format!("Expected '(' {ctx}"),
        )
    }

    pub(crate) fn expect_rparen(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(
            &Token::RParen(self.current_location()),
            &format!("Expected ')' {ctx}"),
        )
    }
}

/// Tokenize and parse `source` in one step
pub fn parse_expression(source: &str) -> Result<Expr, ParseError> {
    Parser::new(source)?.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_precedence() {
        let expr = parse_expression("1 + 2 * 3").unwrap();
        match expr {
            Expr::BinaryOp {
                op: BinOp::Add,
                right,
                ..
            } => {
                assert!(matches!(*right, Expr::BinaryOp { op: BinOp::Mul, .. }));
            }
            other => panic!("Expected addition at the root, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_function_call() {
        let expr = parse_expression("sqrt(16)").unwrap();
        match expr {
            Expr::Call { function, arg, .. } => {
                assert_eq!(function, Function::Sqrt);
                assert!(matches!(*arg, Expr::Number { value, .. } if value == 16.0));
            }
            other => panic!("Expected function call, got {:?}", other),
        }
    }

    #[test]
    fn test_nesting_limit() {
        let levels = MAX_NESTING_DEPTH - 1;
        let nested = format!("{}1{}", "(".repeat(levels), ")".repeat(levels));
        assert!(parse_expression(&nested).is_ok());

        let err = parse_expression(&format!("{}1", "-".repeat(5_000))).unwrap_err();
        assert_eq!(err.message, "Expression nested too deeply");

        let err = parse_expression(&format!("{}1", "(".repeat(200_000))).unwrap_err();
        assert_eq!(err.message, "Expression nested too deeply");

        let err = parse_expression(&format!("{}2", "2^".repeat(1_000))).unwrap_err();
        assert_eq!(err.message, "Expression nested too deeply");
    }

    #[test]
    fn test_operator_chain_limit() {
        assert!(parse_expression(&format!("{}1", "1+".repeat(100))).is_ok());
        let err = parse_expression(&format!("{}1", "1*".repeat(100_000))).unwrap_err();
        assert_eq!(err.message, "Expression nested too deeply");
    }

    #[test]
    fn test_empty_input() {
        let err = parse_expression("   ").unwrap_err();
        assert!(err.message.contains("Empty"));
    }

    #[test]
    fn test_trailing_operator() {
        let err = parse_expression("2++").unwrap_err();
        assert!(err.message.contains("end of expression"), "{}", err);
    }

    #[test]
    fn test_stray_closing_paren() {
        let err = parse_expression("2)").unwrap_err();
        assert_eq!(err.location.column, 2);
    }

    #[test]
    fn test_unknown_function() {
        let err = parse_expression("foo(2)").unwrap_err();
        assert!(err.message.contains("foo"));
    }
}
