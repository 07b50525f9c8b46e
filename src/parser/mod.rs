//! Calculator expression parser
//!
//! This module turns what the user typed into an expression tree:
//! - [`normalize`]: display glyphs and constants → canonical text
//! - [`lexer`]: Tokenization (canonical text → tokens)
//! - [`parse`]: Parsing (tokens → [`ast::Expr`])
//! - [`ast`]: Expression tree definitions
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser, one method per precedence level.
//! Only numbers, `+ - * / ^`, parentheses and the built-in functions are
//! recognised; there is no way to reach anything else from an expression.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod normalize;
pub mod parse;

pub use normalize::AngleMode;
pub use parse::{parse_expression, ParseError, Parser};
