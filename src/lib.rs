//! # Introduction
//!
//! calcade is a scientific calculator with an arcade-style terminal front
//! end. Input typed on the keypad uses display glyphs (`×`, `÷`, `π`, `%`)
//! and is rewritten into a small arithmetic grammar before evaluation.
//!
//! ## Evaluation pipeline
//!
//! ```text
//! Keypad text → Normalizer → Lexer → Parser → Expr → Evaluator → Formatter
//! ```
//!
//! 1. [`parser::normalize`]: replaces glyphs and constants, wraps
//!    trigonometric arguments in degree mode and closes open parentheses.
//! 2. [`parser`]: tokenises the canonical text and builds an
//!    [`parser::ast::Expr`] tree.
//! 3. [`interpreter`]: evaluates the tree in `f64` and formats the result
//!    with ten significant digits.
//! 4. [`calculator`]: the state machine behind the keys (expression, last
//!    result, memory register, angle mode, power, history).
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported input
//!
//! Operators: `+ - × ÷ ^ **`, unary minus, `%` (divide by 100).
//! Functions: `sin`, `cos`, `tan`, `sqrt`, `log` (base 10).
//! Constants: `π`, `pi`, `e`. Numbers may use scientific notation (`3e-05`).

pub mod calculator;
pub mod config;
pub mod interpreter;
pub mod logging;
pub mod parser;
pub mod ui;
