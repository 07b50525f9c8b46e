//! Calculator evaluation engine
//!
//! This module provides the numeric side of a calculation:
//! - [`engine`]: evaluates a parsed [`Expr`] tree
//! - [`errors`]: the [`CalcError`] taxonomy
//! - [`format`]: renders a result for the display
//!
//! [`Expr`]: crate::parser::ast::Expr

pub mod constants;
pub mod engine;
pub mod errors;
pub mod format;

pub use engine::evaluate;
pub use errors::CalcError;
pub use format::format_result;
