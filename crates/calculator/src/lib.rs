//! # Calculator
//!
//! A minimal evaluator for single-operator arithmetic expressions.
//!
//! The crate has two layers:
//!
//! - **Primitives** ([`ops`]): variadic `add`, `subtract`, `multiply` and
//!   `divide` over `f64` slices, plus `sqrt`.
//! - **Evaluator** ([`expr`], [`evaluate`]): parses `"a OP b"` text into an
//!   [`Expression`] and dispatches to the matching primitive.
//!
//! Everything is pure and stateless. Errors are returned as [`CalcError`],
//! never logged.
//!
//! ```
//! assert_eq!(calculator::evaluate("18  /  6"), Ok(3.0));
//! assert!(calculator::evaluate("8 * 3 / 9").is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod expr;
pub mod operator;
pub mod ops;

// Re-export main types
pub use error::{CalcError, Result};
pub use expr::{normalize, tokenize, Expression};
pub use operator::Operator;
pub use ops::{add, divide, multiply, sqrt, subtract};

/// Calculator version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Evaluate a single `"a OP b"` expression.
///
/// Whitespace runs are collapsed and the input is trimmed, then it must split
/// into exactly three tokens: a number, one of `+ - * /`, and a number.
///
/// # Errors
/// Returns the first failure among [`CalcError::TooManyTokens`],
/// [`CalcError::TooFewTokens`], [`CalcError::InvalidOperand`],
/// [`CalcError::InvalidOperator`] and [`CalcError::DivisionByZero`].
pub fn evaluate(expr: &str) -> Result<f64> {
    Expression::parse(expr)?.evaluate()
}
