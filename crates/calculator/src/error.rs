//! Error types for calculator operations

use thiserror::Error;

/// Main error type for calculator operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// A divisor after the first operand was exactly zero
    #[error("bad input: {inputs:?} (division by zero is undefined)")]
    DivisionByZero {
        /// Operands passed to the division
        inputs: Vec<f64>,
    },

    /// Square root of a non-positive number
    #[error("bad input: {value} (square root requires a positive number)")]
    InvalidArgument {
        /// Rejected argument
        value: f64,
    },

    /// Expression split into more than three tokens
    #[error("too many arguments in '{expr}': expected 3 tokens, got {count}")]
    TooManyTokens {
        /// Expression as given by the caller
        expr: String,
        /// Number of tokens found
        count: usize,
    },

    /// Expression split into fewer than three tokens
    #[error("too few arguments in '{expr}': expected 3 tokens, got {count} (use spaces as separators)")]
    TooFewTokens {
        /// Expression as given by the caller
        expr: String,
        /// Number of tokens found
        count: usize,
    },

    /// Operand token is not a number
    #[error("invalid value '{token}' in '{expr}'")]
    InvalidOperand {
        /// Expression as given by the caller
        expr: String,
        /// Offending token
        token: String,
    },

    /// Operator token is not one of `+ - * /`
    #[error("invalid operator '{operator}' in '{expr}'")]
    InvalidOperator {
        /// Expression as given by the caller
        expr: String,
        /// Offending token
        operator: String,
    },
}

/// Result type alias for calculator operations
pub type Result<T> = std::result::Result<T, CalcError>;
