//! Parsing of `"a OP b"` expressions
//!
//! An expression is exactly three whitespace-separated tokens: a left
//! operand, an operator symbol and a right operand. Parsing checks them in
//! that order and stops at the first failure:
//!
//! ```text
//! normalize → tokenize → token count → left → right → operator
//! ```
//!
//! There is no precedence and no chaining, so `"8 * 3 / 9"` is rejected for
//! its token count and `"2+2"` for being a single token.

use std::fmt;
use std::str::FromStr;

use crate::{CalcError, Operator, Result};

/// Number of tokens in a well-formed expression.
const EXPR_TOKENS: usize = 3;

/// Collapse each run of whitespace into a single space and trim both ends.
///
/// Only ASCII whitespace (space, `\t`, `\n`, form feed, `\r`) separates
/// tokens; a non-breaking space is part of the token it sits in.
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for word in words(input) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Split an expression into its whitespace-delimited tokens.
///
/// Gives the same tokens as splitting [`normalize`]d input on single spaces.
/// Empty or blank input has no tokens.
pub fn tokenize(input: &str) -> Vec<&str> {
    words(input).collect()
}

fn words(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| c.is_ascii_whitespace())
        .filter(|word| !word.is_empty())
}

/// A parsed `left operator right` expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expression {
    /// Left operand
    pub left: f64,
    /// Operator between the operands
    pub operator: Operator,
    /// Right operand
    pub right: f64,
}

impl Expression {
    /// Create an expression from already-parsed parts.
    pub fn new(left: f64, operator: Operator, right: f64) -> Self {
        Self {
            left,
            operator,
            right,
        }
    }

    /// Parse an expression from text.
    ///
    /// # Errors
    /// - [`CalcError::TooManyTokens`] / [`CalcError::TooFewTokens`] unless
    ///   the input has exactly three tokens.
    /// - [`CalcError::InvalidOperand`] if either operand is not a number.
    ///   The left operand is checked first.
    /// - [`CalcError::InvalidOperator`] if the middle token is not one of
    ///   `+ - * /`.
    pub fn parse(input: &str) -> Result<Self> {
        let tokens = tokenize(input);

        let [left, operator, right] = tokens[..] else {
            return Err(token_count_error(input, tokens.len()));
        };

        let left = parse_operand(input, left)?;
        let right = parse_operand(input, right)?;
        let operator =
            Operator::from_symbol(operator).ok_or_else(|| CalcError::InvalidOperator {
                expr: input.to_string(),
                operator: operator.to_string(),
            })?;

        Ok(Self::new(left, operator, right))
    }

    /// Compute the expression's value.
    ///
    /// # Errors
    /// Returns [`CalcError::DivisionByZero`] for a `/` with a zero right
    /// operand.
    pub fn evaluate(&self) -> Result<f64> {
        self.operator.apply(self.left, self.right)
    }
}

impl FromStr for Expression {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}

fn token_count_error(input: &str, count: usize) -> CalcError {
    if count > EXPR_TOKENS {
        CalcError::TooManyTokens {
            expr: input.to_string(),
            count,
        }
    } else {
        CalcError::TooFewTokens {
            expr: input.to_string(),
            count,
        }
    }
}

/// Parse a numeric token. Finite literals that overflow `f64` are rejected
/// rather than rounded to infinity; `inf` and `infinity` are accepted as
/// written.
fn parse_operand(input: &str, token: &str) -> Result<f64> {
    let invalid = || CalcError::InvalidOperand {
        expr: input.to_string(),
        token: token.to_string(),
    };

    let value = token.parse::<f64>().map_err(|_| invalid())?;
    if value.is_infinite() && !is_infinity_literal(token) {
        return Err(invalid());
    }
    Ok(value)
}

fn is_infinity_literal(token: &str) -> bool {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
