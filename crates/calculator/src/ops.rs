//! Arithmetic primitives
//!
//! Each primitive folds an ordered slice of operands left to right. The empty
//! slice yields the operation's identity (0 for sums and differences, 1 for
//! products and quotients).

use crate::{CalcError, Result};

/// Sum of all operands.
pub fn add(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, v| acc + v)
}

/// First operand minus every following operand.
///
/// A single operand is returned unchanged.
pub fn subtract(values: &[f64]) -> f64 {
    match values.split_first() {
        Some((first, rest)) => rest.iter().fold(*first, |acc, v| acc - v),
        None => 0.0,
    }
}

/// Product of all operands.
pub fn multiply(values: &[f64]) -> f64 {
    values.iter().product()
}

/// First operand divided by every following operand.
///
/// A single operand is returned unchanged, not inverted.
///
/// # Errors
/// Returns [`CalcError::DivisionByZero`] if any operand after the first is
/// zero.
pub fn divide(values: &[f64]) -> Result<f64> {
    let Some((first, rest)) = values.split_first() else {
        return Ok(1.0);
    };

    // Checked up front so no partial quotient is computed
    if rest.iter().any(|v| *v == 0.0) {
        return Err(CalcError::DivisionByZero {
            inputs: values.to_vec(),
        });
    }

    Ok(rest.iter().fold(*first, |acc, v| acc / v))
}

/// Principal square root.
///
/// # Errors
/// Returns [`CalcError::InvalidArgument`] unless `x > 0`. Zero and NaN are
/// rejected along with negatives.
pub fn sqrt(x: f64) -> Result<f64> {
    if x > 0.0 {
        Ok(x.sqrt())
    } else {
        Err(CalcError::InvalidArgument { value: x })
    }
}
