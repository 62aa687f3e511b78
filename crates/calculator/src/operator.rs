//! Binary operators recognised by the evaluator

use std::fmt;

use crate::ops::{add, divide, multiply, subtract};
use crate::Result;

/// One of the four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl Operator {
    /// All operators, in symbol order `+ - * /`.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Look up an operator by its exact symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    /// The operator's symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Apply the operator to two operands via the matching primitive.
    ///
    /// # Errors
    /// Only [`Operator::Divide`] can fail, with
    /// [`CalcError::DivisionByZero`](crate::CalcError::DivisionByZero).
    pub fn apply(self, left: f64, right: f64) -> Result<f64> {
        let operands = [left, right];
        match self {
            Operator::Add => Ok(add(&operands)),
            Operator::Subtract => Ok(subtract(&operands)),
            Operator::Multiply => Ok(multiply(&operands)),
            Operator::Divide => divide(&operands),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
