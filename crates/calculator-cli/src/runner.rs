//! Evaluate one expression and render the outcome

use std::io::Write;

use anyhow::Result;
use calculator::{evaluate, tokenize, CalcError, Expression};
use serde::Serialize;

use crate::config::{Config, OutputFormat};

/// Outcome of a single evaluation, as written in JSON mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Expression as typed
    pub expression: String,

    /// Computed value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonNumber>,

    /// Error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A result as JSON: finite values are numbers, the rest are strings
/// (`"inf"`, `"-inf"`, `"NaN"`) since JSON has no literal for them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsonNumber {
    /// Finite value
    Finite(f64),
    /// Infinity or NaN, in `f64` display form
    NonFinite(String),
}

impl From<f64> for JsonNumber {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            JsonNumber::Finite(value)
        } else {
            JsonNumber::NonFinite(value.to_string())
        }
    }
}

impl Report {
    /// Build a report from an evaluation result.
    pub fn new(expression: &str, outcome: &Result<f64, CalcError>) -> Self {
        let (result, error) = match outcome {
            Ok(value) => (Some(JsonNumber::from(*value)), None),
            Err(err) => (None, Some(err.to_string())),
        };
        Self {
            expression: expression.to_string(),
            result,
            error,
        }
    }
}

/// Evaluate `line` and write the outcome.
///
/// Results go to `out`; errors and trace lines go to `err`, except in JSON
/// mode where both outcomes are a single object on `out`. Returns whether
/// the evaluation succeeded.
pub fn run_line(
    line: &str,
    config: &Config,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool> {
    if config.trace {
        trace(line, err)?;
    }

    let outcome = evaluate(line);

    match config.format {
        OutputFormat::Json => {
            let report = Report::new(line, &outcome);
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        }
        OutputFormat::Plain => match &outcome {
            Ok(value) => writeln!(out, "{}", config.format_number(*value))?,
            Err(e) => writeln!(err, "error: {e}")?,
        },
    }

    Ok(outcome.is_ok())
}

fn trace(line: &str, err: &mut impl Write) -> Result<()> {
    writeln!(err, "[trace] tokens: {:?}", tokenize(line))?;
    match Expression::parse(line) {
        Ok(expr) => writeln!(err, "[trace] expression: {expr}")?,
        Err(e) => writeln!(err, "[trace] parse failed: {e}")?,
    }
    Ok(())
}
