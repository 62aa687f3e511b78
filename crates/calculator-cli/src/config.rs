//! Command-line arguments and runtime configuration

use clap::Parser;

/// Evaluate `a OP b` arithmetic expressions.
///
/// With an expression, evaluates it once and exits. Without one, starts an
/// interactive session.
#[derive(Parser, Debug)]
#[command(name = "calc", version, about, long_about = None)]
pub struct Args {
    /// Start an interactive session even if an expression is given.
    #[arg(short, long)]
    pub repl: bool,

    /// Print results with this many fractional digits.
    #[arg(short, long, value_name = "N")]
    pub precision: Option<usize>,

    /// Print each evaluation as a JSON object.
    #[arg(short, long)]
    pub json: bool,

    /// Write tokens and parsed expression to stderr before each result.
    #[arg(short, long)]
    pub trace: bool,

    /// Expression tokens, joined with single spaces (e.g. `calc 2 '*' 3`).
    #[arg(allow_negative_numbers = true)]
    pub expression: Vec<String>,
}

impl Args {
    /// The positional tokens as one expression, if any were given.
    pub fn expression(&self) -> Option<String> {
        if self.expression.is_empty() {
            None
        } else {
            Some(self.expression.join(" "))
        }
    }

    /// Whether to run the interactive session.
    pub fn wants_repl(&self) -> bool {
        self.repl || self.expression.is_empty()
    }
}

/// How results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Bare number, or `error: ...` on stderr
    #[default]
    Plain,
    /// One JSON object per evaluation
    Json,
}

/// Settings shared by one-shot runs and the REPL.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fixed number of fractional digits, or shortest round-trip form
    pub precision: Option<usize>,

    /// Output format
    pub format: OutputFormat,

    /// Whether to trace evaluation steps to stderr
    pub trace: bool,

    /// REPL prompt
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: None,
            format: OutputFormat::Plain,
            trace: false,
            prompt: "calc> ".to_string(),
        }
    }
}

impl Config {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with a fixed output precision.
    pub fn with_precision(precision: usize) -> Self {
        Self {
            precision: Some(precision),
            ..Default::default()
        }
    }

    /// Format a result according to the configured precision.
    pub fn format_number(&self, value: f64) -> String {
        match self.precision {
            Some(digits) => format!("{value:.digits$}"),
            None => value.to_string(),
        }
    }
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        let mut config = match args.precision {
            Some(digits) => Config::with_precision(digits),
            None => Config::new(),
        };
        if args.json {
            config.format = OutputFormat::Json;
        }
        config.trace = args.trace;
        config
    }
}
