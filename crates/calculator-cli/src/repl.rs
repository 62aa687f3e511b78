//! Interactive session

use std::io;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::config::Config;
use crate::runner::run_line;

/// What a line typed at the prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Blank line
    Empty,
    /// `quit` or `exit`
    Quit,
    /// Anything else is handed to the evaluator
    Evaluate(&'a str),
}

impl<'a> Command<'a> {
    /// Classify a line read from the prompt.
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            "" => Command::Empty,
            "quit" | "exit" => Command::Quit,
            _ => Command::Evaluate(line),
        }
    }
}

/// Read, evaluate and print until the user quits.
///
/// Evaluation errors are printed and the session continues.
pub fn run(config: &Config) -> Result<()> {
    let mut editor = DefaultEditor::new().context("failed to start line editor")?;
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    loop {
        let line = match editor.readline(&config.prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("failed to read input"),
        };

        match Command::parse(&line) {
            Command::Empty => continue,
            Command::Quit => break,
            Command::Evaluate(expr) => {
                editor
                    .add_history_entry(expr)
                    .context("failed to record history")?;
                run_line(expr, config, &mut stdout, &mut stderr)?;
            }
        }
    }

    Ok(())
}
