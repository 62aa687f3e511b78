//! `calc`: command-line front end for the calculator evaluator.
//!
//! ```text
//! calc 18 / 6          # one-shot, prints 3
//! calc -p 2 1 / 3      # one-shot, prints 0.33
//! calc                 # interactive session
//! ```
//!
//! A one-shot evaluation exits with status 1 if the expression fails.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod config;
mod repl;
mod runner;

use config::{Args, Config};

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let config = Config::from(&args);

    if args.wants_repl() {
        repl::run(&config)?;
        return Ok(ExitCode::SUCCESS);
    }

    let expr = args.expression().unwrap_or_default();
    let ok = runner::run_line(&expr, &config, &mut io::stdout(), &mut io::stderr())?;

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
