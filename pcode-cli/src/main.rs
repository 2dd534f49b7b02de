//! P-code CLI: run, check and format P-code programs.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input, load or binding error
//! - 2: Usage error
//! - 3: Runtime error
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

mod cli;
mod commands;

use std::process;

use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match &cli.command {
        Command::Run(args) => commands::run(args),
        Command::Check(args) => commands::check(args),
        Command::Fmt(args) => commands::fmt(args),
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
