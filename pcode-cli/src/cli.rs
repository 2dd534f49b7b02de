//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pcode_loader::{check_separator, DEFAULT_SEPARATOR};

#[derive(Parser, Debug)]
#[command(name = "pcode")]
#[command(version, about = "Load and run P-code programs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Execute a program and print its result
    Run(RunArgs),
    /// Load a program and report how many instructions it has
    Check(FileArgs),
    /// Print a program in canonical form
    Fmt(FileArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Program file: an instruction count, then one OPCODE;level;address per line
    #[arg(default_value = "./input.pcode")]
    pub input: PathBuf,

    /// Field separator within instruction lines
    #[arg(long, default_value_t = DEFAULT_SEPARATOR, value_parser = parse_separator)]
    pub separator: char,

    /// Abort after this many instructions without halting
    #[arg(long = "max-steps")]
    pub max_steps: Option<u64>,
}

#[derive(Args, Debug)]
pub struct FileArgs {
    /// Program file
    pub input: PathBuf,

    /// Field separator within instruction lines
    #[arg(long, default_value_t = DEFAULT_SEPARATOR, value_parser = parse_separator)]
    pub separator: char,
}

fn parse_separator(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => check_separator(c).map_err(|e| e.to_string()),
        _ => Err(format!("expected a single character, found '{s}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_parsing() {
        assert_eq!(parse_separator(","), Ok(','));
        assert!(parse_separator(" ").is_err());
        assert!(parse_separator("-").is_err());
        assert!(parse_separator(";;").is_err());
        assert!(parse_separator("").is_err());
    }

    #[test]
    fn check_requires_a_file() {
        assert!(Cli::try_parse_from(["pcode", "check"]).is_err());
        assert!(Cli::try_parse_from(["pcode", "fmt"]).is_err());
        assert!(Cli::try_parse_from(["pcode", "run"]).is_ok());
    }
}
