//! CLI command implementations.
//!
//! Each command reports its own errors on stderr and returns the process
//! exit code on failure.

use std::fs;
use std::path::Path;

use pcode_common::Program;
use pcode_loader::Loader;
use pcode_vm::{Config, Pcode};
use tracing::debug;

use crate::cli::{FileArgs, RunArgs};

/// Load, bind and execute a program, printing the result.
pub fn run(args: &RunArgs) -> Result<(), i32> {
    let program = read_program(&args.input, args.separator)?;

    let mut config = Config::default();
    if let Some(limit) = args.max_steps {
        config = config.with_step_limit(limit);
    }

    let pcode = Pcode::with_config(program, config).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    match pcode.execute() {
        Ok(halted) => {
            debug!(steps = halted.steps(), "program halted");
            match halted.result() {
                Ok(value) => {
                    println!("{value}");
                    Ok(())
                }
                Err(e) => {
                    eprintln!("runtime error: {e}");
                    Err(3)
                }
            }
        }
        Err(e) => {
            eprintln!("runtime error: {e}");
            Err(3)
        }
    }
}

/// Load and bind a program without running it.
pub fn check(args: &FileArgs) -> Result<(), i32> {
    let program = read_program(&args.input, args.separator)?;
    let len = program.len();

    Pcode::new(program).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    println!("OK: {} ({len} instructions)", args.input.display());
    Ok(())
}

/// Print the canonical text of a program.
pub fn fmt(args: &FileArgs) -> Result<(), i32> {
    let program = read_program(&args.input, args.separator)?;
    print!("{}", loader(args.separator)?.dump(&program));
    Ok(())
}

fn read_program(path: &Path, separator: char) -> Result<Program, i32> {
    debug!(path = %path.display(), %separator, "reading program");
    let loader = loader(separator)?;

    let text = fs::read_to_string(path).map_err(|e| {
        eprintln!("error: cannot read '{}': {e}", path.display());
        1
    })?;

    loader.load(&text).map_err(|e| {
        eprintln!("error: {}: {e}", path.display());
        1
    })
}

fn loader(separator: char) -> Result<Loader, i32> {
    Loader::with_separator(separator).map_err(|e| {
        eprintln!("error: {e}");
        1
    })
}
