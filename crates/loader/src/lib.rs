//! P-code loader — text ↔ instruction translation.
//!
//! The text format is an instruction count followed by that many
//! instruction lines:
//!
//! ```text
//! 4
//! LIT;0;3
//! LIT;0;4
//! OPR;0;2
//! OPR;-3;0
//! ```
//!
//! Whitespace anywhere in a line is ignored, mnemonics are
//! case-insensitive, and blank lines and `#` comment lines are skipped.
//!
//! # Usage
//!
//! ```
//! use pcode_loader::{dump, load};
//!
//! let text = "2\nLIT;0;42\nOPR;-3;0\n";
//! let program = load(text).unwrap();
//! assert_eq!(program.len(), 2);
//! assert_eq!(dump(&program), text);
//! ```

pub mod error;

mod lexer;
mod parser;
mod writer;

pub use error::LoadError;

use lexer::significant_lines;
use parser::{parse_count, parse_instruction};
use pcode_common::Program;
use tracing::debug;

/// Field separator used when none is configured.
pub const DEFAULT_SEPARATOR: char = ';';

/// Reads and writes the text format with a given field separator.
///
/// The separator is checked by [`check_separator`] on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loader {
    separator: char,
}

impl Default for Loader {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(separator: char) -> Result<Self, LoadError> {
        Ok(Self {
            separator: check_separator(separator)?,
        })
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Parse text into a program.
    ///
    /// Returns the first error encountered.
    pub fn load(&self, text: &str) -> Result<Program, LoadError> {
        let lines = significant_lines(text);
        let (count_line, body) = lines.split_first().ok_or(LoadError::MissingCount)?;

        let declared = parse_count(count_line)?;
        if body.len() != declared {
            return Err(LoadError::CountMismatch {
                declared,
                found: body.len(),
            });
        }

        let instructions = body
            .iter()
            .map(|line| parse_instruction(line, self.separator))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = instructions.len(), "loaded program");
        Ok(Program::new(instructions))
    }

    /// Write a program in canonical form.
    pub fn dump(&self, program: &Program) -> String {
        writer::dump(program, self.separator)
    }
}

/// Accept `separator` if it can split instruction lines unambiguously.
///
/// Whitespace is stripped before splitting, `#` starts a comment line,
/// `+`/`-` are number signs, and letters and digits belong to fields, so
/// only the remaining ASCII punctuation is allowed.
pub fn check_separator(separator: char) -> Result<char, LoadError> {
    if separator.is_ascii_punctuation() && !matches!(separator, '#' | '+' | '-') {
        Ok(separator)
    } else {
        Err(LoadError::InvalidSeparator(separator))
    }
}

/// Parse text with the default `;` separator.
pub fn load(text: &str) -> Result<Program, LoadError> {
    Loader::default().load(text)
}

/// Write canonical text with the default `;` separator.
///
/// `load(&dump(program)) == Ok(program)` for every program.
pub fn dump(program: &Program) -> String {
    Loader::default().dump(program)
}
