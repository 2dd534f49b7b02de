//! Error types for the P-code loader.

use thiserror::Error;

/// Errors produced reading the text instruction format.
///
/// Line numbers are 1-based and count every line of the input, including
/// skipped blank and comment lines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The input has no instruction-count line.
    #[error("missing instruction count")]
    MissingCount,

    /// The first line is not a non-negative integer.
    #[error("line {line}: invalid instruction count '{token}'")]
    InvalidCount { line: usize, token: String },

    /// An unrecognized opcode mnemonic was encountered.
    #[error("line {line}: unknown opcode '{token}'")]
    UnknownOpcode { line: usize, token: String },

    /// An instruction line does not have exactly three fields.
    #[error("line {line}: expected OPCODE{separator}level{separator}address, found '{text}'")]
    MalformedInstruction {
        line: usize,
        separator: char,
        text: String,
    },

    /// A level or address is not a 32-bit integer.
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },

    /// The number of instruction lines differs from the declared count.
    #[error("declared {declared} instructions but found {found}")]
    CountMismatch { declared: usize, found: usize },

    /// The field separator would collide with whitespace, comments, signs,
    /// digits or mnemonics.
    #[error("invalid separator '{0}': expected a punctuation character other than '#', '+' or '-'")]
    InvalidSeparator(char),
}
