//! Decode errors for P-code instruction fields.

use thiserror::Error;

/// Errors that occur turning raw fields into typed instruction parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Text did not name any opcode.
    #[error("unknown opcode mnemonic '{0}'")]
    UnknownMnemonic(String),

    /// OPR address outside the sub-operation table (0-12).
    #[error("unknown OPR sub-operation {0}")]
    UnknownSubOp(i32),
}
