//! P-code common types.
//!
//! This crate provides the data structures shared by the machine and the
//! text loader:
//!
//! - [`Opcode`] — the eight instruction kinds
//! - [`SubOp`] — the thirteen `OPR` sub-operations
//! - [`Instruction`] — the `(opcode, level, address)` triple
//! - [`Program`] — an ordered instruction sequence
//! - [`limits`] — reference sizing constants
//! - [`DecodeError`] — errors from interpreting raw fields

pub mod error;
pub mod instruction;
pub mod limits;
pub mod opcode;
pub mod program;
pub mod sub_op;

// Re-export commonly used types at the crate root.
pub use error::DecodeError;
pub use instruction::Instruction;
pub use opcode::Opcode;
pub use program::Program;
pub use sub_op::SubOp;
