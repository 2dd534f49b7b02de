//! Errors for the P-code machine.
//!
//! Every error is fatal: the run stops and the error is handed to the
//! caller. Runtime variants carry `at`, the index of the instruction that
//! was executing.

use thiserror::Error;

/// Errors from binding or running a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    /// Program does not fit in the address space.
    #[error("program of {len} instructions exceeds the limit of {limit}")]
    AddressSpaceExceeded { len: usize, limit: usize },

    /// An instruction sequence was already bound to this engine.
    #[error("instruction sequence already bound")]
    AlreadyBound,

    /// `run` was called with no instructions bound.
    #[error("no instructions to run")]
    EmptyProgram,

    /// Stack access at or past the stack capacity.
    #[error("stack overflow (slot {index}) at instruction {at}")]
    StackOverflow { at: i32, index: i64 },

    /// Stack access below slot 0.
    #[error("stack underflow (slot {index}) at instruction {at}")]
    StackUnderflow { at: i32, index: i64 },

    /// `OPR 5` with a zero divisor.
    #[error("division by zero at instruction {at}")]
    DivisionByZero { at: i32 },

    /// `OPR` whose address is not a sub-operation id.
    #[error("unknown OPR sub-operation {id} at instruction {at}")]
    UnknownSubOperation { at: i32, id: i32 },

    /// The program counter does not index an instruction.
    #[error("program counter {pc} outside the program")]
    PcOutOfRange { pc: i32 },

    /// The configured step budget ran out before the program halted.
    #[error("step limit of {limit} exceeded")]
    StepLimitExceeded { limit: u64 },
}
