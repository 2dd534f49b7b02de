//! Opcode definitions for the P-code instruction set.

use std::fmt;
use std::str::FromStr;

use crate::error::DecodeError;

/// Identifies the operation an instruction performs.
///
/// The set is closed: every instruction the machine can execute is one of
/// these eight, so dispatch is an exhaustive `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Push the literal `address` onto the stack.
    Lit,
    /// Arithmetic, relational or return operation selected by `address`.
    Opr,
    /// Push the variable at `address` in the frame `level` scopes out.
    Lod,
    /// Pop into the variable at `address` in the frame `level` scopes out.
    Sto,
    /// Call the procedure at `address`, declared `level` scopes out.
    Cal,
    /// Move the stack top by `address` slots (frame allocation).
    Int,
    /// Jump unconditionally to `address`.
    Jmp,
    /// Pop the stack top; jump to `address` if it was 1.
    Jpc,
}

/// All opcodes, in their conventional order.
pub const ALL_OPCODES: [Opcode; 8] = [
    Opcode::Lit,
    Opcode::Opr,
    Opcode::Lod,
    Opcode::Sto,
    Opcode::Cal,
    Opcode::Int,
    Opcode::Jmp,
    Opcode::Jpc,
];

impl Opcode {
    /// The upper-case mnemonic used in the text format.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Lit => "LIT",
            Opcode::Opr => "OPR",
            Opcode::Lod => "LOD",
            Opcode::Sto => "STO",
            Opcode::Cal => "CAL",
            Opcode::Int => "INT",
            Opcode::Jmp => "JMP",
            Opcode::Jpc => "JPC",
        }
    }
}

impl FromStr for Opcode {
    type Err = DecodeError;

    /// Look up an opcode by mnemonic, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_OPCODES
            .iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| DecodeError::UnknownMnemonic(s.to_string()))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
