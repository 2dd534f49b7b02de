//! The P-code instruction triple.
//!
//! Every instruction is `(opcode, level, address)`. How the two integer
//! fields are read depends on the opcode:
//!
//! ```text
//! LIT  -      value           push literal
//! OPR  -      sub-op id       see SubOp
//! LOD  level  offset          push variable
//! STO  level  offset          pop into variable
//! CAL  level  target          call procedure
//! INT  -      amount          adjust stack top
//! JMP  -      target          jump
//! JPC  -      target          jump if top == 1, pop
//! ```

use std::fmt;

use crate::error::DecodeError;
use crate::opcode::Opcode;
use crate::sub_op::SubOp;

/// A single P-code instruction. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    opcode: Opcode,
    level: i32,
    address: i32,
}

impl Instruction {
    /// Create a new instruction.
    pub fn new(opcode: Opcode, level: i32, address: i32) -> Self {
        Self {
            opcode,
            level,
            address,
        }
    }

    /// The operation to perform.
    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// Lexical distance for LOD/STO/CAL. Ignored by other opcodes.
    pub fn level(&self) -> i32 {
        self.level
    }

    /// Literal, offset, jump target or sub-operation id, depending on opcode.
    pub fn address(&self) -> i32 {
        self.address
    }

    /// Interpret `address` as an OPR sub-operation id.
    pub fn sub_op(&self) -> Result<SubOp, DecodeError> {
        SubOp::try_from(self.address)
    }
}

impl fmt::Display for Instruction {
    /// Formats in the text-file form, `OPCODE;level;address`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{}", self.opcode, self.level, self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructor_fields() {
        let instr = Instruction::new(Opcode::Lod, 2, -5);
        assert_eq!(instr.opcode(), Opcode::Lod);
        assert_eq!(instr.level(), 2);
        assert_eq!(instr.address(), -5);
    }

    #[test]
    fn display_text_form() {
        assert_eq!(Instruction::new(Opcode::Lit, 0, 42).to_string(), "LIT;0;42");
        assert_eq!(Instruction::new(Opcode::Opr, -3, 0).to_string(), "OPR;-3;0");
    }

    #[test]
    fn sub_op_from_address() {
        assert_eq!(Instruction::new(Opcode::Opr, 0, 2).sub_op(), Ok(SubOp::Add));
        assert_eq!(
            Instruction::new(Opcode::Opr, 0, 99).sub_op(),
            Err(DecodeError::UnknownSubOp(99))
        );
    }

    #[test]
    fn copies_are_equal() {
        let a = Instruction::new(Opcode::Cal, 1, 7);
        let b = a;
        assert_eq!(a, b);
    }
}
