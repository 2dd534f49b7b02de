//! Sub-operations selected by the `address` field of an OPR instruction.

use crate::error::DecodeError;

/// The operation an `OPR` instruction performs.
///
/// Binary operations take the deeper slot as the left operand: for
/// `LIT 0 a; LIT 0 b; OPR 0 3` the result is `a - b`.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubOp {
    /// Return from the current procedure.
    Return = 0,
    /// Negate the stack top.
    Negate = 1,
    Add = 2,
    Subtract = 3,
    Multiply = 4,
    /// Truncating division. A zero divisor is a runtime error.
    Divide = 5,
    /// 1 if the stack top is odd, else 0. Negative numbers are never odd.
    IsOdd = 6,
    Equal = 7,
    NotEqual = 8,
    Less = 9,
    LessOrEqual = 10,
    /// Defined as the complement of `Less`, so equal operands yield 1.
    Greater = 11,
    GreaterOrEqual = 12,
}

/// All sub-operations, ordered by id.
pub const ALL_SUB_OPS: [SubOp; 13] = [
    SubOp::Return,
    SubOp::Negate,
    SubOp::Add,
    SubOp::Subtract,
    SubOp::Multiply,
    SubOp::Divide,
    SubOp::IsOdd,
    SubOp::Equal,
    SubOp::NotEqual,
    SubOp::Less,
    SubOp::LessOrEqual,
    SubOp::Greater,
    SubOp::GreaterOrEqual,
];

impl TryFrom<i32> for SubOp {
    type Error = DecodeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SubOp::Return),
            1 => Ok(SubOp::Negate),
            2 => Ok(SubOp::Add),
            3 => Ok(SubOp::Subtract),
            4 => Ok(SubOp::Multiply),
            5 => Ok(SubOp::Divide),
            6 => Ok(SubOp::IsOdd),
            7 => Ok(SubOp::Equal),
            8 => Ok(SubOp::NotEqual),
            9 => Ok(SubOp::Less),
            10 => Ok(SubOp::LessOrEqual),
            11 => Ok(SubOp::Greater),
            12 => Ok(SubOp::GreaterOrEqual),
            _ => Err(DecodeError::UnknownSubOp(value)),
        }
    }
}

impl SubOp {
    /// Short lower-case name, used in traces.
    pub fn name(&self) -> &'static str {
        match self {
            SubOp::Return => "ret",
            SubOp::Negate => "neg",
            SubOp::Add => "add",
            SubOp::Subtract => "sub",
            SubOp::Multiply => "mul",
            SubOp::Divide => "div",
            SubOp::IsOdd => "odd",
            SubOp::Equal => "eq",
            SubOp::NotEqual => "neq",
            SubOp::Less => "lt",
            SubOp::LessOrEqual => "lte",
            SubOp::Greater => "gt",
            SubOp::GreaterOrEqual => "gte",
        }
    }
}
