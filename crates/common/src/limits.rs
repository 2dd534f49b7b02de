//! Reference sizing of the P-code machine.

/// Deepest lexical nesting a program may use. Also the base offset of the
/// conventional result slot read after halting.
pub const MAX_LEVEL: i32 = 3;

/// Size of the address space. A program may hold at most
/// `MAX_ADDRESS_NUMBER - 1` instructions.
pub const MAX_ADDRESS_NUMBER: usize = 2047;

/// Operand stack capacity in slots.
pub const STACK_SIZE: usize = 5012;
