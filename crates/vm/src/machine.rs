//! Machine state: the operand stack and the three control registers.
//!
//! Activation frames live inside the operand stack. A frame starting at
//! `bp` is laid out as:
//!
//! ```text
//! bp + 0   static link   (base of the lexically enclosing frame)
//! bp + 1   dynamic link  (caller's bp)
//! bp + 2   return address
//! bp + 3.. locals
//! ```
//!
//! All stack reads and writes go through bounds-checked accessors, so a
//! bad index becomes `StackOverflow`/`StackUnderflow` instead of a panic.
//! Registers themselves are never range-checked: `sp` may sit anywhere as
//! long as no slot outside the stack is touched.

use crate::error::VmError;
use pcode_common::Instruction;

/// Register and stack state of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    /// Operand stack, fixed capacity.
    pub(crate) stack: Vec<i32>,
    /// Program counter: index of the next instruction.
    pub(crate) pc: i32,
    /// Base register: start of the current activation frame.
    pub(crate) bp: i32,
    /// Stack-top register: highest occupied slot, -1 when empty.
    pub(crate) sp: i32,
    /// Index of the instruction being executed, for error reports.
    pub(crate) at: i32,
}

impl Machine {
    /// Fresh state: zeroed stack, `sp = -1`, `bp = 0`, `pc = 0`.
    pub fn new(stack_size: usize) -> Self {
        Self {
            stack: vec![0; stack_size],
            pc: 0,
            bp: 0,
            sp: -1,
            at: 0,
        }
    }

    pub fn pc(&self) -> i32 {
        self.pc
    }

    pub fn bp(&self) -> i32 {
        self.bp
    }

    pub fn sp(&self) -> i32 {
        self.sp
    }

    /// The whole stack, including slots above `sp`.
    pub fn stack(&self) -> &[i32] {
        &self.stack
    }

    /// Capacity of the operand stack.
    pub fn stack_size(&self) -> usize {
        self.stack.len()
    }

    /// Read slot `index`.
    pub fn slot(&self, index: i64) -> Result<i32, VmError> {
        let i = self.index(index)?;
        Ok(self.stack[i])
    }

    /// Read the stack top.
    pub fn top(&self) -> Result<i32, VmError> {
        self.slot(self.sp as i64)
    }

    /// Base of the frame `level` lexical scopes out from the current one.
    ///
    /// Follows the static link `level` times starting from `bp`. Levels of
    /// zero or less return `bp`.
    pub fn find_base(&self, level: i32) -> Result<i32, VmError> {
        let mut base = self.bp;
        for _ in 0..level.max(0) {
            base = self.slot(base as i64)?;
        }
        Ok(base)
    }

    /// Write slot `index`.
    pub(crate) fn store(&mut self, index: i64, value: i32) -> Result<(), VmError> {
        let i = self.index(index)?;
        self.stack[i] = value;
        Ok(())
    }

    /// Write `value` one slot above the top, then advance `sp`.
    pub(crate) fn push(&mut self, value: i32) -> Result<(), VmError> {
        let next = self.sp as i64 + 1;
        self.store(next, value)?;
        self.sp = next as i32;
        Ok(())
    }

    /// Fetch the instruction at `pc`.
    pub(crate) fn fetch(&self, instructions: &[Instruction]) -> Result<Instruction, VmError> {
        usize::try_from(self.pc)
            .ok()
            .and_then(|i| instructions.get(i))
            .copied()
            .ok_or(VmError::PcOutOfRange { pc: self.pc })
    }

    /// Bounds-check `index` against the stack.
    pub(crate) fn index(&self, index: i64) -> Result<usize, VmError> {
        if index < 0 {
            return Err(VmError::StackUnderflow { at: self.at, index });
        }
        if index >= self.stack.len() as i64 {
            return Err(VmError::StackOverflow { at: self.at, index });
        }
        Ok(index as usize)
    }
}
