//! Machine sizing and run limits.

use pcode_common::limits::{MAX_ADDRESS_NUMBER, MAX_LEVEL, STACK_SIZE};

/// Sizing for a [`Pcode`](crate::Pcode) engine.
///
/// `Config::default()` is the reference sizing with no step limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Operand stack capacity in slots.
    pub stack_size: usize,
    /// Base offset of the conventional result slot.
    pub max_level: i32,
    /// Address space size; programs may hold one fewer instruction.
    pub max_address_number: usize,
    /// Abort with `StepLimitExceeded` after this many instructions
    /// without halting. `None` runs until the program halts.
    pub step_limit: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stack_size: STACK_SIZE,
            max_level: MAX_LEVEL,
            max_address_number: MAX_ADDRESS_NUMBER,
            step_limit: None,
        }
    }
}

impl Config {
    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    pub fn with_stack_size(mut self, stack_size: usize) -> Self {
        self.stack_size = stack_size;
        self
    }

    /// Longest program this configuration accepts.
    pub fn max_program_len(&self) -> usize {
        self.max_address_number.saturating_sub(1)
    }
}
