//! Opcode dispatch for the P-code machine.
//!
//! Register arithmetic wraps like 32-bit machine integers; only stack
//! accesses are checked. Every check happens before a register or slot
//! changes, so an instruction that fails leaves the machine as it was apart
//! from `pc`.

use crate::error::VmError;
use crate::machine::Machine;
use pcode_common::{Instruction, Opcode, SubOp};
use tracing::trace;

impl Machine {
    /// Execute `instr` as if it had been fetched at the current `pc`.
    ///
    /// `pc` is incremented before the instruction's effect is applied, so
    /// `CAL` saves the address after the call and jumps overwrite the
    /// increment.
    pub fn execute(&mut self, instr: &Instruction) -> Result<(), VmError> {
        self.at = self.pc;
        self.pc = self.pc.wrapping_add(1);

        let address = instr.address();
        match instr.opcode() {
            Opcode::Lit => self.push(address),
            Opcode::Opr => self.exec_opr(instr),
            Opcode::Lod => self.exec_lod(instr),
            Opcode::Sto => self.exec_sto(instr),
            Opcode::Cal => self.exec_cal(instr),
            Opcode::Int => {
                self.sp = self.sp.wrapping_add(address);
                Ok(())
            }
            Opcode::Jmp => {
                self.pc = address;
                Ok(())
            }
            Opcode::Jpc => self.exec_jpc(address),
        }
    }

    fn exec_lod(&mut self, instr: &Instruction) -> Result<(), VmError> {
        let base = self.find_base(instr.level())?;
        let value = self.slot(base as i64 + instr.address() as i64)?;
        self.push(value)
    }

    fn exec_sto(&mut self, instr: &Instruction) -> Result<(), VmError> {
        let base = self.find_base(instr.level())?;
        let value = self.top()?;
        self.store(base as i64 + instr.address() as i64, value)?;
        self.sp = self.sp.wrapping_sub(1);
        Ok(())
    }

    /// Write the frame header above the stack top and enter the callee.
    ///
    /// `sp` does not move; the callee's `INT` claims the header slots.
    fn exec_cal(&mut self, instr: &Instruction) -> Result<(), VmError> {
        let static_link = self.find_base(instr.level())?;
        let top = self.sp as i64;
        self.index(top + 1)?;
        self.index(top + 3)?;
        self.store(top + 1, static_link)?;
        self.store(top + 2, self.bp)?;
        self.store(top + 3, self.pc)?;
        self.bp = self.sp.wrapping_add(1);
        self.pc = instr.address();
        Ok(())
    }

    fn exec_jpc(&mut self, target: i32) -> Result<(), VmError> {
        if self.top()? == 1 {
            self.pc = target;
        }
        self.sp = self.sp.wrapping_sub(1);
        Ok(())
    }

    fn exec_opr(&mut self, instr: &Instruction) -> Result<(), VmError> {
        let op = instr.sub_op().map_err(|_| VmError::UnknownSubOperation {
            at: self.at,
            id: instr.address(),
        })?;
        trace!(op = op.name(), at = self.at, "opr");

        match op {
            SubOp::Return => self.exec_return(),
            SubOp::Negate => self.exec_unary(i32::wrapping_neg),
            SubOp::Add => self.exec_binary(i32::wrapping_add),
            SubOp::Subtract => self.exec_binary(i32::wrapping_sub),
            SubOp::Multiply => self.exec_binary(i32::wrapping_mul),
            SubOp::Divide => self.exec_div(),
            SubOp::IsOdd => self.exec_unary(|a| flag(a % 2 == 1)),
            SubOp::Equal => self.exec_binary(|a, b| flag(a == b)),
            SubOp::NotEqual => self.exec_binary(|a, b| 1 - flag(a == b)),
            SubOp::Less => self.exec_binary(|a, b| flag(a < b)),
            SubOp::LessOrEqual => self.exec_binary(|a, b| flag(a <= b)),
            SubOp::Greater => self.exec_binary(|a, b| 1 - flag(a < b)),
            SubOp::GreaterOrEqual => self.exec_binary(|a, b| flag(a >= b)),
        }
    }

    /// Drop the current frame and resume the caller.
    fn exec_return(&mut self) -> Result<(), VmError> {
        let sp = self.bp.wrapping_sub(1);
        let top = sp as i64;
        let pc = self.slot(top + 3)?;
        let bp = self.slot(top + 2)?;
        self.sp = sp;
        self.pc = pc;
        self.bp = bp;
        Ok(())
    }

    fn exec_unary(&mut self, op: fn(i32) -> i32) -> Result<(), VmError> {
        let a = self.top()?;
        self.store(self.sp as i64, op(a))
    }

    /// Pop `b`, replace the new top `a` with `op(a, b)`.
    fn exec_binary(&mut self, op: fn(i32, i32) -> i32) -> Result<(), VmError> {
        let (a, b) = self.operands()?;
        self.pop_into(op(a, b))
    }

    fn exec_div(&mut self) -> Result<(), VmError> {
        let (a, b) = self.operands()?;
        if b == 0 {
            return Err(VmError::DivisionByZero { at: self.at });
        }
        self.pop_into(a.wrapping_div(b))
    }

    /// The two topmost slots, deeper one first.
    fn operands(&self) -> Result<(i32, i32), VmError> {
        let top = self.sp as i64;
        Ok((self.slot(top - 1)?, self.slot(top)?))
    }

    fn pop_into(&mut self, value: i32) -> Result<(), VmError> {
        let sp = self.sp.wrapping_sub(1);
        self.store(sp as i64, value)?;
        self.sp = sp;
        Ok(())
    }
}

/// 1 for true, 0 for false.
fn flag(condition: bool) -> i32 {
    condition as i32
}
