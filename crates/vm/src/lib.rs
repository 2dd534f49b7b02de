//! P-code virtual machine.
//!
//! The machine is a stack machine for block-structured programs:
//! - An operand stack of 32-bit integers that also holds activation frames
//! - Three registers: program counter, base register, stack top
//! - Static links for reaching variables in enclosing scopes
//!
//! A program halts when `pc` becomes 0 after an instruction, normally
//! because the outermost `OPR 0` (return) read a return address of 0.
//!
//! # Usage
//!
//! ```
//! use pcode_common::{Instruction, Opcode, Program};
//! use pcode_vm::run;
//!
//! let program = Program::new(vec![
//!     Instruction::new(Opcode::Lit, 0, 3),
//!     Instruction::new(Opcode::Lit, 0, 4),
//!     Instruction::new(Opcode::Opr, 0, 2),
//!     // return; level + address = -3 names slot 0 as the result
//!     Instruction::new(Opcode::Opr, -3, 0),
//! ]);
//!
//! assert_eq!(run(&program).unwrap(), 7);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod execute;
pub mod machine;

pub use config::Config;
pub use engine::{Halted, Pcode};
pub use error::VmError;
pub use machine::Machine;

use pcode_common::Program;

/// Execute a program under the reference sizing and return its result.
///
/// # Errors
///
/// Returns [`VmError`] if the program is too large or empty, or if
/// execution fails (stack bounds, division by zero, bad sub-operation,
/// jump outside the program).
pub fn run(program: &Program) -> Result<i32, VmError> {
    Pcode::new(program.clone())?.run()
}

#[cfg(test)]
mod proptests {
    use super::*;
    use pcode_common::{Instruction, Opcode};
    use proptest::prelude::*;

    fn lit(v: i32) -> Instruction {
        Instruction::new(Opcode::Lit, 0, v)
    }

    fn opr(id: i32) -> Instruction {
        Instruction::new(Opcode::Opr, 0, id)
    }

    /// Apply a binary sub-operation to `a` and `b` on a fresh machine.
    fn binary(id: i32, a: i32, b: i32) -> i32 {
        let mut m = Machine::new(8);
        m.execute(&lit(a)).unwrap();
        m.execute(&lit(b)).unwrap();
        m.execute(&opr(id)).unwrap();
        assert_eq!(m.sp(), 0);
        m.top().unwrap()
    }

    proptest! {
        /// A pushed literal comes back as the result of a halting return
        /// that names slot 0.
        #[test]
        fn literal_roundtrip(v in any::<i32>()) {
            let program = Program::new(vec![lit(v), Instruction::new(Opcode::Opr, -3, 0)]);
            prop_assert_eq!(run(&program), Ok(v));
        }

        #[test]
        fn arithmetic_matches_wrapping_ops(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(binary(2, a, b), a.wrapping_add(b));
            prop_assert_eq!(binary(3, a, b), a.wrapping_sub(b));
            prop_assert_eq!(binary(4, a, b), a.wrapping_mul(b));
        }

        #[test]
        fn division_by_nonzero(a in any::<i32>(), b in any::<i32>().prop_filter("nonzero", |b| *b != 0)) {
            prop_assert_eq!(binary(5, a, b), a.wrapping_div(b));
        }

        #[test]
        fn relational_ops_are_flags(a in any::<i32>(), b in any::<i32>()) {
            for id in 7..=12 {
                let r = binary(id, a, b);
                prop_assert!(r == 0 || r == 1, "OPR {} gave {}", id, r);
            }
        }

        #[test]
        fn complements(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(binary(8, a, b), 1 - binary(7, a, b));
            prop_assert_eq!(binary(11, a, b), 1 - binary(9, a, b));
        }

        /// JPC consumes exactly one slot whichever way it goes.
        #[test]
        fn jpc_pops_once(v in any::<i32>(), target in 0..100i32) {
            let mut m = Machine::new(8);
            m.execute(&lit(11)).unwrap();
            m.execute(&lit(v)).unwrap();
            m.execute(&Instruction::new(Opcode::Jpc, 0, target)).unwrap();
            prop_assert_eq!(m.sp(), 0);
            let expected_pc = if v == 1 { target } else { 3 };
            prop_assert_eq!(m.pc(), expected_pc);
        }

        #[test]
        fn find_base_zero_is_bp(bp in 0..64i32) {
            let mut m = Machine::new(64);
            m.bp = bp;
            prop_assert_eq!(m.find_base(0), Ok(bp));
        }
    }
}
