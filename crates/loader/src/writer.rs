//! Writer: program → canonical text.
//!
//! Output is the count line followed by one `OPCODE;level;address` line per
//! instruction. No comments, no blank lines, no whitespace inside lines.

use pcode_common::Program;

pub(crate) fn dump(program: &Program, separator: char) -> String {
    let mut lines = Vec::with_capacity(program.len() + 1);
    lines.push(program.len().to_string());

    for instr in program {
        lines.push(format!(
            "{}{separator}{}{separator}{}",
            instr.opcode().mnemonic(),
            instr.level(),
            instr.address()
        ));
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcode_common::{Instruction, Opcode};

    #[test]
    fn empty_program() {
        assert_eq!(dump(&Program::default(), ';'), "0\n");
    }

    #[test]
    fn canonical_lines() {
        let program = Program::new(vec![
            Instruction::new(Opcode::Int, 0, 4),
            Instruction::new(Opcode::Opr, -3, 0),
        ]);
        assert_eq!(dump(&program, ';'), "2\nINT;0;4\nOPR;-3;0\n");
    }

    #[test]
    fn custom_separator() {
        let program = Program::new(vec![Instruction::new(Opcode::Cal, 1, 9)]);
        assert_eq!(dump(&program, ','), "1\nCAL,1,9\n");
    }
}
