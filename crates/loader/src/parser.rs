//! Parser for P-code lines → instruction count and instructions.

use crate::error::LoadError;
use crate::lexer::{split_fields, Line};
use pcode_common::{Instruction, Opcode};

/// Parse the leading instruction-count line.
pub(crate) fn parse_count(line: &Line) -> Result<usize, LoadError> {
    line.text.parse().map_err(|_| LoadError::InvalidCount {
        line: line.number,
        token: line.text.clone(),
    })
}

/// Parse one `OPCODE<sep>level<sep>address` line.
pub(crate) fn parse_instruction(line: &Line, separator: char) -> Result<Instruction, LoadError> {
    let [mnemonic, level, address] = split_fields(line, separator)?;

    let opcode: Opcode = mnemonic.parse().map_err(|_| LoadError::UnknownOpcode {
        line: line.number,
        token: mnemonic.to_string(),
    })?;
    let level = parse_number(level, line.number)?;
    let address = parse_number(address, line.number)?;

    Ok(Instruction::new(opcode, level, address))
}

fn parse_number(token: &str, line: usize) -> Result<i32, LoadError> {
    token.parse().map_err(|_| LoadError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(number: usize, text: &str) -> Line {
        Line {
            number,
            text: text.to_string(),
        }
    }

    #[test]
    fn count() {
        assert_eq!(parse_count(&line(1, "12")), Ok(12));
        assert_eq!(parse_count(&line(1, "0")), Ok(0));
    }

    #[test]
    fn negative_count_rejected() {
        assert_eq!(
            parse_count(&line(2, "-1")),
            Err(LoadError::InvalidCount {
                line: 2,
                token: "-1".to_string()
            })
        );
    }

    #[test]
    fn instruction_fields() {
        let instr = parse_instruction(&line(1, "STO;1;4"), ';').unwrap();
        assert_eq!(instr, Instruction::new(Opcode::Sto, 1, 4));
    }

    #[test]
    fn lowercase_mnemonic() {
        let instr = parse_instruction(&line(1, "opr;0;2"), ';').unwrap();
        assert_eq!(instr.opcode(), Opcode::Opr);
    }

    #[test]
    fn signed_numbers() {
        let instr = parse_instruction(&line(1, "OPR;-3;+0"), ';').unwrap();
        assert_eq!(instr, Instruction::new(Opcode::Opr, -3, 0));
    }

    #[test]
    fn extreme_literals() {
        let instr = parse_instruction(&line(1, "LIT;0;-2147483648"), ';').unwrap();
        assert_eq!(instr.address(), i32::MIN);
    }

    #[test]
    fn unknown_opcode() {
        assert_eq!(
            parse_instruction(&line(7, "HLT;0;0"), ';'),
            Err(LoadError::UnknownOpcode {
                line: 7,
                token: "HLT".to_string()
            })
        );
    }

    #[test]
    fn invalid_level() {
        assert_eq!(
            parse_instruction(&line(3, "LOD;a;3"), ';'),
            Err(LoadError::InvalidNumber {
                line: 3,
                token: "a".to_string()
            })
        );
    }

    #[test]
    fn address_out_of_range() {
        assert_eq!(
            parse_instruction(&line(3, "LIT;0;2147483648"), ';'),
            Err(LoadError::InvalidNumber {
                line: 3,
                token: "2147483648".to_string()
            })
        );
    }
}
