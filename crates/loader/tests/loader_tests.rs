//! Integration tests: text programs loaded and executed end to end.

use pcode_common::opcode::ALL_OPCODES;
use pcode_common::{Instruction, Program};
use pcode_loader::{dump, load, LoadError, Loader};
use pcode_vm::{run, VmError};
use proptest::prelude::*;

fn load_and_run(text: &str) -> Result<i32, VmError> {
    let program = load(text).expect("program text should load");
    run(&program)
}

const FACTORIAL: &str = "\
# fact(5) with n and f as main's locals 3 and 4
23
JMP;0;16
INT;0;3
LOD;1;4
LOD;1;3
OPR;0;4
STO;1;4
LOD;1;3
LIT;0;1
OPR;0;3
STO;1;3
LOD;1;3
LIT;0;1
OPR;0;9
JPC;0;15
CAL;1;1
OPR;0;0
INT;0;5
LIT;0;5
STO;0;3
LIT;0;1
STO;0;4
CAL;0;1
OPR;1;0
";

#[test]
fn add_scenario_from_text() {
    assert_eq!(load_and_run("4\nLIT;0;3\nLIT;0;4\nOPR;0;2\nOPR;-3;0\n"), Ok(7));
}

#[test]
fn is_odd_scenario_from_text() {
    assert_eq!(load_and_run("3\nLIT;0;7\nOPR;0;6\nOPR;-3;0\n"), Ok(1));
}

#[test]
fn factorial_from_text() {
    assert_eq!(load_and_run(FACTORIAL), Ok(120));
}

#[test]
fn factorial_survives_reformatting() {
    let program = load(FACTORIAL).unwrap();
    let canonical = dump(&program);
    assert!(!canonical.contains('#'));
    assert_eq!(load(&canonical), Ok(program));
}

#[test]
fn spaced_lowercase_text() {
    let text = "3\n lit ; 0 ; 10\n opr ; 0 ; 1\n opr ; -3 ; 0\n";
    assert_eq!(load_and_run(text), Ok(-10));
}

#[test]
fn comma_separated_text() {
    let loader = Loader::with_separator(',').unwrap();
    let program = loader.load("2\nLIT,0,5\nJMP,-3,0\n").unwrap();
    assert_eq!(run(&program), Ok(5));
}

#[test]
fn division_by_zero_from_text() {
    assert_eq!(
        load_and_run("4\nLIT;0;1\nLIT;0;0\nOPR;0;5\nOPR;-3;0\n"),
        Err(VmError::DivisionByZero { at: 2 })
    );
}

#[test]
fn truncated_file_is_rejected() {
    let truncated: String = FACTORIAL.lines().take(10).collect::<Vec<_>>().join("\n");
    assert_eq!(
        load(&truncated),
        Err(LoadError::CountMismatch {
            declared: 23,
            found: 8
        })
    );
}

fn arb_instruction() -> impl Strategy<Value = Instruction> {
    (
        prop::sample::select(&ALL_OPCODES[..]),
        any::<i32>(),
        any::<i32>(),
    )
        .prop_map(|(op, level, address)| Instruction::new(op, level, address))
}

proptest! {
    /// Canonical text always reloads to the same program.
    #[test]
    fn dump_load_roundtrip(instrs in prop::collection::vec(arb_instruction(), 0..64)) {
        let program = Program::new(instrs);
        prop_assert_eq!(load(&dump(&program)), Ok(program));
    }

    /// Every accepted separator keeps negative fields intact through a reload.
    #[test]
    fn dump_load_roundtrip_any_separator(
        instrs in prop::collection::vec(arb_instruction(), 0..16),
        sep in prop::sample::select(vec![';', ',', '|', ':', '/', '*']),
    ) {
        let loader = Loader::with_separator(sep).unwrap();
        let program = Program::new(instrs);
        prop_assert_eq!(loader.load(&loader.dump(&program)), Ok(program));
    }
}
