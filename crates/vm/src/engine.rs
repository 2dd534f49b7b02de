//! The P-code engine: a bound program plus the fetch-execute loop.

use tracing::{debug, trace, warn};

use crate::config::Config;
use crate::error::VmError;
use crate::machine::Machine;
use pcode_common::{Instruction, Program};

/// Executes one bound instruction sequence.
///
/// The sequence is bound exactly once, either at construction or through
/// [`Pcode::bind`] on an engine made with [`Pcode::with_capacity`]. Each
/// run starts from a fresh [`Machine`], so the engine itself never holds
/// register state.
#[derive(Debug, Clone)]
pub struct Pcode {
    config: Config,
    instructions: Vec<Instruction>,
    bound: bool,
}

/// Final state of a run that reached the halt sentinel.
#[derive(Debug, Clone)]
pub struct Halted {
    machine: Machine,
    last: Instruction,
    steps: u64,
    max_level: i32,
}

impl Pcode {
    /// Bind `program` under the reference sizing.
    pub fn new(program: Program) -> Result<Self, VmError> {
        Self::with_config(program, Config::default())
    }

    /// Bind `program` under `config`.
    pub fn with_config(program: Program, config: Config) -> Result<Self, VmError> {
        let mut pcode = Self::with_capacity_and_config(program.len(), config)?;
        pcode.bind(program)?;
        Ok(pcode)
    }

    /// An engine with room for `capacity` instructions and nothing bound.
    pub fn with_capacity(capacity: usize) -> Result<Self, VmError> {
        Self::with_capacity_and_config(capacity, Config::default())
    }

    pub fn with_capacity_and_config(capacity: usize, config: Config) -> Result<Self, VmError> {
        check_len(capacity, &config)?;
        Ok(Self {
            config,
            instructions: Vec::with_capacity(capacity),
            bound: false,
        })
    }

    /// Bind the instruction sequence. Only the first bind succeeds.
    pub fn bind(&mut self, program: Program) -> Result<(), VmError> {
        if self.bound {
            return Err(VmError::AlreadyBound);
        }
        check_len(program.len(), &self.config)?;
        self.instructions.extend(program.instructions);
        self.bound = true;
        Ok(())
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// The bound instructions; empty if nothing is bound.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run to the halt sentinel and return the conventional result.
    ///
    /// The result is the stack slot at `max_level + level + address` of the
    /// last instruction executed. See [`Halted::result`].
    pub fn run(&self) -> Result<i32, VmError> {
        self.execute()?.result()
    }

    /// Run until `pc` returns to 0 and hand back the final state.
    ///
    /// At least one instruction always executes, so a program starting at
    /// index 0 does not halt immediately.
    pub fn execute(&self) -> Result<Halted, VmError> {
        if !self.bound || self.instructions.is_empty() {
            return Err(VmError::EmptyProgram);
        }

        let mut machine = Machine::new(self.config.stack_size);
        let mut steps: u64 = 0;
        debug!(
            instructions = self.instructions.len(),
            stack_size = self.config.stack_size,
            "starting run"
        );

        loop {
            let instr = machine.fetch(&self.instructions)?;
            trace!(
                pc = machine.pc(),
                bp = machine.bp(),
                sp = machine.sp(),
                %instr,
                "dispatch"
            );
            machine.execute(&instr)?;
            steps += 1;

            if machine.pc() == 0 {
                let halted = Halted {
                    machine,
                    last: instr,
                    steps,
                    max_level: self.config.max_level,
                };
                debug!(steps, result_index = halted.result_index(), "halted");
                return Ok(halted);
            }

            if let Some(limit) = self.config.step_limit {
                if steps >= limit {
                    warn!(limit, pc = machine.pc(), "step limit exceeded");
                    return Err(VmError::StepLimitExceeded { limit });
                }
            }
        }
    }
}

impl Halted {
    /// Stack index named by the last instruction's level and address.
    pub fn result_index(&self) -> i64 {
        self.max_level as i64 + self.last.level() as i64 + self.last.address() as i64
    }

    /// The value at [`Halted::result_index`].
    ///
    /// This relies on the program's final instruction encoding where its
    /// result lives. Callers that know the slot should use
    /// [`Halted::slot`] instead.
    pub fn result(&self) -> Result<i32, VmError> {
        self.machine.slot(self.result_index())
    }

    /// Read any stack slot of the final state.
    pub fn slot(&self, index: i64) -> Result<i32, VmError> {
        self.machine.slot(index)
    }

    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// The instruction whose execution halted the program.
    pub fn last_instruction(&self) -> Instruction {
        self.last
    }

    /// Instructions executed, including the last one.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

fn check_len(len: usize, config: &Config) -> Result<(), VmError> {
    let limit = config.max_program_len();
    if len > limit {
        return Err(VmError::AddressSpaceExceeded { len, limit });
    }
    Ok(())
}
