//! Instruction memory.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::error::{SimError, Trap};

/// Fixed-capacity instruction memory holding 32-bit words.
///
/// Unloaded words read as zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionMemory {
    words: Vec<u32>,
}

impl InstructionMemory {
    /// Creates a zero-filled instruction memory of `depth` words.
    pub fn new(depth: usize) -> Self {
        Self {
            words: vec![0; depth],
        }
    }

    /// Creates an instruction memory of `depth` words with `program` loaded at word 0.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidInput` if the program does not fit.
    pub fn with_program(depth: usize, program: &[u32]) -> Result<Self, SimError> {
        if program.len() > depth {
            return Err(SimError::invalid_input(format!(
                "program of {} words exceeds instruction memory of {depth} words",
                program.len()
            )));
        }
        let mut imem = Self::new(depth);
        imem.words[..program.len()].copy_from_slice(program);
        Ok(imem)
    }

    /// Fetches the instruction word at byte address `pc`.
    ///
    /// # Errors
    ///
    /// * `Trap::InstructionAddressMisaligned` if `pc` is not a multiple of 4.
    /// * `Trap::InstructionAccessFault` if `pc / 4` is past the end of memory.
    pub fn fetch(&self, pc: u32) -> Result<u32, Trap> {
        if pc % INSTRUCTION_SIZE != 0 {
            return Err(Trap::InstructionAddressMisaligned(pc));
        }
        self.words
            .get((pc / INSTRUCTION_SIZE) as usize)
            .copied()
            .ok_or(Trap::InstructionAccessFault(pc))
    }

    /// Number of words in memory.
    pub fn depth(&self) -> usize {
        self.words.len()
    }

    /// All words, in address order.
    pub fn words(&self) -> &[u32] {
        &self.words
    }
}
