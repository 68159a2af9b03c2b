//! System construction and top-level `System` type.
//!
//! This module builds the memory system from configuration. It performs:
//! 1. **Sizing:** Instruction and data memory capacities come from `config.memory`.
//! 2. **Image loading:** Pre-decoded instruction words and data words are placed at address 0.

use tracing::info;

use crate::common::error::SimError;
use crate::config::Config;
use crate::soc::memory::{DataMemory, InstructionMemory};

/// Top-level system instance: the instruction and data memories the core is wired to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct System {
    /// Read-only program storage.
    pub imem: InstructionMemory,
    /// Byte-addressable data storage.
    pub dmem: DataMemory,
}

impl System {
    /// Builds an empty system sized from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            imem: InstructionMemory::new(config.memory.imem_words),
            dmem: DataMemory::new(config.memory.dmem_bytes),
        }
    }

    /// Builds a system with a program and an initial data image loaded.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulator configuration (memory sizes).
    /// * `program` - Instruction words, placed from word 0.
    /// * `data` - Data words, unpacked little-endian from byte 0.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidInput` if either image exceeds its memory.
    pub fn with_images(config: &Config, program: &[u32], data: &[u32]) -> Result<Self, SimError> {
        let imem = InstructionMemory::with_program(config.memory.imem_words, program)?;
        let dmem = DataMemory::with_words(config.memory.dmem_bytes, data)?;
        info!(
            program_words = program.len(),
            data_words = data.len(),
            imem_words = imem.depth(),
            dmem_bytes = dmem.size(),
            "system images loaded"
        );
        Ok(Self { imem, dmem })
    }
}
