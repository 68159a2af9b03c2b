//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains the register file and program counter.
//! 2. **Pipeline Control:** Owns the four pipeline latches and the per-cycle hazard signals.
//! 3. **Memory Integration:** Owns the instruction and data memories of the `System`.

/// Cycle orchestration and state dumps.
pub mod execution;

use crate::common::RegisterFile;
use crate::config::Config;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::pipeline::signals::HazardSignals;
use crate::soc::System;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state and components.
///
/// Every pipeline latch starts disabled and the PC starts at `config.general.start_pc`.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Program Counter.
    pub pc: u32,
    /// Instruction and data memories.
    pub system: System,

    /// IF/ID Latch.
    pub if_id: IfId,
    /// ID/EX Latch.
    pub id_ex: IdEx,
    /// EX/MEM Latch.
    pub ex_mem: ExMem,
    /// MEM/WB Latch.
    pub mem_wb: MemWb,
    /// Stall and redirect signals raised during the current cycle.
    pub signals: HazardSignals,

    /// Performance statistics.
    pub stats: SimStats,
    /// Set when a halt instruction retires.
    pub halted: bool,
    /// Number of data-memory words included in state dumps.
    pub dump_words: usize,
}

impl Cpu {
    /// Creates a new CPU instance with the specified system and configuration.
    ///
    /// # Arguments
    ///
    /// * `system` - The memories, already loaded with the program and data images.
    /// * `config` - The simulator configuration parameters.
    ///
    /// # Returns
    ///
    /// A new `Cpu` with empty pipeline latches, ready for its first cycle.
    pub fn new(system: System, config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(config.pipeline.hardwire_zero_register),
            pc: config.general.start_pc,
            system,
            if_id: IfId::bubble(),
            id_ex: IdEx::bubble(),
            ex_mem: ExMem::bubble(),
            mem_wb: MemWb::bubble(),
            signals: HazardSignals::default(),
            stats: SimStats::default(),
            halted: false,
            dump_words: config.pipeline.dump_words,
        }
    }

    /// Number of load-use hazard stalls so far.
    pub const fn hazard_count(&self) -> u64 {
        self.stats.load_use_stalls
    }

    /// Reads an aligned data-memory word by word index.
    pub fn dmem_word(&self, idx: usize) -> Option<u32> {
        self.system.dmem.read_word(idx)
    }
}
