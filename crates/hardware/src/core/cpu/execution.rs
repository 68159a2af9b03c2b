//! Cycle orchestration.
//!
//! This module advances the pipeline by one clock cycle. It performs:
//! 1. **Signal Reset:** Clears last cycle's stall and redirect signals.
//! 2. **Stage Evaluation:** Runs WB, MEM, EX, ID, IF in that order so that register writes
//!    and forwarded values reach earlier stages before they read their operands.
//! 3. **State Dump:** Formats registers and leading data-memory words for per-cycle tracing.

use crate::common::error::SimError;
use crate::core::Cpu;
use crate::core::pipeline::signals::HazardSignals;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};

impl Cpu {
    /// Executes one clock cycle.
    ///
    /// A halt retiring in writeback ends the cycle immediately; the younger instructions
    /// in flight are discarded.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Trap` when a faulting instruction reaches writeback. The state
    /// reflects every instruction older than the faulting one.
    pub fn tick(&mut self) -> Result<(), SimError> {
        if self.halted {
            return Ok(());
        }
        self.stats.cycles += 1;
        self.signals = HazardSignals::default();

        wb_stage(self)?;
        if self.halted {
            return Ok(());
        }
        mem_stage(self);
        execute_stage(self);
        decode_stage(self);
        fetch_stage(self);
        Ok(())
    }

    /// Formats the register file and the first `dump_words` data-memory words.
    pub fn dump_state(&self) -> String {
        let mut out = format!("pc = {:08x}\n{}", self.pc, self.regs);
        out.extend((0..self.dump_words).map_while(|idx| {
            self.dmem_word(idx)
                .map(|word| format!("dmem[{idx:03}] = {word:08x}\n"))
        }));
        out
    }
}
