//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline.
//! It commits results to the register file, forwards the committed value to the
//! instruction waiting in ID/EX, raises traps carried by the retiring instruction,
//! and updates retirement statistics.

use tracing::{info, trace};

use crate::common::error::SimError;
use crate::core::Cpu;
use crate::core::pipeline::hazards::{ForwardSource, forward_to_execute};

/// Executes the writeback stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Behavior
///
/// - Writes load data, link addresses, or ALU results to the destination register
/// - Forwards the written value into the pending ID/EX operands (WB→EX)
/// - Sets `cpu.halted` when a halt instruction retires
///
/// # Errors
///
/// Returns `SimError::Trap` if the retiring instruction carries a trap. Nothing is
/// written for it.
pub fn wb_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    let wb = std::mem::take(&mut cpu.mem_wb);
    if !wb.enable {
        return Ok(());
    }
    let entry = wb.entry;

    if let Some(trap) = entry.trap {
        return Err(SimError::Trap { pc: entry.pc, trap });
    }

    cpu.stats.record_retired(&entry.ctrl);

    if entry.ctrl.halt {
        info!(pc = entry.pc, cycle = cpu.stats.cycles, "halt retired");
        cpu.halted = true;
        return Ok(());
    }

    if entry.ctrl.reg_write {
        let val = entry.writeback_value();
        trace!(pc = entry.pc, "WB  x{} <= {val:#010x}", entry.rd);
        cpu.regs.write(entry.rd, val);

        if forward_to_execute(
            &mut cpu.id_ex,
            Some(entry.rd),
            val,
            ForwardSource::Writeback,
        ) {
            cpu.stats.forwards_wb += 1;
        }
    } else {
        trace!(pc = entry.pc, "WB  (no register write)");
    }
    Ok(())
}
