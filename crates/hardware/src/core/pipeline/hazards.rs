//! Data Hazard Detection and Forwarding.
//!
//! This module implements the logic for maintaining pipeline consistency when data
//! dependencies exist between instructions. It provides:
//! 1. **Hazard Detection:** Identifies load-use hazards that require a one-cycle stall.
//! 2. **Operand Forwarding:** Resolves Read-After-Write (RAW) hazards by overwriting the
//!    register-read snapshot in ID/EX before the execute stage consumes it.

use tracing::debug;

use crate::core::pipeline::latches::{ExMem, IdEx};
use crate::isa::instruction::Instruction;

/// Forwarding path that supplied an operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForwardSource {
    /// Result leaving the memory stage this cycle.
    Memory,
    /// Value being written back this cycle.
    Writeback,
}

/// Checks if a pipeline stall is needed due to a load-use data hazard.
///
/// A load-use hazard occurs when the instruction being decoded reads a register that
/// the instruction just executed is about to load from memory.
///
/// # Arguments
///
/// * `ex_mem` - The EX/MEM latch as produced by the execute stage this cycle.
/// * `inst` - The instruction being decoded.
///
/// # Returns
///
/// `true` if a stall is required to resolve the load-use hazard, `false` otherwise.
///
/// # Examples
///
/// ```ignore
/// // EX/MEM: lw  x1, 0(x2)    <- loads into x1
/// // IF/ID:  add x3, x1, x4   <- uses x1
/// //
/// // The add is held in IF/ID for one cycle while a bubble enters ID/EX.
/// let stall = need_stall_load_use(&cpu.ex_mem, &inst);
/// ```
pub fn need_stall_load_use(ex_mem: &ExMem, inst: &Instruction) -> bool {
    if !ex_mem.enable || ex_mem.entry.trap.is_some() || !ex_mem.entry.ctrl.mem_read {
        return false;
    }

    let rd = ex_mem.entry.rd;
    if rd == 0 {
        return false;
    }

    inst.rs1() == Some(rd) || inst.rs2() == Some(rd)
}

/// Forwards a produced value into the pending ID/EX operands.
///
/// Every source register of the pending instruction that matches `rd` has its
/// register-read snapshot replaced with `val`. For stores the `rs2` snapshot is the
/// store data; the ALU's second operand stays the immediate.
///
/// # Arguments
///
/// * `id_ex` - The ID/EX latch the execute stage will read later this cycle.
/// * `rd` - Destination register of the producer, or `None` if it writes no register.
/// * `val` - The value the producer will write.
/// * `source` - Which forwarding path is supplying the value (for tracing).
///
/// # Returns
///
/// `true` if at least one operand was substituted.
pub fn forward_to_execute(
    id_ex: &mut IdEx,
    rd: Option<usize>,
    val: u32,
    source: ForwardSource,
) -> bool {
    let Some(rd) = rd else {
        return false;
    };
    if rd == 0 || !id_ex.enable || id_ex.entry.trap.is_some() {
        return false;
    }

    let entry = &mut id_ex.entry;
    let mut hit = false;

    if entry.rs1 == Some(rd) {
        debug!(pc = entry.pc, "forward {source:?} -> rs1=x{rd} val={val:#010x}");
        entry.rv1 = val;
        hit = true;
    }
    if entry.rs2 == Some(rd) {
        debug!(pc = entry.pc, "forward {source:?} -> rs2=x{rd} val={val:#010x}");
        entry.rv2 = val;
        hit = true;
    }
    hit
}
