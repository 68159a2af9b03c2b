//! Execute (EX) Stage.
//!
//! This module implements the third stage of the instruction pipeline. It performs:
//! 1. **Operand Selection:** Chooses ALU inputs from the (possibly forwarded) register
//!    values, the PC, zero, or the immediate.
//! 2. **ALU Execution:** Generates the ALU control code and computes the result and flags.
//! 3. **Branch Resolution:** Decides taken branches and jump targets and raises a redirect
//!    that flushes the front end in the same cycle.

use tracing::{debug, trace};

use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMem, ExMemEntry};
use crate::core::pipeline::signals::{AluControl, OpASrc, OpBSrc};
use crate::core::units::alu::Alu;
use crate::core::units::bru::Bru;
use crate::isa::instruction::{ArithOp, Instruction};

/// Executes the execute stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Behavior
///
/// - `SLT`/`SLTU` results are taken from the flags of the subtraction
/// - Taken branches and `JAL` redirect to `pc + imm`; `JALR` to `(rs1 + imm) & !1`
/// - Instructions carrying a trap pass through unexecuted
pub fn execute_stage(cpu: &mut Cpu) {
    let id = std::mem::take(&mut cpu.id_ex);
    if !id.enable {
        cpu.ex_mem = ExMem::bubble();
        return;
    }
    let e = id.entry;

    let pass = ExMemEntry {
        pc: e.pc,
        inst: e.inst,
        rd: e.rd,
        alu: 0,
        store_data: e.rv2,
        ctrl: e.ctrl,
        trap: e.trap,
    };

    let op = match e.op {
        Some(op) if e.trap.is_none() => op,
        _ => {
            cpu.ex_mem = ExMem::valid(pass);
            return;
        }
    };

    let alu_ctrl = AluControl::generate(&op);
    let a = match e.ctrl.a_src {
        OpASrc::Reg1 => e.rv1,
        OpASrc::Pc => e.pc,
        OpASrc::Zero => 0,
    };
    let b = match e.ctrl.b_src {
        OpBSrc::Reg2 => e.rv2,
        OpBSrc::Imm => e.imm as u32,
    };
    let out = Alu::execute(alu_ctrl, a, b);

    let alu = match op {
        Instruction::Op {
            op: ArithOp::Slt, ..
        }
        | Instruction::OpImm {
            op: ArithOp::Slt, ..
        } => u32::from(out.less_signed()),
        Instruction::Op {
            op: ArithOp::Sltu,
            ..
        }
        | Instruction::OpImm {
            op: ArithOp::Sltu,
            ..
        } => u32::from(out.less_unsigned()),
        _ => out.result,
    };

    let redirect = match op {
        Instruction::Branch { kind, imm, .. } => {
            Bru::taken(kind, &out.flags).then(|| Bru::target(e.pc, imm))
        }
        Instruction::Jal { .. } => Some(out.result),
        Instruction::Jalr { .. } => Some(out.result & !1),
        _ => None,
    };

    trace!(
        pc = e.pc,
        "EX  ctrl={:04b} a={a:#010x} b={b:#010x} -> {alu:#010x}",
        alu_ctrl.code()
    );

    if let Some(target) = redirect {
        debug!(pc = e.pc, "redirect to {target:#010x}, flushing IF/ID and ID/EX");
        cpu.signals.redirect = Some(target);
        cpu.stats.branch_flushes += 1;
    }

    cpu.ex_mem = ExMem::valid(ExMemEntry { alu, ..pass });
}
