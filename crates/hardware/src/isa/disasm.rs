//! Instruction Disassembler for the RV32I subset.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use rv32pipe_core::isa::disasm::disassemble;
//! let text = disassemble(0x00A00513); // ADDI x10, x0, 10
//! assert_eq!(text, "addi a0, zero, 10");
//! ```

use crate::common::constants::INSTRUCTION_ZERO;
use crate::isa::abi::reg_name;
use crate::isa::decode::decode;
use crate::isa::instruction::{ArithOp, BranchKind, Instruction, LoadKind, StoreKind};
use crate::isa::rv32i::opcodes;

/// Disassembles a 32-bit instruction into a human-readable string.
///
/// Returns a mnemonic like `"add a0, a1, a2"`, `"bubble"` for the all-zero word, or
/// `"unknown (0x........)"` for encodings outside the supported subset.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    match inst {
        INSTRUCTION_ZERO => return "bubble".to_string(),
        opcodes::NOP => return "nop".to_string(),
        opcodes::ECALL => return "ecall".to_string(),
        opcodes::EBREAK => return "ebreak".to_string(),
        _ => {}
    }

    let Ok(classified) = Instruction::classify(&decode(inst)) else {
        return format!("unknown ({inst:#010x})");
    };

    match classified {
        Instruction::Lui { rd, imm } => {
            format!("lui {}, {:#x}", reg_name(rd), (imm as u32) >> 12)
        }
        Instruction::Auipc { rd, imm } => {
            format!("auipc {}, {:#x}", reg_name(rd), (imm as u32) >> 12)
        }
        Instruction::Jal { rd, imm } => format!("jal {}, {imm}", reg_name(rd)),
        Instruction::Jalr { rd, rs1, imm } => {
            format!("jalr {}, {imm}({})", reg_name(rd), reg_name(rs1))
        }
        Instruction::Branch {
            kind,
            rs1,
            rs2,
            imm,
        } => {
            let mn = match kind {
                BranchKind::Beq => "beq",
                BranchKind::Bne => "bne",
                BranchKind::Blt => "blt",
                BranchKind::Bge => "bge",
                BranchKind::Bltu => "bltu",
                BranchKind::Bgeu => "bgeu",
            };
            format!("{mn} {}, {}, {imm}", reg_name(rs1), reg_name(rs2))
        }
        Instruction::Load { kind, rd, rs1, imm } => {
            let mn = match kind {
                LoadKind::Lb => "lb",
                LoadKind::Lh => "lh",
                LoadKind::Lw => "lw",
                LoadKind::Lbu => "lbu",
                LoadKind::Lhu => "lhu",
            };
            format!("{mn} {}, {imm}({})", reg_name(rd), reg_name(rs1))
        }
        Instruction::Store {
            kind,
            rs1,
            rs2,
            imm,
        } => {
            let mn = match kind {
                StoreKind::Sb => "sb",
                StoreKind::Sh => "sh",
                StoreKind::Sw => "sw",
            };
            format!("{mn} {}, {imm}({})", reg_name(rs2), reg_name(rs1))
        }
        Instruction::OpImm { op, rd, rs1, imm } => {
            let shamt = imm & 0x1F;
            match op {
                ArithOp::Sll => format!("slli {}, {}, {shamt}", reg_name(rd), reg_name(rs1)),
                ArithOp::Srl => format!("srli {}, {}, {shamt}", reg_name(rd), reg_name(rs1)),
                ArithOp::Sra => format!("srai {}, {}, {shamt}", reg_name(rd), reg_name(rs1)),
                ArithOp::Sltu => format!("sltiu {}, {}, {imm}", reg_name(rd), reg_name(rs1)),
                _ => format!(
                    "{}i {}, {}, {imm}",
                    arith_mnemonic(op),
                    reg_name(rd),
                    reg_name(rs1)
                ),
            }
        }
        Instruction::Op { op, rd, rs1, rs2 } => format!(
            "{} {}, {}, {}",
            arith_mnemonic(op),
            reg_name(rd),
            reg_name(rs1),
            reg_name(rs2)
        ),
        Instruction::Halt => "halt".to_string(),
    }
}

/// Base mnemonic of an arithmetic operation; immediate forms append `i`.
const fn arith_mnemonic(op: ArithOp) -> &'static str {
    match op {
        ArithOp::Add => "add",
        ArithOp::Sub => "sub",
        ArithOp::Sll => "sll",
        ArithOp::Slt => "slt",
        ArithOp::Sltu => "sltu",
        ArithOp::Xor => "xor",
        ArithOp::Srl => "srl",
        ArithOp::Sra => "sra",
        ArithOp::Or => "or",
        ArithOp::And => "and",
    }
}
