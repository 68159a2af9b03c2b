//! ALU control generation.
//!
//! Maps a classified instruction to the control code driven onto the ALU. Address
//! computations (loads, stores, jumps, upper immediates) add; branches and the
//! set-less-than operations subtract and are resolved from the flags.

use crate::core::pipeline::signals::AluControl;
use crate::isa::instruction::{ArithOp, Instruction};

impl AluControl {
    /// Generates the ALU control code for an instruction.
    ///
    /// Encodings outside the supported subset never reach this point; they are rejected
    /// by [`Instruction::classify`] with an illegal-instruction trap.
    pub const fn generate(inst: &Instruction) -> Self {
        match *inst {
            Instruction::Load { .. }
            | Instruction::Store { .. }
            | Instruction::Jal { .. }
            | Instruction::Jalr { .. }
            | Instruction::Lui { .. }
            | Instruction::Auipc { .. }
            | Instruction::Halt => Self::Add,
            Instruction::Branch { .. } => Self::Sub,
            Instruction::Op { op, .. } | Instruction::OpImm { op, .. } => Self::for_arith(op),
        }
    }

    /// Control code for a register-register or register-immediate operation.
    pub const fn for_arith(op: ArithOp) -> Self {
        match op {
            ArithOp::Add => Self::Add,
            ArithOp::Sub | ArithOp::Slt | ArithOp::Sltu => Self::Sub,
            ArithOp::Sll => Self::Sll,
            ArithOp::Xor => Self::Xor,
            ArithOp::Srl => Self::Srl,
            ArithOp::Sra => Self::Sra,
            ArithOp::Or => Self::Or,
            ArithOp::And => Self::And,
        }
    }
}
