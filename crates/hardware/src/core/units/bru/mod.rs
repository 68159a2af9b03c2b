//! Branch Resolution Unit (BRU).
//!
//! Resolves conditional branches in the execute stage. The ALU subtracts `rs2` from
//! `rs1`; the branch outcome is a pure function of the branch kind and the resulting
//! flags. There is no prediction: every fetch assumes not-taken and a taken branch
//! redirects the front end.

use crate::core::units::alu::AluFlags;
use crate::isa::instruction::BranchKind;

/// Branch resolution unit.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Decides whether a conditional branch is taken.
    ///
    /// # Arguments
    ///
    /// * `kind` - The branch comparison.
    /// * `flags` - Flags of `rs1 - rs2` as computed by the ALU.
    ///
    /// # Returns
    ///
    /// `true` if control transfers to the branch target.
    pub const fn taken(kind: BranchKind, flags: &AluFlags) -> bool {
        match kind {
            BranchKind::Beq => flags.zero,
            BranchKind::Bne => !flags.zero,
            BranchKind::Blt => !flags.zero && flags.sign,
            BranchKind::Bge => flags.zero || !flags.sign,
            BranchKind::Bltu => !flags.zero && flags.ucmp,
            BranchKind::Bgeu => flags.zero || !flags.ucmp,
        }
    }

    /// Computes a PC-relative target with 32-bit wrap-around.
    pub const fn target(pc: u32, imm: i32) -> u32 {
        pc.wrapping_add_signed(imm)
    }
}
