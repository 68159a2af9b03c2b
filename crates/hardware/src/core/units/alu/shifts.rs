//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL), and
//! shift-right arithmetic (SRA). The shift amount is the low 5 bits of operand B.

use crate::core::pipeline::signals::AluControl;

/// Bit mask for the shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `ctrl` - The ALU control code (`Sll`, `Srl`, or `Sra`).
/// * `a` - The value to be shifted.
/// * `b` - The shift amount (bits 31:5 ignored).
///
/// # Returns
///
/// The shifted value. Returns `0` for non-shift codes.
pub const fn execute(ctrl: AluControl, a: u32, b: u32) -> u32 {
    let shamt = b & SHAMT_MASK;
    match ctrl {
        AluControl::Sll => a << shamt,
        AluControl::Srl => a >> shamt,
        AluControl::Sra => ((a as i32) >> shamt) as u32,
        _ => 0,
    }
}
