//! ALU arithmetic operations.
//!
//! Implements two's-complement addition and subtraction with 32-bit wrap-around.
//! Comparisons (`SLT`, `SLTU`, branches) reuse the subtraction and read the flags.

use crate::core::pipeline::signals::AluControl;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `ctrl` - The ALU control code (`Add` or `Sub`).
/// * `a` - First operand.
/// * `b` - Second operand.
///
/// # Returns
///
/// The wrapped 32-bit result. Returns `0` for non-arithmetic codes.
pub const fn execute(ctrl: AluControl, a: u32, b: u32) -> u32 {
    match ctrl {
        AluControl::Add => a.wrapping_add(b),
        AluControl::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}
