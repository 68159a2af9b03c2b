//! ALU bitwise logic operations.

use crate::core::pipeline::signals::AluControl;

/// Executes a bitwise logic operation.
///
/// # Arguments
///
/// * `ctrl` - The ALU control code (`Xor`, `Or`, or `And`).
/// * `a` - First operand.
/// * `b` - Second operand.
///
/// # Returns
///
/// The bitwise result. Returns `0` for non-logic codes.
pub const fn execute(ctrl: AluControl, a: u32, b: u32) -> u32 {
    match ctrl {
        AluControl::Xor => a ^ b,
        AluControl::Or => a | b,
        AluControl::And => a & b,
        _ => 0,
    }
}
