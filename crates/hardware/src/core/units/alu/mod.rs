//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the execute stage. It performs:
//! 1. **Operation Dispatch:** Routes a 4-bit [`AluControl`] code to the arithmetic, logic,
//!    or shift submodule.
//! 2. **Status Flags:** Derives the `zero`, `sign`, and unsigned-compare flags consumed by
//!    branch resolution and the set-less-than instructions.
//! 3. **Control Generation:** Maps each classified instruction to its ALU control code.

/// Addition and subtraction.
pub mod arithmetic;

/// ALU control code generation.
pub mod control;

/// Bitwise AND, OR, and XOR.
pub mod logic;

/// Logical and arithmetic shifts.
pub mod shifts;

use crate::core::pipeline::signals::AluControl;

/// Status flags produced alongside every ALU result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluFlags {
    /// Result is zero.
    pub zero: bool,
    /// Result, viewed as signed, is not strictly positive.
    ///
    /// Combined with `zero` this gives a strict negative test: `!zero && sign`.
    pub sign: bool,
    /// Operand A is below operand B when both are read as unsigned.
    pub ucmp: bool,
}

/// Result of a single ALU evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluOutput {
    /// Computed value.
    pub result: u32,
    /// Flags derived from `result` and the operands.
    pub flags: AluFlags,
}

impl AluOutput {
    /// Signed less-than outcome of a subtraction: `!zero && sign`.
    pub const fn less_signed(&self) -> bool {
        !self.flags.zero && self.flags.sign
    }

    /// Unsigned less-than outcome of a subtraction.
    pub const fn less_unsigned(&self) -> bool {
        self.flags.ucmp
    }
}

/// Arithmetic Logic Unit for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `ctrl` - The 4-bit control code selecting the operation.
    /// * `a` - First operand.
    /// * `b` - Second operand (shift amount for shifts; only bits 4:0 are used).
    ///
    /// # Returns
    ///
    /// The result together with its status flags.
    pub fn execute(ctrl: AluControl, a: u32, b: u32) -> AluOutput {
        let result = match ctrl {
            AluControl::Add | AluControl::Sub => arithmetic::execute(ctrl, a, b),
            AluControl::Xor | AluControl::Or | AluControl::And => logic::execute(ctrl, a, b),
            AluControl::Sll | AluControl::Srl | AluControl::Sra => shifts::execute(ctrl, a, b),
        };

        AluOutput {
            result,
            flags: AluFlags {
                zero: result == 0,
                sign: (result as i32) <= 0,
                ucmp: a < b,
            },
        }
    }
}
