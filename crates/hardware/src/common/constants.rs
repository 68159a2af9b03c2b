//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Architecture Constants:** Register count and instruction size.
//! 2. **Memory Constants:** Default instruction and data memory capacities.
//! 3. **Simulation Constants:** The default cycle budget.

/// Number of architectural general-purpose registers.
pub const NUM_REGS: usize = 32;

/// Size of an RV32I instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Bytes per data-memory word.
pub const WORD_BYTES: usize = 4;

/// Instruction memory depth in 32-bit words.
pub const IMEM_DEPTH: usize = 1024;

/// Data memory depth in 32-bit words.
pub const DMEM_DEPTH: usize = 1024;

/// Data memory capacity in bytes.
pub const DMEM_BYTES: usize = DMEM_DEPTH * WORD_BYTES;

/// Number of cycles simulated when no budget is configured.
///
/// Equivalent to a clock counting from cycle 2 up to (but excluding) cycle 45.
pub const DEFAULT_CYCLE_BUDGET: u64 = 43;

/// All-zero instruction word, the fill value of unloaded instruction memory.
///
/// Decoded as a pipeline bubble rather than as an illegal instruction.
pub const INSTRUCTION_ZERO: u32 = 0;
