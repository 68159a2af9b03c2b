//! Instruction and data memories.
//!
//! This module implements the two memories of the Harvard-style core. It provides:
//! 1. **Instruction Memory:** A read-only word array addressed by `pc / 4`.
//! 2. **Data Memory:** A little-endian byte array with 1-, 2-, and 4-byte accesses.
//!
//! Both memories are bounds-checked; an out-of-range access yields an access-fault trap.

/// Byte-addressable data memory.
pub mod data;

/// Word-addressed instruction memory.
pub mod instruction;

pub use data::DataMemory;
pub use instruction::InstructionMemory;
