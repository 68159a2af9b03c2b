//! Trap and simulator error definitions.
//!
//! This module defines the error handling mechanisms for the simulator. It provides:
//! 1. **Trap Representation:** Architectural faults that travel down the pipeline with the
//!    instruction that caused them and are raised when that instruction reaches writeback.
//! 2. **Simulator Errors:** Invalid input images, unreadable files, bad configuration, and
//!    traps that terminated a run.

use std::path::PathBuf;

use thiserror::Error;

/// Architectural faults raised by an instruction.
///
/// A trap is recorded in the pipeline register of the stage that detected it and is only
/// raised once the instruction retires, so an instruction squashed by a taken branch never
/// faults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Trap {
    /// Instruction address misaligned exception.
    ///
    /// Raised when the program counter is not a multiple of four.
    /// The associated value is the misaligned address.
    #[error("InstructionAddressMisaligned({0:#x})")]
    InstructionAddressMisaligned(u32),

    /// Instruction access fault exception.
    ///
    /// Raised when the program counter points past the end of instruction memory.
    /// The associated value is the faulting address.
    #[error("InstructionAccessFault({0:#x})")]
    InstructionAccessFault(u32),

    /// Illegal instruction exception.
    ///
    /// Raised when an encoding is not part of the supported RV32I subset, or when the
    /// ALU control generator has no operation for its opcode/funct3/funct7 combination.
    /// The associated value is the instruction encoding.
    #[error("IllegalInstruction({0:#010x})")]
    IllegalInstruction(u32),

    /// Load access fault exception.
    ///
    /// Raised when any byte of a load lies outside data memory.
    /// The associated value is the faulting address.
    #[error("LoadAccessFault({0:#x})")]
    LoadAccessFault(u32),

    /// Store access fault exception.
    ///
    /// Raised when any byte of a store lies outside data memory.
    /// The associated value is the faulting address.
    #[error("StoreAccessFault({0:#x})")]
    StoreAccessFault(u32),
}

/// Errors reported by the simulator library.
#[derive(Debug, Error)]
pub enum SimError {
    /// An instruction retired with a pending trap.
    #[error("trap at pc={pc:#010x}: {trap}")]
    Trap {
        /// Program counter of the faulting instruction.
        pc: u32,
        /// The fault it raised.
        trap: Trap,
    },

    /// A memory image was malformed or did not fit in memory.
    #[error("{0}")]
    InvalidInput(String),

    /// An input file could not be opened or read.
    #[error("Cannot find {}", path.display())]
    Io {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl SimError {
    /// Builds an [`SimError::InvalidInput`] from anything printable.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
