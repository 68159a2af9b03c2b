//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, decoding, and classification
//! for the RV32I subset the pipeline executes: loads and stores, register and
//! immediate arithmetic, branches, jumps, and the U-type immediates.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction field and immediate decoding for all RV32I formats.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Field extraction, the decoded record, and the classified instruction enum.
pub mod instruction;

/// Base integer instruction set encodings.
pub mod rv32i;
