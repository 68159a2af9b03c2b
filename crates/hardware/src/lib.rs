//! RV32I pipeline simulator library.
//!
//! This crate implements a cycle-level simulator of a five-stage pipelined RV32I core:
//! 1. **Core:** Fetch, decode, execute, memory, and writeback stages evaluated in reverse
//!    order each cycle, with load-use stalls, MEM/WB-to-EX forwarding, and flush-on-taken
//!    branch resolution.
//! 2. **ISA:** Field extraction, immediate decoding, instruction classification, and
//!    disassembly for the supported RV32I subset.
//! 3. **SoC:** Word-addressed instruction memory and byte-addressed data memory.
//! 4. **Simulation:** Image loaders, the clock driver, configuration, and statistics.

/// Common types and constants (registers, traps, errors).
pub mod common;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// CPU core (pipeline, latches, hazards, execution units).
pub mod core;
/// Instruction set (decode, instruction, ABI, RV32I tables, disassembler).
pub mod isa;
/// Image loaders and the simulator driver.
pub mod sim;
/// Instruction and data memories.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Library error type.
pub use crate::common::{SimError, Trap};
/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; holds registers, pipeline latches, memories, and stats.
pub use crate::core::Cpu;
/// Clock driver owning a `Cpu`.
pub use crate::sim::Simulator;
/// Instruction and data memories; construct with `System::with_images`.
pub use crate::soc::System;
