//! Core processor implementation.
//!
//! This module contains the CPU context object, the five-stage instruction
//! pipeline, and the execution units it drives.

/// CPU core state and cycle orchestration.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, hazards, signals).
pub mod pipeline;

/// Execution units (ALU and its control generator, branch resolver, LSU).
pub mod units;

pub use self::cpu::Cpu;
