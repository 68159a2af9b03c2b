//! Execution units and functional components.
//!
//! This module contains the integer ALU with its control generator, the branch
//! resolution unit, and the load/store data-path helpers.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit.
pub mod bru;

/// Load/Store Unit for memory access operations.
pub mod lsu;
