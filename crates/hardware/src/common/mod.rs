//! Common utilities and types used throughout the simulator.
//!
//! This module provides building blocks shared across all components of the simulator.
//! It includes:
//! 1. **Constants:** Architectural sizes, memory depths, and simulation defaults.
//! 2. **Error Handling:** Trap representations and the library error type.
//! 3. **Register Management:** The RV32I integer register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types and trap definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use error::{SimError, Trap};
pub use reg::RegisterFile;
