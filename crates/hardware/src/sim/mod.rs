//! Simulation utilities and program loading.
//!
//! Provides the image loaders that turn the text input files into memory words and
//! the `Simulator` that clocks the CPU.

/// Instruction and data image loaders.
pub mod loader;

/// Clock driver.
pub mod simulator;

pub use simulator::Simulator;
