//! System-on-Chip (SoC) Components.
//!
//! This module organizes the memories the pipeline is attached to and the builder
//! that sizes and loads them.

/// System builder and top-level `System` type.
pub mod builder;

/// Instruction and data memories.
pub mod memory;

pub use builder::System;
