//! Configuration system for the pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline memory sizes, start PC, and cycle budget.
//! 2. **Structures:** Hierarchical config for general, memory, and pipeline settings.
//! 3. **Loading:** JSON deserialization with per-field defaults.
//!
//! Configuration is supplied as JSON (`--config` on the CLI) or use `Config::default()`.

use serde::Deserialize;

use crate::common::constants::{DEFAULT_CYCLE_BUDGET, DMEM_BYTES, IMEM_DEPTH};
use crate::common::error::SimError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline configuration when not explicitly overridden
/// in a JSON configuration file.
mod defaults {
    use super::{DEFAULT_CYCLE_BUDGET, IMEM_DEPTH};

    /// Initial program counter.
    pub const START_PC: u32 = 0;

    /// Number of cycles to simulate.
    pub const CYCLE_BUDGET: u64 = DEFAULT_CYCLE_BUDGET;

    /// Instruction memory depth in words.
    pub const IMEM_WORDS: usize = IMEM_DEPTH;

    /// Data memory capacity in bytes.
    pub const DMEM_BYTES: usize = super::DMEM_BYTES;

    /// Data-memory words shown by the per-cycle state dump.
    pub const DUMP_WORDS: usize = 8;

    /// `x0` reads as zero and ignores writes.
    pub const HARDWIRE_ZERO_REGISTER: bool = true;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// ```
/// use rv32pipe_core::config::Config;
///
/// let json = r#"{ "general": { "cycle_budget": 100 }, "pipeline": { "dump_words": 4 } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.cycle_budget, 100);
/// assert_eq!(config.pipeline.dump_words, 4);
/// assert_eq!(config.memory.dmem_bytes, 4096);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Instruction and data memory sizes
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Pipeline behavior and state dump settings
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// Missing sections and fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Config` if the text is not valid JSON or names an unknown field.
    pub fn from_json(text: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Print the register and data-memory dump after every cycle.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value.
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,

    /// Number of cycles to simulate before stopping.
    #[serde(default = "GeneralConfig::default_cycle_budget")]
    pub cycle_budget: u64,
}

impl GeneralConfig {
    fn default_start_pc() -> u32 {
        defaults::START_PC
    }

    fn default_cycle_budget() -> u64 {
        defaults::CYCLE_BUDGET
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
            cycle_budget: defaults::CYCLE_BUDGET,
        }
    }
}

/// Memory sizing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Instruction memory depth in 32-bit words.
    #[serde(default = "MemoryConfig::default_imem_words")]
    pub imem_words: usize,

    /// Data memory capacity in bytes.
    #[serde(default = "MemoryConfig::default_dmem_bytes")]
    pub dmem_bytes: usize,
}

impl MemoryConfig {
    fn default_imem_words() -> usize {
        defaults::IMEM_WORDS
    }

    fn default_dmem_bytes() -> usize {
        defaults::DMEM_BYTES
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            imem_words: defaults::IMEM_WORDS,
            dmem_bytes: defaults::DMEM_BYTES,
        }
    }
}

/// Pipeline behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// When `true`, `x0` reads as zero and writes to it are dropped. When `false`,
    /// `x0` is an ordinary register. Forwarding never targets `x0` in either mode.
    #[serde(default = "PipelineConfig::default_hardwire_zero_register")]
    pub hardwire_zero_register: bool,

    /// Number of data-memory words included in state dumps.
    #[serde(default = "PipelineConfig::default_dump_words")]
    pub dump_words: usize,
}

impl PipelineConfig {
    fn default_hardwire_zero_register() -> bool {
        defaults::HARDWIRE_ZERO_REGISTER
    }

    fn default_dump_words() -> usize {
        defaults::DUMP_WORDS
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            hardwire_zero_register: defaults::HARDWIRE_ZERO_REGISTER,
            dump_words: defaults::DUMP_WORDS,
        }
    }
}
