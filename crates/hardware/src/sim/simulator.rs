//! Simulator: drives the CPU clock.
//!
//! Owns the `Cpu` and advances it cycle by cycle until the budget is spent,
//! a halt instruction retires, or a trap is raised.

use tracing::debug;

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::soc::System;

/// Top-level simulator.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU state (registers, latches, memories, stats).
    pub cpu: Cpu,
}

impl Simulator {
    /// Creates a new simulator with the given system and configuration.
    pub fn new(system: System, config: &Config) -> Self {
        Self {
            cpu: Cpu::new(system, config),
        }
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Trap` when a faulting instruction retires.
    pub fn tick(&mut self) -> Result<(), SimError> {
        self.cpu.tick()
    }

    /// Runs up to `budget` cycles.
    ///
    /// # Returns
    ///
    /// The number of cycles actually simulated, which is smaller than `budget` only if a
    /// halt instruction retired.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Trap` when a faulting instruction retires.
    pub fn run(&mut self, budget: u64) -> Result<u64, SimError> {
        self.run_with(budget, |_| {})
    }

    /// Runs up to `budget` cycles, calling `on_cycle` after every completed cycle.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Trap` when a faulting instruction retires; `on_cycle` is not
    /// called for the faulting cycle.
    pub fn run_with<F>(&mut self, budget: u64, mut on_cycle: F) -> Result<u64, SimError>
    where
        F: FnMut(&Cpu),
    {
        let start = self.cpu.stats.cycles;
        for _ in 0..budget {
            if self.cpu.halted {
                break;
            }
            self.tick()?;
            on_cycle(&self.cpu);
        }
        let ran = self.cpu.stats.cycles - start;
        debug!(cycles = ran, halted = self.cpu.halted, "run finished");
        Ok(ran)
    }

    /// Returns `true` once a halt instruction has retired.
    pub const fn is_halted(&self) -> bool {
        self.cpu.halted
    }
}
