//! General-Purpose Register File.
//!
//! This module provides the `RegisterFile` struct holding the 32 RV32I integer registers.
//! It provides:
//! 1. **Storage:** 32 registers of 32 bits, two read ports and one write port.
//! 2. **Zero Register Policy:** `x0` reads as zero and ignores writes unless the
//!    register file was built unprotected.
//! 3. **Observability:** A snapshot accessor and a `Display` dump used by per-cycle tracing.

use std::fmt;

use crate::common::constants::NUM_REGS;

/// RV32I integer register file.
///
/// Written only by the writeback stage; every other stage reads through
/// [`RegisterFile::read`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; NUM_REGS],
    hardwire_zero: bool,
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new(true)
    }
}

impl RegisterFile {
    /// Creates a register file with all registers initialized to zero.
    ///
    /// # Arguments
    ///
    /// * `hardwire_zero` - When `true`, `x0` always reads as zero and writes to it are
    ///   dropped. When `false`, `x0` behaves like any other register.
    pub fn new(hardwire_zero: bool) -> Self {
        Self {
            regs: [0; NUM_REGS],
            hardwire_zero,
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the register.
    #[inline]
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 && self.hardwire_zero {
            0
        } else {
            self.regs[idx]
        }
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx == 0 && self.hardwire_zero {
            return;
        }
        self.regs[idx] = val;
    }

    /// Returns `true` if `x0` is protected against writes.
    pub const fn hardwires_zero(&self) -> bool {
        self.hardwire_zero
    }

    /// Returns a copy of all 32 registers, as seen by a read port.
    pub fn snapshot(&self) -> [u32; NUM_REGS] {
        let mut out = self.regs;
        if self.hardwire_zero {
            out[0] = 0;
        }
        out
    }
}

impl fmt::Display for RegisterFile {
    /// Formats the register file as eight rows of four registers in hexadecimal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let regs = self.snapshot();
        for (row, chunk) in regs.chunks(4).enumerate() {
            for (col, val) in chunk.iter().enumerate() {
                let idx = row * 4 + col;
                if col > 0 {
                    f.write_str("  ")?;
                }
                write!(f, "x{idx:<2} = {val:08x}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
