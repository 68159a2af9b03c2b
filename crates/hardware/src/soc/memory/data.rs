//! Data memory.
//!
//! A flat byte array accessed little-endian at widths of 1, 2, or 4 bytes. Accesses need
//! not be aligned; every byte touched must lie inside the memory.

use crate::common::constants::WORD_BYTES;
use crate::common::error::{SimError, Trap};
use crate::core::pipeline::signals::MemWidth;

/// Fixed-capacity, byte-addressable data memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataMemory {
    bytes: Vec<u8>,
}

impl DataMemory {
    /// Creates a zero-filled data memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Creates a data memory of `size` bytes with `words` unpacked little-endian from address 0.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidInput` if the words do not fit.
    pub fn with_words(size: usize, words: &[u32]) -> Result<Self, SimError> {
        if words.len() * WORD_BYTES > size {
            return Err(SimError::invalid_input(format!(
                "data image of {} words exceeds data memory of {size} bytes",
                words.len()
            )));
        }
        let mut dmem = Self::new(size);
        for (chunk, word) in dmem.bytes.chunks_exact_mut(WORD_BYTES).zip(words) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        Ok(dmem)
    }

    /// Returns the byte range `[addr, addr + len)` if it lies inside memory.
    fn range(&self, addr: u32, len: usize) -> Option<std::ops::Range<usize>> {
        let start = addr as usize;
        let end = start.checked_add(len)?;
        (end <= self.bytes.len()).then_some(start..end)
    }

    /// Reads `width` bytes starting at `addr`, little-endian, zero-extended to 32 bits.
    ///
    /// # Errors
    ///
    /// Returns `Trap::LoadAccessFault` if any byte lies outside memory.
    pub fn load(&self, addr: u32, width: MemWidth) -> Result<u32, Trap> {
        let range = self
            .range(addr, width.bytes())
            .ok_or(Trap::LoadAccessFault(addr))?;
        Ok(self.bytes[range]
            .iter()
            .rev()
            .fold(0u32, |acc, &b| (acc << 8) | u32::from(b)))
    }

    /// Writes the low `width` bytes of `val` starting at `addr`, little-endian.
    ///
    /// Bytes outside the access are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `Trap::StoreAccessFault` if any byte lies outside memory.
    pub fn store(&mut self, addr: u32, width: MemWidth, val: u32) -> Result<(), Trap> {
        let range = self
            .range(addr, width.bytes())
            .ok_or(Trap::StoreAccessFault(addr))?;
        let len = range.len();
        self.bytes[range].copy_from_slice(&val.to_le_bytes()[..len]);
        Ok(())
    }

    /// Reads the aligned word at word index `idx`, or `None` past the end of memory.
    pub fn read_word(&self, idx: usize) -> Option<u32> {
        let start = idx.checked_mul(WORD_BYTES)?;
        let bytes = self.bytes.get(start..start + WORD_BYTES)?;
        Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Capacity in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Raw memory contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
