//! Load/Store Unit (LSU).
//!
//! This module provides the data-path helpers used by the memory stage:
//! 1. **Address Generation:** Effective address from the ALU result.
//! 2. **Load Extension:** Sign- or zero-extension of byte and half-word loads.
//! 3. **Store Alignment:** Truncation of the store operand to the access width.

use crate::core::pipeline::signals::MemWidth;

/// Load/Store Unit (LSU) for memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Extends a raw little-endian value read from memory to 32 bits.
    ///
    /// # Arguments
    ///
    /// * `raw` - The bytes read, packed into the low `width` bytes.
    /// * `width` - Access width.
    /// * `signed` - Sign-extend from the most significant accessed bit when `true`.
    ///
    /// # Returns
    ///
    /// The value written back to the destination register.
    pub const fn extend(raw: u32, width: MemWidth, signed: bool) -> u32 {
        match (width, signed) {
            (MemWidth::Byte, true) => raw as u8 as i8 as i32 as u32,
            (MemWidth::Byte, false) => raw & 0xff,
            (MemWidth::Half, true) => raw as u16 as i16 as i32 as u32,
            (MemWidth::Half, false) => raw & 0xffff,
            (MemWidth::Word, _) => raw,
            (MemWidth::Nop, _) => 0,
        }
    }

    /// Truncates a store operand to the bytes actually written.
    pub const fn store_value(val: u32, width: MemWidth) -> u32 {
        match width {
            MemWidth::Byte => val & 0xff,
            MemWidth::Half => val & 0xffff,
            MemWidth::Word => val,
            MemWidth::Nop => 0,
        }
    }
}
