//! Pipeline Latch Interface.
//!
//! Common operations on the four pipeline registers: flushing to a bubble and
//! querying whether a latch holds a live instruction or a pending trap.

use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};

/// Represents a pipeline latch (inter-stage buffer).
pub trait PipelineLatch {
    /// Replaces the contents with a bubble.
    ///
    /// Called on the front-end latches when a taken branch or jump redirects fetch.
    fn flush(&mut self);

    /// Returns `true` if the latch holds no valid instruction.
    fn is_empty(&self) -> bool;

    /// Returns `true` if the latch holds an instruction carrying a trap.
    fn has_trap(&self) -> bool;
}

macro_rules! impl_latch {
    ($($latch:ty),* $(,)?) => {
        $(
            impl PipelineLatch for $latch {
                fn flush(&mut self) {
                    *self = Self::default();
                }

                fn is_empty(&self) -> bool {
                    !self.enable
                }

                fn has_trap(&self) -> bool {
                    self.enable && self.entry.trap.is_some()
                }
            }
        )*
    };
}

impl_latch!(IfId, IdEx, ExMem, MemWb);
