//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the four pipeline registers of the five-stage pipeline:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Instruction Flow:** Entry structures snapshot everything the downstream stage needs.
//! 2. **Bubbles:** Every latch carries an `enable` flag; a disabled latch is a bubble and the
//!    downstream stage performs no side effects for it.
//! 3. **Trap Propagation:** Faults ride the latches to writeback, where they are raised.

use crate::common::error::Trap;
use crate::core::pipeline::signals::ControlSignals;
use crate::isa::instruction::Instruction;

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Trap that occurred during fetch, if any.
    pub trap: Option<Trap>,
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
///
/// `rv1` and `rv2` are the register-read snapshot. Forwarding paths overwrite them
/// before the execute stage consumes them in the same cycle.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Classified instruction; `None` only when decode trapped.
    pub op: Option<Instruction>,
    /// First source register, when the format reads one.
    pub rs1: Option<usize>,
    /// Second source register, when the format reads one.
    pub rs2: Option<usize>,
    /// Destination register index (`rd`).
    pub rd: usize,
    /// Sign-extended immediate value.
    pub imm: i32,
    /// Value read from `rs1`.
    pub rv1: u32,
    /// Value read from `rs2`.
    pub rv2: u32,
    /// Control signals for downstream pipeline stages.
    pub ctrl: ControlSignals,
    /// Trap raised during fetch or decode, if any.
    pub trap: Option<Trap>,
}

/// Entry in the EX/MEM pipeline latch (Execute to Memory stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ExMemEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Destination register index (`rd`).
    pub rd: usize,
    /// ALU result, or the effective address for memory operations.
    pub alu: u32,
    /// Data to be stored (for store instructions).
    pub store_data: u32,
    /// Control signals for downstream pipeline stages.
    pub ctrl: ControlSignals,
    /// Trap carried from an earlier stage, if any.
    pub trap: Option<Trap>,
}

/// Entry in the MEM/WB pipeline latch (Memory to Writeback stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MemWbEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Destination register index (`rd`).
    pub rd: usize,
    /// ALU result (for non-load instructions).
    pub alu: u32,
    /// Data loaded from memory (for load instructions).
    pub load_data: u32,
    /// Control signals for the writeback stage.
    pub ctrl: ControlSignals,
    /// Trap carried from an earlier stage or raised by the memory access.
    pub trap: Option<Trap>,
}

impl MemWbEntry {
    /// Value written to `rd`: loaded data for loads, the link address for jumps,
    /// and the ALU result otherwise.
    pub const fn writeback_value(&self) -> u32 {
        if self.ctrl.mem_read {
            self.load_data
        } else if self.ctrl.jump {
            self.pc.wrapping_add(4)
        } else {
            self.alu
        }
    }
}

/// IF/ID pipeline latch.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IfId {
    /// `false` models a bubble.
    pub enable: bool,
    /// Latched payload; meaningful only when `enable` is set.
    pub entry: IfIdEntry,
}

/// ID/EX pipeline latch.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IdEx {
    /// `false` models a bubble.
    pub enable: bool,
    /// Latched payload; meaningful only when `enable` is set.
    pub entry: IdExEntry,
}

/// EX/MEM pipeline latch.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ExMem {
    /// `false` models a bubble.
    pub enable: bool,
    /// Latched payload; meaningful only when `enable` is set.
    pub entry: ExMemEntry,
}

/// MEM/WB pipeline latch.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MemWb {
    /// `false` models a bubble.
    pub enable: bool,
    /// Latched payload; meaningful only when `enable` is set.
    pub entry: MemWbEntry,
}

macro_rules! latch_ctors {
    ($($latch:ident => $entry:ident),* $(,)?) => {
        $(
            impl $latch {
                /// Returns a disabled latch with a zeroed payload.
                pub fn bubble() -> Self {
                    Self::default()
                }

                /// Returns an enabled latch holding `entry`.
                pub const fn valid(entry: $entry) -> Self {
                    Self { enable: true, entry }
                }
            }
        )*
    };
}

latch_ctors!(IfId => IfIdEntry, IdEx => IdExEntry, ExMem => ExMemEntry, MemWb => MemWbEntry);
