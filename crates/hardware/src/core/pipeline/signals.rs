//! Pipeline control signals and operation types.
//!
//! This module defines the signals that control instruction execution. It performs:
//! 1. **Operation Selection:** The 4-bit ALU control code driving the execute stage.
//! 2. **Operand Selection:** Sources for ALU inputs (registers, PC, zero, or immediate).
//! 3. **Memory Control:** Access width and sign-extension for loads and stores.
//! 4. **Writeback Control:** Register write enable and the jump/halt markers.

use crate::isa::instruction::{Instruction, LoadKind, StoreKind};

/// ALU control code.
///
/// The discriminant is the 4-bit code the ALU control generator drives onto the ALU:
/// `funct7[5]` in bit 3 and the `funct3` of the matching R-type operation in bits 2:0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum AluControl {
    /// Two's-complement addition.
    #[default]
    Add = 0b0000,

    /// Shift left logical.
    Sll = 0b0001,

    /// Bitwise XOR.
    Xor = 0b0100,

    /// Shift right logical.
    Srl = 0b0101,

    /// Bitwise OR.
    Or = 0b0110,

    /// Bitwise AND.
    And = 0b0111,

    /// Two's-complement subtraction; also drives every comparison.
    Sub = 0b1000,

    /// Shift right arithmetic.
    Sra = 0b1101,
}

impl AluControl {
    /// Returns the 4-bit control code.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Memory access width for load and store operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemWidth {
    /// No memory operation.
    #[default]
    Nop,

    /// 8-bit byte access.
    Byte,

    /// 16-bit half-word access.
    Half,

    /// 32-bit word access.
    Word,
}

impl MemWidth {
    /// Number of bytes transferred.
    pub const fn bytes(self) -> usize {
        match self {
            Self::Nop => 0,
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }
}

/// Source for ALU operand A.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpASrc {
    /// Use `rs1` register value.
    #[default]
    Reg1,

    /// Use program counter value.
    Pc,

    /// Use zero.
    Zero,
}

/// Source for ALU operand B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// Use sign-extended immediate value.
    #[default]
    Imm,

    /// Use `rs2` register value.
    Reg2,
}

/// Control signals for pipeline stage execution.
///
/// Generated once in decode and carried with the instruction through every later
/// pipeline register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Enable memory read operation (load).
    pub mem_read: bool,
    /// Enable memory write operation (store).
    pub mem_write: bool,
    /// Instruction is a conditional branch.
    pub branch: bool,
    /// Instruction is an unconditional jump (`JAL`/`JALR`).
    pub jump: bool,
    /// Instruction stops the simulation when it retires.
    pub halt: bool,
    /// Width of memory access.
    pub width: MemWidth,
    /// Load should be sign-extended.
    pub signed_load: bool,
    /// Source selection for ALU operand A.
    pub a_src: OpASrc,
    /// Source selection for ALU operand B.
    pub b_src: OpBSrc,
}

impl ControlSignals {
    /// Derives the control signals of a classified instruction.
    ///
    /// Operand B comes from the immediate for I/S/U/J formats and loads, and from `rs2`
    /// for register-register operations and branches.
    pub const fn for_instruction(inst: &Instruction) -> Self {
        let mut c = Self {
            reg_write: false,
            mem_read: false,
            mem_write: false,
            branch: false,
            jump: false,
            halt: false,
            width: MemWidth::Nop,
            signed_load: false,
            a_src: OpASrc::Reg1,
            b_src: OpBSrc::Imm,
        };

        match *inst {
            Instruction::Lui { .. } => {
                c.reg_write = true;
                c.a_src = OpASrc::Zero;
            }
            Instruction::Auipc { .. } => {
                c.reg_write = true;
                c.a_src = OpASrc::Pc;
            }
            Instruction::Jal { .. } => {
                c.reg_write = true;
                c.jump = true;
                c.a_src = OpASrc::Pc;
            }
            Instruction::Jalr { .. } => {
                c.reg_write = true;
                c.jump = true;
            }
            Instruction::Branch { .. } => {
                c.branch = true;
                c.b_src = OpBSrc::Reg2;
            }
            Instruction::Load { kind, .. } => {
                c.reg_write = true;
                c.mem_read = true;
                let (width, signed) = match kind {
                    LoadKind::Lb => (MemWidth::Byte, true),
                    LoadKind::Lh => (MemWidth::Half, true),
                    LoadKind::Lw => (MemWidth::Word, false),
                    LoadKind::Lbu => (MemWidth::Byte, false),
                    LoadKind::Lhu => (MemWidth::Half, false),
                };
                c.width = width;
                c.signed_load = signed;
            }
            Instruction::Store { kind, .. } => {
                c.mem_write = true;
                c.width = match kind {
                    StoreKind::Sb => MemWidth::Byte,
                    StoreKind::Sh => MemWidth::Half,
                    StoreKind::Sw => MemWidth::Word,
                };
            }
            Instruction::OpImm { .. } => {
                c.reg_write = true;
            }
            Instruction::Op { .. } => {
                c.reg_write = true;
                c.b_src = OpBSrc::Reg2;
            }
            Instruction::Halt => {
                c.halt = true;
            }
        }
        c
    }
}

/// Per-cycle feedback signals from later stages to earlier ones.
///
/// Cleared at the start of every cycle. Because stages are evaluated from writeback
/// back to fetch, a signal raised by execute or decode is seen by decode and fetch
/// in the same cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HazardSignals {
    /// Decode detected a load-use hazard: hold IF/ID and freeze the PC.
    pub stall: bool,
    /// Execute resolved a taken branch or jump to this target: flush IF/ID and ID/EX.
    pub redirect: Option<u32>,
}
