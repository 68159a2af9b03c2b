//! Instruction encoding and classification.
//!
//! Provides bit extraction for the standard RV32I fields, the flat [`Decoded`] record produced
//! by the decoder, and the closed [`Instruction`] enumeration the pipeline dispatches on.
//! Each variant carries only the fields its format uses, so every later table (ALU control,
//! branch resolution, memory access, writeback selection) is an exhaustive match.

use crate::common::error::Trap;
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting a 5-bit register field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    ///
    /// Meaningful for R-type and shift-immediate encodings; for other formats these are
    /// immediate bits.
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// Produced by [`crate::isa::decode::decode`]. Fields that a format does not define are
/// still extracted from their bit positions; [`Instruction::classify`] decides which ones
/// are meaningful.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Extracted opcode field.
    pub opcode: u32,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Function code field 3.
    pub funct3: u32,
    /// Function code field 7.
    pub funct7: u32,
    /// Sign-extended immediate value (zero for R-type).
    pub imm: i32,
}

/// Conditional branch comparisons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchKind {
    /// Branch if equal.
    Beq,
    /// Branch if not equal.
    Bne,
    /// Branch if less than (signed).
    Blt,
    /// Branch if greater or equal (signed).
    Bge,
    /// Branch if less than (unsigned).
    Bltu,
    /// Branch if greater or equal (unsigned).
    Bgeu,
}

/// Load variants: access width plus extension rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadKind {
    /// Load byte, sign-extended.
    Lb,
    /// Load halfword, sign-extended.
    Lh,
    /// Load word.
    Lw,
    /// Load byte, zero-extended.
    Lbu,
    /// Load halfword, zero-extended.
    Lhu,
}

/// Store variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    /// Store the low byte.
    Sb,
    /// Store the low halfword.
    Sh,
    /// Store the full word.
    Sw,
}

/// Integer operations shared by the register-register and register-immediate formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithOp {
    /// Addition.
    Add,
    /// Subtraction (register-register only).
    Sub,
    /// Shift left logical.
    Sll,
    /// Set less than (signed).
    Slt,
    /// Set less than (unsigned).
    Sltu,
    /// Bitwise XOR.
    Xor,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
}

/// A classified RV32I instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Load upper immediate: `rd = imm`.
    Lui {
        /// Destination register.
        rd: usize,
        /// Upper immediate with the low 12 bits clear.
        imm: i32,
    },
    /// Add upper immediate to PC: `rd = pc + imm`.
    Auipc {
        /// Destination register.
        rd: usize,
        /// Upper immediate with the low 12 bits clear.
        imm: i32,
    },
    /// Jump and link: `rd = pc + 4; pc += imm`.
    Jal {
        /// Link register.
        rd: usize,
        /// Jump offset.
        imm: i32,
    },
    /// Jump and link register: `rd = pc + 4; pc = (rs1 + imm) & !1`.
    Jalr {
        /// Link register.
        rd: usize,
        /// Base register.
        rs1: usize,
        /// Offset.
        imm: i32,
    },
    /// Conditional branch.
    Branch {
        /// Comparison performed on `rs1 - rs2`.
        kind: BranchKind,
        /// First comparand.
        rs1: usize,
        /// Second comparand.
        rs2: usize,
        /// Branch offset.
        imm: i32,
    },
    /// Memory load into `rd` from `rs1 + imm`.
    Load {
        /// Width and extension.
        kind: LoadKind,
        /// Destination register.
        rd: usize,
        /// Base register.
        rs1: usize,
        /// Offset.
        imm: i32,
    },
    /// Memory store of `rs2` to `rs1 + imm`.
    Store {
        /// Width.
        kind: StoreKind,
        /// Base register.
        rs1: usize,
        /// Data register.
        rs2: usize,
        /// Offset.
        imm: i32,
    },
    /// Register-immediate arithmetic.
    OpImm {
        /// Operation.
        op: ArithOp,
        /// Destination register.
        rd: usize,
        /// Source register.
        rs1: usize,
        /// Immediate operand (shift amount in its low 5 bits for shifts).
        imm: i32,
    },
    /// Register-register arithmetic.
    Op {
        /// Operation.
        op: ArithOp,
        /// Destination register.
        rd: usize,
        /// First source register.
        rs1: usize,
        /// Second source register.
        rs2: usize,
    },
    /// `ECALL` / `EBREAK`: stops the simulation when it retires.
    Halt,
}

impl Instruction {
    /// Classifies a decoded instruction into its variant.
    ///
    /// # Arguments
    ///
    /// * `d` - Fields extracted by the decoder.
    ///
    /// # Returns
    ///
    /// The instruction, or `Trap::IllegalInstruction` for any opcode, funct3, or funct7
    /// combination outside the supported subset.
    pub fn classify(d: &Decoded) -> Result<Self, Trap> {
        let illegal = Trap::IllegalInstruction(d.raw);
        let inst = match d.opcode {
            opcodes::OP_LUI => Self::Lui {
                rd: d.rd,
                imm: d.imm,
            },
            opcodes::OP_AUIPC => Self::Auipc {
                rd: d.rd,
                imm: d.imm,
            },
            opcodes::OP_JAL => Self::Jal {
                rd: d.rd,
                imm: d.imm,
            },
            opcodes::OP_JALR => {
                if d.funct3 != funct3::JALR {
                    return Err(illegal);
                }
                Self::Jalr {
                    rd: d.rd,
                    rs1: d.rs1,
                    imm: d.imm,
                }
            }
            opcodes::OP_BRANCH => {
                let kind = match d.funct3 {
                    funct3::BEQ => BranchKind::Beq,
                    funct3::BNE => BranchKind::Bne,
                    funct3::BLT => BranchKind::Blt,
                    funct3::BGE => BranchKind::Bge,
                    funct3::BLTU => BranchKind::Bltu,
                    funct3::BGEU => BranchKind::Bgeu,
                    _ => return Err(illegal),
                };
                Self::Branch {
                    kind,
                    rs1: d.rs1,
                    rs2: d.rs2,
                    imm: d.imm,
                }
            }
            opcodes::OP_LOAD => {
                let kind = match d.funct3 {
                    funct3::LB => LoadKind::Lb,
                    funct3::LH => LoadKind::Lh,
                    funct3::LW => LoadKind::Lw,
                    funct3::LBU => LoadKind::Lbu,
                    funct3::LHU => LoadKind::Lhu,
                    _ => return Err(illegal),
                };
                Self::Load {
                    kind,
                    rd: d.rd,
                    rs1: d.rs1,
                    imm: d.imm,
                }
            }
            opcodes::OP_STORE => {
                let kind = match d.funct3 {
                    funct3::SB => StoreKind::Sb,
                    funct3::SH => StoreKind::Sh,
                    funct3::SW => StoreKind::Sw,
                    _ => return Err(illegal),
                };
                Self::Store {
                    kind,
                    rs1: d.rs1,
                    rs2: d.rs2,
                    imm: d.imm,
                }
            }
            opcodes::OP_IMM => {
                let op = match (d.funct3, d.funct7) {
                    (funct3::ADD_SUB, _) => ArithOp::Add,
                    (funct3::SLT, _) => ArithOp::Slt,
                    (funct3::SLTU, _) => ArithOp::Sltu,
                    (funct3::XOR, _) => ArithOp::Xor,
                    (funct3::OR, _) => ArithOp::Or,
                    (funct3::AND, _) => ArithOp::And,
                    (funct3::SLL, funct7::DEFAULT) => ArithOp::Sll,
                    (funct3::SRL_SRA, funct7::DEFAULT) => ArithOp::Srl,
                    (funct3::SRL_SRA, funct7::SRA) => ArithOp::Sra,
                    _ => return Err(illegal),
                };
                Self::OpImm {
                    op,
                    rd: d.rd,
                    rs1: d.rs1,
                    imm: d.imm,
                }
            }
            opcodes::OP_REG => {
                let op = match (d.funct3, d.funct7) {
                    (funct3::ADD_SUB, funct7::DEFAULT) => ArithOp::Add,
                    (funct3::ADD_SUB, funct7::SUB) => ArithOp::Sub,
                    (funct3::SLL, funct7::DEFAULT) => ArithOp::Sll,
                    (funct3::SLT, funct7::DEFAULT) => ArithOp::Slt,
                    (funct3::SLTU, funct7::DEFAULT) => ArithOp::Sltu,
                    (funct3::XOR, funct7::DEFAULT) => ArithOp::Xor,
                    (funct3::SRL_SRA, funct7::DEFAULT) => ArithOp::Srl,
                    (funct3::SRL_SRA, funct7::SRA) => ArithOp::Sra,
                    (funct3::OR, funct7::DEFAULT) => ArithOp::Or,
                    (funct3::AND, funct7::DEFAULT) => ArithOp::And,
                    _ => return Err(illegal),
                };
                Self::Op {
                    op,
                    rd: d.rd,
                    rs1: d.rs1,
                    rs2: d.rs2,
                }
            }
            opcodes::OP_SYSTEM => match d.raw {
                opcodes::ECALL | opcodes::EBREAK => Self::Halt,
                _ => return Err(illegal),
            },
            _ => return Err(illegal),
        };
        Ok(inst)
    }

    /// Returns the destination register if the instruction writes one.
    ///
    /// A destination of `x0` is still reported; callers decide whether it is protected.
    pub const fn rd(&self) -> Option<usize> {
        match *self {
            Self::Lui { rd, .. }
            | Self::Auipc { rd, .. }
            | Self::Jal { rd, .. }
            | Self::Jalr { rd, .. }
            | Self::Load { rd, .. }
            | Self::OpImm { rd, .. }
            | Self::Op { rd, .. } => Some(rd),
            Self::Branch { .. } | Self::Store { .. } | Self::Halt => None,
        }
    }

    /// Returns the first source register if the instruction reads one.
    pub const fn rs1(&self) -> Option<usize> {
        match *self {
            Self::Jalr { rs1, .. }
            | Self::Branch { rs1, .. }
            | Self::Load { rs1, .. }
            | Self::Store { rs1, .. }
            | Self::OpImm { rs1, .. }
            | Self::Op { rs1, .. } => Some(rs1),
            Self::Lui { .. } | Self::Auipc { .. } | Self::Jal { .. } | Self::Halt => None,
        }
    }

    /// Returns the second source register if the instruction reads one.
    pub const fn rs2(&self) -> Option<usize> {
        match *self {
            Self::Branch { rs2, .. } | Self::Store { rs2, .. } | Self::Op { rs2, .. } => {
                Some(rs2)
            }
            _ => None,
        }
    }

    /// Returns the sign-extended immediate, or zero for formats without one.
    pub const fn imm(&self) -> i32 {
        match *self {
            Self::Lui { imm, .. }
            | Self::Auipc { imm, .. }
            | Self::Jal { imm, .. }
            | Self::Jalr { imm, .. }
            | Self::Branch { imm, .. }
            | Self::Load { imm, .. }
            | Self::Store { imm, .. }
            | Self::OpImm { imm, .. } => imm,
            Self::Op { .. } | Self::Halt => 0,
        }
    }
}
