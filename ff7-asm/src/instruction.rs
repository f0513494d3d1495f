//! The typed instruction the disassembler produces for each opcode it reads.

use crate::comparator::Comparator;
use crate::opcode::{Opcode, SpecialOpcode};
use crate::param::Param;

/// The semantic shape of a decoded instruction, grouped the way the control-
/// flow analyzer and semantic lifter need to dispatch on them rather than by
/// raw opcode category.
#[derive(Debug, Clone, PartialEq)]
pub enum InstructionKind {
    /// Plain return, no successor edge.
    Return,

    /// Unconditional jump to `target`. `is_call` distinguishes a call-style
    /// jump (pushes a return continuation) from a bare goto/loop edge.
    Jump { target: u32, is_call: bool },

    /// Conditional jump: compares `lhs` against `rhs` with `comparator`,
    /// jumping to `target` when the comparison holds.
    CondJump {
        lhs: Param,
        rhs: Param,
        comparator: Comparator,
        target: u32,
    },

    /// Assign `value` into `dest`, used by `SETBYTE`/`SETWORD`/`RANDOM` and
    /// similar direct-store opcodes.
    Store { dest: Param, value: Param },

    /// In-place compound update, used by `INC`/`DEC`/`PLUS`/`MINUS`/`MOD`:
    /// `dest <op>= operand`.
    CompoundStore {
        dest: Param,
        op: &'static str,
        operand: Param,
    },

    /// A call out to the module/window/party/model/etc. surface that is not
    /// itself a control-flow or store operation.
    Call {
        mnemonic: &'static str,
        args: Vec<Param>,
    },

    /// No operation.
    Nop,
}

/// A fully decoded instruction: its address, the raw opcode byte(s) it came
/// from, and its semantic kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Address (byte offset from the start of the script section) this
    /// instruction was read from.
    pub address: u32,
    /// Number of bytes this instruction occupies, including its opcode
    /// byte(s).
    pub len: u32,
    /// The primary opcode byte this instruction decoded from.
    pub opcode: Opcode,
    /// The sub-opcode, present only when `opcode == Opcode::Special`.
    pub special: Option<SpecialOpcode>,
    /// This instruction's semantic shape.
    pub kind: InstructionKind,
}

impl Instruction {
    /// Address immediately following this instruction.
    pub fn next_address(&self) -> u32 {
        self.address + self.len
    }

    /// The destination address this instruction can transfer control to,
    /// if any.
    pub fn dest_address(&self) -> Option<u32> {
        match &self.kind {
            InstructionKind::Jump { target, .. } => Some(*target),
            InstructionKind::CondJump { target, .. } => Some(*target),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
