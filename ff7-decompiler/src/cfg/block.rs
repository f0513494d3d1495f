//! A maximal straight-line run of instructions.

use ff7_asm::Instruction;

/// One basic block: no instruction but the last branches, and no
/// instruction but the first is targeted by another block's branch.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Index of this block within its owning [`crate::cfg::graph::Cfg`].
    pub id: usize,
    /// Address of the block's first instruction.
    pub start: u32,
    /// Address immediately past the block's last instruction.
    pub end: u32,
    /// The block's instructions, in address order.
    pub instructions: Vec<Instruction>,
}

impl Block {
    /// `true` when this block has no instructions (never produced by
    /// [`crate::cfg::graph::Cfg::build`], kept for callers constructing
    /// blocks directly in tests).
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
