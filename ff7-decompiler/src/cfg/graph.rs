//! Basic-block construction and the successor/predecessor edge graph.

use std::collections::{BTreeSet, HashMap};

use ff7_asm::instruction::InstructionKind;
use ff7_asm::Instruction;

use crate::cfg::block::Block;

/// What kind of control-flow transfer an [`Edge`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Falls through to the next block in address order.
    Fallthrough,
    /// Taken when a conditional jump's comparison holds.
    Taken,
    /// An unconditional jump/goto edge.
    Unconditional,
}

/// One control-flow edge between two blocks, identified by index into
/// [`Cfg::blocks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Source block index.
    pub from: usize,
    /// Destination block index.
    pub to: usize,
    /// The edge's kind.
    pub kind: EdgeKind,
}

/// The control-flow graph for a single function body.
#[derive(Debug, Clone, Default)]
pub struct Cfg {
    /// Basic blocks, indexed by [`Block::id`].
    pub blocks: Vec<Block>,
    /// Edges between blocks.
    pub edges: Vec<Edge>,
}

impl Cfg {
    /// Partition `instructions` into basic blocks and compute their edges.
    ///
    /// A new block starts at the function's first instruction, at any
    /// instruction that is some other instruction's jump target, and at the
    /// instruction immediately after a jump, conditional jump or return.
    pub fn build(instructions: &[Instruction]) -> Cfg {
        if instructions.is_empty() {
            return Cfg::default();
        }

        let mut leaders: BTreeSet<u32> = BTreeSet::new();
        leaders.insert(instructions[0].address);
        for instr in instructions {
            if let Some(target) = instr.dest_address() {
                leaders.insert(target);
            }
            if matches!(
                instr.kind,
                InstructionKind::Jump { .. } | InstructionKind::CondJump { .. } | InstructionKind::Return
            ) {
                leaders.insert(instr.next_address());
            }
        }

        let address_to_index: HashMap<u32, usize> =
            instructions.iter().enumerate().map(|(i, ins)| (ins.address, i)).collect();
        let leader_list: Vec<u32> = leaders
            .into_iter()
            .filter(|addr| address_to_index.contains_key(addr))
            .collect();

        let mut blocks = Vec::with_capacity(leader_list.len());
        let mut addr_to_block: HashMap<u32, usize> = HashMap::new();

        for (pos, &leader_addr) in leader_list.iter().enumerate() {
            let start_idx = address_to_index[&leader_addr];
            let end_idx = leader_list
                .get(pos + 1)
                .map(|next_addr| address_to_index[next_addr])
                .unwrap_or(instructions.len());
            let slice = &instructions[start_idx..end_idx];
            let start = slice.first().unwrap().address;
            let end = slice.last().unwrap().next_address();
            let id = blocks.len();
            addr_to_block.insert(start, id);
            blocks.push(Block { id, start, end, instructions: slice.to_vec() });
        }

        let mut edges = Vec::new();
        for block in &blocks {
            let Some(last) = block.instructions.last() else { continue };
            match &last.kind {
                InstructionKind::Return => {}
                InstructionKind::Jump { target, .. } => {
                    if let Some(&to) = addr_to_block.get(target) {
                        edges.push(Edge { from: block.id, to, kind: EdgeKind::Unconditional });
                    }
                }
                InstructionKind::CondJump { target, .. } => {
                    if let Some(&to) = addr_to_block.get(target) {
                        edges.push(Edge { from: block.id, to, kind: EdgeKind::Taken });
                    }
                    if let Some(&to) = addr_to_block.get(&last.next_address()) {
                        edges.push(Edge { from: block.id, to, kind: EdgeKind::Fallthrough });
                    }
                }
                _ => {
                    if let Some(&to) = addr_to_block.get(&last.next_address()) {
                        edges.push(Edge { from: block.id, to, kind: EdgeKind::Fallthrough });
                    }
                }
            }
        }

        Cfg { blocks, edges }
    }

    /// Edges leaving `block_id`.
    pub fn successors(&self, block_id: usize) -> Vec<Edge> {
        self.edges.iter().filter(|e| e.from == block_id).copied().collect()
    }

    /// Edges entering `block_id`.
    pub fn predecessors(&self, block_id: usize) -> Vec<Edge> {
        self.edges.iter().filter(|e| e.to == block_id).copied().collect()
    }

    /// Find the block starting exactly at `address`, if any.
    pub fn block_at(&self, address: u32) -> Option<&Block> {
        self.blocks.iter().find(|b| b.start == address)
    }
}

#[cfg(test)]
mod tests;
