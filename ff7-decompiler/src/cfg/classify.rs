//! Structural classification of the block graph into if/while/do-while,
//! break/continue and raw-goto regions.
//!
//! This walks the block graph with a simple recursive region-growing pass
//! rather than a full dominator-tree algorithm: a conditional-jump header
//! with two successors becomes an `If`, a block that is the target of a
//! back edge becomes a loop header, and any remaining unconditional jump is
//! classified against the innermost loop's header/exit addresses as
//! `Continue`, `Break`, or, failing both, a raw `Goto`.

use std::collections::HashSet;

use ff7_asm::instruction::InstructionKind;

use crate::cfg::graph::{Cfg, EdgeKind};

/// The structural shape assigned to one region of the block graph.
#[derive(Debug, Clone, PartialEq)]
pub enum StructureKind {
    /// A single basic block with no further structure, identified by its
    /// block id.
    Block(usize),
    /// A sequence of groups executed one after another.
    Sequence(Vec<Group>),
    /// `if (cond) { then } [else { else_ }]`; `cond` names the header block
    /// whose trailing `CondJump` supplies the test expression.
    If {
        /// Header block id.
        cond: usize,
        /// The taken-when-true branch.
        then_branch: Box<Group>,
        /// The taken-when-false branch, when one exists and isn't just the
        /// fallthrough continuation.
        else_branch: Option<Box<Group>>,
        /// `true` when this group is itself the sole content of an
        /// enclosing if's else branch, so the emitter fuses the two into a
        /// single `} else if (…) {` instead of nesting a fresh `if` inside
        /// the `else` block.
        coalesced_else: bool,
    },
    /// `while (cond) { body }`, condition tested before each iteration.
    While {
        /// Header block id, whose `CondJump` is the loop condition.
        cond: usize,
        /// Loop body.
        body: Box<Group>,
    },
    /// `do { body } while (cond)`, condition tested after each iteration.
    DoWhile {
        /// Loop body, starting at the header block.
        body: Box<Group>,
        /// Block id whose trailing jump drives the back edge.
        cond: usize,
    },
    /// An unconditional loop with no reachable `break`, produced by
    /// `engine::mark_infinite_loop_groups` out of a `While`/`DoWhile` whose
    /// body never exits early.
    Loop(Box<Group>),
    /// `break`, preceded by the originating block's non-jump instructions.
    Break(usize),
    /// `continue`, preceded by the originating block's non-jump
    /// instructions.
    Continue(usize),
    /// An unstructured jump the classifier could not fit into a higher-level
    /// shape; lowered to a raw `goto <address>`.
    Goto(usize, u32),
}

/// One classified region.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// This region's structural shape.
    pub kind: StructureKind,
}

struct LoopContext {
    header_start: u32,
    exit_start: Option<u32>,
}

/// Classify `cfg` into a single top-level [`Group`], starting from the
/// function's entry block (block id 0).
pub fn classify(cfg: &Cfg) -> Group {
    if cfg.blocks.is_empty() {
        return Group { kind: StructureKind::Sequence(Vec::new()) };
    }
    let loop_headers = find_loop_headers(cfg);
    let mut visited = HashSet::new();
    classify_from(cfg, 0, &loop_headers, &mut visited, &[])
}

fn find_loop_headers(cfg: &Cfg) -> HashSet<usize> {
    let mut headers = HashSet::new();
    for edge in &cfg.edges {
        let from_start = cfg.blocks[edge.from].start;
        let to_start = cfg.blocks[edge.to].start;
        if to_start <= from_start {
            headers.insert(edge.to);
        }
    }
    headers
}

fn classify_from(
    cfg: &Cfg,
    start: usize,
    loop_headers: &HashSet<usize>,
    visited: &mut HashSet<usize>,
    enclosing_loops: &[LoopContext],
) -> Group {
    let mut sequence = Vec::new();
    let mut current = Some(start);

    while let Some(id) = current {
        if !visited.insert(id) {
            // Already classified under another branch (a shared merge
            // point): represent the rejoin as a goto rather than silently
            // dropping the edge or duplicating the block's code.
            sequence.push(Group { kind: StructureKind::Goto(id, cfg.blocks[id].start) });
            break;
        }
        let block = &cfg.blocks[id];
        let successors = cfg.successors(id);
        let last_kind = block.instructions.last().map(|i| &i.kind);

        let (group, next) = if loop_headers.contains(&id) {
            let group = classify_loop(cfg, id, loop_headers, visited, enclosing_loops);
            (group, None)
        } else if successors.len() == 2 && matches!(last_kind, Some(InstructionKind::CondJump { .. })) {
            let group = classify_if(cfg, id, loop_headers, visited, enclosing_loops);
            (group, None)
        } else if successors.len() == 1
            && matches!(successors[0].kind, EdgeKind::Unconditional)
            && matches!(last_kind, Some(InstructionKind::Jump { is_call: false, .. }))
        {
            let target_start = cfg.blocks[successors[0].to].start;
            if let Some(ctx) = enclosing_loops.last() {
                if target_start == ctx.header_start {
                    (Group { kind: StructureKind::Continue(id) }, None)
                } else if Some(target_start) == ctx.exit_start {
                    (Group { kind: StructureKind::Break(id) }, None)
                } else {
                    (Group { kind: StructureKind::Goto(id, target_start) }, None)
                }
            } else {
                (Group { kind: StructureKind::Goto(id, target_start) }, None)
            }
        } else {
            let next = successors
                .iter()
                .find(|e| matches!(e.kind, EdgeKind::Fallthrough))
                .map(|e| e.to)
                .filter(|to| !visited.contains(to));
            (Group { kind: StructureKind::Block(id) }, next)
        };

        sequence.push(group);
        current = next;
    }

    if sequence.len() == 1 {
        sequence.into_iter().next().unwrap()
    } else {
        Group { kind: StructureKind::Sequence(sequence) }
    }
}

fn classify_loop(
    cfg: &Cfg,
    header: usize,
    loop_headers: &HashSet<usize>,
    visited: &mut HashSet<usize>,
    enclosing_loops: &[LoopContext],
) -> Group {
    let successors = cfg.successors(header);
    let header_block = &cfg.blocks[header];
    let ends_in_cond =
        matches!(header_block.instructions.last().map(|i| &i.kind), Some(InstructionKind::CondJump { .. }));

    if ends_in_cond && successors.len() == 2 {
        let body_entry = successors.iter().find(|e| matches!(e.kind, EdgeKind::Fallthrough)).map(|e| e.to);
        let exit_start =
            successors.iter().find(|e| matches!(e.kind, EdgeKind::Taken)).map(|e| cfg.blocks[e.to].start);

        let mut nested = enclosing_loops.to_vec();
        nested.push(LoopContext { header_start: header_block.start, exit_start });

        let body = body_entry
            .map(|entry| classify_from(cfg, entry, loop_headers, visited, &nested))
            .unwrap_or(Group { kind: StructureKind::Sequence(Vec::new()) });
        Group { kind: StructureKind::While { cond: header, body: Box::new(body) } }
    } else {
        // A loop header with a plain body: the back edge is formed by a
        // later unconditional backward jump rather than the header's own
        // condition, so this is a `do { .. } while`. Re-admit the header to
        // `visited` tracking by classifying its body starting at itself,
        // with no statically known exit address (the back-edge block's own
        // classification step resolves the loop-closing jump).
        visited.remove(&header);
        let mut nested = enclosing_loops.to_vec();
        nested.push(LoopContext { header_start: header_block.start, exit_start: None });
        let mut headers_without_self = loop_headers.clone();
        headers_without_self.remove(&header);
        let body = classify_from(cfg, header, &headers_without_self, visited, &nested);
        Group { kind: StructureKind::DoWhile { body: Box::new(body), cond: header } }
    }
}

fn classify_if(
    cfg: &Cfg,
    header: usize,
    loop_headers: &HashSet<usize>,
    visited: &mut HashSet<usize>,
    enclosing_loops: &[LoopContext],
) -> Group {
    let successors = cfg.successors(header);
    let then_entry = successors.iter().find(|e| matches!(e.kind, EdgeKind::Fallthrough)).map(|e| e.to);
    let else_entry = successors.iter().find(|e| matches!(e.kind, EdgeKind::Taken)).map(|e| e.to);

    let then_branch = then_entry
        .map(|entry| classify_from(cfg, entry, loop_headers, visited, enclosing_loops))
        .unwrap_or(Group { kind: StructureKind::Sequence(Vec::new()) });

    let mut else_branch = else_entry
        .filter(|to| !visited.contains(to))
        .map(|entry| Box::new(classify_from(cfg, entry, loop_headers, visited, enclosing_loops)));

    // An else branch that collapsed (via `classify_from`'s singleton-sequence
    // rule) down to a single nested `if` is an `else if` chain link: fuse it
    // with this group's own `else` instead of nesting a fresh block.
    if let Some(else_group) = else_branch.as_deref_mut() {
        if let StructureKind::If { coalesced_else, .. } = &mut else_group.kind {
            *coalesced_else = true;
        }
    }

    Group {
        kind: StructureKind::If {
            cond: header,
            then_branch: Box::new(then_branch),
            else_branch,
            coalesced_else: false,
        },
    }
}

#[cfg(test)]
mod tests;
