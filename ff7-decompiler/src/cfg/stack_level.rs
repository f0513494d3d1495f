//! Post-classification stack-level validation.
//!
//! Per spec, the value stack's depth at every structural join point must
//! agree across every path that reaches it. A disagreement isn't fatal: the
//! classifier already lowers any merge it can't fit into a single shape to a
//! raw `goto` (see `cfg::classify`'s own revisited-block handling), so this
//! pass only downgrades confidence in a shape that was already chosen,
//! logging each disagreement it finds rather than aborting emission.

use ff7_asm::instruction::InstructionKind;
use tracing::warn;

use crate::cfg::{Cfg, Group, StructureKind};
use crate::error::DecompileError;

/// Net stack-level change a plain (non-structural) block contributes. An
/// `If`/`While` header's trailing `CondJump` is pushed and popped by that
/// construct itself (see `emitter::emit_group`), so it never reaches here:
/// the classifier only ever leaves a bare `Block`/`Goto`/`Break`/`Continue`
/// ending in `CondJump` for a shape this analyzer hasn't learned yet, which
/// is why this still checks rather than assuming zero unconditionally.
fn block_delta(cfg: &Cfg, block_id: usize) -> i32 {
    let ends_in_cond_jump = matches!(
        cfg.blocks[block_id].instructions.last().map(|i| &i.kind),
        Some(InstructionKind::CondJump { .. })
    );
    if ends_in_cond_jump {
        1
    } else {
        0
    }
}

fn exit_level(cfg: &Cfg, group: &Group, entry: i32, mismatches: &mut Vec<DecompileError>) -> i32 {
    match &group.kind {
        StructureKind::Block(id) | StructureKind::Goto(id, _) | StructureKind::Break(id) | StructureKind::Continue(id) => {
            entry + block_delta(cfg, *id)
        }
        StructureKind::Sequence(children) => {
            let mut level = entry;
            for child in children {
                level = exit_level(cfg, child, level, mismatches);
            }
            level
        }
        StructureKind::If { then_branch, else_branch, .. } => {
            let then_exit = exit_level(cfg, then_branch, entry, mismatches);
            let else_exit = match else_branch {
                Some(e) => exit_level(cfg, e, entry, mismatches),
                None => entry,
            };
            if then_exit != else_exit {
                let err = DecompileError::StackLevelMismatch { expected: then_exit, found: else_exit };
                warn!(%err, "downgrading if/else join to its entry stack level");
                mismatches.push(err);
                entry
            } else {
                then_exit
            }
        }
        StructureKind::While { body, .. } => {
            let body_exit = exit_level(cfg, body, entry, mismatches);
            if body_exit != entry {
                let err = DecompileError::StackLevelMismatch { expected: entry, found: body_exit };
                warn!(%err, "while loop body does not restore its entry stack level");
                mismatches.push(err);
            }
            entry
        }
        StructureKind::DoWhile { body, .. } => {
            // The footer recomputes its comparator directly instead of
            // popping the value stack (see `emitter::emit_group`'s
            // `DoWhile` arm), so a do-while's own body is not held to the
            // same restore-on-exit expectation a `While`'s is.
            exit_level(cfg, body, entry, mismatches);
            entry
        }
        StructureKind::Loop(body) => {
            exit_level(cfg, body, entry, mismatches);
            entry
        }
    }
}

/// Validate stack-level agreement across every structural join in a
/// classified function body, starting from level 0. Returns every
/// disagreement found; callers log-and-continue rather than treating this
/// as fatal, matching spec's non-fatal stack-effect validation policy.
pub fn validate_stack_levels(cfg: &Cfg, root: &Group) -> Vec<DecompileError> {
    let mut mismatches = Vec::new();
    exit_level(cfg, root, 0, &mut mismatches);
    mismatches
}

#[cfg(test)]
mod tests;
