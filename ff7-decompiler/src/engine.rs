//! Engine-specific post-CFG cleanup and entity-level script assembly.
//!
//! These passes run after structural classification and before emission,
//! in a fixed order: strip a self-looping sentinel block that trails the
//! function body (an artifact of disassembling past the real end of a
//! script), drop a `return` that's merely the function falling off its own
//! end, then mark loops that have no reachable `break` as unconditional so
//! the emitter doesn't synthesize a false exit condition for them.

use ff7_asm::instruction::InstructionKind;

use crate::cfg::{Cfg, Group, StructureKind};
use crate::function::{Function, FunctionRole};

/// Strip a trailing self-loop with no other successors from `cfg`: some
/// scripts pad unused trailing bytes with a jump back to itself, which
/// disassembles as an infinite loop that doesn't correspond to any real
/// control flow. Leaving it in place would make a perfectly ordinary
/// function appear to spin forever.
pub fn remove_trailing_infinite_loop(cfg: &mut Cfg) {
    let Some(last) = cfg.blocks.last() else { return };
    let last_id = last.id;
    let successors = cfg.successors(last_id);
    let is_self_loop = successors.len() == 1
        && successors[0].to == last_id
        && matches!(
            last.instructions.last().map(|i| &i.kind),
            Some(InstructionKind::Jump { is_call: false, .. })
        );
    if is_self_loop {
        if let Some(block) = cfg.blocks.iter_mut().find(|b| b.id == last_id) {
            block.instructions.pop();
        }
        cfg.edges.retain(|e| !(e.from == last_id && e.to == last_id));
    }
}

/// Drop a `return` instruction that is the very last instruction of the
/// function: falling off the end of an emitted function body already
/// returns, so printing it is redundant.
pub fn remove_extraneous_return_statements(cfg: &mut Cfg) {
    let Some(last) = cfg.blocks.last() else { return };
    if matches!(last.instructions.last().map(|i| &i.kind), Some(InstructionKind::Return)) {
        let last_id = last.id;
        if let Some(block) = cfg.blocks.iter_mut().find(|b| b.id == last_id) {
            block.instructions.pop();
        }
    }
}

/// Convert `While`/`DoWhile` groups whose body contains no reachable
/// `Break` into [`StructureKind::Loop`], so the emitter prints them as an
/// unconditional loop rather than a condition the control-flow analyzer
/// could prove is never actually taken as an exit.
pub fn mark_infinite_loop_groups(group: Group) -> Group {
    let kind = match group.kind {
        StructureKind::While { body, .. } if !contains_break(&body) => {
            StructureKind::Loop(Box::new(mark_infinite_loop_groups(*body)))
        }
        StructureKind::DoWhile { body, .. } if !contains_break(&body) => {
            StructureKind::Loop(Box::new(mark_infinite_loop_groups(*body)))
        }
        StructureKind::While { cond, body } => {
            StructureKind::While { cond, body: Box::new(mark_infinite_loop_groups(*body)) }
        }
        StructureKind::DoWhile { body, cond } => {
            StructureKind::DoWhile { body: Box::new(mark_infinite_loop_groups(*body)), cond }
        }
        StructureKind::Loop(body) => StructureKind::Loop(Box::new(mark_infinite_loop_groups(*body))),
        StructureKind::If { cond, then_branch, else_branch, coalesced_else } => StructureKind::If {
            cond,
            then_branch: Box::new(mark_infinite_loop_groups(*then_branch)),
            else_branch: else_branch.map(|e| Box::new(mark_infinite_loop_groups(*e))),
            coalesced_else,
        },
        StructureKind::Sequence(children) => {
            StructureKind::Sequence(children.into_iter().map(mark_infinite_loop_groups).collect())
        }
        other => other,
    };
    Group { kind }
}

fn contains_break(group: &Group) -> bool {
    match &group.kind {
        StructureKind::Break(_) => true,
        StructureKind::Sequence(children) => children.iter().any(contains_break),
        StructureKind::If { then_branch, else_branch, .. } => {
            contains_break(then_branch) || else_branch.as_ref().is_some_and(|e| contains_break(e))
        }
        // A nested loop's own break doesn't escape to this loop.
        StructureKind::While { .. } | StructureKind::DoWhile { .. } | StructureKind::Loop(_) => false,
        _ => false,
    }
}

/// Run every post-CFG cleanup pass, in order, over a function's graph and
/// its already-classified structure.
pub fn post_cfg(cfg: &mut Cfg, root: Group) -> Group {
    remove_trailing_infinite_loop(cfg);
    remove_extraneous_return_statements(cfg);
    mark_infinite_loop_groups(root)
}

/// The entities a script declares, deduplicated by name and carrying their
/// discovered functions, mirroring the original engine's `GetEntities`:
/// entities with no populated function slots are omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Entity name.
    pub name: String,
    /// This entity's discovered functions, in slot order.
    pub functions: Vec<Function>,
    /// The character id the entity's `Init`-role function selects via
    /// `CHAR`, if any.
    pub character_id: Option<i32>,
}

impl Entity {
    /// `true` when this entity has at least one non-`Other` function,
    /// matching the original's rule that an entity needs a populated
    /// init or main slot to be considered a "real" field object rather
    /// than an unused script-table row.
    pub fn is_active(&self) -> bool {
        self.functions.iter().any(|f| f.role != FunctionRole::Other || !f.instructions.is_empty())
    }
}
