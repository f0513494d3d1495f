//! Per-entity function bookkeeping: slot classification, end-of-script
//! bounds and character-id discovery.

use ff7_asm::{Instruction, InstructionKind, Opcode};

/// The role a function's slot plays for its owning entity.
///
/// Slot 0 is always the entity's one-shot initialization script, slot 1 its
/// per-frame main loop; every other populated slot is an ordinary function
/// only reachable via `REQ`/`REQSW`/`REQEW`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FunctionRole {
    /// Runs once when the field loads.
    Init,
    /// Runs every frame while the field is active.
    Main,
    /// An ordinary callable function.
    Other,
}

impl FunctionRole {
    /// Classify a function by its slot index within its entity.
    pub fn for_slot(slot: usize) -> Self {
        match slot {
            0 => FunctionRole::Init,
            1 => FunctionRole::Main,
            _ => FunctionRole::Other,
        }
    }
}

/// A single disassembled function: one entity's script at one slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// Owning entity's name.
    pub entity_name: String,
    /// Index of the entity within the script's entity table.
    pub entity_index: usize,
    /// Slot index within the entity (0..32).
    pub function_index: usize,
    /// This slot's role, derived from `function_index`.
    pub role: FunctionRole,
    /// Address the function's first instruction starts at.
    pub start_address: u32,
    /// Address immediately past the function's last instruction.
    pub end_address: u32,
    /// The function's disassembled instructions.
    pub instructions: Vec<Instruction>,
}

impl Function {
    /// A label combining the role and entity name, matching the original's
    /// `start_`/`end_`/`start_end_` metadata-comment convention: an
    /// `Init`-role function is tagged `start_<entity>`, a `Main`-role
    /// function `main_<entity>`, anything else gets no special tag.
    pub fn metadata_label(&self) -> Option<String> {
        match self.role {
            FunctionRole::Init => Some(format!("start_{}", self.entity_name)),
            FunctionRole::Main => Some(format!("main_{}", self.entity_name)),
            FunctionRole::Other => None,
        }
    }
}

/// Scan a function's instructions for the first `CHAR` (model-select) call
/// and return its model-index argument, interpreted as a signed character
/// id. Returns `None` (rather than the original's `-1` sentinel) when no
/// `CHAR` instruction is present, letting callers choose their own default.
pub fn find_character_id(instructions: &[Instruction]) -> Option<i32> {
    for instr in instructions {
        if instr.opcode == Opcode::Char {
            if let InstructionKind::Call { args, .. } = &instr.kind {
                if let Some(ff7_asm::Param::Integer(id)) = args.first() {
                    return Some(*id);
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests;
