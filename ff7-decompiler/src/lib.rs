//! Static decompiler for the Final Fantasy VII field-script bytecode.
//!
//! The pipeline mirrors the original engine's `Decompile` entry point:
//! parse the section-pointer prelude and script header, disassemble each
//! entity's declared function slots, build and classify each function's
//! control-flow graph, run the engine's post-CFG cleanup passes, lift
//! instructions to statements, and emit target-language text through a
//! two-pass DFS walk. Friendly naming is entirely delegated to an injected
//! [`formatter::Formatter`]; nothing here knows about the caller's own
//! naming conventions.

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![deny(unused_must_use)]

use std::collections::HashSet;

use ff7_asm::instruction::InstructionKind;
use tracing::debug;

pub mod cfg;
pub mod container;
pub mod disassembler;
pub mod emitter;
pub mod engine;
pub mod error;
pub mod formatter;
pub mod function;
pub mod kernel;
pub mod lifter;
pub mod reader;
pub mod target;
pub mod varname;

pub use cfg::{Cfg, Group, StructureKind};
pub use container::{ScriptHeader, SectionTable};
pub use emitter::EmitOptions;
pub use error::DecompileError;
pub use formatter::{DefaultFormatter, Formatter};
pub use function::{Function, FunctionRole};
pub use target::Target;

use container::Entity as HeaderEntity;
use reader::Reader;

fn default_function_name(func: &Function) -> String {
    match func.role {
        FunctionRole::Init => "init".to_string(),
        FunctionRole::Main => "main".to_string(),
        FunctionRole::Other => format!("sub_{:04x}", func.start_address),
    }
}

fn resolve_function_name(func: &Function, formatter: &dyn Formatter) -> String {
    let raw = default_function_name(func);
    let overridden = formatter.function_name(&func.entity_name, &raw);
    if overridden.is_empty() {
        raw
    } else {
        overridden
    }
}

fn resolve_entity_name(raw: &str, formatter: &dyn Formatter) -> String {
    let overridden = formatter.entity_name(raw);
    if overridden.is_empty() {
        raw.to_string()
    } else {
        overridden
    }
}

/// The section of a container holding the field script, normalized to
/// start at offset 0 so the entity function-offset table indexes it
/// directly.
fn script_section<'a>(bytes: &'a [u8], table: &SectionTable) -> &'a [u8] {
    let start = table.script_offset() as usize;
    let end = table
        .offsets
        .iter()
        .copied()
        .filter(|&o| o as usize > start)
        .min()
        .map(|o| o as usize)
        .unwrap_or(bytes.len());
    &bytes[start.min(bytes.len())..end.min(bytes.len())]
}

/// Distinct function-start addresses an entity's offset table declares,
/// paired with their slot index. Slot 1 is never a distinct entry: the
/// original format has no separate offset for an entity's `main` routine,
/// since it's reached by simply continuing past `init`'s trailing `RET` in
/// the same byte range (see [`build_functions`]).
fn distinct_slots(entity: &HeaderEntity, seen: &mut HashSet<u32>) -> Vec<(usize, u32)> {
    entity
        .function_offsets
        .iter()
        .enumerate()
        .filter(|&(slot, _)| slot != 1)
        .filter_map(|(slot, &offset)| {
            let offset = offset as u32;
            if seen.insert(offset) {
                Some((slot, offset))
            } else {
                None
            }
        })
        .collect()
}

/// End address (exclusive) for a function starting at `start`: the next
/// distinct function start address after it, or `section_end` if `start`
/// belongs to the last function in the script.
fn end_for(start: u32, all_starts: &[u32], section_end: u32) -> u32 {
    all_starts.iter().copied().find(|&s| s > start).unwrap_or(section_end)
}

/// Disassemble every entity's declared functions out of a parsed script
/// header, splitting each entity's slot-0 range into `init` (up to its
/// first `RET`) and `main` (everything after it), per spec.
pub fn build_functions(
    header: &ScriptHeader,
    script_bytes: &[u8],
) -> Result<Vec<Function>, DecompileError> {
    let section_end = script_bytes.len() as u32;

    let mut seen = HashSet::new();
    let per_entity: Vec<Vec<(usize, u32)>> =
        header.entities.iter().map(|e| distinct_slots(e, &mut seen)).collect();
    let mut all_starts: Vec<u32> = per_entity.iter().flatten().map(|&(_, s)| s).collect();
    all_starts.sort_unstable();
    all_starts.dedup();

    let mut functions = Vec::new();
    for (entity_index, entity) in header.entities.iter().enumerate() {
        for &(slot, start) in &per_entity[entity_index] {
            let end = end_for(start, &all_starts, section_end);
            if slot == 0 {
                let init_instrs = disassembler::disassemble_function(script_bytes, start, end)?;
                let init_end = init_instrs.last().map(|i| i.next_address()).unwrap_or(start);
                functions.push(Function {
                    entity_name: entity.name.clone(),
                    entity_index,
                    function_index: 0,
                    role: FunctionRole::Init,
                    start_address: start,
                    end_address: init_end,
                    instructions: init_instrs,
                });
                // Slot 0 always yields both an `init` and a `main` method,
                // even when nothing follows `init`'s `RET` — an entity with
                // a one-instruction script still gets an empty `main`.
                let main_instrs = disassembler::disassemble_function(script_bytes, init_end, end)?;
                let main_end = main_instrs.last().map(|i| i.next_address()).unwrap_or(init_end);
                // `main` is only allowed to consume up to its own trailing
                // `RET`; bytes still unconsumed after that would belong to a
                // third, unrepresentable continuation (slot 0 admits exactly
                // `init` and `main`).
                let main_returned = matches!(
                    main_instrs.last().map(|i| &i.kind),
                    Some(InstructionKind::Return)
                );
                if main_returned && main_end < end {
                    return Err(DecompileError::TooManyReturns { function_start: start });
                }
                functions.push(Function {
                    entity_name: entity.name.clone(),
                    entity_index,
                    function_index: 1,
                    role: FunctionRole::Main,
                    start_address: init_end,
                    end_address: main_end,
                    instructions: main_instrs,
                });
            } else {
                let instrs = disassembler::disassemble_function(script_bytes, start, end)?;
                let function_end = instrs.last().map(|i| i.next_address()).unwrap_or(start);
                functions.push(Function {
                    entity_name: entity.name.clone(),
                    entity_index,
                    function_index: slot,
                    role: FunctionRole::for_slot(slot),
                    start_address: start,
                    end_address: function_end,
                    instructions: instrs,
                });
            }
        }
    }
    Ok(functions)
}

/// Aggregate disassembled functions back into per-entity summaries, mirroring
/// `GetEntities`: each entity's character id is the first non-`None` id any
/// of its functions' `CHAR` calls select.
pub fn get_entities(header: &ScriptHeader, script_bytes: &[u8]) -> Result<Vec<engine::Entity>, DecompileError> {
    let functions = build_functions(header, script_bytes)?;
    let mut entities = Vec::with_capacity(header.entities.len());
    for (index, raw) in header.entities.iter().enumerate() {
        let entity_functions: Vec<Function> =
            functions.iter().filter(|f| f.entity_index == index).cloned().collect();
        let character_id =
            entity_functions.iter().find_map(|f| function::find_character_id(&f.instructions));
        entities.push(engine::Entity { name: raw.name.clone(), functions: entity_functions, character_id });
    }
    Ok(entities)
}

/// Indent every non-empty line of an already-rendered function body one
/// level deeper, matching the emitter's own 4-space convention: a
/// function's declaration line increases indentation just like `if`/`while`
/// headers do for their own bodies.
fn indent_block(text: &str) -> String {
    let mut out = String::new();
    for line in text.lines() {
        if !line.is_empty() {
            out.push_str("    ");
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

fn emit_function(
    func: &Function,
    target: &dyn Target,
    options: &EmitOptions,
    formatter: &dyn Formatter,
) -> String {
    let mut cfg = cfg::Cfg::build(&func.instructions);
    let root = cfg::classify(&cfg);
    let root = engine::post_cfg(&mut cfg, root);
    // Non-fatal: disagreements are logged inside `validate_stack_levels`
    // itself and don't block emission, per spec's stack-effect validation
    // policy.
    let _ = cfg::validate_stack_levels(&cfg, &root);

    let mut out = String::new();
    let comment = formatter.function_comment(&func.entity_name, &default_function_name(func));
    if !comment.is_empty() {
        out.push_str("// ");
        out.push_str(&comment);
        out.push('\n');
    }
    let name = resolve_function_name(func, formatter);
    out.push_str(&target.function_open(&name));
    out.push('\n');
    out.push_str(&indent_block(&emitter::emit(&cfg, &root, target, options, formatter)));
    out.push_str(&target.function_close());
    out.push('\n');
    out
}

/// Decompile one field script into target-language source text.
///
/// `bytes` is the whole container (section-pointer prelude and script
/// section); `prepend`/`append` are glued verbatim around the generated
/// body, matching the original's `textToPrepend`/`textToAppend` parameters.
pub fn decompile(
    name: &str,
    bytes: &[u8],
    formatter: &dyn Formatter,
    target: &dyn Target,
    options: &EmitOptions,
    prepend: &str,
    append: &str,
) -> Result<String, DecompileError> {
    let mut reader = Reader::new(bytes);
    let section_table = SectionTable::read(&mut reader)?;
    let script_bytes = script_section(bytes, &section_table);

    let mut header_reader = Reader::new(script_bytes);
    let header = ScriptHeader::read(&mut header_reader)?;
    debug!(name, entities = header.entities.len(), "decompiling script");

    let functions = build_functions(&header, script_bytes)?;

    let mut body = String::new();
    for (entity_index, entity) in header.entities.iter().enumerate() {
        let entity_name = resolve_entity_name(&entity.name, formatter);
        let emitted: Vec<&Function> = functions
            .iter()
            .filter(|f| f.entity_index == entity_index)
            .filter(|f| !formatter.exclude_function(&entity_name, &default_function_name(f)))
            .collect();

        // The entity wrapper (`onBeforeStartFunction`'s class block) opens
        // before the entity's first emitted function and closes after its
        // last, mirroring the original's `isStart`/`isEnd` metadata tags.
        if !emitted.is_empty() {
            body.push_str(&target.entity_open(&entity_name));
            body.push('\n');
        }
        for func in &emitted {
            body.push_str(&emit_function(func, target, options, formatter));
            body.push('\n');
        }
        if !emitted.is_empty() {
            body.push_str(&target.entity_close());
            body.push('\n');
        }
    }

    Ok(format!("{prepend}{body}{append}"))
}
