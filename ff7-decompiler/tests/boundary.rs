//! Boundary behaviors from the pipeline's error and edge-case contract,
//! exercised against the public API.

mod support;

use ff7_asm::instruction::InstructionKind;
use ff7_decompiler::target::CLikeTarget;
use ff7_decompiler::{build_functions, decompile, DecompileError, DefaultFormatter, EmitOptions};
use ff7_decompiler::{ScriptHeader, SectionTable};

#[test]
fn a_script_that_is_exactly_one_ret_byte_still_splits_into_init_and_main() {
    let bytes = support::single_function_container(b"HERO\0\0\0\0", &[0x00]);
    let text = decompile(
        "one_ret",
        &bytes,
        &DefaultFormatter,
        &CLikeTarget,
        &EmitOptions::default(),
        "",
        "",
    )
    .expect("decompiles");
    assert!(text.contains("void init() {"));
    assert!(text.contains("void main() {"));
}

#[test]
fn kawai_with_a_length_byte_under_three_fails_with_truncated_input() {
    // KAWAI opcode, length byte 2 (< 3).
    let bytes = [0x28, 0x02];
    let err = ff7_decompiler::disassembler::disassemble_function(&bytes, 0, bytes.len() as u32)
        .unwrap_err();
    match err {
        DecompileError::TruncatedInput { needed, .. } => assert_eq!(needed, 1),
        other => panic!("expected TruncatedInput, got {other:?}"),
    }
}

#[test]
fn duplicate_entry_point_slots_materialise_only_one_function() {
    // `single_function_container` points every one of an entity's 32
    // function-offset slots at the same address; only slot 0's init/main
    // split should come out the other side.
    let bytes = support::single_function_container(b"HERO\0\0\0\0", &[0x00]);

    let mut reader = ff7_decompiler::reader::Reader::new(&bytes);
    let table = SectionTable::read(&mut reader).expect("section table");
    let start = table.script_offset() as usize;
    let script_bytes = &bytes[start..];
    let mut header_reader = ff7_decompiler::reader::Reader::new(script_bytes);
    let header = ScriptHeader::read(&mut header_reader).expect("header");

    let functions = build_functions(&header, script_bytes).expect("functions");
    assert_eq!(functions.len(), 2); // init + main, nothing else
}

#[test]
fn a_container_shorter_than_the_section_prelude_fails_to_parse() {
    let bytes = vec![0u8; 10];
    let err = decompile(
        "short",
        &bytes,
        &DefaultFormatter,
        &CLikeTarget,
        &EmitOptions::default(),
        "",
        "",
    )
    .unwrap_err();
    assert!(matches!(err, DecompileError::TruncatedInput { .. }));
}

#[test]
fn a_cond_jump_targeting_itself_is_structurally_a_do_while() {
    // A single IFUB whose own displacement sends it back to its own
    // address: `address + len + displacement == address` only holds when
    // `len + displacement == 0`, which never happens for a real forward
    // jump, so this instead checks the do-while shape via a JMPB that
    // targets its own address (displacement equal to its own length).
    let bytes = [0x12, 0x02]; // JMPB, displacement 2: address 0, len 2, target 0
    let instrs = ff7_decompiler::disassembler::disassemble_function(&bytes, 0, bytes.len() as u32)
        .expect("decodes");
    assert_eq!(instrs.len(), 1);
    assert!(matches!(instrs[0].kind, InstructionKind::Jump { target: 0, .. }));

    let cfg = ff7_decompiler::Cfg::build(&instrs);
    let root = ff7_decompiler::cfg::classify(&cfg);
    assert!(matches!(root.kind, ff7_decompiler::StructureKind::DoWhile { .. }));
}
