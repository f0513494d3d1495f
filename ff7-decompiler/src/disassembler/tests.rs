use super::*;
use ff7_asm::instruction::InstructionKind;

#[test]
fn disassembles_return_only_function() {
    let bytes = [Opcode::Ret as u8];
    let instrs = disassemble_function(&bytes, 0, 1).unwrap();
    assert_eq!(instrs.len(), 1);
    assert_eq!(instrs[0].kind, InstructionKind::Return);
}

#[test]
fn disassembles_setbyte_then_return() {
    let bytes = [Opcode::Setbyte as u8, 0x01, 0x05, 0x00, Opcode::Ret as u8];
    let instrs = disassemble_function(&bytes, 0, bytes.len() as u32).unwrap();
    assert_eq!(instrs.len(), 2);
    match &instrs[0].kind {
        InstructionKind::Store { dest, value } => {
            assert_eq!(*dest, Param::Variable(1, 5));
            assert_eq!(*value, Param::Integer(0));
        }
        other => panic!("unexpected kind {other:?}"),
    }
}

#[test]
fn forward_jump_target_is_relative_to_next_instruction() {
    let bytes = [Opcode::Jmpf as u8, 0x05, Opcode::Ret as u8];
    let instrs = disassemble_function(&bytes, 0, bytes.len() as u32).unwrap();
    match instrs[0].kind {
        InstructionKind::Jump { target, is_call } => {
            assert_eq!(target, 2 + 5);
            assert!(!is_call);
        }
        ref other => panic!("unexpected kind {other:?}"),
    }
}

#[test]
fn conditional_jump_decodes_comparator_and_target() {
    // IFUB: N(bank,addr) B(rhs) B(comparator) B(displacement)
    let bytes = [
        Opcode::Ifub as u8,
        0x01, 0x00, 0x00, // bank=1, addr=0
        0x05,             // rhs = 5
        0x00,             // comparator = Equal
        0x03,             // displacement
    ];
    let instrs = disassemble_function(&bytes, 0, bytes.len() as u32).unwrap();
    match &instrs[0].kind {
        InstructionKind::CondJump { lhs, rhs, comparator, target } => {
            assert_eq!(*lhs, Param::Variable(1, 0));
            assert_eq!(*rhs, Param::Integer(5));
            assert_eq!(*comparator, Comparator::Equal);
            assert_eq!(*target, bytes.len() as u32 + 3);
        }
        other => panic!("unexpected kind {other:?}"),
    }
}

#[test]
fn unknown_opcode_byte_errors_with_address() {
    let bytes = [0x05u8];
    let err = disassemble_function(&bytes, 0, 1).unwrap_err();
    assert_eq!(err, DecompileError::UnknownOpcode { address: 0, opcode: 0x05 });
}

#[test]
fn special_sub_opcode_decodes_via_table() {
    let bytes = [Opcode::Special as u8, 0xf7, 0x10, 0x00];
    let instrs = disassemble_function(&bytes, 0, bytes.len() as u32).unwrap();
    assert_eq!(instrs[0].special, Some(ff7_asm::SpecialOpcode::Clip));
}

#[test]
fn unknown_special_sub_opcode_errors() {
    let bytes = [Opcode::Special as u8, 0x01];
    let err = disassemble_function(&bytes, 0, bytes.len() as u32).unwrap_err();
    assert_eq!(err, DecompileError::UnknownSubOpcode { address: 0, opcode: 0x01 });
}

#[test]
fn kawai_decodes_length_prefixed_payload_and_advances_by_reported_length() {
    // length=5 covers opcode+length+subop+2 payload bytes
    let bytes = [Opcode::Kawai as u8, 0x05, 0x02, 0xaa, 0xbb, Opcode::Ret as u8];
    let instrs = disassemble_function(&bytes, 0, bytes.len() as u32).unwrap();
    assert_eq!(instrs[0].len, 5);
    match &instrs[0].kind {
        InstructionKind::Call { mnemonic, args } => {
            assert_eq!(*mnemonic, "KAWAI");
            assert_eq!(args, &[Param::Integer(2), Param::Integer(0xaa), Param::Integer(0xbb)]);
        }
        other => panic!("unexpected kind {other:?}"),
    }
    assert_eq!(instrs[1].kind, InstructionKind::Return);
}

#[test]
fn kawai_length_below_three_is_truncated_input() {
    let bytes = [Opcode::Kawai as u8, 0x02, 0x00];
    let err = disassemble_function(&bytes, 0, bytes.len() as u32).unwrap_err();
    assert_eq!(err, DecompileError::TruncatedInput { offset: 1, needed: 1 });
}
