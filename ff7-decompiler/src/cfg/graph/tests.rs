use super::*;
use ff7_asm::comparator::Comparator;
use ff7_asm::{Opcode, Param};

fn ret_at(address: u32) -> Instruction {
    Instruction { address, len: 1, opcode: Opcode::Ret, special: None, kind: InstructionKind::Return }
}

fn cond_jump_at(address: u32, len: u32, target: u32) -> Instruction {
    Instruction {
        address,
        len,
        opcode: Opcode::Ifub,
        special: None,
        kind: InstructionKind::CondJump {
            lhs: Param::Variable(1, 0),
            rhs: Param::Integer(0),
            comparator: Comparator::Equal,
            target,
        },
    }
}

#[test]
fn single_return_produces_one_block_no_edges() {
    let instrs = vec![ret_at(0)];
    let cfg = Cfg::build(&instrs);
    assert_eq!(cfg.blocks.len(), 1);
    assert!(cfg.edges.is_empty());
}

#[test]
fn conditional_jump_splits_into_three_blocks_with_two_edges() {
    // 0: IFUB -> jumps to 10 on true, falls through to 5
    // 5: RET
    // 10: RET
    let instrs = vec![cond_jump_at(0, 5, 10), ret_at(5), ret_at(10)];
    let cfg = Cfg::build(&instrs);
    assert_eq!(cfg.blocks.len(), 3);
    let header = cfg.block_at(0).unwrap();
    let out = cfg.successors(header.id);
    assert_eq!(out.len(), 2);
    assert!(out.iter().any(|e| e.kind == EdgeKind::Taken));
    assert!(out.iter().any(|e| e.kind == EdgeKind::Fallthrough));
}

#[test]
fn empty_instruction_list_produces_empty_cfg() {
    let cfg = Cfg::build(&[]);
    assert!(cfg.blocks.is_empty());
    assert!(cfg.edges.is_empty());
}
