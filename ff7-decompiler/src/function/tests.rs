use super::*;
use ff7_asm::{Opcode, Param};

fn char_instruction(id: i32) -> Instruction {
    Instruction {
        address: 0,
        len: 3,
        opcode: Opcode::Char,
        special: None,
        kind: InstructionKind::Call { mnemonic: "CHAR", args: vec![Param::Integer(id)] },
    }
}

#[test]
fn slot_zero_and_one_get_named_roles() {
    assert_eq!(FunctionRole::for_slot(0), FunctionRole::Init);
    assert_eq!(FunctionRole::for_slot(1), FunctionRole::Main);
    assert_eq!(FunctionRole::for_slot(2), FunctionRole::Other);
}

#[test]
fn metadata_label_only_present_for_init_and_main() {
    let mut f = Function {
        entity_name: "CLOUD".into(),
        entity_index: 0,
        function_index: 0,
        role: FunctionRole::Init,
        start_address: 0,
        end_address: 10,
        instructions: vec![],
    };
    assert_eq!(f.metadata_label().as_deref(), Some("start_CLOUD"));
    f.role = FunctionRole::Main;
    assert_eq!(f.metadata_label().as_deref(), Some("main_CLOUD"));
    f.role = FunctionRole::Other;
    assert_eq!(f.metadata_label(), None);
}

#[test]
fn find_character_id_returns_first_char_call_argument() {
    let instrs = vec![char_instruction(7)];
    assert_eq!(find_character_id(&instrs), Some(7));
}

#[test]
fn find_character_id_defaults_to_none_when_absent() {
    assert_eq!(find_character_id(&[]), None);
}
