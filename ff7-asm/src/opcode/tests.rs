use super::*;

#[test]
fn jump_classification_matches_flow_category() {
    assert!(Opcode::Jmpf.is_jump());
    assert!(!Opcode::Jmpf.is_conditional_jump());
    assert!(Opcode::Ifub.is_jump());
    assert!(Opcode::Ifub.is_conditional_jump());
}

#[test]
fn only_jmpb_variants_are_backward() {
    assert!(Opcode::Jmpb.is_backward_jump());
    assert!(Opcode::Jmpbl.is_backward_jump());
    assert!(!Opcode::Jmpf.is_backward_jump());
    assert!(!Opcode::Ifub.is_backward_jump());
}

#[test]
fn ret_is_the_only_return_opcode() {
    assert!(Opcode::Ret.is_return());
    assert!(!Opcode::Req.is_return());
}

#[test]
fn from_repr_round_trips_byte_values() {
    assert_eq!(Opcode::from_repr(0x00), Some(Opcode::Ret));
    assert_eq!(Opcode::from_repr(0xff), Some(Opcode::Gameover));
    assert_eq!(Opcode::from_repr(0x0f), Some(Opcode::Special));
    assert_eq!(SpecialOpcode::from_repr(0xf5), Some(SpecialOpcode::Arrow));
}
