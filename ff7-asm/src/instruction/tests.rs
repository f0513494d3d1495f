use super::*;

fn sample(kind: InstructionKind) -> Instruction {
    Instruction {
        address: 100,
        len: 4,
        opcode: Opcode::Jmpf,
        special: None,
        kind,
    }
}

#[test]
fn next_address_adds_length() {
    let instr = sample(InstructionKind::Nop);
    assert_eq!(instr.next_address(), 104);
}

#[test]
fn dest_address_present_only_for_jumps() {
    let jump = sample(InstructionKind::Jump { target: 200, is_call: false });
    assert_eq!(jump.dest_address(), Some(200));

    let cond = sample(InstructionKind::CondJump {
        lhs: Param::Integer(1),
        rhs: Param::Integer(2),
        comparator: Comparator::Equal,
        target: 300,
    });
    assert_eq!(cond.dest_address(), Some(300));

    let store = sample(InstructionKind::Store {
        dest: Param::Variable(1, 0),
        value: Param::Integer(5),
    });
    assert_eq!(store.dest_address(), None);
}
