use super::*;
use rstest::rstest;

#[rstest]
#[case(0, Comparator::Equal)]
#[case(4, Comparator::GreaterEqual)]
#[case(9, Comparator::BitOn)]
#[case(10, Comparator::BitOff)]
fn decodes_known_bytes(#[case] byte: u8, #[case] expected: Comparator) {
    assert_eq!(Comparator::from_byte(0, byte).unwrap(), expected);
}

#[test]
fn rejects_out_of_range_byte() {
    let err = Comparator::from_byte(42, 11).unwrap_err();
    assert_eq!(err, AsmError::UnknownComparator { offset: 42, value: 11 });
}

#[test]
fn infix_symbol_is_stable_for_ordering_comparators() {
    assert_eq!(Comparator::Less.infix_symbol(), "<");
    assert_eq!(Comparator::NotEqual.infix_symbol(), "!=");
}
