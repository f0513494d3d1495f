use super::*;
use crate::formatter::DefaultFormatter;

struct OverrideFormatter(&'static str);
impl Formatter for OverrideFormatter {
    fn var_name(&self, _bank: u8, _addr: u16) -> String {
        self.0.to_string()
    }
}

#[test]
fn bank_zero_is_a_literal_address_with_no_prefix() {
    assert_eq!(var_name(&DefaultFormatter, 0, 42), "42");
}

#[test]
fn known_variable_banks_use_prefixed_var_name() {
    assert_eq!(var_name(&DefaultFormatter, 1, 5), "FFVII.Data.var_1_5");
    assert_eq!(var_name(&DefaultFormatter, 13, 5), "FFVII.Data.var_13_5");
    assert_eq!(var_name(&DefaultFormatter, 15, 5), "FFVII.Data.var_15_5");
}

#[test]
fn scratch_banks_get_prefixed_temp_name() {
    assert_eq!(var_name(&DefaultFormatter, 5, 2), "FFVII.Data.temp_5_2");
    assert_eq!(var_name(&DefaultFormatter, 6, 2), "FFVII.Data.temp_6_2");
}

#[test]
fn unrecognized_bank_degrades_softly_instead_of_panicking() {
    assert_eq!(var_name(&DefaultFormatter, 99, 7), "FFVII.Data.unknown_99_7");
}

#[test]
fn address_is_masked_to_its_low_byte() {
    assert_eq!(var_name(&DefaultFormatter, 1, 0x1FF), "FFVII.Data.var_1_255");
}

#[test]
fn formatter_override_is_wrapped_in_the_same_prefix() {
    assert_eq!(var_name(&OverrideFormatter("tifaLovePoints"), 1, 5), "FFVII.Data.tifaLovePoints");
}

#[test]
fn unrecognized_bank_never_consults_the_formatter_override() {
    assert_eq!(var_name(&OverrideFormatter("shouldNotAppear"), 99, 7), "FFVII.Data.unknown_99_7");
}
