//! Conditional-jump comparators.

use strum::{EnumIter, FromRepr};

use crate::error::AsmError;

/// The eleven comparators a conditional-jump opcode can encode.
///
/// Numeric values match the byte the original bytecode stores for each
/// comparator; `Comparator::from_byte` is the inverse of the table in
/// `ff7_field_engine.cpp`'s `FF7CondJumpInstruction::processInst`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, FromRepr)]
#[repr(u8)]
pub enum Comparator {
    /// `==`
    Equal = 0,
    /// `!=`
    NotEqual = 1,
    /// `>`
    Greater = 2,
    /// `<`
    Less = 3,
    /// `>=`
    GreaterEqual = 4,
    /// `<=`
    LessEqual = 5,
    /// bitwise `&` tested for non-zero
    BitAnd = 6,
    /// bitwise `^` tested for non-zero
    BitXor = 7,
    /// bitwise `|` tested for non-zero
    BitOr = 8,
    /// single-bit test, bit is on
    BitOn = 9,
    /// single-bit test, bit is off
    BitOff = 10,
}

impl Comparator {
    /// Decode a comparator byte, as read from a conditional-jump opcode's
    /// operand stream.
    pub fn from_byte(offset: u32, value: u8) -> Result<Self, AsmError> {
        Self::from_repr(value).ok_or(AsmError::UnknownComparator { offset, value })
    }

    /// The infix operator text a C-like target language uses for this
    /// comparator. `BitOn`/`BitOff` have no natural infix spelling and are
    /// handled specially by callers (they lower to a masked equality test).
    pub fn infix_symbol(self) -> &'static str {
        match self {
            Comparator::Equal => "==",
            Comparator::NotEqual => "!=",
            Comparator::Greater => ">",
            Comparator::Less => "<",
            Comparator::GreaterEqual => ">=",
            Comparator::LessEqual => "<=",
            Comparator::BitAnd => "&",
            Comparator::BitXor => "^",
            Comparator::BitOr => "|",
            Comparator::BitOn | Comparator::BitOff => "&",
        }
    }
}

#[cfg(test)]
mod tests;
