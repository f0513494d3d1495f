//! Error types for opcode decoding and argument-format parsing.

use thiserror::Error;

/// Failure modes raised while decoding raw bytes into [`crate::instruction::Instruction`]s.
///
/// These are all fatal: the caller has no byte stream it can keep reading
/// from once one of these fires, so the decompiler layer above maps every
/// variant onto a matching `DecompileError` and aborts that function.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AsmError {
    /// The byte stream ended before a fixed-size or length-prefixed field
    /// could be fully read.
    #[error("truncated input at offset {offset}: needed {needed} more byte(s)")]
    TruncatedInput {
        /// Offset at which the read was attempted.
        offset: u32,
        /// Number of additional bytes required to satisfy the read.
        needed: u32,
    },

    /// A format-string character outside the `B,b,w,s,d,i,N,U` alphabet.
    #[error("invalid argument format character {ch:?} in format string {format:?}")]
    InvalidFormatChar {
        /// The offending character.
        ch: char,
        /// The format string it was found in.
        format: &'static str,
    },

    /// A comparator byte outside the 0..=10 range understood by conditional
    /// jump opcodes.
    #[error("unknown comparator byte {value} at offset {offset}")]
    UnknownComparator {
        /// Offset of the comparator byte.
        offset: u32,
        /// The unrecognized value.
        value: u8,
    },
}
