//! The decompiler's top-level error type.

use ff7_asm::AsmError;
use thiserror::Error;

/// Fatal failures the decompilation pipeline can raise.
///
/// All of these abort the current function (or the whole script, for
/// container-level failures); they are not meant to be partially recovered
/// from. Softer degradations — unknown kernel calls, unknown variable banks,
/// unclassifiable control structures — are handled in-place by the relevant
/// module and never surface here; see `SPEC_FULL.md` §7 for the layered
/// error policy this split implements.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecompileError {
    /// The byte stream ended before a required field could be read.
    #[error("truncated input at offset {offset}: needed {needed} more byte(s)")]
    TruncatedInput {
        /// Offset at which the read was attempted.
        offset: u32,
        /// Number of additional bytes required.
        needed: u32,
    },

    /// The script container's header failed validation (bad magic, bad
    /// section count, or an out-of-range section pointer).
    #[error("invalid script header: {reason}")]
    InvalidHeader {
        /// Human-readable description of what failed validation.
        reason: String,
    },

    /// A primary opcode byte with no entry in the opcode table.
    #[error("unknown opcode 0x{opcode:02x} at address {address}")]
    UnknownOpcode {
        /// Address the opcode byte was read from.
        address: u32,
        /// The unrecognized byte.
        opcode: u8,
    },

    /// A `SPECIAL` sub-opcode byte with no entry in the sub-opcode table.
    #[error("unknown special sub-opcode 0x{opcode:02x} at address {address}")]
    UnknownSubOpcode {
        /// Address the sub-opcode byte was read from.
        address: u32,
        /// The unrecognized byte.
        opcode: u8,
    },

    /// A comparator byte on a conditional jump outside the known 0..=10
    /// range.
    #[error("unknown comparator {op} at address {address}")]
    UnknownComparator {
        /// Address the comparator byte was read from.
        address: u32,
        /// The unrecognized value.
        op: u8,
    },

    /// A variable bank reference that a strict `Formatter` has chosen to
    /// escalate rather than accept the default soft-degraded name for.
    #[error("unknown variable bank {bank}")]
    UnknownBank {
        /// The unrecognized bank index.
        bank: u8,
    },

    /// A jump instruction whose opcode byte was recognized but whose
    /// encoded displacement kind (the table disagrees with what the control
    /// flow analyzer expected) could not be classified.
    #[error("unknown jump type for opcode 0x{opcode:02x} at address {address}")]
    UnknownJumpType {
        /// Address of the jump instruction.
        address: u32,
        /// Its opcode byte.
        opcode: u8,
    },

    /// A function produced more than one distinct `return` continuation
    /// than the engine's call-stack model can represent.
    #[error("too many returns in function starting at {function_start}")]
    TooManyReturns {
        /// Start address of the offending function.
        function_start: u32,
    },

    /// The value-stack level computed along one path into a structural join
    /// point (the far side of an `if`/`else`, or a `while` loop's back edge)
    /// disagrees with another path into the same join. Non-fatal: the
    /// classifier already falls back to a plain sequence for any merge it
    /// can't fit into a single structured shape, so this only downgrades
    /// confidence in the shape already chosen rather than blocking emission.
    #[error("stack level mismatch at a structural join: expected {expected}, found {found}")]
    StackLevelMismatch {
        /// The level established by the first path checked into the join.
        expected: i32,
        /// The level a later path into the same join computed instead.
        found: i32,
    },

    /// An error from the opcode/argument-decoding layer, wrapped unchanged.
    #[error(transparent)]
    Asm(#[from] AsmError),
}
