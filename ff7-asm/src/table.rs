//! Opcode metadata: mnemonic text and argument format string per opcode.
//!
//! This is pure lookup data, the equivalent of the original disassembler's
//! `switch` statement collapsed into a table. Turning bytes into
//! [`crate::instruction::Instruction`]s still requires opcode-specific
//! semantics (which argument is the jump target, which is the store
//! destination) that lives in the decompiler crate's disassembler, one
//! layer up; this module only answers "how many bytes does this opcode's
//! arguments take, and what are they".

use crate::opcode::{Opcode, SpecialOpcode};

/// Metadata for one primary opcode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OpcodeInfo {
    /// Human-readable mnemonic, as it appears in emitted call expressions.
    pub mnemonic: &'static str,
    /// The argument format string, see [`crate::format`].
    pub format: &'static str,
}

/// Metadata for one `SPECIAL` sub-opcode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SpecialOpcodeInfo {
    /// Human-readable mnemonic.
    pub mnemonic: &'static str,
    /// The argument format string.
    pub format: &'static str,
}

/// Look up metadata for a primary opcode byte.
///
/// Returns `None` for bytes this table has no entry for; the caller (the
/// decompiler's disassembler) is responsible for turning that into an
/// `UnknownOpcode` error tagged with the instruction's address, since that
/// error type lives one layer up from this crate.
pub fn lookup(byte: u8) -> Option<(Opcode, OpcodeInfo)> {
    let opcode = Opcode::from_repr(byte)?;
    Some((opcode, info(opcode)))
}

/// Look up metadata for a `SPECIAL` sub-opcode byte.
pub fn lookup_special(byte: u8) -> Option<(SpecialOpcode, SpecialOpcodeInfo)> {
    let special = SpecialOpcode::from_repr(byte)?;
    Some((special, special_info(special)))
}

/// Metadata for a given primary [`Opcode`] variant.
pub fn info(opcode: Opcode) -> OpcodeInfo {
    use Opcode::*;
    let (mnemonic, format) = match opcode {
        Ret => ("RET", ""),
        Req => ("REQ", "Bb"),
        Reqsw => ("REQSW", "Bb"),
        Reqew => ("REQEW", "Bb"),
        Jmpf => ("JMPF", "B"),
        Jmpfl => ("JMPFL", "w"),
        Jmpb => ("JMPB", "B"),
        Jmpbl => ("JMPBL", "w"),
        Ifub => ("IFUB", "NBBB"),
        Ifubl => ("IFUBL", "NBBw"),
        Ifsw => ("IFSW", "NsBB"),
        Ifswl => ("IFSWL", "NsBw"),
        Ifuw => ("IFUW", "NwBB"),
        Ifuwl => ("IFUWL", "NwBw"),
        Request => ("REQUEST", "BbB"),
        Special => ("SPECIAL", ""),
        // Kawai/Kawiw are length-prefixed and decoded specially; this format
        // string is never consulted for them.
        Kawai => ("KAWAI", ""),
        Kawiw => ("KAWIW", ""),
        Wait => ("WAIT", "w"),
        Nop => ("NOP", ""),
        Setbyte => ("SETBYTE", "NB"),
        Setword => ("SETWORD", "Nw"),
        Inc => ("INC", "N"),
        Dec => ("DEC", "N"),
        Random => ("RANDOM", "N"),
        Minus => ("MINUS", "NN"),
        Plus => ("PLUS", "NN"),
        Mod => ("MOD", "NN"),
        Mes => ("MES", "B"),
        Ask => ("ASK", "BB"),
        Wcls => ("WCLS", "B"),
        Wsizw => ("WSIZW", "Bwwww"),
        Pc => ("PC", "B"),
        Pcfl => ("PCFL", "B"),
        Goldu => ("GOLDU", "d"),
        Goldd => ("GOLDD", "d"),
        Char => ("CHAR", "Bw"),
        Dfanm => ("DFANM", "Bww"),
        Anime1 => ("ANIME1", "Bww"),
        Visi => ("VISI", "B"),
        Xyzi => ("XYZI", "Biiii"),
        Move => ("MOVE", "Bii"),
        Tura => ("TURA", "Bww"),
        Unltgl => ("UNLTGL", "B"),
        Uc => ("UC", "B"),
        Idlck => ("IDLCK", "BB"),
        Bgscr => ("BGSCR", "Bii"),
        Bgpdh => ("BGPDH", "BbB"),
        Bgon => ("BGON", "BB"),
        Mvcam => ("MVCAM", "B"),
        Shake => ("SHAKE", "BBBbbw"),
        Fade => ("FADE", "BBBBBw"),
        Akao => ("AKAO", "BBwwBBBB"),
        Bgmovie => ("BGMOVIE", "B"),
        Musmk => ("MUSMK", "B"),
        Ifkey => ("IFKEY", "wB"),
        Getpc => ("GETPC", "BN"),
        Gameover => ("GAMEOVER", ""),
    };
    OpcodeInfo { mnemonic, format }
}

fn special_info(opcode: SpecialOpcode) -> SpecialOpcodeInfo {
    use SpecialOpcode::*;
    let (mnemonic, format) = match opcode {
        Arrow => ("ARROW", "B"),
        Pname => ("PNAME", "BU"),
        Clip => ("CLIP", "w"),
        Skip => ("SKIP", ""),
        Minigame => ("MINIGAME", "wwwwwB"),
        Tutor => ("TUTOR", "B"),
        Btmd2 => ("BTMD2", "ww"),
        Btrld => ("BTRLD", "B"),
        Gameover => ("GAMEOVER", ""),
        Clitm => ("CLITM", "B"),
    };
    SpecialOpcodeInfo { mnemonic, format }
}
