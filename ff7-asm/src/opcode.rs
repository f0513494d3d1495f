//! The primary opcode byte and the `SPECIAL` (`0x0F`) sub-opcode byte.

use strum::{EnumIter, FromRepr};

/// A decoded primary opcode byte.
///
/// Categories follow the groupings the original disassembler's switch
/// statement falls into (flow control, module/system calls, math, window,
/// party, model, walkmesh, background, camera, audio/video, and an
/// uncategorized tail). This table is a representative slice of the full
/// ~230-entry original table: every category is present, but not every
/// byte value in `0x00..=0xFF` is assigned a mnemonic. Bytes with no variant
/// here are rejected by [`crate::table::lookup`] with `UnknownOpcode`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, FromRepr)]
#[repr(u8)]
pub enum Opcode {
    // -- Flow --
    /// Return from the current function.
    Ret = 0x00,
    /// Call another entity's script, waiting for completion.
    Req = 0x01,
    /// Call another entity's script without waiting.
    Reqsw = 0x02,
    /// Cancel a pending queued call.
    Reqew = 0x03,
    /// Unconditional forward jump, absolute.
    Jmpf = 0x10,
    /// Unconditional forward jump, `u16` displacement.
    Jmpfl = 0x11,
    /// Unconditional backward jump, absolute (loop-forming).
    Jmpb = 0x12,
    /// Unconditional backward jump, `u16` displacement (loop-forming).
    Jmpbl = 0x13,
    /// Conditional forward jump, unsigned byte operand comparison.
    Ifub = 0x14,
    /// Conditional forward jump, `u16`-displacement variant of `Ifub`.
    Ifubl = 0x15,
    /// Conditional forward jump, signed word operand comparison.
    Ifsw = 0x16,
    /// `u16`-displacement variant of `Ifsw`.
    Ifswl = 0x17,
    /// Conditional forward jump, unsigned word operand comparison.
    Ifuw = 0x18,
    /// `u16`-displacement variant of `Ifuw`.
    Ifuwl = 0x19,
    /// Multi-way dispatch table.
    Request = 0x1a,

    // -- Module (includes the SPECIAL sub-opcode byte and KAWAI block) --
    /// Enter the extended `SPECIAL` sub-opcode table; see [`SpecialOpcode`].
    Special = 0x0f,
    /// Wait for `N` frames.
    Wait = 0x22,
    /// No-op padding instruction.
    Nop = 0x23,
    /// Length-prefixed variable-arity module call: the byte after the opcode
    /// is the total instruction length, the one after that a sub-opcode, and
    /// the rest raw byte-parameters. Decoded specially, not through
    /// [`crate::table`]'s format strings.
    Kawai = 0x28,
    /// Wait-for-completion variant of `Kawai`.
    Kawiw = 0x29,

    // -- Math --
    /// Assign an 8-bit literal into a variable.
    Setbyte = 0x30,
    /// Assign a 16-bit literal into a variable.
    Setword = 0x31,
    /// Increment a variable by one.
    Inc = 0x32,
    /// Decrement a variable by one.
    Dec = 0x33,
    /// Assign a uniform random value into a variable.
    Random = 0x34,
    /// Subtract an operand from a variable in place.
    Minus = 0x35,
    /// Add an operand to a variable in place.
    Plus = 0x36,
    /// Store the remainder of a variable divided by an operand.
    Mod = 0x37,

    // -- Window --
    /// Open a dialogue window.
    Mes = 0x40,
    /// Ask the player a yes/no question.
    Ask = 0x41,
    /// Close a dialogue window.
    Wcls = 0x42,
    /// Resize a dialogue window.
    Wsizw = 0x43,

    // -- Party --
    /// Add a member to the active party.
    Pc = 0x50,
    /// Remove a member from the active party.
    Pcfl = 0x51,
    /// Add gil to the party's wallet.
    Goldu = 0x52,
    /// Remove gil from the party's wallet.
    Goldd = 0x53,

    // -- Model --
    /// Select the entity's character model.
    Char = 0x60,
    /// Play a model animation to completion.
    Dfanm = 0x61,
    /// Play a looping model animation.
    Anime1 = 0x62,
    /// Set the model's visibility flag.
    Visi = 0x63,
    /// Teleport the model to an absolute position.
    Xyzi = 0x64,
    /// Move the model toward a target over time.
    Move = 0x65,
    /// Turn the model to face a target heading.
    Tura = 0x66,

    // -- Walkmesh --
    /// Set the active walkmesh triangle for an entity.
    Unltgl = 0x70,
    /// Toggle walkmesh collision for an entity.
    Uc = 0x71,
    /// Toggle walkmesh-gateway crossing for an entity.
    Idlck = 0x72,

    // -- Background --
    /// Scroll the background layer.
    Bgscr = 0x80,
    /// Trigger a background layer transition effect.
    Bgpdh = 0x81,
    /// Show or hide a background layer.
    Bgon = 0x82,

    // -- Camera --
    /// Move the camera to an absolute position.
    Mvcam = 0x90,
    /// Switch the active camera.
    Shake = 0x91,
    /// Fade the screen.
    Fade = 0x92,

    // -- Audio/Video --
    /// Play a sound effect.
    Akao = 0xa0,
    /// Play background music.
    Bgmovie = 0xa1,
    /// Stop background music.
    Musmk = 0xa2,

    // -- Uncategorized --
    /// Check a key-input state.
    Ifkey = 0xb0,
    /// Read the party leader's field position.
    Getpc = 0xb1,
    /// End the game and return to the title screen.
    Gameover = 0xff,
}

impl Opcode {
    /// `true` for the unconditional and conditional jump opcodes that the
    /// control-flow analyzer treats as edges rather than straight-line
    /// instructions.
    pub fn is_jump(self) -> bool {
        matches!(
            self,
            Opcode::Jmpf
                | Opcode::Jmpfl
                | Opcode::Jmpb
                | Opcode::Jmpbl
                | Opcode::Ifub
                | Opcode::Ifubl
                | Opcode::Ifsw
                | Opcode::Ifswl
                | Opcode::Ifuw
                | Opcode::Ifuwl
        )
    }

    /// `true` for the conditional forms (as opposed to `Jmpf`/`Jmpb` and
    /// their `l` variants, which are unconditional).
    pub fn is_conditional_jump(self) -> bool {
        matches!(
            self,
            Opcode::Ifub
                | Opcode::Ifubl
                | Opcode::Ifsw
                | Opcode::Ifswl
                | Opcode::Ifuw
                | Opcode::Ifuwl
        )
    }

    /// `true` for the backward-displacement jump forms, the only ones that
    /// can form a loop back-edge.
    pub fn is_backward_jump(self) -> bool {
        matches!(self, Opcode::Jmpb | Opcode::Jmpbl)
    }

    /// `true` for `Ret`, the only opcode that terminates a function body
    /// without a successor edge.
    pub fn is_return(self) -> bool {
        matches!(self, Opcode::Ret)
    }
}

/// Sub-opcodes reached through the `SPECIAL` (`0x0f`) primary byte.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, FromRepr)]
#[repr(u8)]
pub enum SpecialOpcode {
    /// Draw a directional arrow above an entity.
    Arrow = 0xf5,
    /// Set the player-visible name of an entity.
    Pname = 0xf6,
    /// Change the field-map's line-of-sight clip distance.
    Clip = 0xf7,
    /// Skip the remainder of the current opcode stream to end of script.
    Skip = 0xf8,
    /// Enter a minigame sub-script.
    Minigame = 0xf9,
    /// Display a tutorial message box.
    Tutor = 0xfa,
    /// Play the battle transition swirl.
    Btmd2 = 0xfb,
    /// Load a battle-related resource.
    Btrld = 0xfc,
    /// End the game immediately.
    Gameover = 0xfd,
    /// Pick up or drop an item an entity is holding.
    Clitm = 0xff,
}

#[cfg(test)]
mod tests;
