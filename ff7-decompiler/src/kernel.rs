//! Kernel-call dispatch: friendly names for module/window/party/model/etc.
//! calls lifted from raw opcode mnemonics.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::warn;

fn table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        HashMap::from([
            ("MES", "message"),
            ("ASK", "ask"),
            ("WCLS", "window_close"),
            ("WSIZW", "window_resize"),
            ("PC", "party_add"),
            ("PCFL", "party_remove"),
            ("GOLDU", "gold_add"),
            ("GOLDD", "gold_remove"),
            ("CHAR", "set_character"),
            ("DFANM", "play_animation"),
            ("ANIME1", "play_animation_loop"),
            ("VISI", "set_visible"),
            ("XYZI", "set_position"),
            ("MOVE", "move_to"),
            ("TURA", "turn_to"),
            ("MVCAM", "camera_move"),
            ("AKAO", "play_sound"),
            ("BGMOVIE", "play_movie"),
            ("WAIT", "wait"),
        ])
    })
}

/// Resolve a raw mnemonic into the name it's emitted under.
///
/// Mnemonics with no friendly-name entry degrade to their lowercased form
/// rather than failing: an unrecognized module call should never stop
/// decompilation of the rest of the function.
pub fn resolve_name(mnemonic: &str) -> String {
    match table().get(mnemonic) {
        Some(name) => name.to_string(),
        None => {
            warn!(mnemonic, "no friendly name for kernel call, using lowercased mnemonic");
            mnemonic.to_lowercase()
        }
    }
}
