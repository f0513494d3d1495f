//! Shared container-building helpers for the end-to-end scenario tests.
//!
//! Integration tests only see the public API, so this duplicates the shape
//! of the in-crate `sample_container`/`push_header` unit-test helpers rather
//! than reusing them.

/// Size of a single-entity, no-Akao script header: magic(2) + numEntities(1)
/// + numModels(1) + offsetToStrings(2) + numAkao(2) + scale(2) + reserved(6)
/// + creator(8) + name(8) + one entity name(8) + one function-offset
/// table(32*2).
pub const SINGLE_ENTITY_HEADER_SIZE: u32 = 2 + 1 + 1 + 2 + 2 + 2 + 6 + 8 + 8 + 8 + 32 * 2;

/// Append a single-entity script header (no Akao blocks) naming `entity` to
/// `script`, with every function-offset slot set to `entry`.
pub fn push_header(script: &mut Vec<u8>, entity: &[u8; 8], entry: u16) {
    script.extend_from_slice(&[0x02, 0x05]); // magic
    script.push(1); // numEntities
    script.push(0); // numModels
    script.extend_from_slice(&0u16.to_le_bytes()); // offsetToStrings
    script.extend_from_slice(&0u16.to_le_bytes()); // numAkao
    script.extend_from_slice(&0u16.to_le_bytes()); // scale
    script.extend_from_slice(&[0u8; 6]); // reserved
    script.extend_from_slice(&[0u8; 8]); // creator
    script.extend_from_slice(&[0u8; 8]); // name
    script.extend_from_slice(entity);
    for _ in 0..32 {
        script.extend_from_slice(&entry.to_le_bytes());
    }
}

/// Wrap a script section (header plus raw instruction bytes) in the
/// 28-byte section-pointer prelude `decompile()` expects.
pub fn wrap_container(script: Vec<u8>) -> Vec<u8> {
    let base: u32 = 1000;
    let after_script = base + script.len() as u32;
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&base.to_le_bytes());
    for _ in 0..6 {
        bytes.extend_from_slice(&after_script.to_le_bytes());
    }
    bytes.extend_from_slice(&script);
    bytes
}

/// Build a one-entity container whose slot-0 range is exactly
/// `instruction_bytes` (which must end in a `RET`, per the init/main split).
pub fn single_function_container(entity: &[u8; 8], instruction_bytes: &[u8]) -> Vec<u8> {
    let function_start = SINGLE_ENTITY_HEADER_SIZE;
    let mut script = Vec::new();
    push_header(&mut script, entity, function_start as u16);
    script.extend_from_slice(instruction_bytes);
    wrap_container(script)
}
