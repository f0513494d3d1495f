//! Caller-injected naming hooks.
//!
//! A [`Formatter`] lets an embedder override default variable, entity,
//! animation and function naming without the decompiler itself knowing
//! anything about the embedder's own naming conventions. Every hook is pure
//! and may be called during either emitter pass; returning an empty string
//! from any method requests the decompiler's own default for that name.

/// Naming hooks a caller can supply to override default name generation.
pub trait Formatter {
    /// Override the default `var_<bank>_<addr>`-style name for a variable
    /// reference. Return an empty string to keep the default.
    fn var_name(&self, bank: u8, addr: u16) -> String {
        let _ = (bank, addr);
        String::new()
    }

    /// Override an entity's raw script-table name with a friendlier one.
    /// Return an empty string to keep the raw name.
    fn entity_name(&self, raw: &str) -> String {
        let _ = raw;
        String::new()
    }

    /// Override the default name for an animation id. Return an empty
    /// string to keep the default.
    fn animation_name(&self, id: u32) -> String {
        let _ = id;
        String::new()
    }

    /// Override a function's raw slot-derived name for the given entity.
    /// Return an empty string to keep the default.
    fn function_name(&self, entity: &str, raw: &str) -> String {
        let _ = (entity, raw);
        String::new()
    }

    /// Supply a comment to attach above a function's emitted body. Return
    /// an empty string to omit any comment.
    fn function_comment(&self, entity: &str, func: &str) -> String {
        let _ = (entity, func);
        String::new()
    }

    /// When `true`, the named function is omitted from emitted output
    /// entirely. Defaults to never excluding anything.
    fn exclude_function(&self, entity: &str, func: &str) -> bool {
        let _ = (entity, func);
        false
    }
}

/// A [`Formatter`] that requests default naming for everything and excludes
/// nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFormatter;

impl Formatter for DefaultFormatter {}
