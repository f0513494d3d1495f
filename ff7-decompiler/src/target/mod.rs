//! The pluggable target-language capability surface.
//!
//! A [`Target`] implementation supplies only the concrete syntax for each
//! structural shape the control-flow analyzer can classify; the emitter
//! drives traversal and indentation and never hardcodes a brace or keyword
//! itself.

pub mod clike;
pub mod lua;

pub use clike::CLikeTarget;
pub use lua::LuaTarget;

/// Argument ordering a target language expects when emitting a call or a
/// binary operator's operands. Kept as two independently configurable
/// fields because the two use cases genuinely differ per language: a call
/// reads naturally first-argument-first, while a reconstructed binary
/// expression may need its operands reversed relative to decode order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArgOrder {
    /// Print arguments in the order they were decoded.
    Fifo,
    /// Print arguments in reverse decode order.
    Lifo,
}

/// The capability set an emitted target language must implement: every
/// structural shape [`crate::cfg::StructureKind`] can produce, plus the
/// call/assignment/line-terminator primitives the lifted statements need.
pub trait Target {
    /// Opening line for an unconditional (possibly infinite) loop.
    fn loop_open(&self) -> String;
    /// Closing line for an unconditional loop.
    fn loop_close(&self) -> String;

    /// `if (condition) {` (or the target's equivalent).
    fn if_open(&self, condition: &str) -> String;
    /// The `else` branch's opening line.
    fn if_else(&self) -> String;
    /// A coalesced `} else if (condition) {` line, fusing a chained `if`'s
    /// own header into the enclosing `if`'s `else`.
    fn else_if_open(&self, condition: &str) -> String;
    /// The `if`'s closing line.
    fn if_close(&self) -> String;

    /// `while (condition) {`.
    fn while_open(&self, condition: &str) -> String;
    /// The `while`'s closing line.
    fn while_close(&self) -> String;

    /// `do {`.
    fn do_open(&self) -> String;
    /// `} while (condition);`.
    fn do_close(&self, condition: &str) -> String;

    /// A label definition line.
    fn label(&self, name: &str) -> String;
    /// A `goto <label>;` line.
    fn goto(&self, name: &str) -> String;

    /// A function declaration's opening line, e.g. `void init() {`.
    fn function_open(&self, name: &str) -> String;
    /// A function declaration's closing line.
    fn function_close(&self) -> String;

    /// An entity wrapper's opening line, printed once before the first
    /// function emitted for an entity (`onBeforeStartFunction`'s class
    /// wrapper).
    fn entity_open(&self, name: &str) -> String;
    /// An entity wrapper's closing line, printed once after the last
    /// function emitted for an entity.
    fn entity_close(&self) -> String;

    /// The character(s) that terminate a statement line, if any.
    fn line_terminator(&self) -> &'static str;

    /// Render a call expression.
    fn call(&self, name: &str, args: &[String]) -> String;

    /// `break` statement text.
    fn break_stmt(&self) -> String;
    /// `continue` statement text.
    fn continue_stmt(&self) -> String;
    /// `return;` / `return <value>;` text.
    fn return_stmt(&self, value: Option<&str>) -> String;

    /// Argument order for binary operators.
    fn bin_op_arg_order(&self) -> ArgOrder;
    /// Argument order for call expressions.
    fn call_arg_order(&self) -> ArgOrder;

    /// An assignment statement's text.
    fn assignment(&self, dest: &str, value: &str) -> String;
}
