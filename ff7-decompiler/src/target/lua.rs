//! A Lua-like target language surface: `then`/`end` blocks, `::label::`
//! goto targets, no native `continue`.

use super::{ArgOrder, Target};

/// Emits Lua-like syntax.
#[derive(Debug, Default, Clone, Copy)]
pub struct LuaTarget;

impl Target for LuaTarget {
    fn loop_open(&self) -> String {
        "while true do".to_string()
    }
    fn loop_close(&self) -> String {
        "end".to_string()
    }

    fn if_open(&self, condition: &str) -> String {
        format!("if {condition} then")
    }
    fn if_else(&self) -> String {
        "else".to_string()
    }
    fn else_if_open(&self, condition: &str) -> String {
        format!("elseif {condition} then")
    }
    fn if_close(&self) -> String {
        "end".to_string()
    }

    fn while_open(&self, condition: &str) -> String {
        format!("while {condition} do")
    }
    fn while_close(&self) -> String {
        "end".to_string()
    }

    fn do_open(&self) -> String {
        "repeat".to_string()
    }
    fn do_close(&self, condition: &str) -> String {
        format!("until {condition}")
    }

    fn label(&self, name: &str) -> String {
        format!("::{name}::")
    }
    fn goto(&self, name: &str) -> String {
        format!("goto {name}")
    }

    fn function_open(&self, name: &str) -> String {
        format!("function {name}()")
    }
    fn function_close(&self) -> String {
        "end".to_string()
    }

    fn entity_open(&self, name: &str) -> String {
        // Lua has no class syntax; an entity's functions are grouped in a
        // plain table instead.
        format!("local {name} = {{")
    }
    fn entity_close(&self) -> String {
        "}".to_string()
    }

    fn line_terminator(&self) -> &'static str {
        ""
    }

    fn call(&self, name: &str, args: &[String]) -> String {
        format!("{name}({})", args.join(", "))
    }

    fn break_stmt(&self) -> String {
        "break".to_string()
    }
    fn continue_stmt(&self) -> String {
        // Lua has no native `continue`; the original Lua target language
        // lowers it to a jump to a synthetic per-loop label placed right
        // before the loop's closing `end`.
        "goto continue_target".to_string()
    }
    fn return_stmt(&self, value: Option<&str>) -> String {
        match value {
            Some(v) => format!("return {v}"),
            None => "return".to_string(),
        }
    }

    fn bin_op_arg_order(&self) -> ArgOrder {
        ArgOrder::Fifo
    }
    fn call_arg_order(&self) -> ArgOrder {
        ArgOrder::Fifo
    }

    fn assignment(&self, dest: &str, value: &str) -> String {
        format!("{dest} = {value}")
    }
}
