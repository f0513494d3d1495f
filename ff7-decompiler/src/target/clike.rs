//! A C-like target language surface: braces, semicolons, `goto` labels.

use super::{ArgOrder, Target};

/// Emits braces-and-semicolons syntax.
#[derive(Debug, Default, Clone, Copy)]
pub struct CLikeTarget;

impl Target for CLikeTarget {
    fn loop_open(&self) -> String {
        "for (;;) {".to_string()
    }
    fn loop_close(&self) -> String {
        "}".to_string()
    }

    fn if_open(&self, condition: &str) -> String {
        format!("if ({condition}) {{")
    }
    fn if_else(&self) -> String {
        "} else {".to_string()
    }
    fn else_if_open(&self, condition: &str) -> String {
        format!("}} else if ({condition}) {{")
    }
    fn if_close(&self) -> String {
        "}".to_string()
    }

    fn while_open(&self, condition: &str) -> String {
        format!("while ({condition}) {{")
    }
    fn while_close(&self) -> String {
        "}".to_string()
    }

    fn do_open(&self) -> String {
        "do {".to_string()
    }
    fn do_close(&self, condition: &str) -> String {
        format!("}} while ({condition});")
    }

    fn label(&self, name: &str) -> String {
        format!("{name}:")
    }
    fn goto(&self, name: &str) -> String {
        format!("goto {name};")
    }

    fn function_open(&self, name: &str) -> String {
        format!("void {name}() {{")
    }
    fn function_close(&self) -> String {
        "}".to_string()
    }

    fn entity_open(&self, name: &str) -> String {
        format!("class {name} {{")
    }
    fn entity_close(&self) -> String {
        "};".to_string()
    }

    fn line_terminator(&self) -> &'static str {
        ";"
    }

    fn call(&self, name: &str, args: &[String]) -> String {
        format!("{name}({})", args.join(", "))
    }

    fn break_stmt(&self) -> String {
        "break;".to_string()
    }
    fn continue_stmt(&self) -> String {
        "continue;".to_string()
    }
    fn return_stmt(&self, value: Option<&str>) -> String {
        match value {
            Some(v) => format!("return {v};"),
            None => "return;".to_string(),
        }
    }

    fn bin_op_arg_order(&self) -> ArgOrder {
        ArgOrder::Lifo
    }
    fn call_arg_order(&self) -> ArgOrder {
        ArgOrder::Fifo
    }

    fn assignment(&self, dest: &str, value: &str) -> String {
        format!("{dest} = {value};")
    }
}

#[cfg(test)]
mod tests;
