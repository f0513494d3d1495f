//! Two-pass DFS emission of a classified control-flow tree into
//! target-language text.
//!
//! The first pass walks the tree purely to collect which addresses a raw
//! `goto` actually targets; the second pass does the real printing and
//! consults that set so `only_required_labels` can suppress label lines
//! nothing jumps to.

use std::collections::HashSet;

use ff7_asm::instruction::InstructionKind;

use crate::cfg::{Cfg, Group, StructureKind};
use crate::formatter::Formatter;
use crate::lifter::{self, Expr, Stmt, ValueStack};
use crate::target::{ArgOrder, Target};

/// Knobs controlling how [`emit`] renders a classified function body.
#[derive(Debug, Clone, Copy)]
pub struct EmitOptions {
    /// Suppress label lines for addresses nothing actually jumps to.
    pub only_required_labels: bool,
    /// Prefix each statement line with its source address in a comment.
    pub address_annotated: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions { only_required_labels: true, address_annotated: false }
    }
}

/// Render a classified function body as target-language source text.
pub fn emit(
    cfg: &Cfg,
    root: &Group,
    target: &dyn Target,
    options: &EmitOptions,
    formatter: &dyn Formatter,
) -> String {
    let required_labels = collect_required_labels(root);
    let mut out = String::new();
    let mut indent = 0usize;
    let mut stack = ValueStack::new();
    emit_group(cfg, root, target, options, formatter, &required_labels, &mut out, &mut indent, &mut stack);
    out
}

fn collect_required_labels(group: &Group) -> HashSet<u32> {
    let mut labels = HashSet::new();
    walk_for_labels(group, &mut labels);
    labels
}

fn walk_for_labels(group: &Group, labels: &mut HashSet<u32>) {
    match &group.kind {
        StructureKind::Goto(_, target) => {
            labels.insert(*target);
        }
        StructureKind::Sequence(children) => children.iter().for_each(|c| walk_for_labels(c, labels)),
        StructureKind::If { then_branch, else_branch, .. } => {
            walk_for_labels(then_branch, labels);
            if let Some(e) = else_branch {
                walk_for_labels(e, labels);
            }
        }
        StructureKind::While { body, .. } | StructureKind::DoWhile { body, .. } | StructureKind::Loop(body) => {
            walk_for_labels(body, labels)
        }
        _ => {}
    }
}

fn label_name(address: u32) -> String {
    format!("label_{address:#x}")
}

fn push_line(out: &mut String, indent: usize, text: &str) {
    for _ in 0..indent {
        out.push_str("    ");
    }
    out.push_str(text);
    out.push('\n');
}

fn render_expr(expr: &Expr, call_order: ArgOrder) -> String {
    match expr {
        Expr::Literal(v) => v.to_string(),
        Expr::Var(name) => name.clone(),
        Expr::Str(s) => format!("\"{s}\""),
        Expr::Address(addr) => label_name(*addr),
        Expr::Not(inner) => format!("!({})", render_expr(inner, call_order)),
        Expr::BinOp(lhs, op, rhs) => format!("{} {op} {}", render_expr(lhs, call_order), render_expr(rhs, call_order)),
        Expr::Call(name, args) => {
            let mut rendered: Vec<String> = args.iter().map(|a| render_expr(a, call_order)).collect();
            if call_order == ArgOrder::Lifo {
                rendered.reverse();
            }
            format!("{name}({})", rendered.join(", "))
        }
    }
}

fn emit_stmt_line(
    stmt: &Stmt,
    address: u32,
    target: &dyn Target,
    options: &EmitOptions,
    out: &mut String,
    indent: usize,
) {
    let body = match stmt {
        Stmt::Nop => return,
        Stmt::Return => target.return_stmt(None),
        Stmt::Expr(expr) => {
            let text = render_expr(expr, target.call_arg_order());
            format!("{text}{}", target.line_terminator())
        }
        Stmt::Assign(dest, value) => {
            let dest_text = render_expr(dest, target.call_arg_order());
            let value_text = render_expr(value, target.bin_op_arg_order());
            target.assignment(&dest_text, &value_text)
        }
    };
    let line = if options.address_annotated {
        format!("{body} // {address:#06x}")
    } else {
        body
    };
    push_line(out, indent, &line);
}

/// Emit a block's instructions as statement lines, excluding a trailing
/// control-flow instruction (`Jump`/`CondJump`/`Return` is handled by the
/// caller once it knows which structural shape consumed the block).
///
/// A trailing `CondJump` is still "processed" in the symbolic-execution
/// sense: its negated comparison is pushed onto `stack` for the caller to
/// pop, rather than being recomputed independently from the block's last
/// instruction.
#[allow(clippy::too_many_arguments)]
fn emit_block_body(
    cfg: &Cfg,
    block_id: usize,
    target: &dyn Target,
    options: &EmitOptions,
    formatter: &dyn Formatter,
    required_labels: &HashSet<u32>,
    out: &mut String,
    indent: usize,
    stack: &mut ValueStack,
) {
    let block = &cfg.blocks[block_id];
    if options.only_required_labels {
        if required_labels.contains(&block.start) {
            push_line(out, indent, &target.label(&label_name(block.start)));
        }
    } else {
        push_line(out, indent, &target.label(&label_name(block.start)));
    }

    for instr in &block.instructions {
        if let InstructionKind::CondJump { lhs, rhs, comparator, .. } = &instr.kind {
            let cond = lifter::lift_condition(lhs, *comparator, rhs, formatter);
            stack.push(negate_expr(cond));
            continue;
        }
        if matches!(instr.kind, InstructionKind::Jump { .. }) {
            continue;
        }
        let stmt = lifter::lift(instr, formatter);
        emit_stmt_line(&stmt, instr.address, target, options, out, indent);
    }
}

/// Pop the condition a preceding [`emit_block_body`] call pushed and render
/// it. Falls back to `"true"` for a cond-free block (an `if`/`while` header
/// whose block ends in something other than a `CondJump`, which the
/// classifier never actually produces but which callers here still guard
/// against defensively).
fn pop_cond_text(stack: &mut ValueStack, call_order: ArgOrder) -> String {
    match stack.pop() {
        Some(expr) => render_expr(&expr, call_order),
        None => "true".to_string(),
    }
}

fn cond_text(cfg: &Cfg, block_id: usize, target: &dyn Target, formatter: &dyn Formatter) -> String {
    let block = &cfg.blocks[block_id];
    match block.instructions.last().map(|i| &i.kind) {
        Some(InstructionKind::CondJump { lhs, rhs, comparator, .. }) => render_expr(
            &lifter::lift_condition(lhs, *comparator, rhs, formatter),
            target.bin_op_arg_order(),
        ),
        _ => "true".to_string(),
    }
}

/// A cond-jump fires to skip a block that should only run while its raw
/// comparator is false, so `if`/`while` headers print the negation of the
/// jump's own condition. A `do`/`while` footer's back edge instead fires to
/// repeat the loop, so it prints the comparator as decoded, unnegated:
/// [`cond_text`] is called directly there instead of going through the
/// pushed/popped stack value.
fn negate_expr(cond: Expr) -> Expr {
    Expr::Not(Box::new(cond))
}

#[allow(clippy::too_many_arguments)]
fn emit_group(
    cfg: &Cfg,
    group: &Group,
    target: &dyn Target,
    options: &EmitOptions,
    formatter: &dyn Formatter,
    required_labels: &HashSet<u32>,
    out: &mut String,
    indent: &mut usize,
    stack: &mut ValueStack,
) {
    match &group.kind {
        StructureKind::Sequence(children) => {
            for child in children {
                emit_group(cfg, child, target, options, formatter, required_labels, out, indent, stack);
            }
        }
        StructureKind::Block(id) => {
            emit_block_body(cfg, *id, target, options, formatter, required_labels, out, *indent, stack);
        }
        StructureKind::Goto(id, dest) => {
            emit_block_body(cfg, *id, target, options, formatter, required_labels, out, *indent, stack);
            push_line(out, *indent, &target.goto(&label_name(*dest)));
        }
        StructureKind::Break(id) => {
            emit_block_body(cfg, *id, target, options, formatter, required_labels, out, *indent, stack);
            push_line(out, *indent, &target.break_stmt());
        }
        StructureKind::Continue(id) => {
            emit_block_body(cfg, *id, target, options, formatter, required_labels, out, *indent, stack);
            push_line(out, *indent, &target.continue_stmt());
        }
        StructureKind::If { cond, then_branch, else_branch, .. } => {
            emit_block_body(cfg, *cond, target, options, formatter, required_labels, out, *indent, stack);
            let condition = pop_cond_text(stack, target.bin_op_arg_order());
            push_line(out, *indent, &target.if_open(&condition));
            *indent += 1;
            emit_group(cfg, then_branch, target, options, formatter, required_labels, out, indent, stack);
            *indent -= 1;

            // A chain of `coalesced_else` groups fuses each nested `if`'s
            // own opener with the enclosing `else`, so the whole chain
            // shares this group's single closing line rather than each
            // link adding its own.
            let mut next = else_branch.as_deref();
            while let Some(else_group) = next {
                match &else_group.kind {
                    StructureKind::If { cond: inner_cond, then_branch: inner_then, else_branch: inner_else, coalesced_else: true } => {
                        emit_block_body(cfg, *inner_cond, target, options, formatter, required_labels, out, *indent, stack);
                        let inner_condition = pop_cond_text(stack, target.bin_op_arg_order());
                        push_line(out, *indent, &target.else_if_open(&inner_condition));
                        *indent += 1;
                        emit_group(cfg, inner_then, target, options, formatter, required_labels, out, indent, stack);
                        *indent -= 1;
                        next = inner_else.as_deref();
                    }
                    _ => {
                        push_line(out, *indent, &target.if_else());
                        *indent += 1;
                        emit_group(cfg, else_group, target, options, formatter, required_labels, out, indent, stack);
                        *indent -= 1;
                        next = None;
                    }
                }
            }
            push_line(out, *indent, &target.if_close());
        }
        StructureKind::While { cond, body } => {
            emit_block_body(cfg, *cond, target, options, formatter, required_labels, out, *indent, stack);
            let condition = pop_cond_text(stack, target.bin_op_arg_order());
            push_line(out, *indent, &target.while_open(&condition));
            *indent += 1;
            emit_group(cfg, body, target, options, formatter, required_labels, out, indent, stack);
            *indent -= 1;
            push_line(out, *indent, &target.while_close());
        }
        StructureKind::DoWhile { body, cond } => {
            push_line(out, *indent, &target.do_open());
            *indent += 1;
            emit_group(cfg, body, target, options, formatter, required_labels, out, indent, stack);
            *indent -= 1;
            // The back edge fires to repeat the loop, so it prints the
            // comparator as decoded rather than popping the negated form
            // `body`'s own trailing cond-jump already pushed.
            let condition = cond_text(cfg, *cond, target, formatter);
            push_line(out, *indent, &target.do_close(&condition));
        }
        StructureKind::Loop(body) => {
            push_line(out, *indent, &target.loop_open());
            *indent += 1;
            emit_group(cfg, body, target, options, formatter, required_labels, out, indent, stack);
            *indent -= 1;
            push_line(out, *indent, &target.loop_close());
        }
    }
}
