//! Symbolic execution / semantic lifting: turns instruction operands into
//! target-language-agnostic expression trees and statement lines.

use ff7_asm::comparator::Comparator;
use ff7_asm::instruction::InstructionKind;
use ff7_asm::{Instruction, Param};

use crate::formatter::Formatter;
use crate::kernel;
use crate::varname;

/// An expression tree built from instruction operands, independent of the
/// eventual target language's concrete syntax.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal integer constant.
    Literal(i32),
    /// A named variable, already resolved through [`varname`].
    Var(String),
    /// A binary operation between two sub-expressions.
    BinOp(Box<Expr>, &'static str, Box<Expr>),
    /// A kernel/module call with resolved argument expressions.
    Call(String, Vec<Expr>),
    /// A string literal.
    Str(String),
    /// A raw address, used only while building label/goto text.
    Address(u32),
    /// Logical negation of a sub-expression, used for the boolean a
    /// cond-jump pushes onto the [`ValueStack`] (the jump skips its guarded
    /// block when its own comparator is true, so the guard printed around
    /// that block is the comparator's negation).
    Not(Box<Expr>),
}

/// One non-control-flow statement line the emitter can print directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `dest = value;`
    Assign(Expr, Expr),
    /// A bare call expression.
    Expr(Expr),
    /// `return;`
    Return,
    /// No output.
    Nop,
}

/// A small LIFO of pending expressions, carried by the emitter's DFS walk
/// over a function's classified groups. A `CondJump`'s negated comparison is
/// pushed when its block is processed; the structural construct
/// (`if`/`while`) that consumes the comparator's block pops it back off
/// rather than recomputing it independently. Reset at the start of each
/// function's emission, matching the per-function, per-entry-snapshot
/// lifetime the symbolic execution pass gives it.
#[derive(Debug, Default)]
pub struct ValueStack {
    values: Vec<Expr>,
}

impl ValueStack {
    /// A fresh, empty stack.
    pub fn new() -> Self {
        ValueStack::default()
    }

    /// Push an expression.
    pub fn push(&mut self, expr: Expr) {
        self.values.push(expr);
    }

    /// Pop the most recently pushed expression.
    pub fn pop(&mut self) -> Option<Expr> {
        self.values.pop()
    }

    /// `true` when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn lift_param(param: &Param, formatter: &dyn Formatter) -> Expr {
    match param {
        Param::Integer(v) => Expr::Literal(*v),
        Param::Variable(bank, addr) => Expr::Var(varname::var_name(formatter, *bank, *addr)),
        Param::BankRef(bank) => Expr::Var(varname::var_name(formatter, *bank, 0)),
        Param::BinaryOp(lhs, op, rhs) => {
            Expr::BinOp(Box::new(lift_param(lhs, formatter)), op, Box::new(lift_param(rhs, formatter)))
        }
        Param::Address(addr) => Expr::Address(*addr),
        Param::String(s) => Expr::Str(s.clone()),
    }
}

/// Lift one instruction into the statement it prints as.
///
/// Control-flow instructions (`Jump`/`CondJump`) are not meaningfully
/// lifted here: the emitter reads their structure from the `cfg::Group`
/// they were classified into and calls [`lift_condition`] directly for the
/// comparison text, since a bare jump or conditional-jump instruction
/// doesn't correspond to a single printable statement on its own.
pub fn lift(instr: &Instruction, formatter: &dyn Formatter) -> Stmt {
    match &instr.kind {
        InstructionKind::Return => Stmt::Return,
        InstructionKind::Nop => Stmt::Nop,
        InstructionKind::Store { dest, value } => {
            Stmt::Assign(lift_param(dest, formatter), lift_param(value, formatter))
        }
        InstructionKind::CompoundStore { dest, op, operand } => {
            let dest_expr = lift_param(dest, formatter);
            let value = if *op == "random" {
                Expr::Call("random".to_string(), vec![])
            } else {
                Expr::BinOp(Box::new(dest_expr.clone()), op, Box::new(lift_param(operand, formatter)))
            };
            Stmt::Assign(dest_expr, value)
        }
        InstructionKind::Call { mnemonic, args } => {
            let name = kernel::resolve_name(mnemonic);
            Stmt::Expr(Expr::Call(name, args.iter().map(|a| lift_param(a, formatter)).collect()))
        }
        InstructionKind::Jump { .. } | InstructionKind::CondJump { .. } => Stmt::Nop,
    }
}

/// Lift a conditional jump's comparison into a boolean expression, used by
/// the emitter when printing `if`/`while` headers. `BitOn`/`BitOff` have no
/// natural infix spelling, so they lower to a masked equality test instead
/// of reusing [`Comparator::infix_symbol`] directly.
pub fn lift_condition(lhs: &Param, comparator: Comparator, rhs: &Param, formatter: &dyn Formatter) -> Expr {
    let lhs_expr = lift_param(lhs, formatter);
    let rhs_expr = lift_param(rhs, formatter);
    match comparator {
        Comparator::BitOn => Expr::BinOp(Box::new(lhs_expr), "&", Box::new(rhs_expr)),
        Comparator::BitOff => Expr::BinOp(
            Box::new(Expr::Literal(0)),
            "==",
            Box::new(Expr::BinOp(Box::new(lhs_expr), "&", Box::new(rhs_expr))),
        ),
        other => Expr::BinOp(Box::new(lhs_expr), other.infix_symbol(), Box::new(rhs_expr)),
    }
}
