//! Sequential statements, valid only inside a [`Process`](crate::process::Process).

use std::io;

use serde::Serialize;

use crate::element::{impl_comment_accessors, Comment, CommentPlacement, Element};
use crate::expr::{Expr, ExprList};
use crate::writer::VhdlWriter;

/// A statement executed in order within a process body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SeqStmt {
    /// Suspend the process indefinitely.
    Wait(WaitStmt),
    /// Call a procedure.
    ProcedureCall(ProcedureCall),
}

impl SeqStmt {
    /// Creates an indefinite `wait;` statement.
    pub fn wait() -> Self {
        SeqStmt::Wait(WaitStmt::new())
    }
}

impl Element for SeqStmt {
    fn comment(&self) -> &Comment {
        match self {
            SeqStmt::Wait(s) => s.comment(),
            SeqStmt::ProcedureCall(s) => s.comment(),
        }
    }

    fn comment_mut(&mut self) -> &mut Comment {
        match self {
            SeqStmt::Wait(s) => s.comment_mut(),
            SeqStmt::ProcedureCall(s) => s.comment_mut(),
        }
    }

    fn emit(&self, out: &mut VhdlWriter<'_>, level: usize) -> io::Result<()> {
        match self {
            SeqStmt::Wait(s) => s.emit(out, level),
            SeqStmt::ProcedureCall(s) => s.emit(out, level),
        }
    }
}

/// An unconditional `wait;`.
///
/// Models the HDL's own suspend semantics in the output text; it has no
/// effect on the program building the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WaitStmt {
    comment: Comment,
}

impl WaitStmt {
    /// Creates a wait statement.
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<WaitStmt> for SeqStmt {
    fn from(s: WaitStmt) -> Self {
        SeqStmt::Wait(s)
    }
}

impl Element for WaitStmt {
    impl_comment_accessors!();

    fn emit(&self, out: &mut VhdlWriter<'_>, level: usize) -> io::Result<()> {
        out.write_str("wait;")?;
        self.comment.emit(out, level, CommentPlacement::EndOfLine)
    }
}

/// A procedure call statement (a function call would be an expression).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcedureCall {
    name: String,
    args: ExprList,
    comment: Comment,
}

impl ProcedureCall {
    /// Creates a call to `name` with no arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: ExprList::new(),
            comment: Comment::default(),
        }
    }

    /// Appends an argument.
    pub fn add_expr(&mut self, expr: impl Into<Expr>) {
        self.args.add_expr(expr);
    }

    /// Returns the procedure name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the argument list.
    pub fn args(&self) -> &ExprList {
        &self.args
    }
}

impl From<ProcedureCall> for SeqStmt {
    fn from(s: ProcedureCall) -> Self {
        SeqStmt::ProcedureCall(s)
    }
}

impl Element for ProcedureCall {
    impl_comment_accessors!();

    fn emit(&self, out: &mut VhdlWriter<'_>, level: usize) -> io::Result<()> {
        write!(out, "{}(", self.name)?;
        self.args.emit(out, level)?;
        out.write_str(");")?;
        self.comment.emit(out, level, CommentPlacement::EndOfLine)
    }
}
