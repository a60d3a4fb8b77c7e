//! Expressions: variable references, string constants, and argument lists.
//!
//! Expressions carry a comment like every other node but never render it,
//! since a `--` comment would swallow the rest of the enclosing line.

use std::io;

use serde::Serialize;

use crate::element::{impl_comment_accessors, Comment, Element};
use crate::writer::VhdlWriter;

/// A VHDL expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Expr {
    /// A reference to a scalar variable or signal.
    VarRef(VarRef),
    /// A string literal.
    ConstString(ConstString),
}

impl Expr {
    /// Creates a variable reference expression.
    pub fn var_ref(name: impl Into<String>) -> Self {
        Expr::VarRef(VarRef::new(name))
    }

    /// Creates a string literal expression.
    pub fn const_string(value: impl Into<String>) -> Self {
        Expr::ConstString(ConstString::new(value))
    }
}

impl Element for Expr {
    fn comment(&self) -> &Comment {
        match self {
            Expr::VarRef(e) => e.comment(),
            Expr::ConstString(e) => e.comment(),
        }
    }

    fn comment_mut(&mut self) -> &mut Comment {
        match self {
            Expr::VarRef(e) => e.comment_mut(),
            Expr::ConstString(e) => e.comment_mut(),
        }
    }

    fn emit(&self, out: &mut VhdlWriter<'_>, level: usize) -> io::Result<()> {
        match self {
            Expr::VarRef(e) => e.emit(out, level),
            Expr::ConstString(e) => e.emit(out, level),
        }
    }
}

/// A normal scalar variable reference, rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VarRef {
    name: String,
    comment: Comment,
}

impl VarRef {
    /// Creates a reference to `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: Comment::default(),
        }
    }

    /// Returns the referenced identifier.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<VarRef> for Expr {
    fn from(e: VarRef) -> Self {
        Expr::VarRef(e)
    }
}

impl Element for VarRef {
    impl_comment_accessors!();

    fn emit(&self, out: &mut VhdlWriter<'_>, _level: usize) -> io::Result<()> {
        out.write_str(&self.name)
    }
}

/// A string literal. Embedded `"` characters are doubled on output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstString {
    value: String,
    comment: Comment,
}

impl ConstString {
    /// Creates a string literal holding `value` (unquoted, unescaped).
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            comment: Comment::default(),
        }
    }

    /// Returns the literal's raw value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl From<ConstString> for Expr {
    fn from(e: ConstString) -> Self {
        Expr::ConstString(e)
    }
}

impl Element for ConstString {
    impl_comment_accessors!();

    fn emit(&self, out: &mut VhdlWriter<'_>, _level: usize) -> io::Result<()> {
        write!(out, "\"{}\"", self.value.replace('"', "\"\""))
    }
}

/// An ordered list of expressions, rendered inline and comma-separated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExprList {
    exprs: Vec<Expr>,
    comment: Comment,
}

impl ExprList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an expression, taking ownership of it.
    pub fn add_expr(&mut self, expr: impl Into<Expr>) {
        self.exprs.push(expr.into());
    }

    /// Returns the number of expressions.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    /// Returns `true` if the list holds no expressions.
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// Iterates over the expressions in append order.
    pub fn iter(&self) -> impl Iterator<Item = &Expr> {
        self.exprs.iter()
    }
}

impl<E: Into<Expr>> FromIterator<E> for ExprList {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        Self {
            exprs: iter.into_iter().map(Into::into).collect(),
            comment: Comment::default(),
        }
    }
}

impl Element for ExprList {
    impl_comment_accessors!();

    fn emit(&self, out: &mut VhdlWriter<'_>, level: usize) -> io::Result<()> {
        for (i, expr) in self.exprs.iter().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            expr.emit(out, level)?;
        }
        Ok(())
    }
}
