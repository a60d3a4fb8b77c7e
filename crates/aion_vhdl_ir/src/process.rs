//! Processes: a concurrent block with sequential semantics inside.
//!
//! A [`Process`] owns its declarations and statements and renders them in
//! append order between `process is` and `end process;`.

use std::io;

use serde::Serialize;

use crate::decl::{Decl, DeclKind, VarDecl};
use crate::element::{impl_comment_accessors, Comment, CommentPlacement, Element};
use crate::error::{IrError, IrResult};
use crate::stmt::SeqStmt;
use crate::writer::VhdlWriter;

/// A VHDL process statement.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Process {
    /// Label; empty for an anonymous process.
    name: String,
    decls: Vec<Decl>,
    stmts: Vec<SeqStmt>,
    comment: Comment,
}

impl Process {
    /// Creates a process labelled `name`. An empty name yields an anonymous process.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decls: Vec::new(),
            stmts: Vec::new(),
            comment: Comment::default(),
        }
    }

    /// Creates an unlabelled process.
    pub fn anonymous() -> Self {
        Self::new("")
    }

    /// Returns the process label, or `None` for an anonymous process.
    pub fn name(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(self.name.as_str())
        }
    }

    /// Appends a declaration without checking for duplicates.
    ///
    /// Callers are expected to consult [`have_declared_var`](Self::have_declared_var)
    /// first, or use [`declare_var`](Self::declare_var).
    pub fn add_decl(&mut self, decl: impl Into<Decl>) {
        let decl = decl.into();
        tracing::trace!(process = %self.scope(), name = decl.name(), "add declaration");
        self.decls.push(decl);
    }

    /// Appends a variable declaration, rejecting a name already declared here.
    pub fn declare_var(&mut self, decl: VarDecl) -> IrResult<()> {
        if self.have_declared_var(decl.name()) {
            tracing::warn!(process = %self.scope(), name = decl.name(), "duplicate variable");
            return Err(IrError::DuplicateDeclaration {
                kind: DeclKind::Variable,
                name: decl.name().to_string(),
                scope: self.scope(),
            });
        }
        self.add_decl(decl);
        Ok(())
    }

    /// Appends a sequential statement.
    pub fn add_stmt(&mut self, stmt: impl Into<SeqStmt>) {
        self.stmts.push(stmt.into());
    }

    /// Returns `true` if a variable named `name` was already declared in this process.
    pub fn have_declared_var(&self, name: &str) -> bool {
        self.decls
            .iter()
            .any(|d| d.declares(DeclKind::Variable, name))
    }

    /// Returns the declarations in append order.
    pub fn decls(&self) -> &[Decl] {
        &self.decls
    }

    /// Returns the statements in append order.
    pub fn stmts(&self) -> &[SeqStmt] {
        &self.stmts
    }

    fn scope(&self) -> String {
        match self.name() {
            Some(name) => format!("process {name}"),
            None => "anonymous process".to_string(),
        }
    }
}

impl Element for Process {
    impl_comment_accessors!();

    fn emit(&self, out: &mut VhdlWriter<'_>, level: usize) -> io::Result<()> {
        self.comment.emit(out, level, CommentPlacement::OwnLine)?;
        if let Some(name) = self.name() {
            write!(out, "{name}: ")?;
        }
        out.write_str("process is")?;
        for decl in &self.decls {
            out.newline(level + 1)?;
            decl.emit(out, level + 1)?;
        }
        out.newline(level)?;
        out.write_str("begin")?;
        for stmt in &self.stmts {
            out.newline(level + 1)?;
            stmt.emit(out, level + 1)?;
        }
        out.newline(level)?;
        out.write_str("end process;")
    }
}
