//! Architectures: the implementation body of an entity.
//!
//! An [`Architecture`] owns its declarations and concurrent statements. It is
//! created by [`Design::new_architecture`](crate::design::Design::new_architecture),
//! which assigns its [`ArchId`], and becomes owned by an entity through
//! [`Design::add_entity`](crate::design::Design::add_entity).

use std::io;
use std::ops::Deref;

use serde::Serialize;

use crate::arena::Arena;
use crate::conc::{ConcStmtKind, ConcurrentStmt};
use crate::decl::{ComponentDecl, Decl, DeclKind};
use crate::element::{impl_comment_accessors, Comment, CommentPlacement, Element};
use crate::error::{IrError, IrResult};
use crate::ids::{ArchId, ConcStmtId, EntityId};
use crate::process::Process;
use crate::writer::VhdlWriter;

/// The architecture name used when none is given.
pub const DEFAULT_ARCH_NAME: &str = "Behavioural";

/// A VHDL architecture body.
#[derive(Debug, Serialize)]
pub struct Architecture {
    id: ArchId,
    name: String,
    entity: String,
    decls: Vec<Decl>,
    stmts: Arena<ConcStmtId, ConcurrentStmt>,
    parent: Option<EntityId>,
    comment: Comment,
}

impl Architecture {
    pub(crate) fn new(id: ArchId, entity: &str, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            entity: entity.to_string(),
            decls: Vec::new(),
            stmts: Arena::new(),
            parent: None,
            comment: Comment::default(),
        }
    }

    /// Returns this architecture's ID.
    pub fn id(&self) -> ArchId {
        self.id
    }

    /// Returns the architecture name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name of the entity this architecture implements.
    pub fn entity_name(&self) -> &str {
        &self.entity
    }

    /// Returns the owning entity, once one has taken ownership.
    pub fn parent(&self) -> Option<EntityId> {
        self.parent
    }

    pub(crate) fn attach(&mut self, entity: EntityId) {
        debug_assert!(self.parent.is_none(), "architecture already has a parent");
        self.parent = Some(entity);
    }

    /// Appends a declaration without checking for duplicates.
    ///
    /// Callers are expected to consult
    /// [`have_declared_component`](Self::have_declared_component) first, or use
    /// [`declare_component`](Self::declare_component).
    pub fn add_decl(&mut self, decl: impl Into<Decl>) {
        let decl = decl.into();
        tracing::trace!(arch = %self.id, name = decl.name(), "add declaration");
        self.decls.push(decl);
    }

    /// Appends a component declaration, rejecting a component already declared here.
    pub fn declare_component(&mut self, decl: ComponentDecl) -> IrResult<()> {
        if self.have_declared_component(decl.name()) {
            tracing::warn!(arch = %self.id, name = decl.name(), "duplicate component");
            return Err(IrError::DuplicateDeclaration {
                kind: DeclKind::Component,
                name: decl.name().to_string(),
                scope: format!("architecture {} of {}", self.name, self.entity),
            });
        }
        self.add_decl(decl);
        Ok(())
    }

    /// Returns `true` if a component named `name` was already declared here.
    pub fn have_declared_component(&self, name: &str) -> bool {
        self.decls
            .iter()
            .any(|d| d.declares(DeclKind::Component, name))
    }

    /// Moves a concurrent statement into this architecture and makes it the
    /// statement's parent.
    pub fn add_stmt(&mut self, stmt: impl Into<ConcurrentStmt>) -> ConcStmtId {
        let mut stmt = stmt.into();
        stmt.attach(self.id);
        let id = self.stmts.alloc(stmt);
        tracing::trace!(arch = %self.id, stmt = %id, "add concurrent statement");
        id
    }

    /// Returns the statement with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not returned by this architecture's [`add_stmt`](Self::add_stmt).
    pub fn stmt(&self, id: ConcStmtId) -> &ConcurrentStmt {
        &self.stmts[id]
    }

    /// Returns the kind of the statement with the given ID for modification.
    ///
    /// The statement's parent link stays with its slot; only the kind is exposed.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not returned by this architecture's [`add_stmt`](Self::add_stmt).
    pub fn stmt_mut(&mut self, id: ConcStmtId) -> &mut ConcStmtKind {
        self.stmts[id].kind_mut()
    }

    /// Returns the process with the given ID, or `None` if that statement is
    /// not a process.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not returned by this architecture's [`add_stmt`](Self::add_stmt).
    pub fn process_mut(&mut self, id: ConcStmtId) -> Option<&mut Process> {
        self.stmt_mut(id).as_process_mut()
    }

    /// Iterates over `(ID, statement)` pairs in append order.
    pub fn stmts(&self) -> impl Iterator<Item = (ConcStmtId, &ConcurrentStmt)> {
        self.stmts.iter()
    }

    /// Returns the number of concurrent statements.
    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    /// Returns the declarations in append order.
    pub fn decls(&self) -> &[Decl] {
        &self.decls
    }
}

/// Mutable handle to an architecture already owned by an entity.
///
/// Obtained from [`EntityMut::architecture_mut`](crate::entity::EntityMut::architecture_mut).
/// Reads go through `Deref<Target = Architecture>`; there is no `&mut Architecture`,
/// so the attached architecture cannot be swapped for another one.
///
/// ```compile_fail
/// use aion_vhdl_ir::Design;
///
/// let mut design = Design::new();
/// let arch = design.new_architecture("a");
/// let a = design.add_entity("a", "a", arch);
/// let mut fresh = design.new_architecture("a");
/// std::mem::swap(&mut *design.entity_mut(a).architecture_mut(), &mut fresh);
/// ```
pub struct ArchMut<'a> {
    arch: &'a mut Architecture,
}

impl<'a> ArchMut<'a> {
    pub(crate) fn new(arch: &'a mut Architecture) -> Self {
        Self { arch }
    }

    /// See [`Architecture::add_decl`].
    pub fn add_decl(&mut self, decl: impl Into<Decl>) {
        self.arch.add_decl(decl);
    }

    /// See [`Architecture::declare_component`].
    pub fn declare_component(&mut self, decl: ComponentDecl) -> IrResult<()> {
        self.arch.declare_component(decl)
    }

    /// See [`Architecture::add_stmt`].
    pub fn add_stmt(&mut self, stmt: impl Into<ConcurrentStmt>) -> ConcStmtId {
        self.arch.add_stmt(stmt)
    }

    /// See [`Architecture::stmt_mut`].
    pub fn stmt_mut(&mut self, id: ConcStmtId) -> &mut ConcStmtKind {
        self.arch.stmt_mut(id)
    }

    /// See [`Architecture::process_mut`].
    pub fn process_mut(&mut self, id: ConcStmtId) -> Option<&mut Process> {
        self.arch.process_mut(id)
    }

    /// Attaches a comment to the architecture, replacing any previous one.
    pub fn set_comment(&mut self, text: impl Into<String>) {
        self.arch.set_comment(text);
    }

    /// Returns the architecture's comment for modification.
    pub fn comment_mut(&mut self) -> &mut Comment {
        self.arch.comment_mut()
    }
}

impl Deref for ArchMut<'_> {
    type Target = Architecture;

    fn deref(&self) -> &Architecture {
        self.arch
    }
}

impl Element for Architecture {
    impl_comment_accessors!();

    fn emit(&self, out: &mut VhdlWriter<'_>, level: usize) -> io::Result<()> {
        self.comment.emit(out, level, CommentPlacement::OwnLine)?;
        write!(out, "architecture {} of {} is", self.name, self.entity)?;
        for decl in &self.decls {
            out.newline(level + 1)?;
            decl.emit(out, level + 1)?;
        }
        out.newline(level)?;
        out.write_str("begin")?;
        for stmt in self.stmts.values() {
            out.newline(level + 1)?;
            stmt.emit(out, level + 1)?;
        }
        out.newline(level)?;
        out.write_str("end architecture;")
    }
}
