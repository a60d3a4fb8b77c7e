//! Declarations: variables inside processes, components inside architectures.
//!
//! A declaration's name is the identifier being declared, not its type.

use std::fmt;
use std::io;

use serde::Serialize;

use crate::element::{impl_comment_accessors, Comment, CommentPlacement, Element};
use crate::entity::Entity;
use crate::types::Type;
use crate::writer::VhdlWriter;

/// The kind of a declaration, used in lookups and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DeclKind {
    /// `variable`
    Variable,
    /// `component`
    Component,
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclKind::Variable => f.write_str("variable"),
            DeclKind::Component => f.write_str("component"),
        }
    }
}

/// A declaration in a process or architecture declarative part.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub enum Decl {
    /// A variable declaration.
    Var(VarDecl),
    /// A component forward declaration.
    Component(ComponentDecl),
}

impl Decl {
    /// Returns the declared identifier.
    pub fn name(&self) -> &str {
        match self {
            Decl::Var(d) => d.name(),
            Decl::Component(d) => d.name(),
        }
    }

    /// Returns what kind of declaration this is.
    pub fn kind(&self) -> DeclKind {
        match self {
            Decl::Var(_) => DeclKind::Variable,
            Decl::Component(_) => DeclKind::Component,
        }
    }

    /// Returns `true` if this declares `name` with the given kind.
    pub fn declares(&self, kind: DeclKind, name: &str) -> bool {
        self.kind() == kind && self.name() == name
    }
}

impl Element for Decl {
    fn comment(&self) -> &Comment {
        match self {
            Decl::Var(d) => d.comment(),
            Decl::Component(d) => d.comment(),
        }
    }

    fn comment_mut(&mut self) -> &mut Comment {
        match self {
            Decl::Var(d) => d.comment_mut(),
            Decl::Component(d) => d.comment_mut(),
        }
    }

    fn emit(&self, out: &mut VhdlWriter<'_>, level: usize) -> io::Result<()> {
        match self {
            Decl::Var(d) => d.emit(out, level),
            Decl::Component(d) => d.emit(out, level),
        }
    }
}

/// `variable <name> : <type>;`
///
/// Meant for process declarative parts, although nothing enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VarDecl {
    name: String,
    ty: Type,
    comment: Comment,
}

impl VarDecl {
    /// Creates a variable declaration, taking ownership of its type.
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            comment: Comment::default(),
        }
    }

    /// Returns the variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared type.
    pub fn ty(&self) -> &Type {
        &self.ty
    }
}

impl From<VarDecl> for Decl {
    fn from(d: VarDecl) -> Self {
        Decl::Var(d)
    }
}

impl Element for VarDecl {
    impl_comment_accessors!();

    fn emit(&self, out: &mut VhdlWriter<'_>, level: usize) -> io::Result<()> {
        write!(out, "variable {} : ", self.name)?;
        self.ty.emit(out, level)?;
        out.write_str(";")?;
        self.comment.emit(out, level, CommentPlacement::EndOfLine)
    }
}

/// A forward declaration of a component.
///
/// Components are only ever declared for entities this backend generates, so
/// the only constructor is [`ComponentDecl::for_entity`], which takes the
/// name from the entity. The port list is not emitted yet.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ComponentDecl {
    name: String,
    comment: Comment,
}

impl ComponentDecl {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            comment: Comment::default(),
        }
    }

    /// Creates the component declaration for a generated entity.
    pub fn for_entity(entity: &Entity) -> Self {
        Self::new(entity.name())
    }

    /// Returns the component name, which is the entity's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<ComponentDecl> for Decl {
    fn from(d: ComponentDecl) -> Self {
        Decl::Component(d)
    }
}

impl Element for ComponentDecl {
    impl_comment_accessors!();

    fn emit(&self, out: &mut VhdlWriter<'_>, level: usize) -> io::Result<()> {
        self.comment.emit(out, level, CommentPlacement::OwnLine)?;
        write!(out, "component {} is", self.name)?;
        out.newline(level)?;
        out.write_str("end component;")
    }
}
