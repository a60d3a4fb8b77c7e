//! Concurrent statements, valid only inside an [`Architecture`](crate::arch::Architecture).

use std::io;

use serde::Serialize;

use crate::element::{impl_comment_accessors, Comment, CommentPlacement, Element};
use crate::ids::ArchId;
use crate::process::Process;
use crate::writer::VhdlWriter;

/// The concrete kind of a concurrent statement.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub enum ConcStmtKind {
    /// A component instantiation.
    Instance(ComponentInstance),
    /// A process block.
    Process(Process),
}

impl ConcStmtKind {
    /// Returns the process, if this is one.
    pub fn as_process(&self) -> Option<&Process> {
        match self {
            ConcStmtKind::Process(p) => Some(p),
            ConcStmtKind::Instance(_) => None,
        }
    }

    /// Returns the process for modification, if this is one.
    pub fn as_process_mut(&mut self) -> Option<&mut Process> {
        match self {
            ConcStmtKind::Process(p) => Some(p),
            ConcStmtKind::Instance(_) => None,
        }
    }
}

/// A concurrent statement together with its link to the owning architecture.
///
/// The parent is unset until [`Architecture::add_stmt`](crate::arch::Architecture::add_stmt)
/// moves the statement in; nothing else can set or change it.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ConcurrentStmt {
    kind: ConcStmtKind,
    parent: Option<ArchId>,
}

impl ConcurrentStmt {
    /// Returns the architecture that owns this statement, if it has been inserted.
    pub fn parent(&self) -> Option<ArchId> {
        self.parent
    }

    /// Returns the statement kind.
    pub fn kind(&self) -> &ConcStmtKind {
        &self.kind
    }

    /// Returns the statement kind for modification.
    pub fn kind_mut(&mut self) -> &mut ConcStmtKind {
        &mut self.kind
    }

    /// Returns the process, if this statement is one.
    pub fn as_process(&self) -> Option<&Process> {
        self.kind.as_process()
    }

    /// Returns the process for modification, if this statement is one.
    pub fn as_process_mut(&mut self) -> Option<&mut Process> {
        self.kind.as_process_mut()
    }

    pub(crate) fn attach(&mut self, arch: ArchId) {
        debug_assert!(self.parent.is_none(), "statement already has a parent");
        self.parent = Some(arch);
    }
}

impl From<ConcStmtKind> for ConcurrentStmt {
    fn from(kind: ConcStmtKind) -> Self {
        Self { kind, parent: None }
    }
}

impl From<Process> for ConcurrentStmt {
    fn from(p: Process) -> Self {
        ConcStmtKind::Process(p).into()
    }
}

impl From<ComponentInstance> for ConcurrentStmt {
    fn from(i: ComponentInstance) -> Self {
        ConcStmtKind::Instance(i).into()
    }
}

impl Element for ConcurrentStmt {
    fn comment(&self) -> &Comment {
        match &self.kind {
            ConcStmtKind::Instance(i) => i.comment(),
            ConcStmtKind::Process(p) => p.comment(),
        }
    }

    fn comment_mut(&mut self) -> &mut Comment {
        match &mut self.kind {
            ConcStmtKind::Instance(i) => i.comment_mut(),
            ConcStmtKind::Process(p) => p.comment_mut(),
        }
    }

    fn emit(&self, out: &mut VhdlWriter<'_>, level: usize) -> io::Result<()> {
        match &self.kind {
            ConcStmtKind::Instance(i) => i.emit(out, level),
            ConcStmtKind::Process(p) => p.emit(out, level),
        }
    }
}

/// Instantiation of a component. Port maps are not emitted yet.
///
/// Whether `comp_name` was declared is the inserting architecture's concern;
/// see [`Architecture::have_declared_component`](crate::arch::Architecture::have_declared_component).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentInstance {
    inst_name: String,
    comp_name: String,
    comment: Comment,
}

impl ComponentInstance {
    /// Creates an instance `inst_name` of component `comp_name`.
    pub fn new(inst_name: impl Into<String>, comp_name: impl Into<String>) -> Self {
        Self {
            inst_name: inst_name.into(),
            comp_name: comp_name.into(),
            comment: Comment::default(),
        }
    }

    /// Returns the instance label.
    pub fn inst_name(&self) -> &str {
        &self.inst_name
    }

    /// Returns the instantiated component's name.
    pub fn comp_name(&self) -> &str {
        &self.comp_name
    }
}

impl Element for ComponentInstance {
    impl_comment_accessors!();

    fn emit(&self, out: &mut VhdlWriter<'_>, level: usize) -> io::Result<()> {
        write!(out, "{}: {};", self.inst_name, self.comp_name)?;
        self.comment.emit(out, level, CommentPlacement::EndOfLine)
    }
}
