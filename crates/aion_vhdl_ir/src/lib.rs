//! The VHDL output IR: the syntax tree the Aion VHDL backend builds and prints.
//!
//! A translator builds leaf nodes ([`Expr`], [`Type`], [`SeqStmt`]), composes
//! them into [`Process`]es and [`Decl`]arations, inserts those into an
//! [`Architecture`], and finally hands the architecture to a [`Design`], which
//! wraps it in an [`Entity`]. Every node implements [`Element`] and renders
//! itself through a [`VhdlWriter`].
//!
//! ```
//! use aion_vhdl_ir::{Design, Process, SeqStmt};
//!
//! let mut design = Design::new();
//! let mut arch = design.new_architecture("counter");
//! let mut proc0 = Process::new("proc0");
//! proc0.add_stmt(SeqStmt::wait());
//! arch.add_stmt(proc0);
//! let id = design.add_entity("counter", "counter_mod", arch);
//! design.entity_mut(id).requires_package("ieee.std_logic_1164");
//!
//! let text = design.render(&Default::default()).unwrap();
//! assert!(text.contains("proc0: process is"));
//! ```

#![warn(missing_docs)]

pub mod arch;
pub mod arena;
pub mod conc;
pub mod decl;
pub mod design;
pub mod element;
pub mod entity;
pub mod error;
pub mod expr;
pub mod ids;
pub mod process;
pub mod stmt;
pub mod types;
pub mod writer;

pub use arch::{ArchMut, Architecture};
pub use arena::{Arena, ArenaId};
pub use conc::{ComponentInstance, ConcStmtKind, ConcurrentStmt};
pub use decl::{ComponentDecl, Decl, DeclKind, VarDecl};
pub use design::Design;
pub use element::{render_to_string, Comment, CommentPlacement, Element};
pub use entity::{Entity, EntityMut};
pub use error::{IrError, IrResult};
pub use expr::{ConstString, Expr, ExprList, VarRef};
pub use ids::{ArchId, ConcStmtId, EntityId};
pub use process::Process;
pub use stmt::{ProcedureCall, SeqStmt, WaitStmt};
pub use types::{ScalarType, Type};
pub use writer::VhdlWriter;
