//! Entities: the interface of a generated module, owning its architecture.

use std::io;
use std::ops::Deref;

use serde::Serialize;

use crate::arch::{ArchMut, Architecture};
use crate::element::{impl_comment_accessors, Comment, CommentPlacement, Element};
use crate::ids::EntityId;
use crate::writer::VhdlWriter;

/// A VHDL entity together with its single architecture.
///
/// Entities are derived from instantiated Verilog module scopes; the
/// derived-from label records which scope, but is not rendered. Port lists
/// are not emitted yet. Built through [`Design::add_entity`](crate::design::Design::add_entity).
#[derive(Debug, Serialize)]
pub struct Entity {
    id: EntityId,
    name: String,
    derived_from: String,
    arch: Architecture,
    uses: Vec<String>,
    comment: Comment,
}

impl Entity {
    pub(crate) fn new(id: EntityId, name: &str, derived_from: &str, mut arch: Architecture) -> Self {
        arch.attach(id);
        Self {
            id,
            name: name.to_string(),
            derived_from: derived_from.to_string(),
            arch,
            uses: Vec::new(),
            comment: Comment::default(),
        }
    }

    /// Returns this entity's ID.
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Returns the entity name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the label of the source construct this entity was generated from.
    pub fn derived_from(&self) -> &str {
        &self.derived_from
    }

    /// Returns the owned architecture.
    pub fn architecture(&self) -> &Architecture {
        &self.arch
    }

    /// Returns the required packages in insertion order, repeats included.
    pub fn packages(&self) -> &[String] {
        &self.uses
    }

    fn distinct_packages(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.uses.len());
        for package in &self.uses {
            if !seen.contains(&package.as_str()) {
                seen.push(package);
            }
        }
        seen
    }
}

/// Mutable handle to an [`Entity`] stored in a [`Design`](crate::design::Design).
///
/// Reads go through `Deref<Target = Entity>`. Writes are limited to the
/// operations below; there is no `&mut Entity` or `&mut Architecture`, so an
/// attached node cannot be swapped or replaced.
///
/// ```compile_fail
/// use aion_vhdl_ir::Design;
///
/// let mut design = Design::new();
/// let arch = design.new_architecture("a");
/// let a = design.add_entity("a", "a", arch);
/// let mut other = Design::new();
/// let arch = other.new_architecture("b");
/// let b = other.add_entity("b", "b", arch);
/// std::mem::swap(&mut *design.entity_mut(a), &mut *other.entity_mut(b));
/// ```
pub struct EntityMut<'a> {
    entity: &'a mut Entity,
}

impl<'a> EntityMut<'a> {
    pub(crate) fn new(entity: &'a mut Entity) -> Self {
        Self { entity }
    }

    /// Records that the entity needs `package` (e.g. `ieee.std_logic_1164`).
    ///
    /// Repeated names are kept; emission writes each package once.
    pub fn requires_package(&mut self, package: impl Into<String>) {
        self.entity.uses.push(package.into());
    }

    /// Attaches a comment to the entity, replacing any previous one.
    pub fn set_comment(&mut self, text: impl Into<String>) {
        self.entity.comment.set(text);
    }

    /// Returns the entity's comment for modification.
    pub fn comment_mut(&mut self) -> &mut Comment {
        &mut self.entity.comment
    }

    /// Returns a mutable handle to the owned architecture.
    pub fn architecture_mut(&mut self) -> ArchMut<'_> {
        ArchMut::new(&mut self.entity.arch)
    }
}

impl Deref for EntityMut<'_> {
    type Target = Entity;

    fn deref(&self) -> &Entity {
        self.entity
    }
}

impl Element for Entity {
    impl_comment_accessors!();

    fn emit(&self, out: &mut VhdlWriter<'_>, level: usize) -> io::Result<()> {
        let packages = self.distinct_packages();
        for (i, package) in packages.iter().enumerate() {
            if i > 0 {
                out.newline(level)?;
            }
            write!(out, "use {package}.all;")?;
        }
        if !packages.is_empty() {
            out.blank_line(level)?;
        }
        self.comment.emit(out, level, CommentPlacement::OwnLine)?;
        write!(out, "entity {} is", self.name)?;
        out.newline(level)?;
        out.write_str("end entity;")?;
        out.blank_line(level)?;
        self.arch.emit(out, level)
    }
}
