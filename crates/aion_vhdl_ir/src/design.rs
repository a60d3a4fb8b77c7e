//! Top-level design container.
//!
//! A [`Design`] holds every generated entity in creation order and hands out
//! the IDs that child→parent links refer to. It is the root the translator
//! builds into and the unit that gets emitted.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU32, Ordering};

use aion_vhdl_config::EmitConfig;
use serde::Serialize;

use crate::arch::{Architecture, DEFAULT_ARCH_NAME};
use crate::arena::Arena;
use crate::element::Element;
use crate::entity::{Entity, EntityMut};
use crate::ids::{ArchId, EntityId};
use crate::writer::VhdlWriter;

/// Source of the per-design token that qualifies every [`ArchId`].
static NEXT_DESIGN_TOKEN: AtomicU32 = AtomicU32::new(0);

/// All entities generated for one translation run.
///
/// Each design carries a process-unique token, so [`ArchId`]s handed out by
/// different designs never collide.
#[derive(Debug, Serialize)]
pub struct Design {
    token: u32,
    entities: Arena<EntityId, Entity>,
    next_arch: u32,
}

impl Default for Design {
    fn default() -> Self {
        Self::new()
    }
}

impl Design {
    /// Creates an empty design.
    pub fn new() -> Self {
        Self {
            token: NEXT_DESIGN_TOKEN.fetch_add(1, Ordering::Relaxed),
            entities: Arena::new(),
            next_arch: 0,
        }
    }

    /// Creates an architecture named `Behavioural` for `entity`.
    pub fn new_architecture(&mut self, entity: &str) -> Architecture {
        self.new_named_architecture(entity, DEFAULT_ARCH_NAME)
    }

    /// Creates an architecture with an explicit name.
    pub fn new_named_architecture(&mut self, entity: &str, name: &str) -> Architecture {
        let id = ArchId::new(self.token, self.next_arch);
        self.next_arch += 1;
        Architecture::new(id, entity, name)
    }

    /// Wraps `arch` in a new entity, which takes ownership of it and becomes its parent.
    ///
    /// An architecture allocated by another design is accepted; its [`ArchId`]
    /// stays qualified by that design and so cannot clash with local ones.
    pub fn add_entity(&mut self, name: &str, derived_from: &str, arch: Architecture) -> EntityId {
        if arch.id().design() != self.token {
            tracing::debug!(arch = %arch.id(), "adopting architecture from another design");
        }
        if arch.entity_name() != name {
            tracing::warn!(
                entity = name,
                arch_entity = arch.entity_name(),
                "architecture names a different entity"
            );
        }
        let id = self.entities.next_id();
        tracing::debug!(%id, entity = name, derived_from, arch = %arch.id(), "create entity");
        self.entities.alloc(Entity::new(id, name, derived_from, arch))
    }

    /// Returns the entity with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not returned by this design.
    pub fn entity(&self, id: EntityId) -> &Entity {
        &self.entities[id]
    }

    /// Returns a mutable handle to the entity with the given ID.
    ///
    /// The handle exposes the entity's mutating operations but never a
    /// `&mut Entity`, so the entity cannot be swapped out of its slot.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not returned by this design.
    pub fn entity_mut(&mut self, id: EntityId) -> EntityMut<'_> {
        EntityMut::new(&mut self.entities[id])
    }

    /// Finds an entity by its VHDL name.
    pub fn find_entity(&self, name: &str) -> Option<EntityId> {
        self.entities
            .iter()
            .find(|(_, e)| e.name() == name)
            .map(|(id, _)| id)
    }

    /// Finds the entity generated from the given source scope label.
    pub fn find_entity_derived_from(&self, label: &str) -> Option<EntityId> {
        self.entities
            .iter()
            .find(|(_, e)| e.derived_from() == label)
            .map(|(id, _)| id)
    }

    /// Iterates over all entities in creation order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Returns the number of entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Renders the whole design.
    ///
    /// Writes the configured header comment, then each entity at level 0 in
    /// creation order, separated by blank lines and terminated by a newline.
    pub fn emit(&self, out: &mut VhdlWriter<'_>) -> io::Result<()> {
        tracing::debug!(entities = self.entities.len(), "emit design");
        let header = out.header().to_vec();
        for line in &header {
            write!(out, "-- {line}")?;
            out.newline(0)?;
        }
        for (i, entity) in self.entities.values().enumerate() {
            if i > 0 || !header.is_empty() {
                out.newline(0)?;
            }
            entity.emit(out, 0)?;
            out.newline(0)?;
        }
        out.flush()
    }

    /// Renders the whole design into `sink` using `config`.
    pub fn write_to(&self, sink: &mut dyn Write, config: &EmitConfig) -> io::Result<()> {
        self.emit(&mut VhdlWriter::with_config(sink, config))
    }

    /// Renders the whole design into a `String`.
    pub fn render(&self, config: &EmitConfig) -> io::Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, config)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
