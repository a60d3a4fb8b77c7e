//! Opaque ID newtypes for tree nodes and back-references.
//!
//! Each ID is a thin `u32` wrapper that is `Copy`, `Hash`, and `Serialize`/`Deserialize`.
//! Child→parent links are stored as IDs rather than pointers.

use crate::arena::ArenaId;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
        pub struct $name(u32);

        impl $name {
            /// Creates an ID from a raw `u32` index.
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            /// Returns the raw `u32` index.
            pub fn as_raw(self) -> u32 {
                self.0
            }
        }

        impl ArenaId for $name {
            fn from_raw(index: u32) -> Self {
                Self(index)
            }

            fn as_raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

define_id!(
    /// Opaque, copyable ID for an entity in a [`Design`](crate::design::Design).
    EntityId,
    "entity#"
);

/// Opaque, copyable ID for an architecture.
///
/// Qualified by the allocating [`Design`](crate::design::Design), so IDs from
/// different designs never compare equal even when their indices match.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ArchId {
    design: u32,
    index: u32,
}

impl ArchId {
    pub(crate) fn new(design: u32, index: u32) -> Self {
        Self { design, index }
    }

    /// Returns the token of the design that allocated this ID.
    pub fn design(self) -> u32 {
        self.design
    }

    /// Returns the allocation index within that design.
    pub fn index(self) -> u32 {
        self.index
    }
}

impl fmt::Display for ArchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "arch#{}.{}", self.design, self.index)
    }
}

define_id!(
    /// Opaque, copyable ID for a concurrent statement within its architecture.
    ConcStmtId,
    "stmt#"
);
