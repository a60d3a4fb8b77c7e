//! Error types for tree construction.
//!
//! Emission errors are plain [`std::io::Error`]s from the sink and are not
//! wrapped.

use crate::decl::DeclKind;

/// Result alias for checked tree operations.
pub type IrResult<T> = Result<T, IrError>;

/// Errors reported by the checked insertion operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IrError {
    /// A declaration with the same kind and name already exists in the scope.
    #[error("duplicate {kind} declaration '{name}' in {scope}")]
    DuplicateDeclaration {
        /// The kind of the rejected declaration.
        kind: DeclKind,
        /// The declared identifier.
        name: String,
        /// Human-readable description of the enclosing scope.
        scope: String,
    },
}
