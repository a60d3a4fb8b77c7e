//! VHDL types.
//!
//! A type is just a name for now: the backend only emits scalar types such
//! as `integer` or `std_logic`.

use std::io;

use serde::Serialize;

use crate::element::{impl_comment_accessors, Comment, Element};
use crate::writer::VhdlWriter;

/// A VHDL type as used in a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Type {
    /// A named scalar type.
    Scalar(ScalarType),
}

impl Type {
    /// Creates a scalar type with the given name.
    pub fn scalar(name: impl Into<String>) -> Self {
        Type::Scalar(ScalarType::new(name))
    }

    /// Returns the type's name as written in VHDL.
    pub fn name(&self) -> &str {
        match self {
            Type::Scalar(s) => s.name(),
        }
    }
}

impl Element for Type {
    fn comment(&self) -> &Comment {
        match self {
            Type::Scalar(s) => s.comment(),
        }
    }

    fn comment_mut(&mut self) -> &mut Comment {
        match self {
            Type::Scalar(s) => s.comment_mut(),
        }
    }

    fn emit(&self, out: &mut VhdlWriter<'_>, level: usize) -> io::Result<()> {
        match self {
            Type::Scalar(s) => s.emit(out, level),
        }
    }
}

/// A scalar type identified only by its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScalarType {
    name: String,
    comment: Comment,
}

impl ScalarType {
    /// Creates a scalar type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: Comment::default(),
        }
    }

    /// Returns the type name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<ScalarType> for Type {
    fn from(s: ScalarType) -> Self {
        Type::Scalar(s)
    }
}

impl Element for ScalarType {
    impl_comment_accessors!();

    fn emit(&self, out: &mut VhdlWriter<'_>, _level: usize) -> io::Result<()> {
        out.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::render_to_string;

    #[test]
    fn scalar_renders_name() {
        let ty = Type::scalar("integer");
        assert_eq!(ty.name(), "integer");
        assert_eq!(render_to_string(&ty, &Default::default()).unwrap(), "integer");
    }

    #[test]
    fn type_comment_is_not_rendered() {
        let mut ty = Type::scalar("std_logic");
        ty.set_comment("from wire");
        assert_eq!(ty.comment().text(), Some("from wire"));
        assert_eq!(
            render_to_string(&ty, &Default::default()).unwrap(),
            "std_logic"
        );
    }
}
