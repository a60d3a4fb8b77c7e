//! The capability shared by every node: an attachable comment and text emission.

use std::io;

use aion_vhdl_config::EmitConfig;
use serde::Serialize;

use crate::writer::VhdlWriter;

/// Where a [`Comment`] is rendered relative to the node that owns it.
///
/// Chosen by the emitting node at emit time; it is not stored on the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentPlacement {
    /// After the node's own text, on the same line.
    EndOfLine,
    /// On its own line(s) immediately before the node, at the node's level.
    OwnLine,
}

/// An optional comment attached to a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Comment(Option<String>);

impl Comment {
    /// Replaces the comment text.
    pub fn set(&mut self, text: impl Into<String>) {
        self.0 = Some(text.into());
    }

    /// Removes the comment.
    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Returns the comment text, if any.
    pub fn text(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Renders the comment as VHDL `--` text.
    ///
    /// An own-line comment writes one `--` line per line of text and leaves
    /// the cursor on a fresh line at `level`. An end-of-line comment folds
    /// multi-line text onto the current line. Empty comments render nothing.
    pub fn emit(
        &self,
        out: &mut VhdlWriter<'_>,
        level: usize,
        placement: CommentPlacement,
    ) -> io::Result<()> {
        let Some(text) = self.0.as_deref().filter(|t| !t.trim().is_empty()) else {
            return Ok(());
        };
        match placement {
            CommentPlacement::EndOfLine => {
                let folded: Vec<&str> = text.lines().map(str::trim).collect();
                write!(out, "  -- {}", folded.join(" "))
            }
            CommentPlacement::OwnLine => {
                for line in text.lines().map(str::trim_end) {
                    if line.is_empty() {
                        out.write_str("--")?;
                    } else {
                        write!(out, "-- {line}")?;
                    }
                    out.newline(level)?;
                }
                Ok(())
            }
        }
    }
}

/// Any VHDL syntax element.
///
/// `emit` writes the node starting at the current cursor position, which the
/// caller has already indented to `level`. Nested lines use `level + 1`.
pub trait Element {
    /// Returns the node's comment.
    fn comment(&self) -> &Comment;

    /// Returns the node's comment for modification.
    fn comment_mut(&mut self) -> &mut Comment;

    /// Attaches a comment, replacing any previous one.
    fn set_comment(&mut self, text: impl Into<String>)
    where
        Self: Sized,
    {
        self.comment_mut().set(text);
    }

    /// Renders the node into `out` at indentation `level`.
    fn emit(&self, out: &mut VhdlWriter<'_>, level: usize) -> io::Result<()>;
}

/// Renders a single node at level 0 into a `String`.
pub fn render_to_string<E: Element + ?Sized>(
    element: &E,
    config: &EmitConfig,
) -> io::Result<String> {
    let mut buf = Vec::new();
    element.emit(&mut VhdlWriter::with_config(&mut buf, config), 0)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Implements the comment accessors of [`Element`] for a struct with a
/// `comment: Comment` field.
macro_rules! impl_comment_accessors {
    () => {
        fn comment(&self) -> &$crate::element::Comment {
            &self.comment
        }

        fn comment_mut(&mut self) -> &mut $crate::element::Comment {
            &mut self.comment
        }
    };
}

pub(crate) use impl_comment_accessors;
