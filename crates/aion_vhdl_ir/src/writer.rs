//! The text sink every node renders into.
//!
//! [`VhdlWriter`] wraps any [`std::io::Write`] and knows how to start a new
//! line at a given nesting level. Write failures from the underlying sink are
//! returned unchanged.

use std::fmt;
use std::io::{self, Write};

use aion_vhdl_config::EmitConfig;

/// An indentation-aware writer for VHDL text.
///
/// Levels are absolute: `newline(2)` always starts a line with two indentation
/// units, regardless of what was written before.
pub struct VhdlWriter<'w> {
    out: &'w mut dyn Write,
    indent_unit: String,
    header: Vec<String>,
}

impl<'w> VhdlWriter<'w> {
    /// Creates a writer with the default [`EmitConfig`].
    pub fn new(out: &'w mut dyn Write) -> Self {
        Self::with_config(out, &EmitConfig::default())
    }

    /// Creates a writer using the indentation and header from `config`.
    pub fn with_config(out: &'w mut dyn Write, config: &EmitConfig) -> Self {
        Self {
            out,
            indent_unit: config.indent_unit(),
            header: config.header.clone(),
        }
    }

    /// Returns the design header lines configured for this writer.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Writes `text` verbatim.
    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    /// Writes formatted text; this is what `write!(out, ...)` expands to.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.out.write_fmt(args)
    }

    /// Writes the indentation for `level` without a line break.
    pub fn indent(&mut self, level: usize) -> io::Result<()> {
        for _ in 0..level {
            self.out.write_all(self.indent_unit.as_bytes())?;
        }
        Ok(())
    }

    /// Ends the current line and indents the next one to `level`.
    pub fn newline(&mut self, level: usize) -> io::Result<()> {
        self.out.write_all(b"\n")?;
        self.indent(level)
    }

    /// Ends the current line, leaves one empty line, and indents to `level`.
    ///
    /// The empty line carries no indentation.
    pub fn blank_line(&mut self, level: usize) -> io::Result<()> {
        self.out.write_all(b"\n")?;
        self.newline(level)
    }

    /// Flushes the underlying sink.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
