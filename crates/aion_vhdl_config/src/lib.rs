//! Parsing and validation of `vhdl.toml` emission settings.
//!
//! This crate reads the VHDL backend's configuration file and produces a
//! strongly-typed [`VhdlConfig`] controlling indentation and the design header
//! written ahead of generated entities.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
