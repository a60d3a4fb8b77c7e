//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::{EmitConfig, VhdlConfig};
use std::path::Path;

/// The file name looked up by [`load_config`].
pub const CONFIG_FILE_NAME: &str = "vhdl.toml";

/// Loads and validates a `vhdl.toml` configuration from a directory.
///
/// A missing file is not an error: the defaults are returned instead.
pub fn load_config(dir: &Path) -> Result<VhdlConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.is_file() {
        return Ok(VhdlConfig::default());
    }
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `vhdl.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<VhdlConfig, ConfigError> {
    let config: VhdlConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_emit(&config.emit)?;
    Ok(config)
}

/// Validates that emission settings produce well-formed output.
fn validate_emit(emit: &EmitConfig) -> Result<(), ConfigError> {
    if emit.use_tabs {
        return Ok(());
    }
    if emit.indent_width == 0 {
        return Err(ConfigError::ValidationError(
            "emit.indent_width must be at least 1".to_string(),
        ));
    }
    if emit.indent_width > EmitConfig::MAX_INDENT_WIDTH {
        return Err(ConfigError::ValidationError(format!(
            "emit.indent_width must not exceed {}",
            EmitConfig::MAX_INDENT_WIDTH
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml = r#"
[emit]
indent_width = 4
use_tabs = false
header = ["Generated by aion", "Do not edit"]
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.emit.indent_width, 4);
        assert!(!config.emit.use_tabs);
        assert_eq!(config.emit.header.len(), 2);
    }

    #[test]
    fn empty_config_is_default() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.emit, EmitConfig::default());
    }

    #[test]
    fn zero_indent_rejected() {
        let err = load_config_from_str("[emit]\nindent_width = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn oversized_indent_rejected() {
        let err = load_config_from_str("[emit]\nindent_width = 17\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn zero_width_allowed_with_tabs() {
        let config = load_config_from_str("[emit]\nindent_width = 0\nuse_tabs = true\n").unwrap();
        assert!(config.emit.use_tabs);
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_config_from_str("this is not valid toml {{{}}}").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn wrong_field_type_errors() {
        let err = load_config_from_str("[emit]\nindent_width = \"wide\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[emit]\nuse_tabs = true\n",
        )
        .unwrap();
        let config = load_config(dir.path()).unwrap();
        assert!(config.emit.use_tabs);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.emit, EmitConfig::default());
    }
}
