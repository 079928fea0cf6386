//! Configuration schema types for `colourparam.toml`
//!
//! Defines the structure of the file. Cross-checks between sections happen
//! when the configuration is built into a [`Runtime`](super::Runtime).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::alias::AliasTable;
use crate::families::Family;

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "colourparam.toml";

/// A custom colour family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyConfig {
    /// Family identifier (matched case-insensitively)
    pub name: String,
    /// Colour name to colour text; any form the parser accepts
    #[serde(default)]
    pub colours: BTreeMap<String, String>,
}

/// A declared colour parameter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamConfig {
    /// Families searched for bare colour names, in priority order
    #[serde(default)]
    pub families: Vec<Family>,
    /// Initial value as colour text
    #[serde(default)]
    pub default: Option<String>,
}

/// Complete colourparam.toml configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColourparamConfig {
    /// Aliases merged over the built-in table
    #[serde(default)]
    pub aliases: AliasTable,
    /// Custom families, registered after the built-in ones
    #[serde(default, rename = "family")]
    pub families: Vec<FamilyConfig>,
    /// Named parameter declarations
    #[serde(default)]
    pub params: BTreeMap<String, ParamConfig>,
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "params.background.families")
    pub field: String,
    /// Error message
    pub message: String,
}

impl ConfigValidationError {
    pub fn new(field: impl Into<String>, message: impl ToString) -> Self {
        Self { field: field.into(), message: message.to_string() }
    }
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: '{}' {}", CONFIG_FILE_NAME, self.field, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parse() {
        let config: ColourparamConfig = toml::from_str("").unwrap();
        assert_eq!(config, ColourparamConfig::default());
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r#"
[aliases]
greens = ["x11", "web"]

[[family]]
name = "brand"
[family.colours]
"signal red" = "RGB{R: 0xe1, G: 0x06, B: 0x00}"
accent = "web:teal"

[params.background]
families = ["brand", "web"]
default = "signal red"

[params.border]
"#;
        let config: ColourparamConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.aliases.targets("greens"), Some(&[Family::X11, Family::WEB][..]));

        assert_eq!(config.families.len(), 1);
        assert_eq!(config.families[0].name, "brand");
        assert_eq!(config.families[0].colours["accent"], "web:teal");

        let background = &config.params["background"];
        assert_eq!(background.families, vec![Family::new("brand"), Family::WEB]);
        assert_eq!(background.default.as_deref(), Some("signal red"));
        assert_eq!(config.params["border"], ParamConfig::default());
    }

    #[test]
    fn test_unknown_section_type_is_error() {
        let result: Result<ColourparamConfig, _> = toml::from_str("params = 3");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_error_display() {
        let err =
            ConfigValidationError::new("aliases", "alias \"web\" is also the name of a family");
        assert_eq!(
            err.to_string(),
            "colourparam.toml: 'aliases' alias \"web\" is also the name of a family"
        );
    }
}
