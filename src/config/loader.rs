//! Configuration loading and discovery for `colourparam.toml`

use super::runtime::Runtime;
use super::schema::{ColourparamConfig, CONFIG_FILE_NAME};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse colourparam.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", bullet_list(.0))]
    Validation(Vec<String>),
}

fn bullet_list(lines: &[String]) -> String {
    lines.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n")
}

/// Find colourparam.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for colourparam.toml
/// 2. Check XDG_CONFIG_HOME/colourparam/colourparam.toml (or
///    ~/.config/colourparam/colourparam.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find colourparam.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("colourparam").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find colourparam.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a colourparam.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses
/// `find_config()` to locate the config file. If no config file is found,
/// returns an empty configuration.
///
/// # Example
/// ```ignore
/// let config = load_config(Some(Path::new("colourparam.toml")))?;
/// let runtime = config.build()?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<ColourparamConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            tracing::debug!(path = %p.display(), "loading config");
            parse_config(&fs::read_to_string(&p)?)
        }
        None => {
            tracing::debug!("no config file found, using built-in families only");
            Ok(ColourparamConfig::default())
        }
    }
}

/// Deserialize configuration text.
pub fn parse_config(contents: &str) -> Result<ColourparamConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Load and build configuration in one step.
pub fn load_runtime(path: Option<&Path>) -> Result<Runtime, ConfigError> {
    load_config(path)?.build()
}
