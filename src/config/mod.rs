//! Configuration for colourparam
//!
//! Provides the `colourparam.toml` schema, file discovery, and the
//! [`Runtime`] built from a validated configuration.

pub mod loader;
pub mod runtime;
pub mod schema;

pub use loader::{
    find_config, find_config_from, find_xdg_config, load_config, load_runtime, parse_config,
    ConfigError,
};
pub use runtime::{Param, Runtime};
pub use schema::*;
