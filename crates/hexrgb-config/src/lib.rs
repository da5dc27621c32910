//! hexrgb configuration.
//!
//! TOML-based configuration for the conversion server. All sections use
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hexrgb_config::{config_to_json, load_config, ServerOverrides};
//!
//! let config = load_config(None, &ServerOverrides::default()).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{HexRgbConfig, LoggingConfig, ServerConfig};

use hexrgb_common::ConfigError;
use std::path::Path;

/// Command-line values that replace `[server]` entries from the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl ServerOverrides {
    pub fn apply(&self, server: &mut ServerConfig) {
        if let Some(host) = &self.host {
            server.host = host.clone();
        }
        if let Some(port) = self.port {
            server.port = port;
        }
    }
}

/// Load config, apply `overrides`, then validate strictly.
///
/// With `path`, that file must exist. Without, the platform default
/// location is used and created on first run. A file value that an
/// override replaces is never validated.
pub fn load_config(
    path: Option<&Path>,
    overrides: &ServerOverrides,
) -> Result<HexRgbConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    overrides.apply(&mut config.server);

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &HexRgbConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
