// File: src/config.rs
// Purpose: Load validator configuration from rwv.toml

use anyhow::{Context, Result};
use real_world_validator::ValidatorConfig;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "rwv.toml";

/// Load configuration from a TOML file
///
/// A missing or empty file yields the default configuration.
pub fn load(path: impl AsRef<Path>) -> Result<ValidatorConfig> {
    let path = path.as_ref();

    if !path.exists() {
        tracing::debug!("No config file at {:?}, using defaults", path);
        return Ok(ValidatorConfig::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config = ValidatorConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    tracing::debug!("Loaded config from {:?}", path);
    Ok(config)
}
