//! Catalog configuration.
//!
//! Configuration is optional. Without a config file the catalog behaves
//! exactly as the stock defaults below describe; a file passed via
//! `--config` overrides only the keys it sets.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! output_file = "FIRMWARE_LIST.json"  # Manifest written into the firmware directory
//! ignore = [".DS_Store"]              # Names never treated as firmware candidates
//! ```
//!
//! The output file is always excluded from the candidate set, whether or not
//! it is listed in `ignore`. Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Default manifest file name.
pub const DEFAULT_OUTPUT_FILE: &str = "FIRMWARE_LIST.json";

/// Catalog configuration loaded from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Manifest file name, written into the firmware directory.
    pub output_file: String,
    /// Directory entries skipped before parsing.
    pub ignore: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            ignore: vec![".DS_Store".to_string()],
        }
    }
}

impl CatalogConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_file.is_empty() {
            return Err(ConfigError::Validation(
                "output_file must not be empty".into(),
            ));
        }
        if self.output_file.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "output_file must be a bare file name".into(),
            ));
        }
        if !self.output_file.ends_with(".json") {
            return Err(ConfigError::Validation(
                "output_file must end in .json".into(),
            ));
        }
        Ok(())
    }

    /// Whether a directory entry is excluded from parsing.
    pub fn is_excluded(&self, name: &str) -> bool {
        name == self.output_file || self.ignore.iter().any(|i| i == name)
    }
}

/// Load the catalog config.
///
/// `None` yields the stock defaults. An explicit path must exist, parse, and
/// validate.
pub fn load_config(path: Option<&Path>) -> Result<CatalogConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(CatalogConfig::default());
    };
    let content = fs::read_to_string(path)?;
    let config: CatalogConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock config file.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r#"# Firmware Catalog Configuration
# ==============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Unknown keys will cause an error.

# Manifest file written into the firmware directory.
# It is never treated as a firmware candidate itself.
output_file = "FIRMWARE_LIST.json"

# Directory entries skipped before filename parsing.
ignore = [".DS_Store"]
"#
}
