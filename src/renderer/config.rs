//! Options controlling how values are rendered

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading render options
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read options file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse options TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Configuration options for rendering values
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Digits after the decimal point for floating-point values
    ///
    /// Bounded by `u16` like any `fmt` precision; larger values are rejected
    /// when the options are loaded.
    pub float_precision: u16,

    /// Text written before the hex digits of a pointer rendering
    pub pointer_prefix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            float_precision: 6,
            pointer_prefix: "0x".to_string(),
        }
    }
}

impl RenderOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of fraction digits for floats
    pub fn with_float_precision(mut self, precision: u16) -> Self {
        self.float_precision = precision;
        self
    }

    /// Set the pointer prefix
    pub fn with_pointer_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.pointer_prefix = prefix.into();
        self
    }

    /// Load options from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load options from a TOML string; missing keys keep their defaults
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
