//! Chrome configuration.
//!
//! `ChromeConfig` can be built in code or loaded from TOML:
//!
//! ```
//! use launcher_chrome::ChromeConfig;
//!
//! let config = ChromeConfig::from_toml_str(
//!     r#"
//!     fallback_width = 320
//!     flash_count = 3
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.fallback_width(), 320);
//! assert_eq!(config.fallback_height(), 100);
//! assert_eq!(config.flash_count(), 3);
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigResult;

/// Width reported when a window's bounds cannot be read.
pub const DEFAULT_FALLBACK_WIDTH: i32 = 200;
/// Height reported when a window's bounds cannot be read.
pub const DEFAULT_FALLBACK_HEIGHT: i32 = 100;
/// Number of taskbar flashes per attention request.
pub const DEFAULT_FLASH_COUNT: u32 = 2;

/// Configuration for window chrome operations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChromeConfig {
    fallback_width: i32,
    fallback_height: i32,
    flash_count: u32,
    /// Binary to extract window icons from. `None` means the running executable.
    icon_source: Option<PathBuf>,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            fallback_width: DEFAULT_FALLBACK_WIDTH,
            fallback_height: DEFAULT_FALLBACK_HEIGHT,
            flash_count: DEFAULT_FLASH_COUNT,
            icon_source: None,
        }
    }
}

impl ChromeConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Set the dimensions reported when a bounds query fails.
    pub fn with_fallback_size(mut self, width: i32, height: i32) -> Self {
        self.fallback_width = width;
        self.fallback_height = height;
        self
    }

    /// Set how many times the taskbar button flashes.
    pub fn with_flash_count(mut self, count: u32) -> Self {
        self.flash_count = count;
        self
    }

    /// Set the binary to extract window icons from.
    pub fn with_icon_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.icon_source = Some(path.into());
        self
    }

    /// Width reported when a bounds query fails.
    pub fn fallback_width(&self) -> i32 {
        self.fallback_width
    }

    /// Height reported when a bounds query fails.
    pub fn fallback_height(&self) -> i32 {
        self.fallback_height
    }

    /// Number of taskbar flashes per request.
    pub fn flash_count(&self) -> u32 {
        self.flash_count
    }

    /// Explicit icon source, if configured.
    pub fn icon_source(&self) -> Option<&Path> {
        self.icon_source.as_deref()
    }
}
