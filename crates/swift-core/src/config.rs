//! Editor configuration.
//!
//! Loaded from `<config dir>/swift/config.toml`. Every section is
//! `#[serde(default)]`, so a partial file only overrides what it names:
//!
//! ```toml
//! [editor]
//! tab_width = 2
//!
//! [ui]
//! theme = "light"
//!
//! [languages]
//! mjs = "javascript"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use swift_buffer::{BufferConfig, DEFAULT_TAB_WIDTH};
use swift_syntax::LanguageRegistry;

use crate::CoreResult;

/// Main editor configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Editing behavior
    pub editor: EditorConfig,

    /// Appearance
    pub ui: UiConfig,

    /// Extra file extension to language tag mappings
    pub languages: BTreeMap<String, String>,
}

impl Config {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from_default_path() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable config");
                Self::default()
            }
        }
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads an explicitly requested file strictly, or the default file
    /// leniently.
    pub fn resolve(explicit: Option<&Path>) -> CoreResult<Self> {
        match explicit {
            Some(path) => Ok(Self::load_from(path)?),
            None => Ok(Self::load()),
        }
    }

    /// Loads from the default config path.
    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            tracing::info!(path = %path.display(), "loading config");
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("swift").join("config.toml"))
    }

    /// Renders the config as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Buffer settings derived from the editor section.
    pub fn buffer_config(&self) -> BufferConfig {
        BufferConfig {
            tab_width: self.editor.tab_width,
        }
    }

    /// Builds the extension lookup, rejecting unknown language tags.
    pub fn language_registry(&self) -> CoreResult<LanguageRegistry> {
        let mut registry = LanguageRegistry::new();
        for (ext, tag) in &self.languages {
            registry.insert(ext, tag)?;
        }
        Ok(registry)
    }
}

/// Editor behavior configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Spaces inserted by Tab
    pub tab_width: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

/// Appearance configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color theme name (`dark` or `light`)
    pub theme: String,

    /// Show the line-number gutter
    pub line_numbers: bool,

    /// Tint the cursor line
    pub highlight_current_line: bool,

    /// Glyph drawn at the cursor position
    pub cursor_glyph: char,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            line_numbers: true,
            highlight_current_line: true,
            cursor_glyph: '▌',
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
