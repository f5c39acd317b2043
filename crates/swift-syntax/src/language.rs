//! Language tags and extension detection.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::SyntaxError;

/// A language the highlighter knows literal tables for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    Go,
    Python,
    JavaScript,
    Html,
    Css,
    Json,
    /// No highlighting
    #[default]
    PlainText,
}

impl Language {
    /// All languages, in tag order.
    pub const ALL: [Language; 7] = [
        Language::Go,
        Language::Python,
        Language::JavaScript,
        Language::Html,
        Language::Css,
        Language::Json,
        Language::PlainText,
    ];

    /// Returns the language tag.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Html => "html",
            Language::Css => "css",
            Language::Json => "json",
            Language::PlainText => "none",
        }
    }

    /// Detects a language from a file extension (without the dot).
    ///
    /// Matching is case-insensitive; unknown extensions are plain text.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "go" => Language::Go,
            "py" => Language::Python,
            "js" | "ts" => Language::JavaScript,
            "html" | "htm" => Language::Html,
            "css" => Language::Css,
            "json" => Language::Json,
            _ => Language::PlainText,
        }
    }

    /// Detects a language from a path's extension.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map(Self::from_extension)
            .unwrap_or_default()
    }
}

impl FromStr for Language {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.tag() == s)
            .ok_or_else(|| SyntaxError::UnknownLanguage(s.to_string()))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Extension-to-language lookup with user overrides.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    overrides: HashMap<String, Language>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `ext` onto the language named by `tag`.
    pub fn insert(&mut self, ext: &str, tag: &str) -> Result<(), SyntaxError> {
        let language = tag.parse()?;
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        tracing::debug!(%ext, %language, "language override");
        self.overrides.insert(ext, language);
        Ok(())
    }

    /// Detects the language for a path, preferring overrides.
    pub fn detect(&self, path: Option<&Path>) -> Language {
        let Some(path) = path else {
            return Language::PlainText;
        };
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|ext| self.overrides.get(&ext.to_ascii_lowercase()))
            .copied()
            .unwrap_or_else(|| Language::from_path(path))
    }
}
