//! Color themes.
//!
//! Two built-in palettes, `dark` and `light`. Any other `ui.theme` value is
//! read as the path of a TOML theme file with the same shape as [`Theme`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use swift_core::Style;
use swift_syntax::SpanClass;

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts to a crossterm color.
    pub fn to_crossterm(&self) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

/// Editor theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: String,

    /// Background colors
    pub background: BackgroundColors,

    /// Foreground colors
    pub foreground: ForegroundColors,

    /// Syntax highlighting colors
    pub syntax: SyntaxColors,
}

/// Background colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundColors {
    pub primary: Color,
    pub line_highlight: Color,
    pub status: Color,
    pub overlay: Color,
}

/// Foreground (text) colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForegroundColors {
    pub primary: Color,
    pub gutter: Color,
    pub gutter_current: Color,
    pub cursor: Color,
    pub status: Color,
    pub accent: Color,
}

/// Syntax highlighting colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxColors {
    pub keyword: Color,
    pub string: Color,
    pub tag: Color,
    pub punctuation: Color,
}

impl Theme {
    /// Creates the default dark theme.
    pub fn dark() -> Self {
        Self {
            name: "SWIFT Dark".to_string(),
            background: BackgroundColors {
                primary: Color::rgb(26, 26, 31),
                line_highlight: Color::rgb(38, 38, 44),
                status: Color::rgb(51, 102, 204),
                overlay: Color::rgb(38, 38, 43),
            },
            foreground: ForegroundColors {
                primary: Color::rgb(230, 230, 230),
                gutter: Color::rgb(128, 128, 128),
                gutter_current: Color::rgb(230, 204, 128),
                cursor: Color::rgb(102, 153, 255),
                status: Color::rgb(255, 255, 255),
                accent: Color::rgb(102, 153, 255),
            },
            syntax: SyntaxColors {
                keyword: Color::rgb(128, 153, 230),    // Blue
                string: Color::rgb(153, 204, 128),     // Green
                tag: Color::rgb(204, 128, 128),        // Red
                punctuation: Color::rgb(230, 204, 128), // Yellow
            },
        }
    }

    /// Creates a light theme.
    pub fn light() -> Self {
        Self {
            name: "SWIFT Light".to_string(),
            background: BackgroundColors {
                primary: Color::rgb(255, 255, 255),
                line_highlight: Color::rgb(242, 242, 242),
                status: Color::rgb(51, 102, 204),
                overlay: Color::rgb(235, 235, 235),
            },
            foreground: ForegroundColors {
                primary: Color::rgb(26, 26, 26),
                gutter: Color::rgb(140, 140, 140),
                gutter_current: Color::rgb(51, 102, 204),
                cursor: Color::rgb(51, 102, 204),
                status: Color::rgb(255, 255, 255),
                accent: Color::rgb(51, 102, 204),
            },
            syntax: SyntaxColors {
                keyword: Color::rgb(51, 77, 179),
                string: Color::rgb(77, 153, 77),
                tag: Color::rgb(153, 51, 51),
                punctuation: Color::rgb(153, 128, 51),
            },
        }
    }

    /// Picks a built-in theme by name, or loads a theme file.
    ///
    /// Falls back to the dark theme when the file cannot be read.
    pub fn resolve(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            "light" => Self::light(),
            path => match Self::load(Path::new(path)) {
                Ok(theme) => theme,
                Err(e) => {
                    tracing::warn!(theme = path, error = %e, "unknown theme, using dark");
                    Self::dark()
                }
            },
        }
    }

    /// Loads a theme from a file.
    pub fn load(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Saves the theme to a file.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// Foreground for a span class.
    pub fn syntax_color(&self, class: SpanClass) -> Color {
        match class {
            SpanClass::Plain => self.foreground.primary,
            SpanClass::Keyword => self.syntax.keyword,
            SpanClass::StringLiteral => self.syntax.string,
            SpanClass::Tag => self.syntax.tag,
            SpanClass::Punctuation => self.syntax.punctuation,
        }
    }

    /// Foreground for a frame segment.
    pub fn segment_color(&self, style: Style) -> Color {
        match style {
            Style::Syntax(class) => self.syntax_color(class),
            Style::Cursor => self.foreground.cursor,
            Style::Banner => self.foreground.accent,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_themes() {
        assert_eq!(Theme::resolve("dark"), Theme::dark());
        assert_eq!(Theme::resolve("light"), Theme::light());
        assert_eq!(Theme::default().name, "SWIFT Dark");
    }

    #[test]
    fn test_unknown_theme_falls_back_to_dark() {
        assert_eq!(Theme::resolve("/no/such/theme.toml"), Theme::dark());
    }

    #[test]
    fn test_theme_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mine.toml");
        let mut theme = Theme::light();
        theme.name = "Mine".to_string();
        theme.save(&path).unwrap();

        let loaded = Theme::resolve(path.to_str().unwrap());
        assert_eq!(loaded, theme);
    }

    #[test]
    fn test_span_colors() {
        let theme = Theme::dark();
        assert_eq!(theme.syntax_color(SpanClass::Plain), theme.foreground.primary);
        assert_eq!(theme.segment_color(Style::Cursor), theme.foreground.cursor);
        assert_eq!(
            theme.segment_color(Style::Syntax(SpanClass::Keyword)),
            theme.syntax.keyword
        );
        assert_eq!(
            Color::rgb(1, 2, 3).to_crossterm(),
            crossterm::style::Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
