//! # SWIFT Syntax
//!
//! Shallow, literal-table syntax highlighting.
//!
//! Highlighting is a pure function of a line and a [`Language`]: no parser
//! state, no regexes, no cross-line context. Every call on the same input
//! returns the same spans.

mod highlight;
mod language;

pub use highlight::{Span, SpanClass, highlight};
pub use language::{Language, LanguageRegistry};

/// Errors that can occur while resolving languages.
#[derive(Debug, thiserror::Error)]
pub enum SyntaxError {
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_highlighting() {
        let spans = highlight("func main() {", Language::Go);
        assert_eq!(spans[0], Span::new(0, 4, SpanClass::Keyword));
        assert_eq!(spans.last().map(|s| s.end), Some(13));
    }

    #[test]
    fn test_unknown_language() {
        let result = "unknown_lang".parse::<Language>();
        assert!(result.is_err());
    }
}
