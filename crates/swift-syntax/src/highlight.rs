//! Literal-table highlighting.
//!
//! Each language has an ordered table of literals. A line is scanned once,
//! left to right; at every position the table is tried in order and the
//! first literal that matches as a whole token claims those characters.
//! Unclaimed characters become `Plain` spans.
//!
//! This is not a tokenizer: keywords inside strings or comments are
//! highlighted too.

use crate::Language;

/// The class of a highlighted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanClass {
    Plain,
    Keyword,
    StringLiteral,
    Tag,
    Punctuation,
}

/// A classified range of a line, in character (not byte) offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start character offset (inclusive)
    pub start: usize,
    /// End character offset (exclusive)
    pub end: usize,
    /// Class of the characters in the range
    pub class: SpanClass,
}

impl Span {
    pub fn new(start: usize, end: usize, class: SpanClass) -> Self {
        Self { start, end, class }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// One literal of a language table.
#[derive(Debug, Clone, Copy)]
struct Rule {
    literal: &'static str,
    class: SpanClass,
}

const fn kw(literal: &'static str) -> Rule {
    Rule {
        literal,
        class: SpanClass::Keyword,
    }
}

const fn lit(literal: &'static str, class: SpanClass) -> Rule {
    Rule { literal, class }
}

const GO: &[Rule] = &[
    kw("package"),
    kw("import"),
    kw("func"),
    kw("var"),
    kw("const"),
    kw("type"),
    kw("struct"),
    kw("interface"),
    kw("if"),
    kw("else"),
    kw("for"),
    kw("range"),
    kw("return"),
    kw("go"),
    kw("defer"),
    kw("select"),
    kw("case"),
    kw("default"),
    kw("switch"),
    kw("break"),
    kw("continue"),
    kw("fallthrough"),
    lit("\"", SpanClass::StringLiteral),
];

const PYTHON: &[Rule] = &[
    kw("def"),
    kw("class"),
    kw("if"),
    kw("else"),
    kw("elif"),
    kw("for"),
    kw("while"),
    kw("import"),
    kw("from"),
    kw("return"),
    kw("yield"),
    kw("try"),
    kw("except"),
    kw("finally"),
    kw("with"),
    kw("as"),
    kw("pass"),
    kw("break"),
    kw("continue"),
    kw("and"),
    kw("or"),
    kw("not"),
    kw("in"),
    kw("is"),
    kw("lambda"),
    kw("True"),
    kw("False"),
    kw("None"),
];

const JAVASCRIPT: &[Rule] = &[
    kw("function"),
    kw("var"),
    kw("let"),
    kw("const"),
    kw("if"),
    kw("else"),
    kw("for"),
    kw("while"),
    kw("return"),
    kw("class"),
    kw("extends"),
    kw("import"),
    kw("export"),
    kw("async"),
    kw("await"),
    kw("try"),
    kw("catch"),
    kw("finally"),
    kw("throw"),
    kw("new"),
    kw("this"),
    kw("true"),
    kw("false"),
    kw("null"),
    kw("undefined"),
];

const HTML: &[Rule] = &[lit("<", SpanClass::Tag), lit(">", SpanClass::Tag)];

const CSS: &[Rule] = &[
    kw("color"),
    kw("background"),
    kw("margin"),
    kw("padding"),
    kw("border"),
    kw("width"),
    kw("height"),
    kw("display"),
    kw("position"),
    kw("float"),
    kw("clear"),
    kw("font"),
    kw("text"),
    kw("line"),
    kw("letter"),
    kw("word"),
    kw("white"),
    kw("space"),
    kw("overflow"),
    kw("visibility"),
    kw("opacity"),
    kw("z-index"),
];

const JSON: &[Rule] = &[
    lit("\"", SpanClass::StringLiteral),
    lit(":", SpanClass::Punctuation),
    lit(",", SpanClass::Punctuation),
];

fn rules(language: Language) -> &'static [Rule] {
    match language {
        Language::Go => GO,
        Language::Python => PYTHON,
        Language::JavaScript => JAVASCRIPT,
        Language::Html => HTML,
        Language::Css => CSS,
        Language::Json => JSON,
        Language::PlainText => &[],
    }
}

fn is_ident(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl Rule {
    /// Returns the literal's length in chars if it matches at `at`.
    fn match_at(&self, chars: &[char], at: usize) -> Option<usize> {
        let mut len = 0;
        for expected in self.literal.chars() {
            if chars.get(at + len) != Some(&expected) {
                return None;
            }
            len += 1;
        }

        // Whole-token boundaries only apply to word-like edges.
        let first = self.literal.chars().next()?;
        let last = self.literal.chars().next_back()?;
        if is_ident(first) && at > 0 && is_ident(chars[at - 1]) {
            return None;
        }
        if is_ident(last) && chars.get(at + len).is_some_and(|&c| is_ident(c)) {
            return None;
        }
        Some(len)
    }
}

/// Highlights one line.
///
/// The returned spans are ordered, non-overlapping and cover
/// `0..line.chars().count()` exactly. An empty line yields no spans.
///
/// # Example
/// ```
/// use swift_syntax::{highlight, Language, Span, SpanClass};
///
/// let spans = highlight("<b>", Language::Html);
/// assert_eq!(spans[0], Span::new(0, 1, SpanClass::Tag));
/// assert_eq!(spans[1], Span::new(1, 2, SpanClass::Plain));
/// ```
pub fn highlight(line: &str, language: Language) -> Vec<Span> {
    let chars: Vec<char> = line.chars().collect();
    let table = rules(language);
    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;

    while i < chars.len() {
        let hit = table
            .iter()
            .find_map(|rule| rule.match_at(&chars, i).map(|len| (len, rule.class)));

        match hit {
            Some((len, class)) => {
                if plain_start < i {
                    spans.push(Span::new(plain_start, i, SpanClass::Plain));
                }
                spans.push(Span::new(i, i + len, class));
                i += len;
                plain_start = i;
            }
            None => i += 1,
        }
    }

    if plain_start < chars.len() {
        spans.push(Span::new(plain_start, chars.len(), SpanClass::Plain));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use SpanClass::*;

    fn classes(line: &str, language: Language) -> Vec<(String, SpanClass)> {
        let chars: Vec<char> = line.chars().collect();
        highlight(line, language)
            .into_iter()
            .map(|s| (chars[s.start..s.end].iter().collect(), s.class))
            .collect()
    }

    fn assert_partition(line: &str, spans: &[Span]) {
        let mut expected_start = 0;
        for span in spans {
            assert_eq!(span.start, expected_start, "gap or overlap in {spans:?}");
            assert!(!span.is_empty());
            expected_start = span.end;
        }
        assert_eq!(expected_start, line.chars().count());
    }

    #[test]
    fn test_json_line() {
        let got = classes(r#"{"a":1,"b":2}"#, Language::Json);
        let expected: Vec<(String, SpanClass)> = vec![
            ("{", Plain),
            ("\"", StringLiteral),
            ("a", Plain),
            ("\"", StringLiteral),
            (":", Punctuation),
            ("1", Plain),
            (",", Punctuation),
            ("\"", StringLiteral),
            ("b", Plain),
            ("\"", StringLiteral),
            (":", Punctuation),
            ("2}", Plain),
        ]
        .into_iter()
        .map(|(s, c)| (s.to_string(), c))
        .collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_go_keywords_are_whole_tokens() {
        let got = classes("func gopher() { return \"go\" }", Language::Go);
        assert_eq!(got[0], ("func".to_string(), Keyword));
        assert_eq!(got[1], (" gopher() { ".to_string(), Plain));
        assert_eq!(got[2], ("return".to_string(), Keyword));
        assert_eq!(got[4], ("\"".to_string(), StringLiteral));
        // Keywords inside string literals are still highlighted.
        assert_eq!(got[5], ("go".to_string(), Keyword));
    }

    #[test]
    fn test_first_rule_wins_at_a_position() {
        // "else" precedes "elif" in the table but cannot match "elif:".
        let got = classes("elif x is None:", Language::Python);
        assert_eq!(got[0], ("elif".to_string(), Keyword));
        assert_eq!(got[2], ("is".to_string(), Keyword));
        assert_eq!(got[4], ("None".to_string(), Keyword));
        // "in" inside "print" is not a token.
        assert!(classes("print(x)", Language::Python).iter().all(|(_, c)| *c == Plain));
    }

    #[test]
    fn test_css_hyphenated_literal() {
        let got = classes("z-index: 3; font-size: 2px", Language::Css);
        assert_eq!(got[0], ("z-index".to_string(), Keyword));
        assert_eq!(got[2], ("font".to_string(), Keyword));
        assert_eq!(got[3], ("-size: 2px".to_string(), Plain));
    }

    #[test]
    fn test_html_tags() {
        let got = classes("<p>if</p>", Language::Html);
        assert_eq!(got[0], ("<".to_string(), Tag));
        assert_eq!(got[1], ("p".to_string(), Plain));
        assert_eq!(got[2], (">".to_string(), Tag));
        assert_eq!(got[3], ("if".to_string(), Plain));
    }

    #[test]
    fn test_adjacent_literals_stay_separate_spans() {
        let spans = highlight("\"\"", Language::Json);
        assert_eq!(
            spans,
            vec![Span::new(0, 1, StringLiteral), Span::new(1, 2, StringLiteral)]
        );
    }

    #[test]
    fn test_plain_text_and_empty_lines() {
        assert!(highlight("", Language::Go).is_empty());
        assert_eq!(
            highlight("func main", Language::PlainText),
            vec![Span::new(0, 9, Plain)]
        );
    }

    #[test]
    fn test_offsets_are_char_based() {
        let spans = highlight("é if ü", Language::Python);
        assert_eq!(spans[1], Span::new(2, 4, Keyword));
        assert_partition("é if ü", &spans);
    }

    #[test]
    fn test_spans_partition_and_are_stable() {
        let samples = [
            ("package main; import \"fmt\"", Language::Go),
            ("const x = async () => await this.y;", Language::JavaScript),
            ("<div class=\"a\"><span></span></div>", Language::Html),
            ("body { background: white; margin: 0 }", Language::Css),
            ("[{\"k\": [1, 2, \"v\"]}]", Language::Json),
            ("    return   ", Language::Python),
        ];
        for (line, lang) in samples {
            let first = highlight(line, lang);
            assert_partition(line, &first);
            assert_eq!(first, highlight(line, lang));
        }
    }

    fn language() -> impl Strategy<Value = Language> {
        prop::sample::select(Language::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_spans_partition(line in any::<String>(), lang in language()) {
            let spans = highlight(&line, lang);
            assert_partition(&line, &spans);
            prop_assert_eq!(spans, highlight(&line, lang));
        }

        #[test]
        fn prop_spans_partition_code_like(
            line in "[a-z<>{}\\[\\]\"':;,. ()=/-]{0,80}",
            lang in language(),
        ) {
            let spans = highlight(&line, lang);
            assert_partition(&line, &spans);
            prop_assert_eq!(spans, highlight(&line, lang));
        }
    }
}
