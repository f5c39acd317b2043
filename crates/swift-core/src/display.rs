//! Frame composition.
//!
//! [`compose`] turns the session into a [`Frame`]: plain structured text with
//! style annotations. The front end only has to paint it.

use swift_buffer::Position;
use swift_syntax::{Span, SpanClass, highlight};
use unicode_width::UnicodeWidthChar;

use crate::editor::Editor;
use crate::help::{WELCOME_BANNER, WELCOME_STATUS};

/// Editor identity shown at the start of the status line.
pub const EDITOR_NAME: &str = "SWIFT";

/// The visible window onto the buffer, in rows and terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// First visible row
    pub top: usize,
    /// First visible cell of each line
    pub left: usize,
    /// Text rows (status line excluded)
    pub height: usize,
    /// Columns including the gutter
    pub width: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            top: 0,
            left: 0,
            height,
            width,
        }
    }

    /// Updates the size after a terminal resize.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Scrolls the minimum amount that keeps `cursor` visible.
    ///
    /// `cursor.col` is a cell offset, not a character offset.
    pub fn follow(&mut self, cursor: Position, text_width: usize) {
        if self.height > 0 {
            if cursor.row < self.top {
                self.top = cursor.row;
            } else if cursor.row >= self.top + self.height {
                self.top = cursor.row + 1 - self.height;
            }
        }
        if text_width > 0 {
            if cursor.col < self.left {
                self.left = cursor.col;
            } else if cursor.col >= self.left + text_width {
                self.left = cursor.col + 1 - text_width;
            }
        }
    }
}

/// How a segment should be painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Syntax(SpanClass),
    /// The cursor glyph
    Cursor,
    /// Welcome banner text
    Banner,
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: Style,
}

impl Segment {
    fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// One screen row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameLine {
    /// Formatted line number, e.g. `"  7 | "`
    pub gutter: Option<String>,
    /// True on the cursor row
    pub current: bool,
    pub segments: Vec<Segment>,
}

impl FrameLine {
    /// Returns the row as plain text, gutter included.
    pub fn text(&self) -> String {
        let mut text = self.gutter.clone().unwrap_or_default();
        for segment in &self.segments {
            text.push_str(&segment.text);
        }
        text
    }
}

/// A complete composed screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub lines: Vec<FrameLine>,
    pub status: String,
}

/// Width of the line-number gutter for a buffer of `len_lines` lines.
pub fn gutter_width(len_lines: usize) -> usize {
    number_width(len_lines) + 3
}

fn number_width(len_lines: usize) -> usize {
    len_lines.to_string().len().max(3)
}

/// Composes the frame for the current session state, scrolling `viewport`
/// to follow the cursor.
pub fn compose(editor: &Editor, viewport: &mut Viewport) -> Frame {
    let status = status_line(editor);
    if editor.is_welcome() {
        *viewport = Viewport::new(viewport.width, viewport.height);
        return Frame {
            lines: banner_lines(viewport),
            status,
        };
    }

    let buffer = editor.buffer();
    let ui = &editor.config().ui;
    let cursor = buffer.cursor();
    let gutter = if ui.line_numbers {
        gutter_width(buffer.len_lines())
    } else {
        0
    };
    let text_width = viewport.width.saturating_sub(gutter);
    let cursor_cell = cell_width(buffer.line(cursor.row).chars().take(cursor.col));
    viewport.follow(Position::new(cursor.row, cursor_cell), text_width);

    let end = (viewport.top + viewport.height).min(buffer.len_lines());
    let lines = (viewport.top..end)
        .map(|row| {
            let line = buffer.line(row);
            let spans = highlight(&line, editor.language());
            let current = row == cursor.row;
            let glyph = current.then_some(cursor.col);
            let segments = split_at_cursor(&line, &spans, glyph, ui.cursor_glyph);
            FrameLine {
                gutter: ui.line_numbers.then(|| {
                    format!(
                        "{:>width$} | ",
                        row + 1,
                        width = number_width(buffer.len_lines())
                    )
                }),
                current,
                segments: clip(segments, viewport.left, text_width),
            }
        })
        .collect();

    Frame { lines, status }
}

/// Builds the status line text.
pub fn status_line(editor: &Editor) -> String {
    if let Some(message) = editor.status() {
        return format!("{EDITOR_NAME} | {message}");
    }
    if editor.is_welcome() {
        return format!("{EDITOR_NAME} | {WELCOME_STATUS}");
    }

    let buffer = editor.buffer();
    let mut status = format!(
        "{EDITOR_NAME} | {} | {} | {}",
        buffer.display_name(),
        editor.mode().name(),
        buffer.cursor()
    );
    if buffer.is_modified() {
        status.push_str(" | MODIFIED");
    }
    status
}

fn banner_lines(viewport: &Viewport) -> Vec<FrameLine> {
    WELCOME_BANNER
        .lines()
        .take(viewport.height)
        .map(|line| FrameLine {
            gutter: None,
            current: false,
            segments: vec![Segment::new(
                fit_cells(line, viewport.width),
                Style::Banner,
            )],
        })
        .collect()
}

/// Turns highlight spans into segments, inserting the cursor glyph at
/// character offset `cursor`. A span containing the cursor is split in two.
fn split_at_cursor(line: &str, spans: &[Span], cursor: Option<usize>, glyph: char) -> Vec<Segment> {
    let chars: Vec<char> = line.chars().collect();
    let mut segments = Vec::with_capacity(spans.len() + 2);
    let mut placed = cursor.is_none();

    let push = |segments: &mut Vec<Segment>, start: usize, end: usize, class: SpanClass| {
        if start < end {
            segments.push(Segment::new(
                chars[start..end].iter().collect::<String>(),
                Style::Syntax(class),
            ));
        }
    };

    for span in spans {
        let mut start = span.start;
        if let Some(col) = cursor {
            if !placed && col >= span.start && col < span.end {
                push(&mut segments, start, col, span.class);
                segments.push(Segment::new(glyph.to_string(), Style::Cursor));
                placed = true;
                start = col;
            }
        }
        push(&mut segments, start, span.end, span.class);
    }
    if !placed {
        segments.push(Segment::new(glyph.to_string(), Style::Cursor));
    }
    segments
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

fn cell_width(chars: impl Iterator<Item = char>) -> usize {
    chars.map(char_width).sum()
}

fn fit_cells(line: &str, width: usize) -> String {
    let mut used = 0;
    line.chars()
        .take_while(|&c| {
            used += char_width(c);
            used <= width
        })
        .collect()
}

/// Keeps the part of `segments` that falls in cells `left..left + width`.
///
/// A wide character cut by the left edge shows as spaces. One cut by the
/// right edge is dropped.
fn clip(segments: Vec<Segment>, left: usize, width: usize) -> Vec<Segment> {
    let right = left + width;
    let mut offset = 0;
    let mut clipped = Vec::new();
    for segment in segments {
        let mut text = String::new();
        for c in segment.text.chars() {
            let (start, end) = (offset, offset + char_width(c));
            offset = end;
            if start >= left && end <= right && start < right {
                text.push(c);
            } else if start < left && end > left {
                text.extend(std::iter::repeat_n(' ', end.min(right) - left));
            }
        }
        if !text.is_empty() {
            clipped.push(Segment::new(text, segment.style));
        }
    }
    clipped
}
