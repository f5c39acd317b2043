//! Line buffer implementation backed by a rope.
//!
//! The buffer is an ordered sequence of lines plus one cursor. Lines are
//! stored in a single `Rope` separated by `\n`, so a buffer always has at
//! least one line: an empty rope is one empty line.
//!
//! ## Cursor invariant
//!
//! `0 <= row < len_lines()` and `0 <= col <= line_len(row)`. Every method
//! that changes the line count or a line length fixes the cursor before it
//! returns.

use ropey::Rope;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::{BufferError, BufferResult, Position};

/// Spaces inserted by [`Buffer::insert_tab`] unless configured otherwise.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// The text being edited, its cursor, and its file association.
#[derive(Debug, Clone)]
pub struct Buffer {
    /// Lines joined by `\n`
    rope: Rope,

    /// Insertion point
    cursor: Position,

    /// Whether the buffer has unsaved changes
    modified: bool,

    /// Associated file path (`None` for untitled buffers)
    path: Option<PathBuf>,

    /// Buffer-specific settings
    config: BufferConfig,
}

/// Configuration for buffer behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferConfig {
    /// Number of spaces a tab expands to
    pub tab_width: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl Buffer {
    /// Creates an untitled buffer holding one empty line.
    ///
    /// # Example
    /// ```
    /// use swift_buffer::Buffer;
    ///
    /// let buffer = Buffer::new();
    /// assert_eq!(buffer.len_lines(), 1);
    /// assert_eq!(buffer.line(0), "");
    /// ```
    pub fn new() -> Self {
        Self::with_config(BufferConfig::default())
    }

    /// Creates an empty buffer with custom configuration.
    pub fn with_config(config: BufferConfig) -> Self {
        Self {
            rope: Rope::new(),
            cursor: Position::ZERO,
            modified: false,
            path: None,
            config,
        }
    }

    /// Creates an untitled buffer from text. Lines are split on `\n` only.
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.rope = Rope::from_str(text);
        buffer
    }

    // ==================== Lifecycle ====================

    /// Replaces the whole content, as after loading `path`.
    ///
    /// The cursor moves to `(0, 0)` and the modified flag is cleared.
    pub fn replace_contents(&mut self, text: &str, path: Option<PathBuf>) {
        self.rope = Rope::from_str(text);
        self.cursor = Position::ZERO;
        self.modified = false;
        self.path = path;
    }

    /// Resets to a single empty untitled line.
    pub fn reset_untitled(&mut self) {
        self.replace_contents("", None);
    }

    /// Records a successful save to `path`.
    pub fn mark_saved(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
        self.modified = false;
    }

    // ==================== Text Access ====================

    /// Returns the lines joined with `\n` separators.
    pub fn text(&self) -> String {
        String::from(&self.rope)
    }

    /// Returns line `row` without its line feed.
    ///
    /// An out-of-range row yields an empty line.
    pub fn line(&self, row: usize) -> Cow<'_, str> {
        if row >= self.len_lines() {
            return Cow::Borrowed("");
        }
        let len = self.line_len(row);
        self.rope.line(row).slice(..len).into()
    }

    /// Iterates over all lines, without line feeds.
    pub fn lines(&self) -> impl Iterator<Item = Cow<'_, str>> + '_ {
        (0..self.len_lines()).map(move |row| self.line(row))
    }

    // ==================== Measurements ====================

    /// Returns the number of lines. Never zero.
    #[inline]
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Returns the number of characters in line `row`, excluding the line feed.
    pub fn line_len(&self, row: usize) -> usize {
        if row >= self.len_lines() {
            return 0;
        }
        let line = self.rope.line(row);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// Returns true when the buffer holds a single empty line.
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    // ==================== State Queries ====================

    /// Returns the cursor position.
    #[inline]
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns true if the buffer has unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Returns the associated file path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the basename of the file path, or `"Untitled"`.
    pub fn display_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Moves the cursor to an explicit position.
    pub fn set_cursor(&mut self, pos: Position) -> BufferResult<()> {
        if pos.row >= self.len_lines() {
            return Err(BufferError::RowOutOfBounds {
                row: pos.row,
                len: self.len_lines(),
            });
        }
        let len = self.line_len(pos.row);
        if pos.col > len {
            return Err(BufferError::ColumnOutOfBounds {
                row: pos.row,
                col: pos.col,
                len,
            });
        }
        self.cursor = pos;
        Ok(())
    }

    // ==================== Cursor Movement ====================

    /// Moves up one line, clamping the column. Returns false at the top.
    pub fn move_up(&mut self) -> bool {
        if self.cursor.row == 0 {
            return false;
        }
        self.cursor.row -= 1;
        self.clamp_col();
        true
    }

    /// Moves down one line, clamping the column. Returns false at the bottom.
    pub fn move_down(&mut self) -> bool {
        if self.cursor.row + 1 >= self.len_lines() {
            return false;
        }
        self.cursor.row += 1;
        self.clamp_col();
        true
    }

    /// Moves one character left, wrapping to the end of the previous line.
    pub fn move_left(&mut self) -> bool {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if self.cursor.row > 0 {
            self.cursor.row -= 1;
            self.cursor.col = self.line_len(self.cursor.row);
        } else {
            return false;
        }
        true
    }

    /// Moves one character right, wrapping to the start of the next line.
    pub fn move_right(&mut self) -> bool {
        if self.cursor.col < self.line_len(self.cursor.row) {
            self.cursor.col += 1;
        } else if self.cursor.row + 1 < self.len_lines() {
            self.cursor.row += 1;
            self.cursor.col = 0;
        } else {
            return false;
        }
        true
    }

    /// Moves to column 0.
    pub fn move_to_line_start(&mut self) -> bool {
        let moved = self.cursor.col != 0;
        self.cursor.col = 0;
        moved
    }

    /// Moves past the last character of the line.
    pub fn move_to_line_end(&mut self) -> bool {
        let end = self.line_len(self.cursor.row);
        let moved = self.cursor.col != end;
        self.cursor.col = end;
        moved
    }

    // ==================== Mutations ====================

    /// Inserts `c` at the cursor and advances past it.
    ///
    /// A `'\n'` is treated as [`Buffer::insert_newline`].
    pub fn insert_char(&mut self, c: char) -> bool {
        if c == '\n' {
            return self.insert_newline();
        }
        let idx = self.cursor_char_idx();
        self.rope.insert_char(idx, c);
        self.cursor.col += 1;
        self.modified = true;
        true
    }

    /// Splits the line at the cursor; the cursor moves to the new line.
    pub fn insert_newline(&mut self) -> bool {
        let idx = self.cursor_char_idx();
        self.rope.insert_char(idx, '\n');
        self.cursor = Position::new(self.cursor.row + 1, 0);
        self.modified = true;
        true
    }

    /// Inserts `tab_width` spaces. No tab character is ever stored.
    pub fn insert_tab(&mut self) -> bool {
        let width = self.config.tab_width;
        for _ in 0..width {
            self.insert_char(' ');
        }
        width > 0
    }

    /// Deletes the character before the cursor, joining lines at column 0.
    pub fn backspace(&mut self) -> bool {
        let Position { row, col } = self.cursor;
        if col == 0 && row == 0 {
            return false;
        }

        let idx = self.cursor_char_idx();
        if col > 0 {
            self.cursor.col -= 1;
        } else {
            let prev_len = self.line_len(row - 1);
            self.cursor = Position::new(row - 1, prev_len);
        }
        // At column 0 the character before the cursor is the previous
        // line's feed, so one removal covers both cases.
        self.rope.remove(idx - 1..idx);
        self.modified = true;
        true
    }

    /// Deletes the character under the cursor, joining the next line at the
    /// end of a line.
    pub fn delete_forward(&mut self) -> bool {
        let idx = self.cursor_char_idx();
        if idx >= self.rope.len_chars() {
            return false;
        }
        self.rope.remove(idx..idx + 1);
        self.modified = true;
        true
    }

    // ==================== Internals ====================

    fn cursor_char_idx(&self) -> usize {
        self.rope.line_to_char(self.cursor.row) + self.cursor.col
    }

    fn clamp_col(&mut self) {
        let len = self.line_len(self.cursor.row);
        if self.cursor.col > len {
            self.cursor.col = len;
        }
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for Buffer {
    fn from(s: &str) -> Self {
        Self::from_text(s)
    }
}

impl From<String> for Buffer {
    fn from(s: String) -> Self {
        Self::from_text(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lines(buffer: &Buffer) -> Vec<String> {
        buffer.lines().map(|l| l.into_owned()).collect()
    }

    fn at(text: &str, row: usize, col: usize) -> Buffer {
        let mut buffer = Buffer::from(text);
        buffer.set_cursor(Position::new(row, col)).unwrap();
        buffer
    }

    #[test]
    fn test_new_buffer_has_one_empty_line() {
        let buffer = Buffer::new();
        assert_eq!(lines(&buffer), vec![""]);
        assert_eq!(buffer.cursor(), Position::ZERO);
        assert!(!buffer.is_modified());
        assert_eq!(buffer.display_name(), "Untitled");
    }

    #[test]
    fn test_from_text_splits_on_line_feed_only() {
        let buffer = Buffer::from("a\r\nb\rc\n");
        assert_eq!(lines(&buffer), vec!["a\r", "b\rc", ""]);
        assert_eq!(buffer.line_len(0), 2);
        assert_eq!(buffer.text(), "a\r\nb\rc\n");
    }

    #[test]
    fn test_newline_at_end_of_line() {
        let mut buffer = at("abc", 0, 3);
        assert!(buffer.insert_newline());
        assert_eq!(lines(&buffer), vec!["abc", ""]);
        assert_eq!(buffer.cursor(), Position::new(1, 0));
        assert!(buffer.is_modified());
    }

    #[test]
    fn test_newline_splits_line() {
        let mut buffer = at("hello world", 0, 5);
        buffer.insert_newline();
        assert_eq!(lines(&buffer), vec!["hello", " world"]);
        assert_eq!(buffer.cursor(), Position::new(1, 0));
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut buffer = at("ab\ncd", 1, 0);
        assert!(buffer.backspace());
        assert_eq!(lines(&buffer), vec!["abcd"]);
        assert_eq!(buffer.cursor(), Position::new(0, 2));
    }

    #[test]
    fn test_backspace_at_origin_is_noop() {
        let mut buffer = at("abc", 0, 0);
        assert!(!buffer.backspace());
        assert_eq!(lines(&buffer), vec!["abc"]);
        assert!(!buffer.is_modified());
    }

    #[test]
    fn test_delete_forward() {
        let mut buffer = at("abc\ndef", 0, 1);
        assert!(buffer.delete_forward());
        assert_eq!(lines(&buffer), vec!["ac", "def"]);
        assert_eq!(buffer.cursor(), Position::new(0, 1));

        buffer.move_to_line_end();
        assert!(buffer.delete_forward());
        assert_eq!(lines(&buffer), vec!["acdef"]);
        assert_eq!(buffer.cursor(), Position::new(0, 2));

        buffer.move_to_line_end();
        assert!(!buffer.delete_forward());
    }

    #[test]
    fn test_vertical_movement_clamps_column() {
        let mut buffer = at("long line\nab\nlonger line", 0, 8);
        assert!(buffer.move_down());
        assert_eq!(buffer.cursor(), Position::new(1, 2));
        assert!(buffer.move_down());
        assert_eq!(buffer.cursor(), Position::new(2, 2));
        assert!(!buffer.move_down());
        buffer.move_to_line_end();
        buffer.move_up();
        assert_eq!(buffer.cursor(), Position::new(1, 2));
        buffer.move_up();
        assert!(!buffer.move_up());
        assert_eq!(buffer.cursor(), Position::new(0, 2));
    }

    #[test]
    fn test_horizontal_movement_wraps() {
        let mut buffer = at("ab\ncd", 1, 0);
        assert!(buffer.move_left());
        assert_eq!(buffer.cursor(), Position::new(0, 2));
        assert!(buffer.move_right());
        assert_eq!(buffer.cursor(), Position::new(1, 0));

        buffer.move_to_line_end();
        assert!(!buffer.move_right());
        buffer.set_cursor(Position::ZERO).unwrap();
        assert!(!buffer.move_left());
    }

    #[test]
    fn test_insert_tab_uses_spaces() {
        let mut buffer = Buffer::new();
        buffer.insert_tab();
        assert_eq!(buffer.line(0), "    ");
        assert_eq!(buffer.cursor().col, 4);
        assert!(!buffer.text().contains('\t'));

        let mut narrow = Buffer::with_config(BufferConfig { tab_width: 2 });
        narrow.insert_tab();
        assert_eq!(narrow.line(0), "  ");
    }

    #[test]
    fn test_unicode_columns_are_scalar_positions() {
        let mut buffer = Buffer::from("héllo wörld");
        buffer.set_cursor(Position::new(0, 2)).unwrap();
        buffer.insert_char('✓');
        assert_eq!(buffer.line(0), "hé✓llo wörld");
        assert_eq!(buffer.line_len(0), 12);
        buffer.backspace();
        buffer.backspace();
        assert_eq!(buffer.line(0), "hllo wörld");
        assert_eq!(buffer.cursor(), Position::new(0, 1));
    }

    #[test]
    fn test_insert_char_newline_routes_to_split() {
        let mut buffer = at("ab", 0, 1);
        buffer.insert_char('\n');
        assert_eq!(lines(&buffer), vec!["a", "b"]);
        assert_eq!(buffer.cursor(), Position::new(1, 0));
    }

    #[test]
    fn test_replace_contents_resets_state() {
        let mut buffer = at("abc", 0, 2);
        buffer.insert_char('x');
        buffer.replace_contents("one\ntwo", Some(PathBuf::from("/tmp/notes.txt")));
        assert_eq!(lines(&buffer), vec!["one", "two"]);
        assert_eq!(buffer.cursor(), Position::ZERO);
        assert!(!buffer.is_modified());
        assert_eq!(buffer.display_name(), "notes.txt");

        buffer.reset_untitled();
        assert_eq!(lines(&buffer), vec![""]);
        assert!(buffer.path().is_none());
    }

    #[test]
    fn test_set_cursor_rejects_out_of_bounds() {
        let mut buffer = Buffer::from("ab\nc");
        assert!(matches!(
            buffer.set_cursor(Position::new(2, 0)),
            Err(BufferError::RowOutOfBounds { row: 2, len: 2 })
        ));
        assert!(matches!(
            buffer.set_cursor(Position::new(1, 2)),
            Err(BufferError::ColumnOutOfBounds { row: 1, col: 2, len: 1 })
        ));
        assert!(buffer.set_cursor(Position::new(0, 2)).is_ok());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Up,
        Down,
        Left,
        Right,
        Home,
        End,
        Char(char),
        Newline,
        Backspace,
        Delete,
        Tab,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Up),
            Just(Op::Down),
            Just(Op::Left),
            Just(Op::Right),
            Just(Op::Home),
            Just(Op::End),
            prop::char::range('a', 'e').prop_map(Op::Char),
            Just(Op::Char('é')),
            Just(Op::Newline),
            Just(Op::Backspace),
            Just(Op::Delete),
            Just(Op::Tab),
        ]
    }

    fn apply(buffer: &mut Buffer, op: &Op) {
        match op {
            Op::Up => {
                buffer.move_up();
            }
            Op::Down => {
                buffer.move_down();
            }
            Op::Left => {
                buffer.move_left();
            }
            Op::Right => {
                buffer.move_right();
            }
            Op::Home => {
                buffer.move_to_line_start();
            }
            Op::End => {
                buffer.move_to_line_end();
            }
            Op::Char(c) => {
                buffer.insert_char(*c);
            }
            Op::Newline => {
                buffer.insert_newline();
            }
            Op::Backspace => {
                buffer.backspace();
            }
            Op::Delete => {
                buffer.delete_forward();
            }
            Op::Tab => {
                buffer.insert_tab();
            }
        }
    }

    /// Logical offset of the cursor in the joined text.
    fn offset(buffer: &Buffer) -> usize {
        let pos = buffer.cursor();
        (0..pos.row).map(|r| buffer.line_len(r) + 1).sum::<usize>() + pos.col
    }

    proptest! {
        #[test]
        fn prop_cursor_stays_in_bounds(ops in prop::collection::vec(op(), 0..200)) {
            let mut buffer = Buffer::new();
            for op in &ops {
                apply(&mut buffer, op);
                let pos = buffer.cursor();
                prop_assert!(buffer.len_lines() >= 1);
                prop_assert!(pos.row < buffer.len_lines());
                prop_assert!(pos.col <= buffer.line_len(pos.row));
            }
        }

        #[test]
        fn prop_inserted_chars_extend_line(text in "[a-z✓ ]{0,40}") {
            let mut buffer = Buffer::new();
            for c in text.chars() {
                buffer.insert_char(c);
                prop_assert!(buffer.cursor().col <= buffer.line_len(0));
            }
            prop_assert_eq!(buffer.line_len(0), text.chars().count());
            prop_assert_eq!(buffer.cursor().col, text.chars().count());
            prop_assert_eq!(buffer.line(0), text.as_str());
        }

        #[test]
        fn prop_newline_then_backspace_round_trips(text in "[a-zé]{0,20}", split in 0usize..21) {
            let split = split.min(text.chars().count());
            let mut buffer = Buffer::from(text.as_str());
            buffer.set_cursor(Position::new(0, split)).unwrap();

            buffer.insert_newline();
            buffer.backspace();

            prop_assert_eq!(buffer.len_lines(), 1);
            prop_assert_eq!(buffer.line(0), text.as_str());
            prop_assert_eq!(buffer.cursor(), Position::new(0, split));
        }

        #[test]
        fn prop_left_then_right_keeps_offset(ops in prop::collection::vec(op(), 0..60)) {
            let mut buffer = Buffer::from("first\n\nthird line");
            for op in &ops {
                apply(&mut buffer, op);
            }
            let before = offset(&buffer);
            if buffer.move_left() {
                buffer.move_right();
                prop_assert_eq!(offset(&buffer), before);
            }
        }
    }
}
