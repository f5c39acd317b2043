//! Cursor position type.
//!
//! `Position` is a struct rather than a `(usize, usize)` tuple so a row can
//! never be passed where a column is expected.

use serde::{Deserialize, Serialize};

/// A cursor position in the buffer.
///
/// Both fields are 0-indexed. `col` counts Unicode scalar values, not bytes,
/// and may equal the line length ("after the last character").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Line index (0-indexed)
    pub row: usize,
    /// Character index within the line (0-indexed)
    pub col: usize,
}

impl Position {
    /// Creates a new position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position at the start of the buffer.
    pub const ZERO: Position = Position { row: 0, col: 0 };
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.row.cmp(&other.row) {
            std::cmp::Ordering::Equal => self.col.cmp(&other.col),
            other => other,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 1-indexed for user-facing output
        write!(f, "Line {}, Col {}", self.row + 1, self.col + 1)
    }
}
