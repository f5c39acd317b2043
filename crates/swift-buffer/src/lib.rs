//! # SWIFT Buffer
//!
//! The text buffer and cursor model: an ordered sequence of lines, one
//! cursor, a modified flag and an optional file path.
//!
//! ## Guarantees
//!
//! - A buffer always has at least one line.
//! - The cursor is always in bounds after any operation.
//! - Columns count Unicode scalar values, so they line up with glyphs
//!   rather than UTF-8 bytes.

mod buffer;
mod cursor;

pub use buffer::{Buffer, BufferConfig, DEFAULT_TAB_WIDTH};
pub use cursor::Position;

/// Result type for buffer operations
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors that can occur during buffer operations
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("Row {row} is out of bounds (buffer has {len} lines)")]
    RowOutOfBounds { row: usize, len: usize },

    #[error("Column {col} is out of bounds for line {row} (length {len})")]
    ColumnOutOfBounds { row: usize, col: usize, len: usize },
}
