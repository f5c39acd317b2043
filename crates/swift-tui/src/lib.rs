//! # Swift TUI
//!
//! Terminal front end: a crossterm surface, key translation, the path
//! prompt, the help overlay and the control loop.
//!
//! ## Architecture
//!
//! ```text
//!  Backend::read_event ──▶ input::translate ──▶ App ──▶ Editor (swift-core)
//!                                               │
//!  Backend::output ◀──── render::draw ◀──── compose(Editor) ─┘
//! ```
//!
//! Everything that touches the real terminal sits behind [`Backend`], so the
//! whole loop runs against a scripted backend in tests.

pub mod app;
pub mod input;
pub mod prompt;
pub mod render;
pub mod terminal;
pub mod theme;

pub use app::{App, Flags, run};
pub use terminal::{Backend, CrosstermBackend, Size, TermEvent};
pub use theme::Theme;

/// Result type for front-end operations
pub type TuiResult<T> = Result<T, TuiError>;

/// Errors that end the front end.
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] swift_core::CoreError),
}
