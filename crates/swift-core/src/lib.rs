//! # Swift Core
//!
//! Modal editing logic, the editor session and frame composition.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                        Editor                           │
//! │  ┌────────────────┐ ┌──────────┐ ┌───────────────────┐  │
//! │  │ ModeController │ │  Config  │ │ Overlay / Status  │  │
//! │  └───────┬────────┘ └──────────┘ └───────────────────┘  │
//! │          │ Action                                       │
//! │  ┌───────┴────────┐            ┌──────────────────────┐ │
//! │  │     Buffer     │◀──────────▶│ FileStore (load/save)│ │
//! │  └────────────────┘            └──────────────────────┘ │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ compose()
//!                     ┌──────┴──────┐
//!                     │    Frame    │  gutter, spans, cursor, status
//!                     └─────────────┘
//! ```
//!
//! Key events flow into [`Editor::handle_key`], the [`ModeController`]
//! decides an [`Action`], and the editor applies it. [`display::compose`]
//! renders the result without touching the terminal.

pub mod command;
pub mod config;
pub mod display;
pub mod editor;
pub mod help;
pub mod key;
pub mod mode;
pub mod store;

pub use command::Command;
pub use config::{Config, ConfigError};
pub use display::{Frame, FrameLine, Segment, Style, Viewport, compose};
pub use editor::{Editor, Overlay, PromptKind, SaveOutcome};
pub use key::Key;
pub use mode::{Action, Mode, ModeController};
pub use store::{FileStore, FsStore};

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while setting up a session.
///
/// File errors during editing are not here: the session turns them into
/// status messages.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Syntax error: {0}")]
    Syntax(#[from] swift_syntax::SyntaxError),
}
