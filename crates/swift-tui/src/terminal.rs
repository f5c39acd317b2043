//! Terminal backend abstraction.
//!
//! - Raw mode and the alternate screen are entered before the first read.
//! - [`Backend::deinit`] always restores the terminal, also after errors and
//!   panics.
//! - Nothing here knows about the editor beyond [`Key`].

use std::io::{self, BufWriter, Stdout, Write};
use std::sync::Once;

use crossterm::{cursor, event, execute, terminal};
use swift_core::Key;

use crate::TuiResult;
use crate::input::translate_key_event;

/// Terminal size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub rows: u16,
    pub cols: u16,
}

/// Input the control loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermEvent {
    Key(Key),
    /// The terminal changed size; redraw
    Resize,
}

/// Terminal operations the control loop needs.
pub trait Backend {
    type Output: Write;

    /// Enters raw mode and the alternate screen.
    fn init(&mut self) -> TuiResult<()>;

    /// Restores the terminal. Safe to call more than once.
    fn deinit(&mut self);

    /// Blocks until a key press or resize arrives.
    fn read_event(&mut self) -> TuiResult<TermEvent>;

    /// Returns the current size.
    fn size(&self) -> TuiResult<Size>;

    /// Returns the writer frames are queued on.
    fn output(&mut self) -> &mut Self::Output;
}

/// Crossterm-based backend on stdout.
pub struct CrosstermBackend {
    out: BufWriter<Stdout>,
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self {
            out: BufWriter::new(io::stdout()),
            raw_mode_enabled: false,
            alternate_screen_enabled: false,
        }
    }
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for CrosstermBackend {
    type Output = BufWriter<Stdout>;

    fn init(&mut self) -> TuiResult<()> {
        install_panic_hook();

        execute!(self.out, terminal::EnterAlternateScreen)?;
        self.alternate_screen_enabled = true;

        terminal::enable_raw_mode()?;
        self.raw_mode_enabled = true;

        execute!(self.out, cursor::Hide)?;
        tracing::debug!("terminal initialized");
        Ok(())
    }

    fn deinit(&mut self) {
        let _ = execute!(self.out, cursor::Show);

        if self.raw_mode_enabled {
            let _ = terminal::disable_raw_mode();
            self.raw_mode_enabled = false;
        }

        if self.alternate_screen_enabled {
            let _ = execute!(self.out, terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
        }
        tracing::debug!("terminal restored");
    }

    fn read_event(&mut self) -> TuiResult<TermEvent> {
        loop {
            match event::read()? {
                event::Event::Key(key_event) => {
                    if let Some(key) = translate_key_event(key_event) {
                        return Ok(TermEvent::Key(key));
                    }
                }
                event::Event::Resize(cols, rows) => {
                    tracing::debug!(cols, rows, "resize");
                    return Ok(TermEvent::Resize);
                }
                _ => {}
            }
        }
    }

    fn size(&self) -> TuiResult<Size> {
        let (cols, rows) = terminal::size()?;
        Ok(Size { rows, cols })
    }

    fn output(&mut self) -> &mut Self::Output {
        &mut self.out
    }
}

/// Restores the terminal before the default panic report is printed.
fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = terminal::disable_raw_mode();
            let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
            tracing::error!(panic = %info, "panic");
            default_panic(info);
        }));
    });
}
