//! The control loop.
//!
//! compose → draw → read key → route (prompt, or session) → repeat, until
//! the session asks to quit.

use std::path::PathBuf;

use swift_core::{Config, Editor, FileStore, FsStore, Key, Overlay, Viewport, compose};

use crate::TuiResult;
use crate::prompt::{PromptEvent, PromptInput};
use crate::render::{self, OverlayView, View};
use crate::terminal::{Backend, CrosstermBackend, TermEvent};
use crate::theme::Theme;

/// Launch options.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// File to open at startup
    pub file: Option<PathBuf>,
    pub config: Config,
}

/// Front-end state around one editor session.
pub struct App {
    editor: Editor,
    prompt: Option<PromptInput>,
    theme: Theme,
    viewport: Viewport,
}

impl App {
    /// Creates the session and opens the startup file, if any.
    pub fn new(flags: Flags, store: &mut dyn FileStore) -> TuiResult<Self> {
        let theme = Theme::resolve(&flags.config.ui.theme);
        let mut editor = Editor::new(flags.config)?;
        if let Some(path) = &flags.file {
            editor.open_initial(path, store);
        }
        Ok(Self {
            editor,
            prompt: None,
            theme,
            viewport: Viewport::default(),
        })
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Runs until the session quits or the backend fails.
    pub fn run<B: Backend>(&mut self, backend: &mut B, store: &mut dyn FileStore) -> TuiResult<()> {
        while !self.editor.should_quit() {
            self.draw(backend)?;
            match backend.read_event()? {
                TermEvent::Key(key) => self.handle_key(key, store),
                TermEvent::Resize => {}
            }
        }
        tracing::info!("session ended");
        Ok(())
    }

    /// Routes a key to the open prompt or to the session.
    pub fn handle_key(&mut self, key: Key, store: &mut dyn FileStore) {
        if let Some(prompt) = self.prompt.as_mut() {
            match prompt.handle(key) {
                PromptEvent::Editing => {}
                PromptEvent::Submit(text) => {
                    self.prompt = None;
                    self.editor.submit_prompt(&text, store);
                }
                PromptEvent::Cancel => {
                    self.prompt = None;
                    self.editor.cancel_prompt();
                }
            }
        } else {
            self.editor.handle_key(key, store);
        }
        self.sync_prompt();
    }

    /// Opens the input widget when the session asked for a path.
    fn sync_prompt(&mut self) {
        match self.editor.overlay() {
            Some(Overlay::Prompt(kind)) if self.prompt.is_none() => {
                self.prompt = Some(PromptInput::new(kind.title()));
            }
            Some(Overlay::Prompt(_)) => {}
            _ => self.prompt = None,
        }
    }

    fn draw<B: Backend>(&mut self, backend: &mut B) -> TuiResult<()> {
        let size = backend.size()?;
        self.viewport
            .resize(size.cols as usize, size.rows.saturating_sub(1) as usize);
        let frame = compose(&self.editor, &mut self.viewport);

        let overlay = match (&self.prompt, self.editor.overlay()) {
            (Some(prompt), _) => OverlayView::Prompt(prompt),
            (None, Some(Overlay::Help)) => OverlayView::Help,
            _ => OverlayView::None,
        };
        let view = View {
            frame: &frame,
            overlay,
            welcome: self.editor.is_welcome(),
            highlight_current_line: self.editor.config().ui.highlight_current_line,
        };
        render::draw(backend.output(), &view, &self.theme, size)?;
        Ok(())
    }
}

/// Runs the editor on the real terminal.
pub fn run(flags: Flags) -> TuiResult<()> {
    let mut store = FsStore;
    let mut app = App::new(flags, &mut store)?;

    let mut backend = CrosstermBackend::new();
    if let Err(e) = backend.init() {
        backend.deinit();
        return Err(e);
    }
    let result = app.run(&mut backend, &mut store);
    backend.deinit();
    result
}
