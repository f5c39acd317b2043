//! The editor session.
//!
//! `Editor` owns everything one editing session needs: the buffer, the mode
//! controller, the welcome guard, the open overlay and the status message.
//! It turns each [`Action`] decided by the [`ModeController`] into buffer
//! operations or file-store calls. File errors never escape: they become a
//! status message and leave the buffer untouched.

use std::io;
use std::path::{Path, PathBuf};

use swift_buffer::Buffer;
use swift_syntax::{Language, LanguageRegistry};

use crate::command::Command;
use crate::config::Config;
use crate::key::Key;
use crate::mode::{Action, Edit, Mode, ModeController, Motion};
use crate::store::FileStore;
use crate::CoreResult;

/// Modal surfaces drawn over the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Help screen; any key closes it
    Help,
    /// Path prompt owned by the front end
    Prompt(PromptKind),
}

/// What a path prompt is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    SaveAs,
    Open,
}

impl PromptKind {
    /// Returns the prompt title.
    pub fn title(&self) -> &'static str {
        match self {
            PromptKind::SaveAs => "Save as:",
            PromptKind::Open => "Open file:",
        }
    }
}

/// Result of a save request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Written to disk
    Saved,
    /// The write failed; see the status message
    Failed,
    /// Untitled buffer; the save-as prompt is open
    Prompted,
}

/// One editing session.
pub struct Editor {
    buffer: Buffer,
    controller: ModeController,
    languages: LanguageRegistry,
    language: Language,

    /// Set until the first load or new-file; blocks editing
    welcome: bool,

    overlay: Option<Overlay>,

    /// Transient message, cleared by the next key
    status: Option<String>,

    /// `wq` is waiting on the save-as prompt
    quit_after_save: bool,

    should_quit: bool,

    config: Config,
}

impl Editor {
    /// Creates a session on the welcome screen.
    pub fn new(config: Config) -> CoreResult<Self> {
        let languages = config.language_registry()?;
        Ok(Self {
            buffer: Buffer::with_config(config.buffer_config()),
            controller: ModeController::new(),
            languages,
            language: Language::PlainText,
            welcome: true,
            overlay: None,
            status: None,
            quit_after_save: false,
            should_quit: false,
            config,
        })
    }

    /// Opens the file named on the command line.
    ///
    /// A path that does not exist yet becomes an empty buffer bound to it.
    pub fn open_initial(&mut self, path: &Path, store: &mut dyn FileStore) {
        match store.load(path) {
            Ok(text) => self.apply_load(path, &text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "starting new file");
                self.buffer.replace_contents("", Some(path.to_path_buf()));
                self.after_replace();
                self.status = Some(format!("New file: {}", self.buffer.display_name()));
            }
            Err(e) => self.report_load_error(path, &e),
        }
    }

    // ==================== Key Handling ====================

    /// Processes one key event to completion.
    pub fn handle_key(&mut self, key: Key, store: &mut dyn FileStore) {
        self.status = None;

        match self.overlay {
            Some(Overlay::Help) => {
                self.overlay = None;
                return;
            }
            // Prompt text is edited by the front end.
            Some(Overlay::Prompt(_)) => return,
            None => {}
        }

        let action = self.controller.handle(key, self.welcome);
        self.apply(action, store);
    }

    fn apply(&mut self, action: Action, store: &mut dyn FileStore) {
        match action {
            Action::None
            | Action::EnteredInsertion
            | Action::LeftInsertion
            | Action::PendingCleared => {}
            Action::Move(motion) if !self.welcome => self.apply_motion(motion),
            Action::Edit(edit) if !self.welcome => self.apply_edit(edit),
            Action::Move(_) | Action::Edit(_) => {}
            Action::Pending(input) => self.status = Some(format!("Command: {input}")),
            Action::Command(command) => self.execute(command, store),
            Action::UnknownCommand(input) => {
                self.status = Some(format!("Unknown command: {input}"));
            }
            Action::ShowHelp => self.overlay = Some(Overlay::Help),
            Action::Quit => self.quit(),
        }
    }

    fn apply_motion(&mut self, motion: Motion) {
        let buffer = &mut self.buffer;
        match motion {
            Motion::Up => buffer.move_up(),
            Motion::Down => buffer.move_down(),
            Motion::Left => buffer.move_left(),
            Motion::Right => buffer.move_right(),
            Motion::LineStart => buffer.move_to_line_start(),
            Motion::LineEnd => buffer.move_to_line_end(),
        };
    }

    fn apply_edit(&mut self, edit: Edit) {
        let buffer = &mut self.buffer;
        match edit {
            Edit::Char(c) => buffer.insert_char(c),
            Edit::Newline => buffer.insert_newline(),
            Edit::Backspace => buffer.backspace(),
            Edit::Delete => buffer.delete_forward(),
            Edit::Tab => buffer.insert_tab(),
        };
    }

    // ==================== Commands ====================

    /// Runs a command from the command table.
    pub fn execute(&mut self, command: Command, store: &mut dyn FileStore) {
        tracing::debug!(command = command.display_name(), "execute");
        match command {
            Command::Quit => self.quit(),
            Command::Save => {
                self.save(store);
            }
            Command::SaveAndQuit => match self.save(store) {
                SaveOutcome::Saved => self.quit(),
                SaveOutcome::Prompted => self.quit_after_save = true,
                SaveOutcome::Failed => {}
            },
            Command::Open => self.overlay = Some(Overlay::Prompt(PromptKind::Open)),
            Command::NewFile => self.new_file(),
            Command::Help => self.overlay = Some(Overlay::Help),
        }
    }

    /// Saves to the buffer's path, or opens the save-as prompt.
    pub fn save(&mut self, store: &mut dyn FileStore) -> SaveOutcome {
        match self.buffer.path().map(Path::to_path_buf) {
            Some(path) => self.write_to(path, store),
            None => {
                self.overlay = Some(Overlay::Prompt(PromptKind::SaveAs));
                SaveOutcome::Prompted
            }
        }
    }

    fn write_to(&mut self, path: PathBuf, store: &mut dyn FileStore) -> SaveOutcome {
        match store.save(&path, &self.buffer.text()) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "saved");
                self.buffer.mark_saved(path);
                self.welcome = false;
                self.language = self.languages.detect(self.buffer.path());
                self.status = Some(format!("Saved: {}", self.buffer.display_name()));
                SaveOutcome::Saved
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "save failed");
                self.status = Some(format!("Error saving: {e}"));
                SaveOutcome::Failed
            }
        }
    }

    /// Reads `path` into the buffer.
    pub fn load(&mut self, path: &Path, store: &mut dyn FileStore) {
        match store.load(path) {
            Ok(text) => self.apply_load(path, &text),
            Err(e) => self.report_load_error(path, &e),
        }
    }

    fn apply_load(&mut self, path: &Path, text: &str) {
        tracing::info!(path = %path.display(), bytes = text.len(), "loaded");
        self.buffer.replace_contents(text, Some(path.to_path_buf()));
        self.after_replace();
    }

    fn report_load_error(&mut self, path: &Path, e: &io::Error) {
        tracing::warn!(path = %path.display(), error = %e, "load failed");
        self.status = Some(format!("Error: {e}"));
    }

    /// Replaces the buffer with an empty untitled one.
    pub fn new_file(&mut self) {
        self.buffer.reset_untitled();
        self.after_replace();
    }

    fn after_replace(&mut self) {
        self.welcome = false;
        self.controller.reset();
        self.language = self.languages.detect(self.buffer.path());
    }

    fn quit(&mut self) {
        tracing::info!(modified = self.buffer.is_modified(), "quit");
        self.should_quit = true;
    }

    // ==================== Prompts ====================

    /// Completes the open prompt with the text the user typed.
    ///
    /// Blank input is the same as cancelling. Anything else is used as the
    /// path verbatim.
    pub fn submit_prompt(&mut self, input: &str, store: &mut dyn FileStore) {
        let Some(Overlay::Prompt(kind)) = self.overlay else {
            return;
        };
        if input.trim().is_empty() {
            self.cancel_prompt();
            return;
        }

        self.overlay = None;
        let path = PathBuf::from(input);
        match kind {
            PromptKind::SaveAs => {
                let saved = self.write_to(path, store) == SaveOutcome::Saved;
                if std::mem::take(&mut self.quit_after_save) {
                    if saved {
                        self.quit();
                    } else {
                        tracing::info!("quit aborted, save failed");
                    }
                }
            }
            PromptKind::Open => self.load(&path, store),
        }
    }

    /// Closes the open prompt without doing anything.
    pub fn cancel_prompt(&mut self) {
        if !matches!(self.overlay, Some(Overlay::Prompt(_))) {
            return;
        }
        self.overlay = None;
        if std::mem::take(&mut self.quit_after_save) {
            self.status = Some("Save cancelled, not quitting".to_string());
        }
    }

    // ==================== Accessors ====================

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn mode(&self) -> Mode {
        self.controller.mode()
    }

    /// Returns the half-typed command.
    pub fn pending_command(&self) -> &str {
        self.controller.pending()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// True until a file is loaded or created.
    pub fn is_welcome(&self) -> bool {
        self.welcome
    }

    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
