//! Single-line path prompt.

use swift_core::Key;

/// What the prompt did with a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    /// Still typing
    Editing,
    /// Enter pressed; carries the text
    Submit(String),
    /// Escape pressed
    Cancel,
}

/// Text input shown in a box over the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptInput {
    title: &'static str,
    text: String,
}

impl PromptInput {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            text: String::new(),
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Applies a key to the input.
    pub fn handle(&mut self, key: Key) -> PromptEvent {
        match key {
            Key::Char(c) => self.text.push(c),
            Key::Backspace => {
                self.text.pop();
            }
            Key::Enter => return PromptEvent::Submit(std::mem::take(&mut self.text)),
            Key::Escape => return PromptEvent::Cancel,
            _ => {}
        }
        PromptEvent::Editing
    }
}
