//! The two-state modal controller.
//!
//! ```text
//!              'i' (not on welcome screen)
//!  Navigation ─────────────────────────────▶ Insertion
//!      ▲                                         │
//!      └──────────────── Escape ─────────────────┘
//! ```
//!
//! [`ModeController::handle`] is a pure transition function: it only updates
//! the mode and the command accumulator and returns the [`Action`] the
//! session should perform. Nothing here touches the buffer or the disk.

use crate::command::Command;
use crate::key::Key;

/// Editor modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigate and type commands
    #[default]
    Navigation,
    /// Type text into the buffer
    Insertion,
}

impl Mode {
    /// Returns the name shown in the status line.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Navigation => "Navigation",
            Mode::Insertion => "Insertion",
        }
    }
}

/// Cursor motions shared by both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Up,
    Down,
    Left,
    Right,
    LineStart,
    LineEnd,
}

/// Buffer edits available in Insertion mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Char(char),
    Newline,
    Backspace,
    Delete,
    Tab,
}

/// What the session should do in response to a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do
    None,
    Move(Motion),
    Edit(Edit),
    /// Mode switched to Insertion
    EnteredInsertion,
    /// Mode switched back to Navigation
    LeftInsertion,
    /// The accumulator grew; carries its current text
    Pending(String),
    /// The accumulator was discarded
    PendingCleared,
    /// A known command was dispatched
    Command(Command),
    /// Enter was pressed on an unknown command string
    UnknownCommand(String),
    /// `'g'` shortcut
    ShowHelp,
    /// Ctrl+Q
    Quit,
}

/// Mode state plus the Navigation-mode command accumulator.
#[derive(Debug, Clone, Default)]
pub struct ModeController {
    mode: Mode,
    accumulator: String,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the command typed so far.
    pub fn pending(&self) -> &str {
        &self.accumulator
    }

    /// Returns to Navigation with an empty accumulator.
    pub fn reset(&mut self) {
        self.mode = Mode::Navigation;
        self.accumulator.clear();
    }

    /// Runs one transition.
    ///
    /// `welcome` is the welcome-screen guard: it blocks entering Insertion.
    pub fn handle(&mut self, key: Key, welcome: bool) -> Action {
        if let Some(motion) = motion_for(key) {
            return Action::Move(motion);
        }
        match self.mode {
            Mode::Navigation => self.handle_navigation(key, welcome),
            Mode::Insertion => self.handle_insertion(key),
        }
    }

    fn handle_navigation(&mut self, key: Key, welcome: bool) -> Action {
        match key {
            Key::Enter => {
                let input = std::mem::take(&mut self.accumulator);
                tracing::debug!(command = %input, "dispatch");
                match Command::parse(&input) {
                    Some(command) => Action::Command(command),
                    None => Action::UnknownCommand(input),
                }
            }
            Key::Escape if !self.accumulator.is_empty() => {
                self.accumulator.clear();
                Action::PendingCleared
            }
            Key::CtrlQ => Action::Quit,
            Key::Char('i') if welcome => Action::None,
            Key::Char('i') => {
                self.mode = Mode::Insertion;
                self.accumulator.clear();
                tracing::debug!("entered insertion mode");
                Action::EnteredInsertion
            }
            Key::Char('g') => Action::ShowHelp,
            Key::Char(c) => {
                self.accumulator.push(c);
                Action::Pending(self.accumulator.clone())
            }
            _ => Action::None,
        }
    }

    fn handle_insertion(&mut self, key: Key) -> Action {
        match key {
            Key::Escape => {
                self.mode = Mode::Navigation;
                tracing::debug!("left insertion mode");
                Action::LeftInsertion
            }
            Key::Char(c) => Action::Edit(Edit::Char(c)),
            Key::Enter => Action::Edit(Edit::Newline),
            Key::Backspace => Action::Edit(Edit::Backspace),
            Key::Delete => Action::Edit(Edit::Delete),
            Key::Tab => Action::Edit(Edit::Tab),
            _ => Action::None,
        }
    }
}

fn motion_for(key: Key) -> Option<Motion> {
    match key {
        Key::Up => Some(Motion::Up),
        Key::Down => Some(Motion::Down),
        Key::Left => Some(Motion::Left),
        Key::Right => Some(Motion::Right),
        Key::Home => Some(Motion::LineStart),
        Key::End => Some(Motion::LineEnd),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(controller: &mut ModeController, script: &str) -> Vec<Action> {
        Key::sequence(script)
            .into_iter()
            .map(|key| controller.handle(key, false))
            .collect()
    }

    #[test]
    fn test_starts_in_navigation() {
        let controller = ModeController::new();
        assert_eq!(controller.mode(), Mode::Navigation);
        assert_eq!(controller.pending(), "");
    }

    #[test]
    fn test_insert_and_escape() {
        let mut controller = ModeController::new();
        assert_eq!(controller.handle(Key::Char('i'), false), Action::EnteredInsertion);
        assert_eq!(controller.mode(), Mode::Insertion);
        assert_eq!(controller.handle(Key::Escape, false), Action::LeftInsertion);
        assert_eq!(controller.mode(), Mode::Navigation);
    }

    #[test]
    fn test_welcome_blocks_insertion() {
        let mut controller = ModeController::new();
        assert_eq!(controller.handle(Key::Char('i'), true), Action::None);
        assert_eq!(controller.mode(), Mode::Navigation);
        assert_eq!(controller.handle(Key::Char('g'), true), Action::ShowHelp);
    }

    #[test]
    fn test_accumulator_dispatch() {
        let mut controller = ModeController::new();
        let actions = run(&mut controller, "wq<enter>");
        assert_eq!(
            actions,
            vec![
                Action::Pending("w".to_string()),
                Action::Pending("wq".to_string()),
                Action::Command(Command::SaveAndQuit),
            ]
        );
        assert_eq!(controller.pending(), "");
    }

    #[test]
    fn test_unknown_command_clears_accumulator() {
        let mut controller = ModeController::new();
        let actions = run(&mut controller, "xyz<enter>");
        assert_eq!(actions[3], Action::UnknownCommand("xyz".to_string()));
        assert_eq!(controller.pending(), "");
        assert_eq!(
            controller.handle(Key::Enter, false),
            Action::UnknownCommand(String::new())
        );
    }

    #[test]
    fn test_escape_discards_pending_command() {
        let mut controller = ModeController::new();
        run(&mut controller, "w");
        assert_eq!(controller.handle(Key::Escape, false), Action::PendingCleared);
        assert_eq!(controller.handle(Key::Escape, false), Action::None);
        assert_eq!(controller.pending(), "");
    }

    #[test]
    fn test_g_fires_immediately_and_does_not_accumulate() {
        let mut controller = ModeController::new();
        run(&mut controller, "w");
        assert_eq!(controller.handle(Key::Char('g'), false), Action::ShowHelp);
        assert_eq!(controller.pending(), "w");
    }

    #[test]
    fn test_navigation_never_edits() {
        let mut controller = ModeController::new();
        for key in [Key::Backspace, Key::Delete, Key::Tab] {
            assert_eq!(controller.handle(key, false), Action::None);
        }
        assert!(
            run(&mut controller, "abc")
                .iter()
                .all(|a| matches!(a, Action::Pending(_)))
        );
    }

    #[test]
    fn test_insertion_forwards_edits() {
        let mut controller = ModeController::new();
        controller.handle(Key::Char('i'), false);
        let actions = run(&mut controller, "q<enter><bs><del><tab>");
        assert_eq!(
            actions,
            vec![
                Action::Edit(Edit::Char('q')),
                Action::Edit(Edit::Newline),
                Action::Edit(Edit::Backspace),
                Action::Edit(Edit::Delete),
                Action::Edit(Edit::Tab),
            ]
        );
        // 'g' and 'i' are ordinary text in Insertion.
        assert_eq!(controller.handle(Key::Char('g'), false), Action::Edit(Edit::Char('g')));
        assert_eq!(controller.handle(Key::CtrlQ, false), Action::None);
    }

    #[test]
    fn test_motions_in_both_modes() {
        let mut controller = ModeController::new();
        assert_eq!(controller.handle(Key::Home, false), Action::Move(Motion::LineStart));
        controller.handle(Key::Char('i'), false);
        assert_eq!(controller.handle(Key::End, false), Action::Move(Motion::LineEnd));
        assert_eq!(controller.handle(Key::Up, false), Action::Move(Motion::Up));
    }

    #[test]
    fn test_ctrl_q_quits_from_navigation() {
        let mut controller = ModeController::new();
        assert_eq!(controller.handle(Key::CtrlQ, false), Action::Quit);
    }

    #[test]
    fn test_reset() {
        let mut controller = ModeController::new();
        run(&mut controller, "i");
        controller.reset();
        assert_eq!(controller.mode(), Mode::Navigation);
    }
}
