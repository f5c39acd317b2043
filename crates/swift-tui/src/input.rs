//! Crossterm key events to editor keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use swift_core::Key;

/// Translates a crossterm key event.
///
/// Returns `None` for releases, repeats and keys the editor has no use for.
pub fn translate_key_event(event: KeyEvent) -> Option<Key> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);

    match event.code {
        KeyCode::Char(c) if ctrl => c.eq_ignore_ascii_case(&'q').then_some(Key::CtrlQ),
        // Some terminals report Enter as a character.
        KeyCode::Char('\r' | '\n') => Some(Key::Enter),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        _ => None,
    }
}
