//! Semantic key events.
//!
//! The front end translates raw terminal input into [`Key`] values; the core
//! never sees escape sequences or modifier bitmasks.

/// A key press delivered by the key capture surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character
    Char(char),
    Enter,
    Tab,
    Backspace,
    Delete,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    /// Ctrl+Q
    CtrlQ,
}

impl Key {
    /// Parses a key name such as `"enter"`, `"ctrl+q"` or `"x"`.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "enter" | "return" => Some(Key::Enter),
            "tab" => Some(Key::Tab),
            "backspace" | "bs" => Some(Key::Backspace),
            "delete" | "del" => Some(Key::Delete),
            "escape" | "esc" => Some(Key::Escape),
            "up" => Some(Key::Up),
            "down" => Some(Key::Down),
            "left" => Some(Key::Left),
            "right" => Some(Key::Right),
            "home" => Some(Key::Home),
            "end" => Some(Key::End),
            "ctrl+q" | "ctrl-q" => Some(Key::CtrlQ),
            "space" => Some(Key::Char(' ')),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Key::Char(c)),
                    _ => None,
                }
            }
        }
    }

    /// Expands a script like `"wq<enter>"` into keys. Named keys go in
    /// angle brackets; everything else is typed character by character.
    pub fn sequence(script: &str) -> Vec<Key> {
        let mut keys = Vec::new();
        let mut rest = script;
        while let Some(c) = rest.chars().next() {
            if c == '<' {
                if let Some(end) = rest.find('>') {
                    if let Some(key) = Key::parse(&rest[1..end]) {
                        keys.push(key);
                        rest = &rest[end + 1..];
                        continue;
                    }
                }
            }
            keys.push(Key::Char(c));
            rest = &rest[c.len_utf8()..];
        }
        keys
    }
}
