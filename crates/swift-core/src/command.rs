//! The fixed command table dispatched from Navigation mode.

/// Commands reachable through the command accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `q`
    Quit,
    /// `w`
    Save,
    /// `wq`
    SaveAndQuit,
    /// `o`
    Open,
    /// `n`
    NewFile,
    /// `h`
    Help,
}

impl Command {
    /// Looks up an accumulated command string. Matching is exact.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "q" => Some(Command::Quit),
            "w" => Some(Command::Save),
            "wq" => Some(Command::SaveAndQuit),
            "o" => Some(Command::Open),
            "n" => Some(Command::NewFile),
            "h" => Some(Command::Help),
            _ => None,
        }
    }

    /// Returns the command's display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Command::Quit => "Quit",
            Command::Save => "Save",
            Command::SaveAndQuit => "Save and Quit",
            Command::Open => "Open File",
            Command::NewFile => "New File",
            Command::Help => "Help",
        }
    }
}
