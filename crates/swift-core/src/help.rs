//! Fixed texts: the welcome banner and the help screen.

pub const WELCOME_BANNER: &str = "\
╔══════════════════════════════════════════════════════════════╗
║                      SWIFT Text Editor                       ║
║      Streamlined Workflow, Increased Focus Typography        ║
╠══════════════════════════════════════════════════════════════╣
║                                                              ║
║  Welcome to SWIFT, a small modal text editor.                ║
║                                                              ║
║  Get started:  press 'g' for help and commands               ║
║  Open a file:  swift filename.txt  (or 'o' + Enter)          ║
║  New file:     'n' + Enter                                   ║
║                                                              ║
║  Navigation mode: move around and type commands              ║
║  Insertion mode:  press 'i' to edit, Esc to go back          ║
║                                                              ║
╚══════════════════════════════════════════════════════════════╝";

pub const HELP_TEXT: &str = "\
SWIFT Help & Commands

MODES
  Navigation   move the cursor and type commands
  Insertion    type text (press 'i' from Navigation)
  Esc          leave Insertion, or discard a half-typed command

NAVIGATION (both modes)
  Arrow keys   move the cursor
  Home / End   jump to start / end of line

EDITING (Insertion only)
  Typing       insert text
  Backspace    delete before the cursor, joining lines
  Delete       delete under the cursor, joining lines
  Enter        split the line
  Tab          insert spaces

COMMANDS (Navigation, then Enter)
  w            save (asks for a name when untitled)
  q            quit
  wq           save, then quit
  o            open a file
  n            new empty file
  h            show this help

SHORTCUTS (Navigation)
  g            show this help
  Ctrl+Q       quit

Press any key to close.";

/// Status message shown while the welcome banner is up.
pub const WELCOME_STATUS: &str = "Welcome to SWIFT! Press 'g' for help";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_lines_have_equal_width() {
        let widths: Vec<usize> = WELCOME_BANNER.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{widths:?}");
    }

    #[test]
    fn test_help_lists_every_command() {
        for cmd in ["w ", "q ", "wq", "o ", "n ", "h ", "Ctrl+Q"] {
            assert!(HELP_TEXT.contains(cmd), "missing {cmd}");
        }
    }
}
