//! Paints composed frames with crossterm commands.
//!
//! Everything is queued on a `Write` and flushed once per frame, inside a
//! synchronized update so the terminal never shows a half-drawn screen.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate};
use swift_core::help::HELP_TEXT;
use swift_core::{Frame, FrameLine};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::prompt::PromptInput;
use crate::terminal::Size;
use crate::theme::{Color, Theme};

/// Minimum inner width of the prompt box.
const PROMPT_WIDTH: usize = 40;

/// What to draw over the buffer.
#[derive(Debug, Clone, Copy)]
pub enum OverlayView<'a> {
    None,
    Help,
    Prompt(&'a PromptInput),
}

/// Everything one redraw needs.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub frame: &'a Frame,
    pub overlay: OverlayView<'a>,
    /// Center the frame as the welcome banner
    pub welcome: bool,
    pub highlight_current_line: bool,
}

/// Draws one full screen.
pub fn draw<W: Write>(out: &mut W, view: &View<'_>, theme: &Theme, size: Size) -> io::Result<()> {
    queue!(out, BeginSynchronizedUpdate)?;

    let text_rows = size.rows.saturating_sub(1);
    if view.welcome {
        draw_banner(out, view.frame, theme, size, text_rows)?;
    } else {
        draw_text(out, view, theme, text_rows)?;
    }
    draw_status(out, &view.frame.status, theme, size)?;

    match view.overlay {
        OverlayView::None => {}
        OverlayView::Help => {
            let lines: Vec<&str> = HELP_TEXT.lines().collect();
            draw_box(out, &lines, 0, theme, size)?;
        }
        OverlayView::Prompt(prompt) => {
            let input = format!("{}▌", prompt.text());
            draw_box(out, &[prompt.title(), "", &input], PROMPT_WIDTH, theme, size)?;
        }
    }

    queue!(out, ResetColor, EndSynchronizedUpdate)?;
    out.flush()
}

fn draw_text<W: Write>(out: &mut W, view: &View<'_>, theme: &Theme, text_rows: u16) -> io::Result<()> {
    for y in 0..text_rows {
        let line = view.frame.lines.get(y as usize);
        let current = line.is_some_and(|l| l.current);
        let background = if current && view.highlight_current_line {
            theme.background.line_highlight
        } else {
            theme.background.primary
        };

        queue!(out, MoveTo(0, y), SetBackgroundColor(background.to_crossterm()))?;
        if let Some(line) = line {
            draw_line(out, line, current, theme)?;
        }
        queue!(out, Clear(ClearType::UntilNewLine))?;
    }
    Ok(())
}

fn draw_line<W: Write>(out: &mut W, line: &FrameLine, current: bool, theme: &Theme) -> io::Result<()> {
    if let Some(gutter) = &line.gutter {
        let color = if current {
            theme.foreground.gutter_current
        } else {
            theme.foreground.gutter
        };
        queue!(out, SetForegroundColor(color.to_crossterm()), Print(gutter))?;
    }
    for segment in &line.segments {
        let color = theme.segment_color(segment.style);
        queue!(
            out,
            SetForegroundColor(color.to_crossterm()),
            Print(&segment.text)
        )?;
    }
    Ok(())
}

fn draw_banner<W: Write>(
    out: &mut W,
    frame: &Frame,
    theme: &Theme,
    size: Size,
    text_rows: u16,
) -> io::Result<()> {
    queue!(out, SetBackgroundColor(theme.background.primary.to_crossterm()))?;
    for y in 0..text_rows {
        queue!(out, MoveTo(0, y), Clear(ClearType::UntilNewLine))?;
    }

    let width = frame.lines.iter().map(|l| l.text().width()).max().unwrap_or(0);
    let left = (size.cols as usize).saturating_sub(width) / 2;
    let top = (text_rows as usize).saturating_sub(frame.lines.len()) / 2;
    for (i, line) in frame.lines.iter().enumerate() {
        queue!(out, MoveTo(left as u16, (top + i) as u16))?;
        draw_line(out, line, false, theme)?;
    }
    Ok(())
}

fn draw_status<W: Write>(out: &mut W, status: &str, theme: &Theme, size: Size) -> io::Result<()> {
    if size.rows == 0 {
        return Ok(());
    }
    queue!(
        out,
        MoveTo(0, size.rows - 1),
        SetBackgroundColor(theme.background.status.to_crossterm()),
        SetForegroundColor(theme.foreground.status.to_crossterm()),
        Print(fit(status, size.cols as usize))
    )
}

/// Draws `lines` in a bordered box centered on the screen.
fn draw_box<W: Write>(
    out: &mut W,
    lines: &[&str],
    min_width: usize,
    theme: &Theme,
    size: Size,
) -> io::Result<()> {
    let cols = size.cols as usize;
    let inner = lines
        .iter()
        .map(|l| l.width())
        .max()
        .unwrap_or(0)
        .max(min_width)
        .min(cols.saturating_sub(4));
    let outer = inner + 4;
    let height = lines.len() + 2;
    let left = cols.saturating_sub(outer) / 2;
    let top = (size.rows as usize).saturating_sub(height) / 2;

    let border = theme.foreground.accent;
    let text = theme.foreground.primary;
    queue!(out, SetBackgroundColor(theme.background.overlay.to_crossterm()))?;

    let rule = "─".repeat(inner + 2);
    put(out, left, top, &format!("┌{rule}┐"), border)?;
    for (i, line) in lines.iter().enumerate() {
        let y = top + 1 + i;
        put(out, left, y, "│ ", border)?;
        put(out, left + 2, y, &fit(line, inner), text)?;
        put(out, left + 2 + inner, y, " │", border)?;
    }
    put(out, left, top + height - 1, &format!("└{rule}┘"), border)
}

fn put<W: Write>(out: &mut W, x: usize, y: usize, text: &str, color: Color) -> io::Result<()> {
    queue!(
        out,
        MoveTo(x as u16, y as u16),
        SetForegroundColor(color.to_crossterm()),
        Print(text)
    )
}

/// Truncates or pads `text` to exactly `width` terminal columns.
pub fn fit(text: &str, width: usize) -> String {
    let mut fitted = String::with_capacity(width);
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        fitted.push(c);
        used += w;
    }
    fitted.extend(std::iter::repeat_n(' ', width - used));
    fitted
}
