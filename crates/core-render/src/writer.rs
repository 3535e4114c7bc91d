//! Terminal writer: batches primitive terminal operations for one frame and
//! emits them through crossterm in a single flush.
//!
//! Invariants:
//! * Commands preserve ordering; nothing is written before `flush`.
//! * All positions are absolute with a (0,0) origin; callers clip to the
//!   terminal size.
//! * A writer is short-lived: one per frame.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{Write, stdout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Synthetic cursor.
    Reverse,
    /// Search match: black on yellow.
    Match,
    /// Search match under the synthetic cursor.
    ReverseMatch,
    /// Status line: white on purple.
    Status,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveTo(u16, u16),
    ClearLine,
    Print(String),
    Styled(String, Style),
    HideCursor,
    ShowCursor,
}

#[derive(Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }
    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }
    /// Clears the row the cursor is on; callers precede it with `move_to(0, y)`.
    pub fn clear_line(&mut self) {
        self.cmds.push(Command::ClearLine);
    }
    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }
    pub fn styled<S: Into<String>>(&mut self, s: S, style: Style) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Styled(s, style));
        }
    }
    pub fn hide_cursor(&mut self) {
        self.cmds.push(Command::HideCursor);
    }
    pub fn show_cursor(&mut self) {
        self.cmds.push(Command::ShowCursor);
    }
    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    pub fn flush(self) -> Result<()> {
        let mut out = stdout();
        self.flush_to(&mut out)
    }

    pub fn flush_to<W: Write>(self, out: &mut W) -> Result<()> {
        for c in self.cmds {
            match c {
                Command::MoveTo(x, y) => queue!(out, MoveTo(x, y))?,
                Command::ClearLine => queue!(out, Clear(ClearType::CurrentLine))?,
                Command::Print(s) => queue!(out, Print(s))?,
                Command::Styled(s, style) => queue_styled(out, s, style)?,
                Command::HideCursor => queue!(out, Hide)?,
                Command::ShowCursor => queue!(out, Show)?,
            }
        }
        out.flush()?;
        Ok(())
    }
}

fn queue_styled<W: Write>(out: &mut W, s: String, style: Style) -> std::io::Result<()> {
    match style {
        Style::Reverse => queue!(
            out,
            SetAttribute(Attribute::Reverse),
            Print(s),
            SetAttribute(Attribute::Reset)
        ),
        Style::Match => queue!(
            out,
            SetForegroundColor(Color::Black),
            SetBackgroundColor(Color::Yellow),
            Print(s),
            ResetColor
        ),
        Style::ReverseMatch => queue!(
            out,
            SetForegroundColor(Color::Black),
            SetBackgroundColor(Color::Yellow),
            SetAttribute(Attribute::Reverse),
            Print(s),
            SetAttribute(Attribute::Reset),
            ResetColor
        ),
        Style::Status => queue!(
            out,
            SetForegroundColor(Color::White),
            SetBackgroundColor(Color::AnsiValue(57)),
            Print(s),
            ResetColor
        ),
    }
}
