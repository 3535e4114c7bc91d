//! RenderEngine: paints a projected `Frame` onto the terminal.
//!
//! Every frame is a full repaint: each viewport row is cleared and redrawn,
//! then the status line. Content is clipped to the terminal width. Runs of
//! cells sharing the same flags are emitted as one styled print.

use crate::writer::{Style, Writer};
use crate::{CellFlags, Frame, FrameRow, GUTTER_WIDTH};
use anyhow::Result;
use core_text::width::char_width;

pub struct RenderEngine {
    width: u16,
    frames: u64,
}

impl RenderEngine {
    pub fn new(width: u16) -> Self {
        Self { width, frames: 0 }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    /// Paint `frame` to stdout.
    pub fn render(&mut self, frame: &Frame) -> Result<()> {
        let writer = self.paint(frame);
        let commands = writer.commands().len();
        writer.flush()?;
        self.frames += 1;
        tracing::trace!(target: "render.engine", frame = self.frames, commands, "frame_flushed");
        Ok(())
    }

    /// Translate `frame` into writer commands without touching the terminal.
    pub fn paint(&self, frame: &Frame) -> Writer {
        let mut writer = Writer::new();
        writer.hide_cursor();
        for (y, row) in frame.rows.iter().enumerate() {
            let y = clamp_row(y);
            writer.move_to(0, y);
            writer.clear_line();
            self.paint_row(&mut writer, row);
        }
        let status_y = clamp_row(frame.rows.len());
        writer.move_to(0, status_y);
        writer.clear_line();
        writer.styled(clip(&frame.status, self.width as usize), Style::Status);
        if frame.native_cursor {
            writer.move_to(frame.cursor.x.min(self.width.saturating_sub(1)), frame.cursor.y);
            writer.show_cursor();
        }
        writer
    }

    fn paint_row(&self, writer: &mut Writer, row: &FrameRow) {
        let width = self.width as usize;
        match row {
            FrameRow::Filler => writer.print(clip(crate::FILLER, width)),
            FrameRow::Text { cells, .. } => {
                writer.print(clip(&row.gutter(), width));
                let available = width.saturating_sub(GUTTER_WIDTH as usize);
                let mut x = 0usize;
                let mut run = String::new();
                let mut run_flags = CellFlags::empty();
                for cell in cells.iter().filter(|c| c.is_leader()) {
                    let w = cell.width as usize;
                    if x + w > available {
                        break;
                    }
                    if cell.flags != run_flags {
                        emit_run(writer, std::mem::take(&mut run), run_flags);
                        run_flags = cell.flags;
                    }
                    run.push_str(&cell.cluster);
                    x += w;
                }
                emit_run(writer, run, run_flags);
            }
        }
    }
}

fn emit_run(writer: &mut Writer, run: String, flags: CellFlags) {
    let cursor = flags.contains(CellFlags::CURSOR);
    let matched = flags.contains(CellFlags::MATCH);
    match (cursor, matched) {
        (false, false) => writer.print(run),
        (true, false) => writer.styled(run, Style::Reverse),
        (false, true) => writer.styled(run, Style::Match),
        (true, true) => writer.styled(run, Style::ReverseMatch),
    }
}

fn clamp_row(y: usize) -> u16 {
    u16::try_from(y).unwrap_or(u16::MAX)
}

/// Longest prefix of `s` fitting in `width` columns.
fn clip(s: &str, width: usize) -> String {
    let mut used = 0usize;
    let mut out = String::with_capacity(s.len().min(width * 4));
    for ch in s.chars() {
        let w = char_width(ch);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}
