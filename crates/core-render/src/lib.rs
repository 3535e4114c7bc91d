//! View projection: editor state -> renderable `Frame`.
//!
//! `project` is a pure function of `EditorState` + `View`; it never mutates
//! either. Painting the frame to a terminal is a separate step
//! (`render_engine`), so everything a user sees can be asserted without one.
//!
//! Frame layout:
//! * one `FrameRow` per viewport row. Rows past the end of the buffer are
//!   filler rows drawn as `~`.
//! * text rows carry their 1-based line number and the line's cells with tabs
//!   expanded to the configured tab stop. Cells covered by an occurrence of the
//!   persisted search term are flagged `MATCH`.
//! * outside Normal mode the cell under the cursor is flagged `CURSOR` (drawn
//!   in reverse video). At the end of a line a synthetic blank cell carries the
//!   flag. In Normal mode the native terminal cursor is placed at `cursor`.
//! * the last screen row is the status line (see `status`).
//!
//! Wide characters occupy a leader cell followed by continuation cells so the
//! cell index of a row always equals its screen column.

use bitflags::bitflags;
use core_model::View;
use core_state::{EditorState, Mode};
use core_text::search::match_ranges;
use core_text::width::{char_width, display_col};

pub mod render_engine;
pub mod status;
pub mod writer;

pub use render_engine::RenderEngine;

/// Columns taken by the line number gutter (`{:>4}` plus one space).
pub const GUTTER_WIDTH: u16 = 5;
/// Glyph drawn on viewport rows past the end of the buffer.
pub const FILLER: &str = "~";

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CellFlags: u8 {
        const CURSOR = 0b0000_0001; // synthetic cursor (reverse video)
        const MATCH  = 0b0000_0010; // search term occurrence
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Printed text (leader cells only). Empty for continuation cells.
    pub cluster: String,
    /// Visual width in terminal columns. `0` designates a continuation cell.
    pub width: u8,
    pub flags: CellFlags,
}

impl Cell {
    #[inline]
    pub fn leader(cluster: &str, width: usize, flags: CellFlags) -> Self {
        Self {
            cluster: cluster.to_string(),
            width: width.clamp(1, u8::MAX as usize) as u8,
            flags,
        }
    }
    #[inline]
    pub fn continuation(flags: CellFlags) -> Self {
        Self {
            cluster: String::new(),
            width: 0,
            flags,
        }
    }
    #[inline]
    pub fn is_leader(&self) -> bool {
        self.width > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameRow {
    Text { number: usize, cells: Vec<Cell> },
    Filler,
}

impl FrameRow {
    /// Right-aligned line number plus separator; empty for filler rows.
    pub fn gutter(&self) -> String {
        match self {
            FrameRow::Text { number, .. } => format!("{number:>4} "),
            FrameRow::Filler => String::new(),
        }
    }

    /// Row content without styling (leader clusters concatenated).
    pub fn text(&self) -> String {
        match self {
            FrameRow::Text { cells, .. } => cells
                .iter()
                .filter(|c| c.is_leader())
                .map(|c| c.cluster.as_str())
                .collect(),
            FrameRow::Filler => FILLER.to_string(),
        }
    }

    /// Gutter and content as they appear on screen.
    pub fn plain(&self) -> String {
        format!("{}{}", self.gutter(), self.text())
    }

    pub fn cells(&self) -> &[Cell] {
        match self {
            FrameRow::Text { cells, .. } => cells,
            FrameRow::Filler => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenPos {
    pub x: u16,
    pub y: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub rows: Vec<FrameRow>,
    pub status: String,
    /// Cursor position on screen, gutter included.
    pub cursor: ScreenPos,
    /// True in Normal mode: the terminal cursor is shown instead of a `CURSOR` cell.
    pub native_cursor: bool,
}

impl Frame {
    /// Screen rows used: viewport rows plus the status line.
    pub fn height(&self) -> usize {
        self.rows.len() + 1
    }

    /// (row, cell index) of the synthetic cursor cell, if any.
    pub fn cursor_cell(&self) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(y, row)| {
            row.cells()
                .iter()
                .position(|c| c.flags.contains(CellFlags::CURSOR))
                .map(|x| (y, x))
        })
    }
}

/// Derive the frame for the current state. Pure; called once per processed event.
pub fn project(state: &EditorState, view: &View) -> Frame {
    let buffer = state.buffer();
    let tab_size = state.tab_size.max(1);
    let mark_cursor = state.mode != Mode::Normal;
    let term = state.search.term.as_str();

    let mut rows = Vec::with_capacity(view.viewport.height);
    for i in 0..view.viewport.height {
        let line_idx = view.viewport.offset_row + i;
        let Some(line) = buffer.line(line_idx) else {
            rows.push(FrameRow::Filler);
            continue;
        };
        let cursor_col = (mark_cursor && line_idx == view.cursor.line).then_some(view.cursor.col);
        rows.push(FrameRow::Text {
            number: line_idx + 1,
            cells: project_line(&line, term, tab_size, cursor_col),
        });
    }

    let cursor_line = buffer.line(view.cursor.line).unwrap_or_default();
    let cursor = ScreenPos {
        x: to_u16(GUTTER_WIDTH as usize + display_col(&cursor_line, view.cursor.col, tab_size)),
        y: to_u16(view.cursor.line.saturating_sub(view.viewport.offset_row)),
    };
    let ctx = status::StatusContext::from_state(state, view);
    let status = status::format_status(&status::compose_status(&ctx));
    tracing::trace!(target: "render.project", rows = rows.len(), offset = view.viewport.offset_row, x = cursor.x, y = cursor.y, "project");
    Frame {
        rows,
        status,
        cursor,
        native_cursor: !mark_cursor,
    }
}

fn to_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

fn project_line(line: &str, term: &str, tab_size: usize, cursor_col: Option<usize>) -> Vec<Cell> {
    let matches = match_ranges(line, term);
    let mut cells: Vec<Cell> = Vec::with_capacity(line.len() + 1);
    let mut column = 0usize;
    let mut char_count = 0usize;
    // Cursor flag owed to the next emitted cell (cursor sat on a zero-width control char).
    let mut carry_cursor = false;

    for (idx, ch) in line.chars().enumerate() {
        char_count += 1;
        let mut flags = CellFlags::empty();
        if matches.iter().any(|r| r.contains(&idx)) {
            flags |= CellFlags::MATCH;
        }
        if cursor_col == Some(idx) || carry_cursor {
            flags |= CellFlags::CURSOR;
            carry_cursor = false;
        }

        if ch == '\t' {
            let span = tab_size - column % tab_size;
            cells.push(Cell::leader(" ", 1, flags));
            let rest = flags - CellFlags::CURSOR;
            cells.extend((1..span).map(|_| Cell::leader(" ", 1, rest)));
            column += span;
            continue;
        }

        let w = char_width(ch);
        if w == 0 {
            if ch.is_control() {
                carry_cursor = flags.contains(CellFlags::CURSOR);
                continue;
            }
            // Combining mark: joins the preceding cluster.
            if let Some(prev) = cells.iter_mut().rev().find(|c| c.is_leader()) {
                prev.cluster.push(ch);
                prev.flags |= flags;
                continue;
            }
            cells.push(Cell::leader(&ch.to_string(), 1, flags));
            column += 1;
            continue;
        }

        cells.push(Cell::leader(&ch.to_string(), w, flags));
        cells.extend((1..w).map(|_| Cell::continuation(flags)));
        column += w;
    }

    if carry_cursor || cursor_col.is_some_and(|c| c >= char_count) {
        cells.push(Cell::leader(" ", 1, CellFlags::CURSOR));
    }
    cells
}
