//! Cursor and viewport model.
//!
//! A `View` owns presentation state that the editing engine does not: the
//! cursor and the vertical viewport. `EditorState` stays the source of truth
//! for buffer content; the view is re-clamped against it after every change.
//!
//! Core invariants (must hold after every public call):
//! * `cursor.line < buffer.line_count()`.
//! * `cursor.col <= line_len(cursor.line)` (col may sit one past the last char).
//! * When `viewport.height > 0`:
//!   `offset_row <= cursor.line <= offset_row + height - 1`.

use core_state::EditorState;
use core_text::{Buffer, Position};

/// Vertical scroll window. `height` is supplied by the terminal shell
/// (rows minus reserved status rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub offset_row: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Default)]
pub struct View {
    pub cursor: Position,
    pub viewport: Viewport,
}

/// Compute the first visible line that keeps `cursor_line` inside a window of
/// `height` rows starting at `first`.
///
/// Returns Some(new_first) when a scroll is needed, None when the cursor is
/// already visible or the window has no rows.
pub fn compute_scroll_intent(first: usize, cursor_line: usize, height: usize) -> Option<usize> {
    if height == 0 {
        return None;
    }
    if cursor_line < first {
        Some(cursor_line)
    } else if cursor_line >= first + height {
        Some(cursor_line + 1 - height)
    } else {
        None
    }
}

impl View {
    pub fn new(cursor: Position, height: usize) -> Self {
        Self {
            cursor,
            viewport: Viewport {
                offset_row: 0,
                height,
            },
        }
    }

    /// Clamp the cursor into the buffer: row first, then column against the
    /// post-clamp line.
    pub fn clamp(&mut self, buffer: &Buffer) {
        self.cursor
            .clamp_to(buffer.line_count(), |l| buffer.line_len(l));
    }

    /// Apply a signed delta, clamp against `buffer`, then scroll to the cursor.
    pub fn move_by(&mut self, buffer: &Buffer, d_row: isize, d_col: isize) {
        self.cursor.line = self.cursor.line.saturating_add_signed(d_row);
        self.cursor.col = self.cursor.col.saturating_add_signed(d_col);
        self.clamp(buffer);
        self.adjust_viewport(self.viewport.height);
    }

    /// Row 0; the column is kept where the first line allows it.
    pub fn jump_top(&mut self, buffer: &Buffer) {
        self.cursor.line = 0;
        self.clamp(buffer);
        self.adjust_viewport(self.viewport.height);
    }

    /// Last row; the column is kept where that line allows it.
    pub fn jump_bottom(&mut self, buffer: &Buffer) {
        self.cursor.line = buffer.line_count().saturating_sub(1);
        self.clamp(buffer);
        self.adjust_viewport(self.viewport.height);
    }

    pub fn line_start(&mut self) {
        self.cursor.col = 0;
    }

    pub fn line_end(&mut self, buffer: &Buffer) {
        self.cursor.col = buffer.line_len(self.cursor.line);
    }

    /// Record `height` and restore the scroll invariant. Returns true if the
    /// offset changed.
    pub fn adjust_viewport(&mut self, height: usize) -> bool {
        self.viewport.height = height;
        match compute_scroll_intent(self.viewport.offset_row, self.cursor.line, height) {
            Some(new_first) => {
                tracing::trace!(target: "model.viewport", from = self.viewport.offset_row, to = new_first, "scroll");
                self.viewport.offset_row = new_first;
                true
            }
            None => false,
        }
    }

    /// Clamp then scroll; called after every edit that can change line count.
    pub fn settle(&mut self, buffer: &Buffer) {
        self.clamp(buffer);
        self.adjust_viewport(self.viewport.height);
    }
}

/// Owns the editing state and its single view.
pub struct EditorModel {
    state: EditorState,
    view: View,
}

impl EditorModel {
    pub fn new(state: EditorState) -> Self {
        Self {
            state,
            view: View::default(),
        }
    }
    /// Test/helper constructor allowing an already prepared view to be injected.
    pub fn with_view(mut view: View, state: EditorState) -> Self {
        view.settle(state.buffer());
        Self { state, view }
    }
    pub fn state(&self) -> &EditorState {
        &self.state
    }
    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }
    pub fn view(&self) -> &View {
        &self.view
    }
    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    /// Disjoint mutable borrows of the state and the view for handlers that
    /// mutate both.
    pub fn split_state_and_view(&mut self) -> (&mut EditorState, &mut View) {
        (&mut self.state, &mut self.view)
    }

    /// Apply a new text height (terminal resize) and re-scroll.
    pub fn resize(&mut self, height: usize) {
        self.view.adjust_viewport(height);
    }
}
