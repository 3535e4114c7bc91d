//! Text edit action handling (insert/backspace/newline/tab/delete-under).
//!
//! Each discrete edit takes exactly one checkpoint before mutating, and only
//! when the edit will actually change the buffer. Insert runs are not
//! coalesced: every typed character is its own undo step.

use super::DispatchResult;
use crate::EditKind;
use core_model::View;
use core_state::{EditorState, Mode};

pub(crate) fn handle_edit(
    kind: EditKind,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    let expected = match kind {
        EditKind::DeleteUnder => Mode::Normal,
        _ => Mode::Insert,
    };
    if state.mode != expected {
        return DispatchResult::clean();
    }
    let before = view.cursor;
    let changed = match kind {
        EditKind::InsertChar(ch) => insert_char(state, view, ch),
        EditKind::InsertNewline => insert_newline(state, view),
        EditKind::InsertTab => insert_tab(state, view),
        EditKind::Backspace => backspace(state, view),
        EditKind::DeleteUnder => delete_under(state, view),
    };
    if !changed {
        return DispatchResult::clean();
    }
    state.modified = true;
    tracing::trace!(target: "actions.dispatch", op=?kind, line=before.line, col=before.col, to_line=view.cursor.line, to_col=view.cursor.col, "edit");
    DispatchResult::dirty()
}

fn insert_char(state: &mut EditorState, view: &mut View, ch: char) -> bool {
    let pos = view.cursor;
    state.checkpoint(pos);
    if !state.buffer_mut().insert_char(pos.line, pos.col, ch) {
        return false;
    }
    view.cursor.col += 1;
    true
}

fn insert_newline(state: &mut EditorState, view: &mut View) -> bool {
    let pos = view.cursor;
    state.checkpoint(pos);
    if !state.buffer_mut().split_line(pos.line, pos.col) {
        return false;
    }
    view.cursor.line += 1;
    view.cursor.col = 0;
    true
}

/// Pad with spaces up to the next tab stop; one checkpoint for the whole run.
fn insert_tab(state: &mut EditorState, view: &mut View) -> bool {
    let pos = view.cursor;
    let size = state.tab_size.max(1);
    let spaces = size - (pos.col % size);
    state.checkpoint(pos);
    let padding = " ".repeat(spaces);
    let inserted = state.buffer_mut().insert_str(pos.line, pos.col, &padding);
    view.cursor.col += inserted;
    inserted > 0
}

fn backspace(state: &mut EditorState, view: &mut View) -> bool {
    let pos = view.cursor;
    if pos.col > 0 {
        state.checkpoint(pos);
        if state.buffer_mut().delete_char(pos.line, pos.col - 1).is_none() {
            return false;
        }
        view.cursor.col -= 1;
        true
    } else if pos.line > 0 {
        state.checkpoint(pos);
        let Some(prev_len) = state.buffer_mut().join_with_previous(pos.line) else {
            return false;
        };
        view.cursor.line -= 1;
        view.cursor.col = prev_len;
        true
    } else {
        false
    }
}

fn delete_under(state: &mut EditorState, view: &mut View) -> bool {
    let pos = view.cursor;
    if pos.col >= state.buffer().line_len(pos.line) {
        return false;
    }
    state.checkpoint(pos);
    state.buffer_mut().delete_char(pos.line, pos.col).is_some()
}
