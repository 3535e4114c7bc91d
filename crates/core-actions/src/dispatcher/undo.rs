//! Undo / Redo handling.
//!
//! Delegates to the snapshot history inside `EditorState`; restores the
//! cursor stored with the snapshot and reports the outcome in the status line.

use super::DispatchResult;
use core_model::View;
use core_state::EditorState;

pub(crate) fn handle_undo(state: &mut EditorState, view: &mut View) -> DispatchResult {
    if state.undo(&mut view.cursor) {
        tracing::trace!(target: "actions.dispatch", op="undo", undo_depth=state.undo_depth(), redo_depth=state.redo_depth(), "undo");
        state.set_status("Undo performed");
    } else {
        state.set_status("Nothing to undo");
    }
    DispatchResult::dirty()
}

pub(crate) fn handle_redo(state: &mut EditorState, view: &mut View) -> DispatchResult {
    if state.redo(&mut view.cursor) {
        tracing::trace!(target: "actions.dispatch", op="redo", undo_depth=state.undo_depth(), redo_depth=state.redo_depth(), "redo");
        state.set_status("Redo performed");
    } else {
        state.set_status("Nothing to redo");
    }
    DispatchResult::dirty()
}
