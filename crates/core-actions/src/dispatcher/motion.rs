//! Motion sub-dispatch (cursor movement).
//!
//! Pure cursor movement: no buffer mutation, no history, no modified flag.
//! Column clamping follows the post-move line, so moving onto a shorter line
//! snaps the column left. The cursor may rest one past the last character in
//! every mode.

use super::DispatchResult;
use crate::MotionKind;
use core_model::View;
use core_state::EditorState;

pub(crate) fn handle_motion(
    kind: MotionKind,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    let before = view.cursor;
    let buffer = state.buffer();
    let page = view.viewport.height as isize;
    match kind {
        MotionKind::Left => view.move_by(buffer, 0, -1),
        MotionKind::Right => view.move_by(buffer, 0, 1),
        MotionKind::Up => view.move_by(buffer, -1, 0),
        MotionKind::Down => view.move_by(buffer, 1, 0),
        MotionKind::LineStart => view.line_start(),
        MotionKind::LineEnd => view.line_end(buffer),
        MotionKind::Top => view.jump_top(buffer),
        MotionKind::Bottom => view.jump_bottom(buffer),
        MotionKind::PageUp => view.move_by(buffer, -page, 0),
        MotionKind::PageDown => view.move_by(buffer, page, 0),
    }
    tracing::trace!(target: "actions.dispatch", op="motion", kind=?kind, line=before.line, col=before.col, to_line=view.cursor.line, to_col=view.cursor.col, "motion");
    if before != view.cursor {
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}
