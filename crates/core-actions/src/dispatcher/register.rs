//! Line-level register operations: delete (`d`), yank (`y`), paste (`p`).
//!
//! The register is a single slot. Delete and yank overwrite it; paste reads
//! it without clearing. The sole remaining line is copied on `d` but never
//! removed.

use super::DispatchResult;
use core_model::View;
use core_state::EditorState;

pub(crate) fn handle_delete_line(state: &mut EditorState, view: &mut View) -> DispatchResult {
    let row = view.cursor.line;
    let Some(text) = state.buffer().line(row) else {
        return DispatchResult::clean();
    };
    state.register.store(text);
    if state.buffer().line_count() <= 1 {
        tracing::trace!(target: "actions.dispatch", op="delete_line", row, "sole_line_kept");
        return DispatchResult::clean();
    }
    state.checkpoint(view.cursor);
    if state.buffer_mut().delete_line(row).is_none() {
        return DispatchResult::clean();
    }
    view.clamp(state.buffer());
    state.modified = true;
    state.set_status("Line deleted");
    tracing::trace!(target: "actions.dispatch", op="delete_line", row, lines=state.buffer().line_count(), "edit");
    DispatchResult::dirty()
}

pub(crate) fn handle_yank_line(state: &mut EditorState, view: &mut View) -> DispatchResult {
    let Some(text) = state.buffer().line(view.cursor.line) else {
        return DispatchResult::clean();
    };
    state.register.store(text);
    state.set_status("Line yanked to clipboard");
    DispatchResult::dirty()
}

pub(crate) fn handle_paste_after(state: &mut EditorState, view: &mut View) -> DispatchResult {
    let Some(text) = state.register.get().map(str::to_owned) else {
        state.set_status("Clipboard empty");
        return DispatchResult::dirty();
    };
    let row = view.cursor.line;
    state.checkpoint(view.cursor);
    if !state.buffer_mut().insert_line_after(row, &text) {
        return DispatchResult::clean();
    }
    view.cursor.line = row + 1;
    view.clamp(state.buffer());
    state.modified = true;
    state.set_status("Line pasted from clipboard");
    tracing::trace!(target: "actions.dispatch", op="paste_after", row, len=text.len(), "edit");
    DispatchResult::dirty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::{Buffer, Position};
    use pretty_assertions::assert_eq;

    fn setup(lines: &[&str], cursor: Position) -> (EditorState, View) {
        (
            EditorState::new(Buffer::from_lines(lines)),
            View::new(cursor, 10),
        )
    }

    #[test]
    fn delete_line_fills_register_and_clamps() {
        let (mut st, mut v) = setup(&["one", "two"], Position::new(1, 2));
        handle_delete_line(&mut st, &mut v);
        assert_eq!(st.buffer().lines(), vec!["one"]);
        assert_eq!(st.register.get(), Some("two"));
        assert_eq!(v.cursor.line, 0);
        assert_eq!(st.status, "Line deleted");
        assert!(st.modified);
    }

    #[test]
    fn sole_line_is_copied_not_removed() {
        let (mut st, mut v) = setup(&["only"], Position::origin());
        let r = handle_delete_line(&mut st, &mut v);
        assert!(!r.dirty);
        assert_eq!(st.buffer().line_count(), 1);
        assert_eq!(st.register.get(), Some("only"));
        assert_eq!(st.undo_depth(), 0);
        assert!(!st.modified);
    }

    #[test]
    fn yank_does_not_touch_buffer() {
        let (mut st, mut v) = setup(&["a", "b"], Position::new(1, 0));
        handle_yank_line(&mut st, &mut v);
        assert_eq!(st.register.get(), Some("b"));
        assert_eq!(st.status, "Line yanked to clipboard");
        assert!(!st.modified);
        assert_eq!(st.undo_depth(), 0);
    }

    #[test]
    fn paste_inserts_below_and_keeps_register() {
        let (mut st, mut v) = setup(&["a", "b"], Position::origin());
        st.register.store("new");
        handle_paste_after(&mut st, &mut v);
        handle_paste_after(&mut st, &mut v);
        assert_eq!(st.buffer().lines(), vec!["a", "new", "new", "b"]);
        assert_eq!(v.cursor.line, 2);
        assert_eq!(st.undo_depth(), 2);
        assert_eq!(st.register.get(), Some("new"));
    }

    #[test]
    fn paste_empty_register_reports() {
        let (mut st, mut v) = setup(&["a"], Position::origin());
        handle_paste_after(&mut st, &mut v);
        assert_eq!(st.status, "Clipboard empty");
        assert_eq!(st.buffer().lines(), vec!["a"]);
        assert_eq!(st.undo_depth(), 0);
    }

    #[test]
    fn pasting_an_empty_line_is_allowed() {
        let (mut st, mut v) = setup(&["", "x"], Position::origin());
        handle_yank_line(&mut st, &mut v);
        handle_paste_after(&mut st, &mut v);
        assert_eq!(st.buffer().lines(), vec!["", "", "x"]);
    }
}
