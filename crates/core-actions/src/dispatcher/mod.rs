//! Dispatcher applying `Action` to mutable editor state.
//!
//! Sub-modules, one per concern:
//! * `motion`   - cursor movement and paging
//! * `mode`     - mode transitions (Normal <-> Insert / Search / Replace)
//! * `edit`     - character-level mutation (insert, backspace, newline, tab, `x`)
//! * `register` - line delete / yank / paste through the single-slot register
//! * `search`   - `n` / `N` and replace-all against the persisted term
//! * `prompt`   - Search and Replace prompt editing
//! * `command`  - command line editing & execution (`:w`, `:q`, `:q!`, `:wq`)
//! * `undo`     - undo / redo dispatch
//!
//! Every mutating handler checkpoints *before* touching the buffer, and the
//! view is re-clamped and re-scrolled after every action.

use crate::Action;
use core_model::EditorModel;

mod command;
mod command_parser;
mod edit;
mod mode;
mod motion;
mod prompt;
mod register;
mod search;
mod undo;

pub use command_parser::{CommandParser, ParsedCommand};

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub dirty: bool,
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }
}

/// Apply an action to editor state. Returns `DispatchResult` describing whether
/// a render is needed (`dirty`) or the editor should exit (`quit`).
pub fn dispatch(action: Action, model: &mut EditorModel) -> DispatchResult {
    let (state, view) = model.split_state_and_view();
    tracing::trace!(target: "actions.dispatch", action=?action, mode=?state.mode, "dispatch");

    let result = match action {
        Action::Motion(kind) => motion::handle_motion(kind, state, view),
        Action::ModeChange(mc) => mode::handle_mode_change(mc, state, view),
        Action::Edit(kind) => edit::handle_edit(kind, state, view),
        Action::Undo => undo::handle_undo(state, view),
        Action::Redo => undo::handle_redo(state, view),
        Action::DeleteLine => register::handle_delete_line(state, view),
        Action::YankLine => register::handle_yank_line(state, view),
        Action::PasteAfter => register::handle_paste_after(state, view),
        Action::SearchNext => search::handle_search_next(state, view),
        Action::SearchPrevious => search::handle_search_previous(state, view),
        Action::Prompt(p) => prompt::handle_prompt(p, state, view),
        Action::CommandStart
        | Action::CommandChar(_)
        | Action::CommandBackspace
        | Action::CommandCancel
        | Action::CommandExecute(_) => command::handle_command_action(action, state),
        Action::Quit => command::guarded_quit(state),
        Action::ForceQuit => {
            tracing::info!(target: "actions.dispatch", "force_quit");
            DispatchResult::quit()
        }
    };
    view.settle(state.buffer());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EditKind, ModeChange, MotionKind};
    use core_model::View;
    use core_state::{EditorState, Mode};
    use core_text::{Buffer, Position};

    fn model(lines: &[&str], cursor: Position) -> EditorModel {
        let st = EditorState::new(Buffer::from_lines(lines));
        EditorModel::with_view(View::new(cursor, 10), st)
    }

    #[test]
    fn insert_then_undo_restores_buffer_and_cursor() {
        let mut m = model(&["abc", "def"], Position::origin());
        dispatch(Action::ModeChange(ModeChange::EnterInsert), &mut m);
        dispatch(Action::Edit(EditKind::InsertChar('X')), &mut m);
        assert_eq!(m.state().buffer().lines(), vec!["Xabc", "def"]);
        assert_eq!(m.view().cursor, Position::new(0, 1));
        dispatch(Action::ModeChange(ModeChange::LeaveInsert), &mut m);
        dispatch(Action::Undo, &mut m);
        assert_eq!(m.state().buffer().lines(), vec!["abc", "def"]);
        assert_eq!(m.view().cursor, Position::origin());
    }

    #[test]
    fn motion_never_marks_modified() {
        let mut m = model(&["abc", "def"], Position::origin());
        let r = dispatch(Action::Motion(MotionKind::Down), &mut m);
        assert!(r.dirty);
        assert!(!m.state().modified);
        assert_eq!(m.state().undo_depth(), 0);
    }

    #[test]
    fn force_quit_ignores_modified() {
        let mut m = model(&["abc"], Position::origin());
        m.state_mut().modified = true;
        assert!(dispatch(Action::ForceQuit, &mut m).quit);
    }

    #[test]
    fn guarded_quit_refuses_when_modified() {
        let mut m = model(&["abc"], Position::origin());
        m.state_mut().modified = true;
        let r = dispatch(Action::Quit, &mut m);
        assert!(!r.quit);
        assert_eq!(
            m.state().status,
            "Unsaved changes. Use :q! to force quit."
        );
        m.state_mut().modified = false;
        assert!(dispatch(Action::Quit, &mut m).quit);
    }

    #[test]
    fn dispatch_keeps_cursor_inside_viewport() {
        let lines: Vec<String> = (0..30).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let mut m = model(&refs, Position::origin());
        for _ in 0..15 {
            dispatch(Action::Motion(MotionKind::Down), &mut m);
        }
        let v = m.view();
        assert!(v.viewport.offset_row <= v.cursor.line);
        assert!(v.cursor.line < v.viewport.offset_row + v.viewport.height);
        assert_eq!(m.state().mode, Mode::Normal);
    }
}
