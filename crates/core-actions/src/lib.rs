//! Modal editing engine: key translation and action dispatch.
//!
//! Every key event flows through two pure steps:
//! 1. `translate_key(mode, pending_command, key)` maps the key to an `Action`
//!    using the handler table for the active `Mode` (plus the command line
//!    when `:` is open).
//! 2. `dispatcher::dispatch(action, model)` applies the action to the
//!    explicitly passed `EditorModel` and reports a `DispatchResult`.
//!
//! `handle_key` chains the two and is the single entry point used by the
//! binary's event loop and by the integration tests.

use core_events::KeyEvent;
use core_model::EditorModel;

pub mod dispatcher;
pub mod io_ops;
mod key_translator;

pub use dispatcher::{DispatchResult, dispatch};
pub use io_ops::FileError;
pub use key_translator::translate_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    Top,
    Bottom,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    EnterInsert,
    LeaveInsert,
    EnterSearch,
    EnterReplace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    InsertChar(char),
    InsertNewline,
    InsertTab,
    /// Insert-mode backspace (joins lines at column 0).
    Backspace,
    /// Normal-mode `x`.
    DeleteUnder,
}

/// Editing of the Search / Replace prompt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    Char(char),
    Backspace,
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    ModeChange(ModeChange),
    Edit(EditKind),
    Undo,
    Redo,
    DeleteLine,
    YankLine,
    PasteAfter,
    SearchNext,
    SearchPrevious,
    Prompt(PromptAction),
    CommandStart,
    CommandChar(char),
    CommandBackspace,
    CommandCancel,
    CommandExecute(String),
    /// Guarded quit: refused while the buffer is modified.
    Quit,
    /// Unconditional quit.
    ForceQuit,
}

/// Translate and dispatch one key event against `model`.
///
/// Keys with no binding in the current mode are ignored and report a clean
/// result.
pub fn handle_key(model: &mut EditorModel, key: &KeyEvent) -> DispatchResult {
    let action = {
        let state = model.state();
        translate_key(state.mode, state.command_line.buffer(), key)
    };
    match action {
        Some(action) => dispatch(action, model),
        None => DispatchResult::clean(),
    }
}
