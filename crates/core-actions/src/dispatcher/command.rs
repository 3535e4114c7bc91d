//! Command line editing & execution (`:w`, `:q`, `:q!`, `:wq`).
//!
//! The command line lives in `EditorState::command_line` and is rendered in
//! place of the status message while active. Executing always closes it.

use super::DispatchResult;
use super::command_parser::{CommandParser, ParsedCommand};
use crate::Action;
use crate::io_ops::{WriteFileResult, write_file};
use core_state::EditorState;

pub(crate) fn handle_command_action(action: Action, state: &mut EditorState) -> DispatchResult {
    match action {
        Action::CommandStart => {
            state.command_line.begin();
            DispatchResult::dirty()
        }
        Action::CommandChar(ch) => {
            state.command_line.push_char(ch);
            DispatchResult::dirty()
        }
        Action::CommandBackspace => {
            state.command_line.backspace();
            DispatchResult::dirty()
        }
        Action::CommandCancel => {
            state.command_line.clear();
            DispatchResult::dirty()
        }
        Action::CommandExecute(cmd) => execute_command(cmd, state),
        _ => DispatchResult::clean(),
    }
}

fn execute_command(raw: String, state: &mut EditorState) -> DispatchResult {
    state.command_line.clear();
    let parsed = CommandParser::parse(&raw);
    tracing::debug!(target: "actions.dispatch", command=?parsed, "command_execute");
    match parsed {
        ParsedCommand::Write => {
            handle_write(state);
            DispatchResult::dirty()
        }
        ParsedCommand::Quit => guarded_quit(state),
        ParsedCommand::ForceQuit => DispatchResult::quit(),
        ParsedCommand::WriteQuit => {
            if handle_write(state) {
                DispatchResult::quit()
            } else {
                DispatchResult::dirty()
            }
        }
        ParsedCommand::Empty => DispatchResult::dirty(),
        ParsedCommand::Unknown(cmd) => {
            state.set_status(format!("Not an editor command: {cmd}"));
            DispatchResult::dirty()
        }
    }
}

/// Quit unless the buffer holds unsaved changes.
pub(crate) fn guarded_quit(state: &mut EditorState) -> DispatchResult {
    if state.modified {
        state.set_status("Unsaved changes. Use :q! to force quit.");
        DispatchResult::dirty()
    } else {
        DispatchResult::quit()
    }
}

/// Save and report in the status line. Returns true on success.
fn handle_write(state: &mut EditorState) -> bool {
    match write_file(state) {
        WriteFileResult::Success { .. } => {
            state.set_status("File saved successfully");
            true
        }
        WriteFileResult::Error(e) => {
            state.set_status(format!("Error saving file: {e}"));
            false
        }
    }
}
