//! Search and Replace prompt editing.
//!
//! Both prompts edit scratch text (`SearchState::pending` /
//! `SearchState::replacement`) mirrored in the status line. Esc abandons the
//! edit; the confirmed search term only changes on Enter in Search mode.

use super::{DispatchResult, search};
use crate::PromptAction;
use core_model::View;
use core_state::{EditorState, Mode};
use core_text::search as text_search;

pub(crate) fn handle_prompt(
    action: PromptAction,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    match state.mode {
        Mode::Search => search_prompt(action, state, view),
        Mode::Replace => replace_prompt(action, state, view),
        Mode::Normal | Mode::Insert => DispatchResult::clean(),
    }
}

fn search_prompt(action: PromptAction, state: &mut EditorState, view: &mut View) -> DispatchResult {
    match action {
        PromptAction::Char(c) => {
            state.search.pending.push(c);
            mirror_search(state);
        }
        PromptAction::Backspace => {
            if state.search.pending.pop().is_none() {
                return DispatchResult::clean();
            }
            mirror_search(state);
        }
        PromptAction::Cancel => {
            state.search.pending.clear();
            state.mode = Mode::Normal;
            state.set_status("Normal mode");
        }
        PromptAction::Confirm => {
            state.search.confirm_pending();
            state.mode = Mode::Normal;
            tracing::debug!(target: "actions.search", term_len = state.search.term.len(), "search_confirmed");
            return search::handle_search_next(state, view);
        }
    }
    DispatchResult::dirty()
}

fn mirror_search(state: &mut EditorState) {
    let msg = format!("/{}", state.search.pending);
    state.set_status(msg);
}

fn replace_prompt(action: PromptAction, state: &mut EditorState, view: &mut View) -> DispatchResult {
    match action {
        PromptAction::Char(c) => {
            state.search.replacement.push(c);
            mirror_replace(state);
        }
        PromptAction::Backspace => {
            if state.search.replacement.pop().is_none() {
                return DispatchResult::clean();
            }
            mirror_replace(state);
        }
        PromptAction::Cancel => {
            state.search.replacement.clear();
            state.mode = Mode::Normal;
            state.set_status("Normal mode");
        }
        PromptAction::Confirm => {
            let replacement = std::mem::take(&mut state.search.replacement);
            let text_search::ReplaceOutcome { occurrences, .. } =
                search::replace_all(state, view, &replacement);
            state.mode = Mode::Normal;
            state.set_status(format!("Replaced {occurrences} occurrences"));
        }
    }
    DispatchResult::dirty()
}

fn mirror_replace(state: &mut EditorState) {
    let msg = format!("Replace with: {}", state.search.replacement);
    state.set_status(msg);
}
