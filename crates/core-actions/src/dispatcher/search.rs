//! Repeat-search (`n` / `N`) and replace-all against the persisted term.

use super::DispatchResult;
use core_model::View;
use core_state::EditorState;
use core_text::search::{self, ReplaceOutcome};

pub(crate) fn handle_search_next(state: &mut EditorState, view: &mut View) -> DispatchResult {
    match search::find_next(state.buffer(), view.cursor, &state.search.term) {
        Some(hit) => {
            view.cursor = hit;
            DispatchResult::dirty()
        }
        None => not_found(state),
    }
}

pub(crate) fn handle_search_previous(state: &mut EditorState, view: &mut View) -> DispatchResult {
    match search::find_previous(state.buffer(), view.cursor, &state.search.term) {
        Some(hit) => {
            view.cursor = hit;
            DispatchResult::dirty()
        }
        None => not_found(state),
    }
}

fn not_found(state: &mut EditorState) -> DispatchResult {
    tracing::debug!(target: "actions.search", term_len = state.search.term.len(), "pattern_not_found");
    let msg = format!("Pattern not found: {}", state.search.term);
    state.set_status(msg);
    DispatchResult::dirty()
}

/// Replace every occurrence of the persisted term with `replacement`.
/// A checkpoint is recorded only when at least one line changed.
pub(crate) fn replace_all(state: &mut EditorState, view: &View, replacement: &str) -> ReplaceOutcome {
    let before = state.buffer().clone();
    let term = state.search.term.clone();
    let outcome = search::replace_all(state.buffer_mut(), &term, replacement);
    if outcome.lines_changed > 0 {
        state.checkpoint_with(view.cursor, &before);
        state.modified = true;
    }
    tracing::debug!(target: "actions.search", occurrences = outcome.occurrences, lines_changed = outcome.lines_changed, "replace_all");
    outcome
}
