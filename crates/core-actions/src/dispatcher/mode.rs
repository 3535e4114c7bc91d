//! Mode transition handling.
//!
//! Entering Search always starts from an empty prompt; entering Replace needs
//! a confirmed search term. Leaving Insert steps the cursor back onto the
//! last typed character.

use super::DispatchResult;
use crate::ModeChange;
use core_model::View;
use core_state::{EditorState, Mode};

pub(crate) fn handle_mode_change(
    mc: ModeChange,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    let from = state.mode;
    match mc {
        ModeChange::EnterInsert => {
            state.mode = Mode::Insert;
            state.set_status("Insert mode");
        }
        ModeChange::LeaveInsert => {
            if view.cursor.col > 0 {
                view.cursor.col -= 1;
            }
            state.mode = Mode::Normal;
            state.set_status("Normal mode");
        }
        ModeChange::EnterSearch => {
            state.search.pending.clear();
            state.mode = Mode::Search;
            state.set_status("/");
        }
        ModeChange::EnterReplace => {
            if !state.search.has_term() {
                state.set_status("No search term");
                return DispatchResult::dirty();
            }
            state.search.replacement.clear();
            state.mode = Mode::Replace;
            state.set_status("Replace with: ");
        }
    }
    tracing::debug!(target: "actions.dispatch", from=?from, to=?state.mode, "mode_change");
    DispatchResult::dirty()
}
