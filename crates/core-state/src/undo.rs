use core_text::{Buffer, Position};
use tracing::trace;

/// An immutable copy of buffer + cursor taken before an edit.
///
/// `Buffer` clones share rope nodes, so a snapshot never aliases the live
/// buffer yet costs far less than a line-by-line copy.
#[derive(Clone, Debug)]
pub struct EditSnapshot {
    pub buffer: Buffer,
    pub cursor: Position,
}

/// Linear undo/redo history.
///
/// Every discrete edit pushes exactly one snapshot; there is no coalescing of
/// insert runs. Any new checkpoint clears the redo stack.
#[derive(Debug, Default)]
pub struct UndoEngine {
    undo_stack: Vec<EditSnapshot>,
    redo_stack: Vec<EditSnapshot>,
    /// Maximum retained undo snapshots; `None` keeps everything.
    max_snapshots: Option<usize>,
}

impl UndoEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// History that drops its oldest snapshot once `max` are held. `0` means unlimited.
    pub fn with_limit(max: usize) -> Self {
        Self {
            max_snapshots: (max > 0).then_some(max),
            ..Self::default()
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.max_snapshots
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Record the pre-edit state. Forward history is invalidated.
    pub fn checkpoint(&mut self, cursor: Position, buffer: &Buffer) {
        self.undo_stack.push(EditSnapshot {
            buffer: buffer.clone(),
            cursor,
        });
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), lines = buffer.line_count(), "push_snapshot");
        if let Some(max) = self.max_snapshots
            && self.undo_stack.len() > max
        {
            let _ = self.undo_stack.remove(0);
            trace!(target: "state.undo", "undo_stack_trimmed");
        }
        if !self.redo_stack.is_empty() {
            self.redo_stack.clear();
            trace!(target: "state.undo", "redo_stack_cleared_on_new_edit");
        }
    }

    /// Restore the most recent snapshot, parking the live state on the redo stack.
    /// Returns false (no side effects) when there is nothing to undo.
    pub fn undo(&mut self, cursor: &mut Position, buffer: &mut Buffer) -> bool {
        let Some(last) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(EditSnapshot {
            buffer: buffer.clone(),
            cursor: *cursor,
        });
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), "undo_pop");
        *buffer = last.buffer;
        *cursor = last.cursor;
        true
    }

    /// Mirror of `undo`: restore the most recently undone state.
    pub fn redo(&mut self, cursor: &mut Position, buffer: &mut Buffer) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(EditSnapshot {
            buffer: buffer.clone(),
            cursor: *cursor,
        });
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), "redo_pop");
        *buffer = next.buffer;
        *cursor = next.cursor;
        true
    }
}
