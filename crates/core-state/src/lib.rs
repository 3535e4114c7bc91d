//! Editor state: buffer, mode, register, search state, history and status text.
//!
//! Everything the editing session mutates lives in one owned `EditorState`
//! that is passed explicitly to each handler; there is no global singleton.
//! Cursor and viewport are presentation state and live in `core-model::View`.
//!
//! Undo policy:
//! - One snapshot per discrete edit action (char insert, char delete, newline
//!   split, line join, tab expansion, line delete, paste, replace-all). Insert
//!   runs are *not* coalesced, so every typed character undoes individually.
//! - A new checkpoint clears the redo stack.
//! - Undo and redo both mark the buffer modified.
//!
//! Telemetry: snapshot lifecycle emits trace events on target `state.undo`.

use core_text::{Buffer, Position};
use std::path::{Path, PathBuf};

pub mod undo;
pub use undo::{EditSnapshot, UndoEngine};

/// Default tab-stop width when no configuration overrides it.
pub const DEFAULT_TAB_SIZE: usize = 4;

/// Save target used when no filename is bound.
pub const DEFAULT_SAVE_PATH: &str = "samples/output.txt";

/// Current editor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigation and single-key commands.
    #[default]
    Normal,
    /// Text entry at the cursor.
    Insert,
    /// Typing a search term (mirrored in the status line after `/`).
    Search,
    /// Typing the replacement for the persisted search term.
    Replace,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
            Mode::Search => "SEARCH",
            Mode::Replace => "REPLACE",
        }
    }
}

/// Single-slot clipboard holding the most recently yanked or deleted line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Register {
    content: Option<String>,
}

impl Register {
    /// Overwrite the slot.
    pub fn store<S: Into<String>>(&mut self, text: S) {
        self.content = Some(text.into());
    }
    /// Read without clearing.
    pub fn get(&self) -> Option<&str> {
        self.content.as_deref()
    }
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}

/// Search term plus the in-progress prompt text.
///
/// `term` is the confirmed term used by `n` / `N` and highlighting; it only
/// changes when a search prompt is confirmed with Enter. `pending` and
/// `replacement` are scratch text for the Search and Replace prompts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub term: String,
    pub pending: String,
    pub replacement: String,
}

impl SearchState {
    pub fn has_term(&self) -> bool {
        !self.term.is_empty()
    }
    /// Promote the in-progress search text to the persisted term.
    pub fn confirm_pending(&mut self) {
        self.term = std::mem::take(&mut self.pending);
    }
}

/// Minimal command-line state: stores the raw buffer including the leading ':' when active.
#[derive(Debug, Default, Clone)]
pub struct CommandLineState {
    buf: String,
}

impl CommandLineState {
    /// Returns true if a command is being entered (buffer starts with ':').
    pub fn is_active(&self) -> bool {
        self.buf.starts_with(':')
    }
    /// Expose raw buffer for rendering/translation.
    pub fn buffer(&self) -> &str {
        &self.buf
    }
    /// Clear command buffer (leave inactive state).
    pub fn clear(&mut self) {
        self.buf.clear();
    }
    /// Begin a new command (resets existing content) with the leading ':'.
    pub fn begin(&mut self) {
        self.buf.clear();
        self.buf.push(':');
    }
    /// Append to a command opened with `begin`.
    pub fn push_char(&mut self, ch: char) {
        self.buf.push(ch);
    }
    /// Backspace keeps the ':' sentinel until removing it ends the command.
    pub fn backspace(&mut self) {
        if self.buf.len() > 1 {
            self.buf.pop();
        } else {
            self.buf.clear();
        }
    }
}

/// Result of normalizing line endings on load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    /// LF-only content.
    pub normalized: String,
    /// More than one line-ending style was present.
    pub mixed: bool,
}

/// Rewrite CRLF and lone CR to LF.
pub fn normalize_line_endings(input: &str) -> NormalizedText {
    let (mut crlf, mut lf, mut cr) = (0usize, 0usize, 0usize);
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                crlf += 1;
                out.push('\n');
            }
            '\r' => {
                cr += 1;
                out.push('\n');
            }
            '\n' => {
                lf += 1;
                out.push('\n');
            }
            other => out.push(other),
        }
    }
    let styles = [crlf, lf, cr].iter().filter(|c| **c > 0).count();
    NormalizedText {
        normalized: out,
        mixed: styles > 1,
    }
}

/// Top-level editor state container (single buffer).
#[derive(Debug)]
pub struct EditorState {
    buffer: Buffer,
    pub mode: Mode,
    pub file_name: Option<PathBuf>,
    /// Set by every mutation, cleared by a successful save.
    pub modified: bool,
    undo: UndoEngine,
    pub register: Register,
    pub search: SearchState,
    pub command_line: CommandLineState,
    /// Transient status text shown in the status line until replaced.
    pub status: String,
    pub tab_size: usize,
    pub default_save_path: PathBuf,
}

impl EditorState {
    /// Create a new state around `buffer` in Normal mode.
    pub fn new(buffer: Buffer) -> Self {
        Self {
            buffer,
            mode: Mode::Normal,
            file_name: None,
            modified: false,
            undo: UndoEngine::new(),
            register: Register::default(),
            search: SearchState::default(),
            command_line: CommandLineState::default(),
            status: "Normal mode".to_string(),
            tab_size: DEFAULT_TAB_SIZE,
            default_save_path: PathBuf::from(DEFAULT_SAVE_PATH),
        }
    }

    /// Replace the history with one capped at `max` snapshots (0 = unlimited).
    pub fn set_history_limit(&mut self, max: usize) {
        self.undo = UndoEngine::with_limit(max);
    }

    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        self.status = msg.into();
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Mutable accessor for the buffer. Callers checkpoint first when the
    /// mutation should be undoable.
    pub fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    /// Swap in a freshly loaded buffer; history is discarded.
    pub fn replace_buffer(&mut self, buffer: Buffer) {
        self.buffer = buffer;
        let limit = self.undo_limit();
        self.undo = UndoEngine::with_limit(limit);
    }

    fn undo_limit(&self) -> usize {
        self.undo.limit().unwrap_or(0)
    }

    /// Path the buffer is written to on save.
    pub fn save_target(&self) -> &Path {
        self.file_name.as_deref().unwrap_or(&self.default_save_path)
    }

    /// Push a pre-edit snapshot of the buffer and `cursor`.
    pub fn checkpoint(&mut self, cursor: Position) {
        self.undo.checkpoint(cursor, &self.buffer);
    }

    /// Push a snapshot of an explicit earlier buffer (used when the need for a
    /// checkpoint is only known after the edit ran).
    pub fn checkpoint_with(&mut self, cursor: Position, before: &Buffer) {
        self.undo.checkpoint(cursor, before);
    }

    /// Restore the previous snapshot. Returns true if restored.
    pub fn undo(&mut self, cursor: &mut Position) -> bool {
        let restored = self.undo.undo(cursor, &mut self.buffer);
        if restored {
            self.modified = true;
        }
        restored
    }

    /// Re-apply the last undone snapshot. Returns true if applied.
    pub fn redo(&mut self, cursor: &mut Position) -> bool {
        let restored = self.undo.redo(cursor, &mut self.buffer);
        if restored {
            self.modified = true;
        }
        restored
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.undo_depth()
    }
    pub fn redo_depth(&self) -> usize {
        self.undo.redo_depth()
    }

    /// Bound path as given on the command line; empty when unbound.
    pub fn display_name(&self) -> String {
        self.file_name
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }
}
