//! Status line composition.
//!
//! Format: `<MODE> <message> <file:<20> (<row>,<col>) <[+]>`, with single
//! spaces between the five parts even when one is empty. Row and column are
//! 1-based. While the command line is open its buffer (leading ':' included)
//! takes the place of the message.
//!
//! Two stages: `compose_status` yields ordered `StatusSegment`s,
//! `format_status` renders them.

use core_model::View;
use core_state::{EditorState, Mode};
use std::borrow::Cow;

/// Width the file name is padded to.
pub const FILE_NAME_WIDTH: usize = 20;

pub struct StatusContext<'a> {
    pub mode: Mode,
    pub message: &'a str,
    /// Command line buffer when the command line is open.
    pub command_buffer: Option<&'a str>,
    pub file_name: Cow<'a, str>,
    pub line: usize, // 0-based
    pub col: usize,  // 0-based
    pub modified: bool,
}

impl<'a> StatusContext<'a> {
    pub fn from_state(state: &'a EditorState, view: &View) -> Self {
        Self {
            mode: state.mode,
            message: &state.status,
            command_buffer: state
                .command_line
                .is_active()
                .then(|| state.command_line.buffer()),
            file_name: Cow::Owned(state.display_name()),
            line: view.cursor.line,
            col: view.cursor.col,
            modified: state.modified,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    Mode(&'static str),
    Message(&'a str),
    FileName(&'a str),
    Position { line_1: usize, col_1: usize },
    Modified(bool),
}

pub fn compose_status<'a>(ctx: &'a StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    vec![
        StatusSegment::Mode(ctx.mode.label()),
        StatusSegment::Message(ctx.command_buffer.unwrap_or(ctx.message)),
        StatusSegment::FileName(&ctx.file_name),
        StatusSegment::Position {
            line_1: ctx.line + 1,
            col_1: ctx.col + 1,
        },
        StatusSegment::Modified(ctx.modified),
    ]
}

pub fn format_status(segments: &[StatusSegment<'_>]) -> String {
    let parts: Vec<Cow<'_, str>> = segments
        .iter()
        .map(|seg| match seg {
            StatusSegment::Mode(m) => Cow::Borrowed(*m),
            StatusSegment::Message(m) => Cow::Borrowed(*m),
            StatusSegment::FileName(name) => {
                Cow::Owned(format!("{name:<width$}", width = FILE_NAME_WIDTH))
            }
            StatusSegment::Position { line_1, col_1 } => {
                Cow::Owned(format!("({line_1},{col_1})"))
            }
            StatusSegment::Modified(true) => Cow::Borrowed("[+]"),
            StatusSegment::Modified(false) => Cow::Borrowed(""),
        })
        .collect();
    parts.join(" ")
}
