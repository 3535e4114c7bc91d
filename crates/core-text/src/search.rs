//! Plain substring search over buffer lines.
//!
//! Scans are linear and never wrap around the buffer edges. All positions are
//! char columns. An empty term matches nothing.

use crate::{Buffer, Position};
use std::ops::Range;

/// Outcome of a `replace_all` pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaceOutcome {
    /// Total non-overlapping occurrences replaced across the buffer.
    pub occurrences: usize,
    /// Lines whose text actually changed.
    pub lines_changed: usize,
}

fn char_to_byte(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(b, _)| b)
        .unwrap_or(line.len())
}

fn byte_to_char(line: &str, byte: usize) -> usize {
    line[..byte].chars().count()
}

/// First match starting at or after column `from_col` in `line`.
fn first_match_from(line: &str, from_col: usize, term: &str) -> Option<usize> {
    let start = char_to_byte(line, from_col);
    if start > line.len() {
        return None;
    }
    line[start..]
        .find(term)
        .map(|rel| byte_to_char(line, start + rel))
}

/// Last match lying entirely within the first `before_col` chars of `line`.
fn last_match_before(line: &str, before_col: usize, term: &str) -> Option<usize> {
    let limit = char_to_byte(line, before_col);
    line[..limit].rfind(term).map(|b| byte_to_char(line, b))
}

/// Search forward from just after `from`, continuing on following lines from column 0.
pub fn find_next(buffer: &Buffer, from: Position, term: &str) -> Option<Position> {
    if term.is_empty() {
        return None;
    }
    let mut col = from.col + 1;
    for row in from.line..buffer.line_count() {
        if let Some(line) = buffer.line(row)
            && let Some(found) = first_match_from(&line, col, term)
        {
            tracing::trace!(target: "actions.search", row, col = found, "find_next_hit");
            return Some(Position::new(row, found));
        }
        col = 0;
    }
    None
}

/// Search backward from just before `from`, continuing on preceding lines from their end.
pub fn find_previous(buffer: &Buffer, from: Position, term: &str) -> Option<Position> {
    if term.is_empty() || buffer.line_count() == 0 {
        return None;
    }
    let first_row = from.line.min(buffer.line_count() - 1);
    for row in (0..=first_row).rev() {
        let Some(line) = buffer.line(row) else {
            continue;
        };
        let found = if row == first_row {
            last_match_before(&line, from.col, term)
        } else {
            line.rfind(term).map(|b| byte_to_char(&line, b))
        };
        if let Some(found) = found {
            tracing::trace!(target: "actions.search", row, col = found, "find_previous_hit");
            return Some(Position::new(row, found));
        }
    }
    None
}

/// Replace every non-overlapping occurrence of `term` in every line.
pub fn replace_all(buffer: &mut Buffer, term: &str, replacement: &str) -> ReplaceOutcome {
    let mut outcome = ReplaceOutcome::default();
    if term.is_empty() {
        return outcome;
    }
    for row in 0..buffer.line_count() {
        let Some(line) = buffer.line(row) else {
            continue;
        };
        let count = line.matches(term).count();
        if count == 0 {
            continue;
        }
        outcome.occurrences += count;
        let replaced = line.replace(term, replacement);
        if replaced != line {
            buffer.replace_line(row, &replaced);
            outcome.lines_changed += 1;
        }
    }
    outcome
}

/// Char ranges of the non-overlapping occurrences of `term` in `line`, left to right.
pub fn match_ranges(line: &str, term: &str) -> Vec<Range<usize>> {
    if term.is_empty() {
        return Vec::new();
    }
    let term_chars = term.chars().count();
    line.match_indices(term)
        .map(|(b, _)| {
            let start = byte_to_char(line, b);
            start..start + term_chars
        })
        .collect()
}
