//! Rope-backed line buffer.
//!
//! The buffer is an ordered sequence of lines separated by `\n`. A line never
//! contains a line feed itself; the rope simply stores the lines joined by
//! `\n`, which gives two properties for free:
//! * there is always at least one line (an empty rope has one empty line);
//! * `Clone` is cheap (ropey shares tree nodes), so undo snapshots do not
//!   deep-copy the text.
//!
//! Columns are counted in `char`s, never bytes, so multi-byte characters are
//! edited as atomic units. Every mutator validates its indices and turns an
//! out-of-range request into a no-op instead of panicking.

use ropey::Rope;

pub mod search;
pub mod width;

pub use width::{char_width, display_col, expand_tabs};

/// A text buffer backed by a `ropey::Rope`.
#[derive(Clone, Default)]
pub struct Buffer {
    rope: Rope,
}

/// A position inside a buffer expressed as (line index, char column within that line).
///
/// `col` may equal the line length, meaning "after the last character".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
    pub fn origin() -> Self {
        Self { line: 0, col: 0 }
    }
    /// Clamp the line into `[0, line_count)` then the column into `[0, len(line)]`.
    /// The column clamp uses the length of the post-clamp line.
    pub fn clamp_to<F>(&mut self, line_count: usize, mut line_len_fn: F)
    where
        F: FnMut(usize) -> usize,
    {
        if line_count == 0 {
            self.line = 0;
            self.col = 0;
            return;
        }
        if self.line >= line_count {
            self.line = line_count - 1;
        }
        let max_len = line_len_fn(self.line);
        if self.col > max_len {
            self.col = max_len;
        }
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Content is deliberately omitted; only shape is useful in logs.
        f.debug_struct("Buffer")
            .field("lines", &self.line_count())
            .field("chars", &self.rope.len_chars())
            .finish()
    }
}

impl PartialEq for Buffer {
    fn eq(&self, other: &Self) -> bool {
        self.rope == other.rope
    }
}

impl Eq for Buffer {}

fn is_line_break(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}

impl Buffer {
    /// A buffer holding exactly one empty line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a buffer by splitting `content` on `\n`. The caller normalizes
    /// line endings first; any stray `\r` is dropped so it never lands inside a line.
    pub fn from_text(content: &str) -> Self {
        if content.contains('\r') {
            let cleaned: String = content.chars().filter(|c| *c != '\r').collect();
            return Self {
                rope: Rope::from_str(&cleaned),
            };
        }
        Self {
            rope: Rope::from_str(content),
        }
    }

    /// Construct a buffer from individual lines (test and paste helper).
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let joined = lines
            .iter()
            .map(|l| l.as_ref())
            .collect::<Vec<_>>()
            .join("\n");
        Self::from_text(&joined)
    }

    /// Total number of lines in the buffer (always >= 1).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Return the requested line without its line feed.
    pub fn line(&self, idx: usize) -> Option<String> {
        if idx >= self.line_count() {
            return None;
        }
        let mut s = self.rope.line(idx).to_string();
        if s.ends_with('\n') {
            s.pop();
        }
        Some(s)
    }

    /// All lines in order, without line feeds.
    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count())
            .filter_map(|i| self.line(i))
            .collect()
    }

    /// Length of a line in chars (excluding the line feed); 0 for an invalid index.
    pub fn line_len(&self, idx: usize) -> usize {
        if idx >= self.line_count() {
            return 0;
        }
        let line = self.rope.line(idx);
        let n = line.len_chars();
        if n > 0 && line.char(n - 1) == '\n' {
            n - 1
        } else {
            n
        }
    }

    /// Serialize every line followed by a line feed.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.rope.len_bytes() + 1);
        for line in self.lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    fn char_index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.line_count() || col > self.line_len(row) {
            return None;
        }
        Some(self.rope.line_to_char(row) + col)
    }

    /// Insert `ch` before column `col` of line `row`. Line breaks are rejected;
    /// use `split_line` for those.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) -> bool {
        if is_line_break(ch) {
            return false;
        }
        match self.char_index(row, col) {
            Some(at) => {
                self.rope.insert_char(at, ch);
                true
            }
            None => false,
        }
    }

    /// Insert a run of characters at `(row, col)`; returns the number inserted.
    pub fn insert_str(&mut self, row: usize, col: usize, text: &str) -> usize {
        let cleaned: String = text.chars().filter(|c| !is_line_break(*c)).collect();
        match self.char_index(row, col) {
            Some(at) if !cleaned.is_empty() => {
                self.rope.insert(at, &cleaned);
                cleaned.chars().count()
            }
            _ => 0,
        }
    }

    /// Delete the character at `col`. No-op (returns `None`) at or after the line end.
    pub fn delete_char(&mut self, row: usize, col: usize) -> Option<char> {
        if row >= self.line_count() || col >= self.line_len(row) {
            return None;
        }
        let at = self.rope.line_to_char(row) + col;
        let removed = self.rope.char(at);
        self.rope.remove(at..at + 1);
        Some(removed)
    }

    /// Remove line `row` and return its text. The last remaining line is never removed.
    pub fn delete_line(&mut self, row: usize) -> Option<String> {
        let count = self.line_count();
        if count <= 1 || row >= count {
            return None;
        }
        let text = self.line(row)?;
        let start = self.rope.line_to_char(row);
        if row + 1 < count {
            // Remove the line together with its own trailing line feed.
            let end = self.rope.line_to_char(row + 1);
            self.rope.remove(start..end);
        } else {
            // Last line: remove the line feed that precedes it instead.
            let end = self.rope.len_chars();
            self.rope.remove(start - 1..end);
        }
        Some(text)
    }

    /// Cut line `row` at `col`; the tail becomes a new line immediately after it.
    pub fn split_line(&mut self, row: usize, col: usize) -> bool {
        match self.char_index(row, col) {
            Some(at) => {
                self.rope.insert_char(at, '\n');
                true
            }
            None => false,
        }
    }

    /// Append line `row` onto line `row - 1` and remove line `row`.
    /// Returns the original length of the previous line (where the join happened).
    pub fn join_with_previous(&mut self, row: usize) -> Option<usize> {
        if row == 0 || row >= self.line_count() {
            return None;
        }
        let prev_len = self.line_len(row - 1);
        let newline_at = self.rope.line_to_char(row) - 1;
        self.rope.remove(newline_at..newline_at + 1);
        Some(prev_len)
    }

    /// Insert a new line holding `text` right after line `row`.
    pub fn insert_line_after(&mut self, row: usize, text: &str) -> bool {
        if row >= self.line_count() {
            return false;
        }
        let cleaned: String = text.chars().filter(|c| !is_line_break(*c)).collect();
        let end_of_row = self.rope.line_to_char(row) + self.line_len(row);
        let mut inserted = String::with_capacity(cleaned.len() + 1);
        inserted.push('\n');
        inserted.push_str(&cleaned);
        self.rope.insert(end_of_row, &inserted);
        true
    }

    /// Replace the content of line `row` wholesale.
    pub fn replace_line(&mut self, row: usize, text: &str) -> bool {
        if row >= self.line_count() {
            return false;
        }
        let cleaned: String = text.chars().filter(|c| !is_line_break(*c)).collect();
        let start = self.rope.line_to_char(row);
        let end = start + self.line_len(row);
        self.rope.remove(start..end);
        self.rope.insert(start, &cleaned);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn create_buffer_and_read_line() {
        let b = Buffer::from_text("hello\nworld");
        assert_eq!(b.line_count(), 2);
        assert_eq!(b.line(0).unwrap(), "hello");
        assert_eq!(b.line(1).unwrap(), "world");
        assert!(b.line(2).is_none());
    }

    #[test]
    fn empty_buffer_has_one_line() {
        let b = Buffer::new();
        assert_eq!(b.line_count(), 1);
        assert_eq!(b.line(0).unwrap(), "");
        assert_eq!(Buffer::from_text("").lines(), vec![String::new()]);
    }

    #[test]
    fn trailing_line_feed_yields_empty_last_line() {
        let b = Buffer::from_text("a\nb\n");
        assert_eq!(b.lines(), vec!["a", "b", ""]);
    }

    #[test]
    fn carriage_returns_are_dropped() {
        let b = Buffer::from_text("a\r\nb");
        assert_eq!(b.lines(), vec!["a", "b"]);
    }

    #[test]
    fn unicode_line_separator_stays_inline() {
        let b = Buffer::from_text("a\u{2028}b\nc");
        assert_eq!(b.line_count(), 2);
        assert_eq!(b.line_len(0), 3);
    }

    #[test]
    fn insert_char_multibyte_is_one_column() {
        let mut b = Buffer::from_text("abc");
        assert!(b.insert_char(0, 1, 'é'));
        assert!(b.insert_char(0, 2, '漢'));
        assert_eq!(b.line(0).unwrap(), "aé漢bc");
        assert_eq!(b.line_len(0), 5);
    }

    #[test]
    fn insert_char_rejects_out_of_range_and_breaks() {
        let mut b = Buffer::from_text("ab");
        assert!(!b.insert_char(0, 3, 'x'));
        assert!(!b.insert_char(1, 0, 'x'));
        assert!(!b.insert_char(0, 0, '\n'));
        assert_eq!(b.lines(), vec!["ab"]);
    }

    #[test]
    fn delete_char_at_end_noop() {
        let mut b = Buffer::from_text("hi");
        assert_eq!(b.delete_char(0, 2), None);
        assert_eq!(b.delete_char(0, 1), Some('i'));
        assert_eq!(b.line(0).unwrap(), "h");
    }

    #[test]
    fn delete_line_middle_and_last() {
        let mut b = Buffer::from_lines(&["one", "two", "three"]);
        assert_eq!(b.delete_line(1).as_deref(), Some("two"));
        assert_eq!(b.lines(), vec!["one", "three"]);
        assert_eq!(b.delete_line(1).as_deref(), Some("three"));
        assert_eq!(b.lines(), vec!["one"]);
    }

    #[test]
    fn delete_sole_line_refused() {
        let mut b = Buffer::from_text("only");
        assert_eq!(b.delete_line(0), None);
        assert_eq!(b.line_count(), 1);
        assert_eq!(b.line(0).unwrap(), "only");
    }

    #[test]
    fn split_line_inserts_tail_after() {
        let mut b = Buffer::from_lines(&["abcd", "z"]);
        assert!(b.split_line(0, 2));
        assert_eq!(b.lines(), vec!["ab", "cd", "z"]);
        assert!(b.split_line(2, 1));
        assert_eq!(b.lines(), vec!["ab", "cd", "z", ""]);
    }

    #[test]
    fn join_with_previous_reports_join_column() {
        let mut b = Buffer::from_lines(&["ab", "cd"]);
        assert_eq!(b.join_with_previous(0), None);
        assert_eq!(b.join_with_previous(1), Some(2));
        assert_eq!(b.lines(), vec!["abcd"]);
        assert_eq!(b.join_with_previous(1), None);
    }

    #[test]
    fn insert_line_after_last() {
        let mut b = Buffer::from_lines(&["a", "b"]);
        assert!(b.insert_line_after(1, "c"));
        assert!(b.insert_line_after(0, "x\ny"));
        assert_eq!(b.lines(), vec!["a", "xy", "b", "c"]);
        assert!(!b.insert_line_after(9, "nope"));
    }

    #[test]
    fn replace_line_keeps_neighbors() {
        let mut b = Buffer::from_lines(&["a", "bb", "c"]);
        assert!(b.replace_line(1, "xyz"));
        assert_eq!(b.lines(), vec!["a", "xyz", "c"]);
    }

    #[test]
    fn to_text_terminates_every_line() {
        let b = Buffer::from_lines(&["a", "b"]);
        assert_eq!(b.to_text(), "a\nb\n");
        assert_eq!(Buffer::new().to_text(), "\n");
    }

    #[test]
    fn clones_are_independent() {
        let mut b = Buffer::from_text("abc");
        let snap = b.clone();
        b.insert_char(0, 0, 'X');
        assert_eq!(snap.line(0).unwrap(), "abc");
        assert_eq!(b.line(0).unwrap(), "Xabc");
        assert_ne!(snap, b);
    }

    #[test]
    fn position_clamp_uses_post_clamp_line() {
        let b = Buffer::from_lines(&["long line", "ab"]);
        let mut p = Position::new(7, 8);
        p.clamp_to(b.line_count(), |l| b.line_len(l));
        assert_eq!(p, Position::new(1, 2));
    }
}
