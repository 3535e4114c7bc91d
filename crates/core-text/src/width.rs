//! Display width helpers.
//!
//! Every column the renderer places on screen flows through `char_width`, which
//! wraps `unicode_width`. Tabs are not measured here; they expand to the next
//! tab stop and are handled by `expand_tabs` / `display_col`.

use unicode_width::UnicodeWidthChar;

/// Terminal cells occupied by `ch`. Control characters occupy none.
pub fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

fn tab_span(column: usize, tab_size: usize) -> usize {
    let size = tab_size.max(1);
    size - (column % size)
}

/// Replace each tab with spaces up to the next multiple of `tab_size`.
pub fn expand_tabs(s: &str, tab_size: usize) -> String {
    let mut out = String::with_capacity(s.len());
    let mut column = 0usize;
    for ch in s.chars() {
        if ch == '\t' {
            let spaces = tab_span(column, tab_size);
            out.extend(std::iter::repeat_n(' ', spaces));
            column += spaces;
        } else {
            out.push(ch);
            column += char_width(ch);
        }
    }
    out
}

/// Screen column of char index `col` in `line` once tabs are expanded.
pub fn display_col(line: &str, col: usize, tab_size: usize) -> usize {
    let mut column = 0usize;
    for ch in line.chars().take(col) {
        column += if ch == '\t' {
            tab_span(column, tab_size)
        } else {
            char_width(ch)
        };
    }
    column
}
