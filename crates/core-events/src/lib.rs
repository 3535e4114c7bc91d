//! Key protocol shared by the input driver and the editing engine.
//!
//! The engine only distinguishes a printable character from a small set of
//! named keys (plus the CTRL modifier for `Ctrl-R` / `Ctrl-C`).

use std::fmt;

/// Top-level event consumed by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Input(InputEvent),
}

/// Normalized input events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    /// Terminal resize (columns, rows).
    Resize(u16, u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }
    /// Unmodified key.
    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }
    pub fn ctrl(ch: char) -> Self {
        Self::new(KeyCode::Char(ch), KeyModifiers::CTRL)
    }
    /// A printable character with no CTRL/ALT chord attached.
    pub fn printable(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c)
                if !self.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT)
                    && !c.is_control() =>
            {
                Some(c)
            }
            _ => None,
        }
    }
}

/// Logical key identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        const CTRL = 0b0000_0001;
        const ALT  = 0b0000_0010;
        const SHIFT= 0b0000_0100;
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{:?}", self.code, self.mods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_display() {
        let k = KeyEvent::ctrl('x');
        let s = format!("{}", k);
        assert!(s.contains("Char"));
    }

    #[test]
    fn printable_excludes_chords_and_controls() {
        assert_eq!(KeyEvent::plain(KeyCode::Char('a')).printable(), Some('a'));
        assert_eq!(
            KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT).printable(),
            Some('A')
        );
        assert_eq!(KeyEvent::ctrl('r').printable(), None);
        assert_eq!(KeyEvent::plain(KeyCode::Char('\u{7}')).printable(), None);
        assert_eq!(KeyEvent::plain(KeyCode::Enter).printable(), None);
    }
}
