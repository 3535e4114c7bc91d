//! Blocking input source: crossterm terminal events -> `core_events::Event`.
//!
//! Only key presses and resizes reach the editor. Key releases and repeats,
//! mouse, focus and paste events are dropped, as are keys outside the small
//! named set the editor binds.

use anyhow::Result;
use core_events::{Event, InputEvent, KeyCode, KeyEvent, KeyModifiers};
use crossterm::event::{
    Event as CEvent, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind as CKind,
    KeyModifiers as CMods,
};

/// Block until the next event the editor understands.
pub fn read_event() -> Result<Event> {
    loop {
        let raw = crossterm::event::read()?;
        if let Some(ev) = translate_event(raw) {
            return Ok(ev);
        }
    }
}

/// Map one crossterm event; `None` for anything the editor ignores.
pub fn translate_event(raw: CEvent) -> Option<Event> {
    match raw {
        CEvent::Key(key) => build_key_event(&key).map(|k| Event::Input(InputEvent::Key(k))),
        CEvent::Resize(w, h) => {
            tracing::trace!(target: "input.event", w, h, "resize");
            Some(Event::Input(InputEvent::Resize(w, h)))
        }
        _ => None,
    }
}

pub(crate) fn build_key_event(key: &CKeyEvent) -> Option<KeyEvent> {
    if key.kind != CKind::Press {
        return None;
    }
    let code = map_key_code(key.code)?;
    let mods = map_mods(key.modifiers);
    tracing::trace!(target: "input.key", printable = matches!(code, KeyCode::Char(_)), ctrl = mods.contains(KeyModifiers::CTRL), "key_press");
    Some(KeyEvent::new(code, mods))
}

fn map_key_code(code: CKeyCode) -> Option<KeyCode> {
    let mapped = match code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Tab => KeyCode::Tab,
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        CKeyCode::PageUp => KeyCode::PageUp,
        CKeyCode::PageDown => KeyCode::PageDown,
        _ => return None,
    };
    Some(mapped)
}

pub(crate) fn map_mods(m: CMods) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if m.contains(CMods::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if m.contains(CMods::ALT) {
        out |= KeyModifiers::ALT;
    }
    if m.contains(CMods::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}
