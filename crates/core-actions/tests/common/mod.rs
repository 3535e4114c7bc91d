#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{DispatchResult, handle_key};
use core_events::{KeyCode, KeyEvent};
use core_model::{EditorModel, View};
use core_state::EditorState;
use core_text::{Buffer, Position};

#[derive(Clone, Copy, Debug)]
pub enum Stroke {
    Char(char),
    Esc,
    Enter,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Ctrl(char),
}

impl Stroke {
    pub fn to_event(self) -> KeyEvent {
        match self {
            Stroke::Char(c) => KeyEvent::plain(KeyCode::Char(c)),
            Stroke::Esc => KeyEvent::plain(KeyCode::Esc),
            Stroke::Enter => KeyEvent::plain(KeyCode::Enter),
            Stroke::Backspace => KeyEvent::plain(KeyCode::Backspace),
            Stroke::Tab => KeyEvent::plain(KeyCode::Tab),
            Stroke::Up => KeyEvent::plain(KeyCode::Up),
            Stroke::Down => KeyEvent::plain(KeyCode::Down),
            Stroke::Left => KeyEvent::plain(KeyCode::Left),
            Stroke::Right => KeyEvent::plain(KeyCode::Right),
            Stroke::PageUp => KeyEvent::plain(KeyCode::PageUp),
            Stroke::PageDown => KeyEvent::plain(KeyCode::PageDown),
            Stroke::Ctrl(c) => KeyEvent::ctrl(c),
        }
    }
}

/// Plain characters as strokes (`"iab"` -> `i`, `a`, `b`).
pub fn chars(s: &str) -> Vec<Stroke> {
    s.chars().map(Stroke::Char).collect()
}

pub fn model_with(lines: &[&str], cursor: Position, height: usize) -> EditorModel {
    let state = EditorState::new(Buffer::from_lines(lines));
    EditorModel::with_view(View::new(cursor, height), state)
}

pub fn model(lines: &[&str]) -> EditorModel {
    model_with(lines, Position::origin(), 20)
}

/// Feed strokes until one of them requests quit; returns whether quit fired.
pub fn replay(model: &mut EditorModel, keys: &[Stroke]) -> bool {
    for stroke in keys {
        let res: DispatchResult = handle_key(model, &stroke.to_event());
        if res.quit {
            return true;
        }
    }
    false
}

pub fn lines(model: &EditorModel) -> Vec<String> {
    model.state().buffer().lines()
}

pub fn cursor(model: &EditorModel) -> Position {
    model.view().cursor
}
