//! Key -> Action translation.
//!
//! One table per mode. The command line (opened by `:` in Normal mode)
//! shadows the Normal table while its buffer starts with ':'.

use crate::{Action, EditKind, ModeChange, MotionKind, PromptAction};
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use core_state::Mode;

pub fn translate_key(mode: Mode, pending_command: &str, key: &KeyEvent) -> Option<Action> {
    tracing::trace!(target: "actions.translate", mode=?mode, pending_len=pending_command.len(), key=?key.code, ctrl=key.mods.contains(KeyModifiers::CTRL), "translate_key_attempt");
    match mode {
        Mode::Normal if pending_command.starts_with(':') => command_line(pending_command, key),
        Mode::Normal => normal(key),
        Mode::Insert => insert(key),
        Mode::Search | Mode::Replace => prompt(key),
    }
}

fn command_line(pending_command: &str, key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::CommandCancel),
        KeyCode::Enter => Some(Action::CommandExecute(pending_command.to_string())),
        KeyCode::Backspace => Some(Action::CommandBackspace),
        _ => key.printable().map(Action::CommandChar),
    }
}

fn normal(key: &KeyEvent) -> Option<Action> {
    if key.mods.contains(KeyModifiers::CTRL) {
        return match key.code {
            KeyCode::Char('r') => Some(Action::Redo),
            KeyCode::Char('c') => Some(Action::ForceQuit),
            _ => None,
        };
    }
    let action = match key.code {
        KeyCode::Left => Action::Motion(MotionKind::Left),
        KeyCode::Right => Action::Motion(MotionKind::Right),
        KeyCode::Up => Action::Motion(MotionKind::Up),
        KeyCode::Down => Action::Motion(MotionKind::Down),
        KeyCode::PageUp => Action::Motion(MotionKind::PageUp),
        KeyCode::PageDown => Action::Motion(MotionKind::PageDown),
        KeyCode::Char(c) => match c {
            'h' => Action::Motion(MotionKind::Left),
            'l' => Action::Motion(MotionKind::Right),
            'k' => Action::Motion(MotionKind::Up),
            'j' => Action::Motion(MotionKind::Down),
            '0' => Action::Motion(MotionKind::LineStart),
            '$' => Action::Motion(MotionKind::LineEnd),
            'g' => Action::Motion(MotionKind::Top),
            'G' => Action::Motion(MotionKind::Bottom),
            'i' => Action::ModeChange(ModeChange::EnterInsert),
            '/' => Action::ModeChange(ModeChange::EnterSearch),
            'R' => Action::ModeChange(ModeChange::EnterReplace),
            'x' => Action::Edit(EditKind::DeleteUnder),
            'd' => Action::DeleteLine,
            'y' => Action::YankLine,
            'p' => Action::PasteAfter,
            'u' => Action::Undo,
            'n' => Action::SearchNext,
            'N' => Action::SearchPrevious,
            ':' => Action::CommandStart,
            'q' => Action::Quit,
            _ => return None,
        },
        _ => return None,
    };
    Some(action)
}

fn insert(key: &KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Esc => Action::ModeChange(ModeChange::LeaveInsert),
        KeyCode::Enter => Action::Edit(EditKind::InsertNewline),
        KeyCode::Backspace => Action::Edit(EditKind::Backspace),
        KeyCode::Tab => Action::Edit(EditKind::InsertTab),
        KeyCode::Left => Action::Motion(MotionKind::Left),
        KeyCode::Right => Action::Motion(MotionKind::Right),
        KeyCode::Up => Action::Motion(MotionKind::Up),
        KeyCode::Down => Action::Motion(MotionKind::Down),
        _ => return key.printable().map(|c| Action::Edit(EditKind::InsertChar(c))),
    };
    Some(action)
}

fn prompt(key: &KeyEvent) -> Option<Action> {
    let p = match key.code {
        KeyCode::Esc => PromptAction::Cancel,
        KeyCode::Enter => PromptAction::Confirm,
        KeyCode::Backspace => PromptAction::Backspace,
        _ => return key.printable().map(|c| Action::Prompt(PromptAction::Char(c))),
    };
    Some(Action::Prompt(p))
}
