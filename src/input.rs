//! Key bindings: arrows and vim-style letters.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tetris_lite::Command;

/// Action from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Command),
    Restart,
    Quit,
    None,
}

/// Map key event to an action. Unbound keys give `Action::None`.
pub fn key_to_action(key: KeyEvent) -> Action {
    let KeyEvent { code, modifiers, .. } = key;
    if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
        return Action::Quit;
    }
    if !(modifiers.is_empty() || modifiers == KeyModifiers::SHIFT) {
        return Action::None;
    }
    match code {
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r' | 'R') => Action::Restart,
        KeyCode::Left | KeyCode::Char('h') => Action::Move(Command::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::Move(Command::Right),
        KeyCode::Down | KeyCode::Char('j') => Action::Move(Command::Down),
        KeyCode::Up | KeyCode::Char('k') => Action::Move(Command::Rotate),
        _ => Action::None,
    }
}
