//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Whether keystrokes drive the dashboard or edit the search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    OpenSearch,
    NextCategory,
    PrevCategory,
    NextStatus,
    PrevStatus,
    ResetFilters,
    OpenHelp,
    InputChar(char),
    Backspace,
    Confirm,
    Cancel,
}

pub fn map_key(event: KeyEvent, mode: InputMode) -> Option<Action> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match mode {
        InputMode::Search => match code {
            KeyCode::Enter => Some(Action::Confirm),
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::InputChar(c)),
            _ => None,
        },
        InputMode::Normal => match code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('/') => Some(Action::OpenSearch),
            KeyCode::Char('c') => Some(Action::NextCategory),
            KeyCode::Char('C') => Some(Action::PrevCategory),
            KeyCode::Char('s') => Some(Action::NextStatus),
            KeyCode::Char('S') => Some(Action::PrevStatus),
            KeyCode::Char('x') => Some(Action::ResetFilters),
            KeyCode::Enter => Some(Action::Confirm),
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
            _ => None,
        },
    }
}
