//! Keyboard and mouse input mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use habitweek_core::Step;

use crate::messages::TuiMessage;

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Cancel,
    /// Toggle a step on the selected day.
    ToggleStep(Step),
    NextDay,
    PrevDay,
    ToggleTips,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Cancel,
        KeyCode::Char('1') => KeyAction::ToggleStep(Step::Intention),
        KeyCode::Char('2') => KeyAction::ToggleStep(Step::Writing),
        KeyCode::Char('3') => KeyAction::ToggleStep(Step::SocialWindow),
        KeyCode::Char('4') => KeyAction::ToggleStep(Step::Reflection),
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => KeyAction::NextDay,
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => KeyAction::PrevDay,
        KeyCode::Char('t') => KeyAction::ToggleTips,
        _ => KeyAction::None,
    }
}

/// Map a mouse event to a click message; only left-button presses count.
#[must_use]
pub fn map_mouse(event: MouseEvent) -> Option<TuiMessage> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(TuiMessage::Click {
            column: event.column,
            row: event.row,
        }),
        _ => None,
    }
}
