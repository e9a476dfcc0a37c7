//! TUI message types (Elm Messages).

use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiMessage {
    /// Key press mapped to an action.
    Key(KeyAction),
    /// Left mouse button pressed at a terminal cell.
    Click { column: u16, row: u16 },
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_variants() {
        let msg = TuiMessage::Key(KeyAction::ToggleTips);
        assert!(matches!(msg, TuiMessage::Key(KeyAction::ToggleTips)));

        let msg = TuiMessage::Click { column: 3, row: 7 };
        assert!(matches!(msg, TuiMessage::Click { .. }));

        let msg = TuiMessage::Resize {
            width: 80,
            height: 24,
        };
        assert!(matches!(msg, TuiMessage::Resize { .. }));
    }
}
