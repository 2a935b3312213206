//! Keyboard bindings configuration.

use crate::model::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();

        // Panel
        for code in [KeyCode::Enter, KeyCode::Char(' '), KeyCode::Char('o')] {
            bindings.insert(
                KeyEvent::new(code, KeyModifiers::NONE),
                KeyAction::TogglePanel,
            );
        }
        bindings.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyAction::ClosePanel,
        );

        // Item count. '+' arrives with SHIFT on most layouts.
        bindings.insert(
            KeyEvent::new(KeyCode::Char('+'), KeyModifiers::NONE),
            KeyAction::MoreItems,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT),
            KeyAction::MoreItems,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('='), KeyModifiers::NONE),
            KeyAction::MoreItems,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('-'), KeyModifiers::NONE),
            KeyAction::FewerItems,
        );

        bindings.insert(
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE),
            KeyAction::CycleAlign,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE),
            KeyAction::ToggleAllExpanded,
        );

        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}
