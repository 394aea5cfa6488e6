//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only code and modifiers take part in the lookup; key kind and state
    /// (press/repeat, keypad flags) are ignored.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    /// Bind `key` to `action`, replacing any earlier binding.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Arrow keys and vim-style scrolling
        bindings.insert(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE), KeyAction::ScrollUp);
        bindings.insert(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE), KeyAction::ScrollDown);
        bindings.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            KeyAction::ScrollUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            KeyAction::ScrollDown,
        );

        bindings.insert(
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE),
            KeyAction::Reload,
        );

        bindings.insert(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE), KeyAction::Quit);
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_vim_keys_scroll() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Up)), Some(KeyAction::ScrollUp));
        assert_eq!(bindings.get(key(KeyCode::Char('k'))), Some(KeyAction::ScrollUp));
        assert_eq!(bindings.get(key(KeyCode::Down)), Some(KeyAction::ScrollDown));
        assert_eq!(bindings.get(key(KeyCode::Char('j'))), Some(KeyAction::ScrollDown));
    }

    #[test]
    fn quit_and_reload() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(key(KeyCode::Char('q'))), Some(KeyAction::Quit));
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
        assert_eq!(bindings.get(key(KeyCode::Char('r'))), Some(KeyAction::Reload));
    }

    #[test]
    fn plain_c_is_unbound() {
        assert_eq!(KeyBindings::default().get(key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn repeat_events_match_press_bindings() {
        let mut repeat = key(KeyCode::Down);
        repeat.kind = KeyEventKind::Repeat;
        assert_eq!(KeyBindings::default().get(repeat), Some(KeyAction::ScrollDown));
    }

    #[test]
    fn bind_overrides_existing() {
        let mut bindings = KeyBindings::default();
        bindings.bind(key(KeyCode::Char('j')), KeyAction::Reload);
        assert_eq!(bindings.get(key(KeyCode::Char('j'))), Some(KeyAction::Reload));
    }
}
