//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Animate the viewport one key step towards the top. Default: ↑/k
    ScrollUp,
    /// Animate the viewport one key step towards the bottom. Default: ↓/j
    ScrollDown,
    /// Regenerate or re-read the fixture records. Default: r
    Reload,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// True for actions forwarded to the viewport's keyboard handler.
    pub fn is_scroll(self) -> bool {
        matches!(self, KeyAction::ScrollUp | KeyAction::ScrollDown)
    }
}
