//! Wheel and keyboard input.

use crate::frame::Clock;
use crate::state::viewport::Viewport;
use crossterm::event::KeyCode;
use tracing::trace;

/// Whether the viewport consumed an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    /// Consumed; the host must not propagate it further.
    Handled,
    /// Not for this viewport.
    Ignored,
}

impl EventResponse {
    /// True for [`EventResponse::Handled`].
    pub fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}

impl<C: Clock> Viewport<C> {
    /// Scroll by half the wheel delta times the pixel step.
    pub fn handle_wheel(&mut self, delta_y: f64) -> EventResponse {
        if !self.mounted || !self.state.overflows() {
            return EventResponse::Ignored;
        }
        let target = delta_y / 2.0 * self.config.pixel_step + self.state.scroll_top;
        trace!(delta_y, target, "wheel");
        self.scroll(target);
        EventResponse::Handled
    }

    /// Up/Down arrows scroll by one key step. Other keys are ignored.
    pub fn handle_key(&mut self, code: KeyCode) -> EventResponse {
        if !self.mounted {
            return EventResponse::Ignored;
        }
        let step = match code {
            KeyCode::Down => self.config.key_step,
            KeyCode::Up => -self.config.key_step,
            _ => return EventResponse::Ignored,
        };
        self.scroll(self.state.scroll_top + step);
        EventResponse::Handled
    }
}
