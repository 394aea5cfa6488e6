//! Direct-manipulation drag gestures.
//!
//! Touch moves bypass the animator: the offset follows the pointer
//! immediately.

use crate::frame::Clock;
use crate::state::scroll_handler::EventResponse;
use crate::state::viewport::Viewport;
use crate::surface::{ListenerKind, ListenerRegistration};
use tracing::trace;

/// Pointer position recorded during a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    /// Horizontal pointer position.
    pub x: f64,
    /// Vertical pointer position.
    pub y: f64,
    /// Offset when the gesture started.
    pub scroll_top: f64,
}

/// A gesture in progress. Dropping it releases the move/end listeners.
#[derive(Debug)]
pub(crate) struct TouchGesture {
    pub(crate) pointer: PointerState,
    _listener: Option<ListenerRegistration>,
}

impl<C: Clock> Viewport<C> {
    /// Begin a drag at `(x, y)`. Only starts when the content overflows.
    pub fn touch_start(&mut self, x: f64, y: f64) -> EventResponse {
        if !self.mounted || !self.state.overflows() {
            return EventResponse::Ignored;
        }
        let listener = self
            .surface
            .as_ref()
            .map(|surface| ListenerRegistration::acquire(surface, ListenerKind::TouchGesture));
        trace!(x, y, scroll_top = self.state.scroll_top, "touch start");
        self.gesture = Some(TouchGesture {
            pointer: PointerState {
                x,
                y,
                scroll_top: self.state.scroll_top,
            },
            _listener: listener,
        });
        EventResponse::Handled
    }

    /// Follow the pointer: moving it up by `d` scrolls down by `d`.
    pub fn touch_move(&mut self, x: f64, y: f64) -> EventResponse {
        let Some(gesture) = self.gesture.as_mut() else {
            return EventResponse::Ignored;
        };
        let delta = y - gesture.pointer.y;
        gesture.pointer.x = x;
        gesture.pointer.y = y;
        self.apply_offset(self.state.scroll_top - delta);
        EventResponse::Handled
    }

    /// Finish the drag and release its listeners.
    pub fn touch_end(&mut self) -> EventResponse {
        match self.gesture.take() {
            Some(_) => {
                trace!(scroll_top = self.state.scroll_top, "touch end");
                EventResponse::Handled
            }
            None => EventResponse::Ignored,
        }
    }
}
