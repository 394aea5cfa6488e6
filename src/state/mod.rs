//! Viewport state machine: the scroll controller and its input handlers.
//!
//! Everything here is single-threaded and synchronous. The host feeds input
//! events and paint ticks into a [`Viewport`]; the viewport mutates its own
//! [`ScrollState`](crate::model::ScrollState) and reports every offset change
//! to its `on_scroll` callback and its context subscribers.

pub mod animator;
pub mod context;
pub mod resize;
pub mod scroll_handler;
pub mod touch_handler;
pub mod viewport;

pub use animator::{ease_out_quad, AnimationState, Animator, StepOutcome};
pub use context::{ContextListener, ScrollContext, SubscriberId};
pub use resize::ResizeObserver;
pub use scroll_handler::EventResponse;
pub use touch_handler::PointerState;
pub use viewport::{ScrollCallback, Viewport};
