//! The scroll viewport controller.
//!
//! A [`Viewport`] owns the scroll metrics of one clipped container. Offsets
//! only change through [`Viewport::apply_offset`], which clamps, reports to
//! `on_scroll` and publishes to context subscribers, so the range invariant
//! holds after every public call.

use crate::frame::{Clock, FrameQueue, FrameTask, SystemClock};
use crate::model::{ScrollConfig, ScrollSnapshot, ScrollState};
use crate::state::animator::{AnimationState, Animator, StepOutcome};
use crate::state::context::{ScrollContext, SubscriberId};
use crate::state::resize::ResizeObserver;
use crate::state::touch_handler::{PointerState, TouchGesture};
use crate::surface::{ListenerKind, ListenerRegistration, SharedSurface};
use tracing::{debug, trace};

/// Callback invoked with every new `scroll_top`.
pub type ScrollCallback = Box<dyn FnMut(f64)>;

/// Scroll controller for one viewport.
///
/// Construct with [`Viewport::new`], configure with the builder methods,
/// then [`mount`](Viewport::mount). Input handlers are ignored while
/// unmounted.
///
/// ```
/// use contentscroll::frame::ManualClock;
/// use contentscroll::state::Viewport;
///
/// let clock = ManualClock::new(1000.0);
/// let mut viewport = Viewport::new(300.0, clock.clone()).height(100.0);
/// viewport.mount();
///
/// viewport.scroll(100.0);
/// clock.advance(240.0);
/// viewport.tick();
/// assert_eq!(viewport.scroll_top(), 100.0);
/// ```
pub struct Viewport<C: Clock = SystemClock> {
    pub(super) clock: C,
    pub(super) config: ScrollConfig,
    pub(super) state: ScrollState,
    pub(super) explicit_height: Option<f64>,
    pub(super) frames: FrameQueue,
    pub(super) animator: Animator,
    pub(super) resize: ResizeObserver,
    pub(super) gesture: Option<TouchGesture>,
    pub(super) context: ScrollContext,
    pub(super) on_scroll: Option<ScrollCallback>,
    pub(super) surface: Option<SharedSurface>,
    pub(super) page_listener: Option<ListenerRegistration>,
    pub(super) mounted: bool,
}

/// Non-positive and non-finite heights mean "measure the container".
fn normalize_height(height: f64) -> Option<f64> {
    (height.is_finite() && height > 0.0).then_some(height)
}

impl<C: Clock> Viewport<C> {
    /// Create an unmounted, auto-height viewport over content of `scroll_height`.
    pub fn new(scroll_height: f64, clock: C) -> Self {
        let config = ScrollConfig::default();
        Self {
            clock,
            config,
            state: ScrollState::new(0.0, scroll_height.max(0.0)),
            explicit_height: None,
            frames: FrameQueue::new(),
            animator: Animator::new(config.animation_duration_ms),
            resize: ResizeObserver::new(),
            gesture: None,
            context: ScrollContext::new(),
            on_scroll: None,
            surface: None,
            page_listener: None,
            mounted: false,
        }
    }

    /// Use a fixed viewport height instead of measuring.
    #[must_use]
    pub fn height(mut self, height: f64) -> Self {
        self.explicit_height = normalize_height(height);
        if let Some(height) = self.explicit_height {
            self.state.client_height = height;
            self.state.scroll_top = self.state.settled_offset();
        }
        self
    }

    /// Replace the scroll tuning.
    #[must_use]
    pub fn config(mut self, config: ScrollConfig) -> Self {
        self.config = config;
        self.animator = Animator::new(config.animation_duration_ms);
        self
    }

    /// Report every offset change to `callback`.
    #[must_use]
    pub fn on_scroll(mut self, callback: impl FnMut(f64) + 'static) -> Self {
        self.on_scroll = Some(Box::new(callback));
        self
    }

    /// Attach listener registrations to `surface`.
    #[must_use]
    pub fn surface(mut self, surface: SharedSurface) -> Self {
        self.surface = Some(surface);
        self
    }

    // ===== Lifecycle =====

    /// Start observing, intercept page scrolling and report the initial offset.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        if self.explicit_height.is_none() {
            self.resize.connect();
        }
        if let Some(surface) = &self.surface {
            self.page_listener = Some(ListenerRegistration::acquire(
                surface,
                ListenerKind::PageIntercept,
            ));
        }

        debug!(
            scroll_height = self.state.scroll_height,
            client_height = self.state.client_height,
            auto_height = self.explicit_height.is_none(),
            "viewport mounted"
        );
        let top = self.state.scroll_top;
        if let Some(callback) = self.on_scroll.as_mut() {
            callback(top);
        }
        self.context.publish(self.state);
    }

    /// Cancel the animation, all frame tasks and every listener registration.
    ///
    /// Idempotent. Also runs on drop.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.animator.cleanup(&mut self.frames);
        self.resize.disconnect(&mut self.frames);
        self.gesture = None;
        self.page_listener = None;
        let dropped = self.frames.clear();
        debug!(dropped, "viewport unmounted");
    }

    // ===== Accessors =====

    /// Current offset.
    pub fn scroll_top(&self) -> f64 {
        self.state.scroll_top
    }

    /// Current viewport height.
    pub fn client_height(&self) -> f64 {
        self.state.client_height
    }

    /// Current content height.
    pub fn scroll_height(&self) -> f64 {
        self.state.scroll_height
    }

    /// Largest valid offset.
    pub fn max_scroll_top(&self) -> f64 {
        self.state.max_scroll_top()
    }

    /// All three metrics at once.
    pub fn snapshot(&self) -> ScrollSnapshot {
        self.state
    }

    /// Active scroll tuning.
    pub fn scroll_config(&self) -> &ScrollConfig {
        &self.config
    }

    /// The eased transition in flight.
    pub fn animation(&self) -> Option<&AnimationState> {
        self.animator.state()
    }

    /// True while an eased transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// True if work is waiting for the next frame.
    pub fn has_pending_frames(&self) -> bool {
        self.frames.has_pending()
    }

    /// True between `mount` and `unmount`.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// True while the container height is measured rather than fixed.
    pub fn is_auto_height(&self) -> bool {
        self.explicit_height.is_none()
    }

    /// True during a pointer gesture.
    pub fn is_touching(&self) -> bool {
        self.gesture.is_some()
    }

    /// Last recorded pointer of the active gesture.
    pub fn pointer(&self) -> Option<PointerState> {
        self.gesture.as_ref().map(|g| g.pointer)
    }

    // ===== Prop updates =====

    /// Change the content height, clamping the offset if needed.
    pub fn set_scroll_height(&mut self, scroll_height: f64) {
        let scroll_height = scroll_height.max(0.0);
        if scroll_height == self.state.scroll_height {
            return;
        }
        debug!(scroll_height, "content height changed");
        self.update_metrics(self.state.client_height, scroll_height);
    }

    /// Switch between a fixed height (`Some`) and measuring (`None`).
    ///
    /// Non-positive heights count as `None`.
    pub fn set_height(&mut self, height: Option<f64>) {
        match height.and_then(normalize_height) {
            Some(height) => {
                self.explicit_height = Some(height);
                self.resize.disconnect(&mut self.frames);
                if height != self.state.client_height {
                    self.update_metrics(height, self.state.scroll_height);
                }
            }
            None => {
                self.explicit_height = None;
                if self.mounted {
                    self.resize.connect();
                }
            }
        }
    }

    /// Report a measured container height; applied on the next frame.
    ///
    /// Ignored unless mounted with auto height.
    pub fn observe_resize(&mut self, height: f64) -> bool {
        self.resize.observe(height.max(0.0), &mut self.frames)
    }

    // ===== Frames =====

    /// Run everything due at frame timestamp `now`.
    ///
    /// Returns `true` if any metric changed.
    pub fn on_frame(&mut self, now: f64) -> bool {
        let before = self.state;
        for (token, task) in self.frames.take_due() {
            match task {
                FrameTask::Animate => {
                    if self.animator.frame_token() == Some(token) {
                        self.animator.set_frame(None);
                        self.step_animation(now);
                    }
                }
                FrameTask::Remeasure(height) => {
                    if self.resize.take_pending(token) && height != self.state.client_height {
                        debug!(height, "container height measured");
                        self.update_metrics(height, self.state.scroll_height);
                    }
                }
            }
        }
        self.state != before
    }

    /// Run a frame at the viewport's own clock.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        self.on_frame(now)
    }

    fn step_animation(&mut self, now: f64) {
        match self.animator.step(now) {
            StepOutcome::Idle => {}
            StepOutcome::Finished(target) => {
                trace!(target, "animation finished");
                self.animator.cleanup(&mut self.frames);
                self.apply_offset(target);
            }
            StepOutcome::Moved(offset) => {
                trace!(offset, "animation step");
                self.apply_offset(offset);
                self.schedule_animation();
            }
            StepOutcome::Held => self.schedule_animation(),
        }
    }

    fn schedule_animation(&mut self) {
        if self.animator.is_animating() {
            let token = self.frames.request(FrameTask::Animate);
            self.animator.set_frame(Some(token));
        }
    }

    // ===== Scrolling =====

    /// Animate towards `target`, clamped to the valid range.
    ///
    /// Dropped when the content fits, within the debounce window of the
    /// current transition, or when pushing beyond an edge the viewport already
    /// sits on. A target equal to the current offset (an edge included)
    /// cancels the transition.
    pub fn scroll(&mut self, target: f64) {
        if !self.mounted || target.is_nan() || !self.state.overflows() {
            return;
        }

        let now = self.clock.now();
        if self.animator.is_debounced(now, self.config.debounce_ms) {
            trace!(target, "scroll request debounced");
            return;
        }

        let current = self.state.scroll_top;
        let max = self.state.max_scroll_top();
        let mut target = target;
        if target < 0.0 {
            if current == 0.0 {
                return;
            }
            target = 0.0;
        }
        if target > max {
            if current == max {
                return;
            }
            target = max;
        }

        if target == current {
            self.animator.cleanup(&mut self.frames);
            return;
        }

        debug!(from = current, to = target, "scroll requested");
        if self.animator.retarget(now, current, target) {
            let token = self.frames.request(FrameTask::Animate);
            self.animator.set_frame(Some(token));
        }
    }

    /// Jump to `value` without easing, if it lies within the valid range.
    ///
    /// Returns whether the value was accepted.
    pub fn set_scroll_top(&mut self, value: f64) -> bool {
        let accepted = self.mounted
            && value >= 0.0
            && self.state.overflows()
            && value <= self.state.max_scroll_top();
        if accepted {
            self.apply_offset(value);
        }
        accepted
    }

    /// Whether a page-level wheel or touch-move must be suppressed.
    pub fn intercepts_page_scroll(&self, pointer_inside: bool) -> bool {
        self.mounted && pointer_inside && self.state.overflows()
    }

    // ===== Context =====

    /// Receive the current snapshot now and every change after it.
    pub fn subscribe(&mut self, listener: impl FnMut(&ScrollSnapshot) + 'static) -> SubscriberId {
        self.context.subscribe(Box::new(listener), self.state)
    }

    /// Stop a subscription. Returns `false` for unknown ids.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.context.unsubscribe(id)
    }

    // ===== Internals =====

    pub(super) fn apply_offset(&mut self, offset: f64) {
        let offset = self.state.clamp_offset(offset);
        if offset == self.state.scroll_top {
            return;
        }
        self.state.scroll_top = offset;
        if self.animator.target() == Some(offset) {
            self.animator.cleanup(&mut self.frames);
        }
        if let Some(callback) = self.on_scroll.as_mut() {
            callback(offset);
        }
        self.context.publish(self.state);
    }

    fn update_metrics(&mut self, client_height: f64, scroll_height: f64) {
        self.state.client_height = client_height;
        self.state.scroll_height = scroll_height;
        let settled = self.state.settled_offset();
        if settled != self.state.scroll_top {
            self.apply_offset(settled);
        }
        self.context.publish(self.state);
    }
}

impl<C: Clock> Drop for Viewport<C> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<C: Clock> std::fmt::Debug for Viewport<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewport")
            .field("state", &self.state)
            .field("explicit_height", &self.explicit_height)
            .field("animation", &self.animator.state())
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "viewport_tests.rs"]
mod tests;
