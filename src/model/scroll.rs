//! Scroll metrics and scroll tuning constants.

/// Duration of an eased scroll transition.
pub const ANIMATION_DURATION_MS: f64 = 240.0;

/// Window after an animation start during which new scroll requests are dropped.
pub const DEBOUNCE_MS: f64 = 40.0;

/// Multiplier applied to half of a wheel delta.
pub const PIXEL_STEP: f64 = 10.0;

/// Offset change requested by one Up/Down key press.
pub const KEY_STEP: f64 = 50.0;

/// Vertical scroll metrics of a viewport.
///
/// Invariant (maintained by the viewport controller, not by this type):
/// `0 <= scroll_top <= max(0, scroll_height - client_height)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    /// Offset of the viewport from the content top.
    pub scroll_top: f64,
    /// Height of the visible window.
    pub client_height: f64,
    /// Total height of the content.
    pub scroll_height: f64,
}

/// Value published to context subscribers.
pub type ScrollSnapshot = ScrollState;

impl ScrollState {
    /// Create metrics at offset zero.
    pub fn new(client_height: f64, scroll_height: f64) -> Self {
        Self {
            scroll_top: 0.0,
            client_height,
            scroll_height,
        }
    }

    /// Largest valid `scroll_top`.
    pub fn max_scroll_top(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }

    /// True when the content is taller than the viewport.
    pub fn overflows(&self) -> bool {
        self.client_height < self.scroll_height
    }

    /// Clamp an arbitrary offset into `[0, max_scroll_top()]`.
    pub fn clamp_offset(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_scroll_top())
    }

    /// The offset the viewport must hold after its metrics changed.
    ///
    /// Content that fits is top-aligned; otherwise an offset past the end is
    /// pulled back to the last valid offset.
    pub fn settled_offset(&self) -> f64 {
        if !self.overflows() {
            0.0
        } else if self.scroll_top > self.max_scroll_top() {
            self.max_scroll_top()
        } else {
            self.scroll_top
        }
    }
}

/// Tuning constants for the scroll physics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Length of an eased transition in milliseconds.
    pub animation_duration_ms: f64,
    /// Re-entry window after an animation start, in milliseconds.
    pub debounce_ms: f64,
    /// Wheel multiplier (`delta / 2 * pixel_step`).
    pub pixel_step: f64,
    /// Offset change per Up/Down key press.
    pub key_step: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: ANIMATION_DURATION_MS,
            debounce_ms: DEBOUNCE_MS,
            pixel_step: PIXEL_STEP,
            key_step: KEY_STEP,
        }
    }
}
