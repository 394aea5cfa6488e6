//! Monotonic millisecond clocks.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Source of frame timestamps, in milliseconds on a monotonic timeline.
pub trait Clock {
    /// Current time in milliseconds.
    fn now(&self) -> f64;
}

/// Wall clock measured from the moment it was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Start a clock at zero.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-driven clock. Clones share the same timeline.
///
/// ```
/// use contentscroll::frame::{Clock, ManualClock};
///
/// let clock = ManualClock::new(100.0);
/// let observer = clock.clone();
/// clock.advance(16.0);
/// assert_eq!(observer.now(), 116.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    /// Create a clock reading `start` milliseconds.
    pub fn new(start: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    /// Jump to an absolute time.
    pub fn set(&self, now: f64) {
        self.now.set(now);
    }

    /// Move forward by `ms` milliseconds.
    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}
