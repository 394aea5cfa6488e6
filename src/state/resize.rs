//! Auto-height measurement.
//!
//! While a viewport has no explicit height it observes its container. Each
//! measurement is deferred to the next frame and only the latest one
//! survives; an earlier pending measurement is cancelled when a newer one
//! arrives.

use crate::frame::{FrameQueue, FrameTask, FrameToken};
use tracing::trace;

/// Tracks whether the container is observed and the pending measurement.
#[derive(Debug, Default)]
pub struct ResizeObserver {
    observing: bool,
    pending: Option<FrameToken>,
}

impl ResizeObserver {
    /// Create a disconnected observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while measurements are accepted.
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// True if a measurement is waiting for the next frame.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Start accepting measurements.
    pub fn connect(&mut self) {
        self.observing = true;
    }

    /// Stop accepting measurements and cancel the pending one.
    pub fn disconnect(&mut self, frames: &mut FrameQueue) {
        self.observing = false;
        if let Some(token) = self.pending.take() {
            frames.cancel(token);
        }
    }

    /// Queue `height` for the next frame, replacing any pending measurement.
    ///
    /// Returns `false` when disconnected.
    pub fn observe(&mut self, height: f64, frames: &mut FrameQueue) -> bool {
        if !self.observing {
            return false;
        }
        if let Some(previous) = self.pending.take() {
            frames.cancel(previous);
        }
        self.pending = Some(frames.request(FrameTask::Remeasure(height)));
        trace!(height, "container measurement queued");
        true
    }

    /// Claim a fired measurement task. Stale tokens are rejected.
    pub fn take_pending(&mut self, token: FrameToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disconnected_observer_ignores_measurements() {
        let mut frames = FrameQueue::new();
        let mut observer = ResizeObserver::new();
        assert!(!observer.observe(120.0, &mut frames));
        assert!(frames.is_empty());
    }

    #[test]
    fn newer_measurement_replaces_pending_one() {
        let mut frames = FrameQueue::new();
        let mut observer = ResizeObserver::new();
        observer.connect();

        observer.observe(100.0, &mut frames);
        observer.observe(140.0, &mut frames);

        let due = frames.take_due();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].1, FrameTask::Remeasure(140.0));
        assert!(observer.take_pending(due[0].0));
        assert!(!observer.has_pending());
    }

    #[test]
    fn disconnect_cancels_pending_measurement() {
        let mut frames = FrameQueue::new();
        let mut observer = ResizeObserver::new();
        observer.connect();
        observer.observe(100.0, &mut frames);

        observer.disconnect(&mut frames);
        assert!(!observer.is_observing());
        assert!(frames.is_empty());
    }

    #[test]
    fn stale_token_is_rejected() {
        let mut frames = FrameQueue::new();
        let mut observer = ResizeObserver::new();
        observer.connect();
        observer.observe(100.0, &mut frames);
        let stale = frames.take_due()[0].0;
        observer.observe(90.0, &mut frames);

        assert!(!observer.take_pending(stale));
        assert!(observer.has_pending());
    }
}
