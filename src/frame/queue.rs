//! Cancelable next-frame task queue.

/// Handle to a queued frame task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameToken(u64);

/// Work to run on the next paint tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameTask {
    /// Advance the eased scroll animation.
    Animate,
    /// Apply a debounced container height measurement.
    Remeasure(f64),
}

/// Tasks waiting for the next paint tick.
///
/// Tasks requested while a frame is being processed land in the queue
/// again and therefore run on the following frame, never the current one.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_token: u64,
    pending: Vec<(FrameToken, FrameTask)>,
}

impl FrameQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` for the next frame.
    pub fn request(&mut self, task: FrameTask) -> FrameToken {
        self.next_token += 1;
        let token = FrameToken(self.next_token);
        self.pending.push((token, task));
        token
    }

    /// Cancel a queued task.
    ///
    /// Returns `false` if the task already ran or was already cancelled;
    /// cancelling twice is harmless.
    pub fn cancel(&mut self, token: FrameToken) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(t, _)| *t != token);
        self.pending.len() != before
    }

    /// True while `token` has not fired or been cancelled.
    pub fn is_pending(&self, token: FrameToken) -> bool {
        self.pending.iter().any(|(t, _)| *t == token)
    }

    /// True if anything is waiting for a frame.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Number of queued tasks.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop every queued task, returning how many were cancelled.
    pub fn clear(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }

    /// Remove and return everything due on this frame, in request order.
    pub fn take_due(&mut self) -> Vec<(FrameToken, FrameTask)> {
        std::mem::take(&mut self.pending)
    }
}
