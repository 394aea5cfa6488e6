//! Eased scroll animation (IDLE → ANIMATING → IDLE).
//!
//! The animator only keeps bookkeeping; the viewport decides when to call
//! [`Animator::step`] (on `FrameTask::Animate`) and applies the result.

use crate::frame::{FrameQueue, FrameToken};

/// Quadratic ease-out: fast start, slow finish.
pub fn ease_out_quad(progress: f64) -> f64 {
    progress * (2.0 - progress)
}

/// An eased transition in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Timestamp of the first request of this transition.
    pub start_time: f64,
    /// Deadline; fixed at the first request and never extended.
    pub end_time: f64,
    /// Offset the interpolation starts from (refreshed by each new target).
    pub start_offset: f64,
    /// Offset the interpolation ends at.
    pub target_offset: f64,
    /// Pending frame step, if one is queued.
    pub frame: Option<FrameToken>,
}

/// Result of one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// No transition in flight.
    Idle,
    /// Snap to this offset and finish.
    Finished(f64),
    /// Move to this intermediate offset and keep going.
    Moved(f64),
    /// No movement this frame; keep going.
    Held,
}

/// Owner of the in-flight [`AnimationState`].
#[derive(Debug, Clone)]
pub struct Animator {
    duration_ms: f64,
    state: Option<AnimationState>,
}

impl Animator {
    /// Create an idle animator with a fixed transition length.
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            state: None,
        }
    }

    /// The transition in flight, if any.
    pub fn state(&self) -> Option<&AnimationState> {
        self.state.as_ref()
    }

    /// True between the first accepted request and cleanup.
    pub fn is_animating(&self) -> bool {
        self.state.is_some()
    }

    /// Target of the transition in flight.
    pub fn target(&self) -> Option<f64> {
        self.state.map(|s| s.target_offset)
    }

    /// Queued frame step of the transition in flight.
    pub fn frame_token(&self) -> Option<FrameToken> {
        self.state.and_then(|s| s.frame)
    }

    /// True if a request at `now` falls within `window_ms` of the transition start.
    pub fn is_debounced(&self, now: f64, window_ms: f64) -> bool {
        self.state
            .is_some_and(|s| now - s.start_time < window_ms)
    }

    /// Accept a new target.
    ///
    /// Starts a transition (and its deadline) if none is in flight, otherwise
    /// refreshes the start and target offsets under the existing deadline.
    /// Returns `true` when no frame step is queued yet and the caller must
    /// request one.
    pub fn retarget(&mut self, now: f64, current: f64, target: f64) -> bool {
        match self.state.as_mut() {
            Some(state) => {
                state.start_offset = current;
                state.target_offset = target;
                state.frame.is_none()
            }
            None => {
                self.state = Some(AnimationState {
                    start_time: now,
                    end_time: now + self.duration_ms,
                    start_offset: current,
                    target_offset: target,
                    frame: None,
                });
                true
            }
        }
    }

    /// Record the queued frame step.
    pub fn set_frame(&mut self, token: Option<FrameToken>) {
        if let Some(state) = self.state.as_mut() {
            state.frame = token;
        }
    }

    /// Evaluate the transition at frame timestamp `now`.
    pub fn step(&self, now: f64) -> StepOutcome {
        let Some(state) = self.state else {
            return StepOutcome::Idle;
        };

        if state.target_offset == state.start_offset || now >= state.end_time {
            return StepOutcome::Finished(state.target_offset);
        }

        let length = state.end_time - state.start_time;
        let progress = (now - state.start_time).max(0.0) / length;
        let moved = (state.target_offset - state.start_offset) * ease_out_quad(progress);
        if moved != 0.0 {
            StepOutcome::Moved(state.start_offset + moved)
        } else {
            StepOutcome::Held
        }
    }

    /// Cancel the queued step and forget the transition.
    ///
    /// Safe to call when idle.
    pub fn cleanup(&mut self, frames: &mut FrameQueue) {
        if let Some(token) = self.frame_token() {
            frames.cancel(token);
        }
        self.state = None;
    }
}
