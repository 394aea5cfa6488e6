//! Display-refresh clock and frame scheduling.
//!
//! The viewport never sleeps or spawns: work that must happen "on the next
//! paint" is queued as a [`FrameTask`] and the host runs the queue once per
//! paint tick. Every queued task is identified by a [`FrameToken`] so the
//! owner can cancel it before it fires.

mod clock;
mod queue;

pub use clock::{Clock, ManualClock, SystemClock};
pub use queue::{FrameQueue, FrameTask, FrameToken};
