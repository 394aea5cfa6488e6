//! contentscroll
//!
//! A custom scroll viewport that reimplements scroll physics outside any
//! native scrollbar: wheel, pointer-drag, keyboard and resize-driven
//! re-measurement, with an eased deceleration animation.
//!
//! The library is split the same way as the binary that hosts it:
//! a pure core (`model`, `frame`, `state`, `view_state`) and an impure shell
//! (`surface`, `source`, `view`, `config`, `logging`) that talks to the
//! terminal, the filesystem and the tracing subscriber.

pub mod config;
pub mod frame;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod surface;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
