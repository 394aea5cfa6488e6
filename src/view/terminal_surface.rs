//! Event surface backed by the terminal.
//!
//! Page interception maps onto crossterm mouse capture: while any viewport
//! holds a [`ListenerKind::PageIntercept`] registration the terminal reports
//! wheel and drag events to us instead of scrolling its own scrollback.

use crate::surface::{EventSurface, ListenerId, ListenerKind};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use tracing::{debug, warn};

/// Mouse-capture surface writing control sequences to `W`.
#[derive(Debug)]
pub struct TerminalSurface<W: Write> {
    out: W,
    next_id: u64,
    active: Vec<(ListenerId, ListenerKind)>,
}

impl<W: Write> TerminalSurface<W> {
    /// Wrap a terminal writer.
    pub fn new(out: W) -> Self {
        Self {
            out,
            next_id: 0,
            active: Vec::new(),
        }
    }

    /// Wrap a terminal writer behind `Rc<RefCell<_>>`.
    pub fn shared(out: W) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new(out)))
    }

    /// True while mouse capture is enabled.
    pub fn is_capturing(&self) -> bool {
        self.active
            .iter()
            .any(|(_, kind)| *kind == ListenerKind::PageIntercept)
    }

    /// The underlying writer.
    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> EventSurface for TerminalSurface<W> {
    fn attach(&mut self, kind: ListenerKind) -> ListenerId {
        if kind == ListenerKind::PageIntercept && !self.is_capturing() {
            match execute!(self.out, EnableMouseCapture) {
                Ok(()) => debug!("mouse capture enabled"),
                Err(err) => warn!(error = %err, "failed to enable mouse capture"),
            }
        }
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.active.push((id, kind));
        id
    }

    fn detach(&mut self, id: ListenerId) {
        let Some(position) = self.active.iter().position(|(active, _)| *active == id) else {
            return;
        };
        let (_, kind) = self.active.remove(position);
        if kind == ListenerKind::PageIntercept && !self.is_capturing() {
            match execute!(self.out, DisableMouseCapture) {
                Ok(()) => debug!("mouse capture released"),
                Err(err) => warn!(error = %err, "failed to release mouse capture"),
            }
        }
    }
}
