//! Host event surface and scoped listener registrations.
//!
//! A viewport needs host-level listeners for as long as it is mounted (page
//! scroll interception) or for the length of one pointer gesture. Each is
//! held as a [`ListenerRegistration`], which detaches itself exactly once
//! when dropped.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::{trace, warn};

/// What a listener registration is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Page-level wheel/touch-move interception, held while mounted.
    PageIntercept,
    /// Move/end tracking for one pointer gesture.
    TouchGesture,
}

/// Identifier handed out by an [`EventSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// The hosting environment's listener registry.
pub trait EventSurface {
    /// Install listeners of the given kind.
    fn attach(&mut self, kind: ListenerKind) -> ListenerId;

    /// Remove listeners previously installed by `attach`.
    fn detach(&mut self, id: ListenerId);
}

/// Surface shared between the host and the viewports it mounts.
pub type SharedSurface = Rc<RefCell<dyn EventSurface>>;

/// A live listener registration, detached on drop.
pub struct ListenerRegistration {
    surface: SharedSurface,
    id: ListenerId,
    kind: ListenerKind,
}

impl ListenerRegistration {
    /// Attach listeners of `kind` to `surface`.
    pub fn acquire(surface: &SharedSurface, kind: ListenerKind) -> Self {
        let id = surface.borrow_mut().attach(kind);
        trace!(?kind, id = id.0, "listener attached");
        Self {
            surface: Rc::clone(surface),
            id,
            kind,
        }
    }

    /// The surface-assigned id.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// What this registration listens for.
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }
}

impl fmt::Debug for ListenerRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistration")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl Drop for ListenerRegistration {
    fn drop(&mut self) {
        match self.surface.try_borrow_mut() {
            Ok(mut surface) => {
                surface.detach(self.id);
                trace!(kind = ?self.kind, id = self.id.0, "listener detached");
            }
            Err(_) => warn!(
                kind = ?self.kind,
                id = self.id.0,
                "event surface busy during detach; listener leaked"
            ),
        }
    }
}

/// In-memory surface that only tracks which listeners are attached.
///
/// Used by headless hosts and tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    next_id: u64,
    active: Vec<(ListenerId, ListenerKind)>,
    attached_total: usize,
    detached_total: usize,
}

impl RecordingSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty surface behind `Rc<RefCell<_>>`.
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Number of currently attached listeners of `kind`.
    pub fn active(&self, kind: ListenerKind) -> usize {
        self.active.iter().filter(|(_, k)| *k == kind).count()
    }

    /// True when nothing is attached.
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Total `attach` calls so far.
    pub fn attached_total(&self) -> usize {
        self.attached_total
    }

    /// Total `detach` calls so far.
    pub fn detached_total(&self) -> usize {
        self.detached_total
    }
}

impl EventSurface for RecordingSurface {
    fn attach(&mut self, kind: ListenerKind) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.active.push((id, kind));
        self.attached_total += 1;
        id
    }

    fn detach(&mut self, id: ListenerId) {
        self.active.retain(|(active, _)| *active != id);
        self.detached_total += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_detaches_on_drop() {
        let recording = RecordingSurface::shared();
        let surface: SharedSurface = recording.clone();

        let registration = ListenerRegistration::acquire(&surface, ListenerKind::PageIntercept);
        assert_eq!(registration.kind(), ListenerKind::PageIntercept);
        assert_eq!(recording.borrow().active(ListenerKind::PageIntercept), 1);

        drop(registration);
        assert!(recording.borrow().is_idle());
        assert_eq!(recording.borrow().detached_total(), 1);
    }

    #[test]
    fn registrations_are_independent() {
        let recording = RecordingSurface::shared();
        let surface: SharedSurface = recording.clone();

        let page = ListenerRegistration::acquire(&surface, ListenerKind::PageIntercept);
        let gesture = ListenerRegistration::acquire(&surface, ListenerKind::TouchGesture);
        assert_ne!(page.id(), gesture.id());

        drop(gesture);
        let surface = recording.borrow();
        assert_eq!(surface.active(ListenerKind::PageIntercept), 1);
        assert_eq!(surface.active(ListenerKind::TouchGesture), 0);
        drop(surface);
        drop(page);
    }

    #[test]
    fn drop_while_surface_borrowed_does_not_panic() {
        let recording = RecordingSurface::shared();
        let surface: SharedSurface = recording.clone();
        let registration = ListenerRegistration::acquire(&surface, ListenerKind::TouchGesture);

        let guard = recording.borrow_mut();
        drop(registration);
        drop(guard);

        assert_eq!(recording.borrow().detached_total(), 0);
    }
}
