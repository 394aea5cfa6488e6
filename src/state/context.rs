//! Scroll metrics shared with nested consumers.

use crate::model::ScrollSnapshot;
use tracing::trace;

/// Callback receiving every published snapshot.
pub type ContextListener = Box<dyn FnMut(&ScrollSnapshot)>;

/// Handle returned by [`ScrollContext::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Subscriber registry with change deduplication.
#[derive(Default)]
pub struct ScrollContext {
    next_id: u64,
    subscribers: Vec<(SubscriberId, ContextListener)>,
    last_published: Option<ScrollSnapshot>,
}

impl std::fmt::Debug for ScrollContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollContext")
            .field("subscribers", &self.subscribers.len())
            .field("last_published", &self.last_published)
            .finish()
    }
}

impl ScrollContext {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` and hand it `current` right away.
    pub fn subscribe(&mut self, mut listener: ContextListener, current: ScrollSnapshot) -> SubscriberId {
        self.next_id += 1;
        let id = SubscriberId(self.next_id);
        listener(&current);
        self.subscribers.push((id, listener));
        id
    }

    /// Remove a listener. Returns `false` for unknown ids.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// True when nobody is listening.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Deliver `snapshot` to every listener unless it equals the last one sent.
    pub fn publish(&mut self, snapshot: ScrollSnapshot) {
        if self.last_published == Some(snapshot) {
            return;
        }
        self.last_published = Some(snapshot);
        trace!(
            scroll_top = snapshot.scroll_top,
            client_height = snapshot.client_height,
            scroll_height = snapshot.scroll_height,
            listeners = self.subscribers.len(),
            "publishing scroll snapshot"
        );
        for (_, listener) in &mut self.subscribers {
            listener(&snapshot);
        }
    }
}
