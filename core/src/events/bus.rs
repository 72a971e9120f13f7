//! Subscription registry for the host's event feed.
//!
//! The bus does not own subscribers. It only records which components asked
//! to receive events; the host consults it before delivering each event.

use hashbrown::HashSet;

/// Stable name of a component, used as its subscription key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(pub &'static str);

#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: HashSet<ComponentId>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the component was already registered.
    pub fn register(&mut self, id: ComponentId) -> bool {
        let added = self.subscribers.insert(id);
        if added {
            tracing::debug!(component = id.0, "Registered event subscriber");
        }
        added
    }

    /// Returns false if the component was not registered.
    pub fn unregister(&mut self, id: ComponentId) -> bool {
        let removed = self.subscribers.remove(&id);
        if removed {
            tracing::debug!(component = id.0, "Unregistered event subscriber");
        }
        removed
    }

    pub fn is_registered(&self, id: ComponentId) -> bool {
        self.subscribers.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}
