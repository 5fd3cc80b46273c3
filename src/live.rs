//! Live-update channel between the data layer and the UI loop.
//!
//! The feed is owned by the caller, never by the aggregation/report code.
//! Subscribers register a callback and get every published change event in
//! registration order; dropping the `Subscription` tears the callback down.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, Weak};

/// Which upstream table changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    Projects,
    Notifications,
}

type Callback = Box<dyn Fn(ChangeEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    subscribers: BTreeMap<u64, Callback>,
}

#[derive(Clone, Default)]
pub struct ChangeFeed {
    inner: Arc<Mutex<Registry>>,
}

impl ChangeFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for upstream changes. The returned subscription
    /// keeps the callback alive; dropping it unsubscribes.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(ChangeEvent) + Send + Sync + 'static,
    {
        let mut registry = self.inner.lock().unwrap();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.subscribers.insert(id, Box::new(callback));
        Subscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver an event to every live subscriber, in registration order.
    pub fn publish(&self, event: ChangeEvent) {
        let registry = self.inner.lock().unwrap();
        for callback in registry.subscribers.values() {
            callback(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().unwrap().subscribers.len()
    }
}

pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if let Ok(mut registry) = registry.lock() {
                registry.subscribers.remove(&self.id);
            }
        }
    }
}
