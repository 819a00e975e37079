//! Single-topic emitter
//!
//! Handlers run synchronously inside `emit`, in registration order. The handler
//! list is snapshotted before delivery, so a handler may register or unregister
//! (itself included) without deadlocking; the change applies from the next emit.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

/// Handle returned by [`Emitter::register`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(u64);

type Handler<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// One publish/subscribe topic
pub struct Emitter<T> {
    handlers: RwLock<Vec<(HandlerId, Handler<T>)>>,
    next_id: AtomicU64,
}

impl<T> Emitter<T> {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Append a handler; it receives every later emit
    pub fn register(&self, handler: impl Fn(&T) + Send + Sync + 'static) -> HandlerId {
        let id = HandlerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.handlers.write().push((id, Arc::new(handler)));
        id
    }

    /// Remove a handler. Unknown ids are a no-op; returns whether one was removed.
    pub fn unregister(&self, id: HandlerId) -> bool {
        let mut handlers = self.handlers.write();
        let before = handlers.len();
        handlers.retain(|(h, _)| *h != id);
        handlers.len() != before
    }

    /// Deliver to all handlers, in registration order
    pub fn emit(&self, data: &T) {
        let snapshot: Vec<Handler<T>> = self
            .handlers
            .read()
            .iter()
            .map(|(_, h)| Arc::clone(h))
            .collect();
        for handler in snapshot {
            handler(data);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    pub fn clear(&self) {
        self.handlers.write().clear();
    }
}

impl<T> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Emitter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("handlers", &self.handler_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_registration_order() {
        let emitter = Emitter::<u32>::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for tag in ["a", "b", "c"] {
            let seen = Arc::clone(&seen);
            emitter.register(move |v: &u32| seen.lock().push(format!("{tag}{v}")));
        }
        emitter.emit(&1);

        assert_eq!(*seen.lock(), vec!["a1", "b1", "c1"]);
    }

    #[test]
    fn test_unregister() {
        let emitter = Emitter::<u32>::new();
        let count = Arc::new(AtomicU64::new(0));
        let c = Arc::clone(&count);
        let id = emitter.register(move |_| {
            c.fetch_add(1, Ordering::Relaxed);
        });

        emitter.emit(&0);
        assert!(emitter.unregister(id));
        emitter.emit(&0);

        assert_eq!(count.load(Ordering::Relaxed), 1);
        assert_eq!(emitter.handler_count(), 0);
    }

    #[test]
    fn test_unregister_unknown_is_noop() {
        let emitter = Emitter::<u32>::new();
        emitter.register(|_| {});
        assert!(!emitter.unregister(HandlerId(999)));
        assert_eq!(emitter.handler_count(), 1);
    }

    #[test]
    fn test_handler_may_register_during_emit() {
        let emitter = Arc::new(Emitter::<u32>::new());
        let inner = Arc::clone(&emitter);
        emitter.register(move |_| {
            inner.register(|_| {});
        });

        emitter.emit(&0);
        assert_eq!(emitter.handler_count(), 2);
    }

    #[test]
    fn test_emit_without_handlers() {
        let emitter = Emitter::<String>::default();
        emitter.emit(&"nobody listening".to_string());
        emitter.clear();
        assert_eq!(emitter.handler_count(), 0);
    }
}
