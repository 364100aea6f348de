//! Save-event dispatcher
//!
//! Synchronous fan-out to registered listeners, in registration order.
//! Delivery happens on the publishing thread so listeners observe the exact
//! before/after sequencing of the engine: the before-save event of a record
//! is always seen before its after-save event, and records are seen in
//! engine processing order.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use super::event::SaveEvent;

/// A registered save-event observer
pub trait SaveListener: Send + Sync {
    /// Called once per published event, on the publishing thread
    fn on_save_event(&self, event: &SaveEvent);
}

/// Registry of save-event listeners
#[derive(Default)]
pub struct SaveDispatcher {
    listeners: RwLock<Vec<(u64, Arc<dyn SaveListener>)>>,
    next_id: AtomicU64,
}

impl std::fmt::Debug for SaveDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaveDispatcher")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl SaveDispatcher {
    /// Create a dispatcher with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; returns a token for [`Self::unsubscribe`]
    pub fn subscribe(&self, listener: Arc<dyn SaveListener>) -> u64 {
        let token = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        if let Ok(mut listeners) = self.listeners.write() {
            listeners.push((token, listener));
        }
        token
    }

    /// Remove a previously registered listener
    pub fn unsubscribe(&self, token: u64) {
        if let Ok(mut listeners) = self.listeners.write() {
            listeners.retain(|(id, _)| *id != token);
        }
    }

    /// Deliver an event to every registered listener
    pub fn publish(&self, event: &SaveEvent) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();
        let listeners = match self.listeners.read() {
            Ok(listeners) => listeners,
            Err(_) => return outcome,
        };
        outcome.matched = listeners.len();
        for (_, listener) in listeners.iter() {
            listener.on_save_event(event);
            outcome.delivered += 1;
        }
        outcome
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.read().map(|l| l.len()).unwrap_or(0)
    }
}

/// Result of publishing one event
#[derive(Debug, Default)]
pub struct DispatchOutcome {
    /// Listeners registered at publish time
    pub matched: usize,
    /// Listeners actually invoked
    pub delivered: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::event::SavePhase;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<(SavePhase, u64)>>,
    }

    impl SaveListener for Recorder {
        fn on_save_event(&self, event: &SaveEvent) {
            self.seen
                .lock()
                .unwrap()
                .push((event.phase, event.record_id));
        }
    }

    #[test]
    fn test_subscribe_and_publish() {
        let dispatcher = SaveDispatcher::new();
        let recorder = Arc::new(Recorder::default());
        dispatcher.subscribe(recorder.clone());

        let outcome = dispatcher.publish(&SaveEvent::before_save(4, 2));
        assert_eq!(outcome.matched, 1);
        assert_eq!(outcome.delivered, 1);

        let seen = recorder.seen.lock().unwrap();
        assert_eq!(seen.as_slice(), &[(SavePhase::BeforeSave, 4)]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let dispatcher = SaveDispatcher::new();
        let recorder = Arc::new(Recorder::default());
        let token = dispatcher.subscribe(recorder.clone());
        dispatcher.unsubscribe(token);

        let outcome = dispatcher.publish(&SaveEvent::after_save(1, 1));
        assert_eq!(outcome.matched, 0);
        assert!(recorder.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_listeners_fire_in_registration_order() {
        let dispatcher = SaveDispatcher::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        struct Tagged {
            tag: u8,
            order: Arc<Mutex<Vec<u8>>>,
        }
        impl SaveListener for Tagged {
            fn on_save_event(&self, _event: &SaveEvent) {
                self.order.lock().unwrap().push(self.tag);
            }
        }

        dispatcher.subscribe(Arc::new(Tagged {
            tag: 1,
            order: order.clone(),
        }));
        dispatcher.subscribe(Arc::new(Tagged {
            tag: 2,
            order: order.clone(),
        }));

        dispatcher.publish(&SaveEvent::before_save(1, 1));
        assert_eq!(order.lock().unwrap().as_slice(), &[1, 2]);
    }
}
