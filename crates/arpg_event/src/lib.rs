//! # arpg_event - Synchronous Observer Bus
//!
//! Explicit observer-list event bus with:
//! - Subscribe/unsubscribe via stable subscriber IDs
//! - Synchronous dispatch in registration order
//! - Single-owner, single-thread model (no locking, no queueing)
//!
//! Publishers call [`EventBus::publish`] after their own state is
//! consistent; every handler runs to completion before `publish` returns.

use std::fmt;

/// Handle identifying a registered observer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub u64);

/// Event handler function type
pub type EventHandler<E> = Box<dyn Fn(&E)>;

/// Event bus for publishing to registered observers
pub struct EventBus<E> {
    /// Handlers in registration order
    handlers: Vec<(SubscriberId, EventHandler<E>)>,
    /// Next subscriber ID
    next_subscriber_id: u64,
}

impl<E> EventBus<E> {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_subscriber_id: 1,
        }
    }

    /// Subscribe to events; handlers fire in registration order
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriberId
    where
        F: Fn(&E) + 'static,
    {
        let id = SubscriberId(self.next_subscriber_id);
        self.next_subscriber_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Unsubscribe; returns false if the ID was not registered
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(sub_id, _)| *sub_id != id);
        self.handlers.len() != before
    }

    /// Dispatch an event to every handler, in registration order
    pub fn publish(&self, event: &E) {
        for (_, handler) in &self.handlers {
            handler(event);
        }
    }

    /// Number of registered observers
    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }

    /// Check if any observer is registered
    pub fn has_subscribers(&self) -> bool {
        !self.handlers.is_empty()
    }

    /// Remove all observers
    pub fn clear(&mut self) {
        self.handlers.clear();
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct TestEvent(i32);

    #[test]
    fn test_publish_reaches_subscriber() {
        let mut bus = EventBus::new();
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();

        bus.subscribe(move |e: &TestEvent| sink.borrow_mut().push(e.0));

        bus.publish(&TestEvent(42));
        bus.publish(&TestEvent(7));

        assert_eq!(*received.borrow(), vec![42, 7]);
    }

    #[test]
    fn test_dispatch_in_registration_order() {
        let mut bus = EventBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let sink = order.clone();
            bus.subscribe(move |_: &TestEvent| sink.borrow_mut().push(tag));
        }

        bus.publish(&TestEvent(0));

        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut bus = EventBus::new();
        let received = Rc::new(RefCell::new(0u32));
        let sink = received.clone();

        let id = bus.subscribe(move |_: &TestEvent| *sink.borrow_mut() += 1);
        assert_eq!(bus.subscriber_count(), 1);
        bus.publish(&TestEvent(1));

        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.publish(&TestEvent(2));

        assert_eq!(*received.borrow(), 1);
        assert!(!bus.has_subscribers());
    }

    #[test]
    fn test_clear_removes_all_subscribers() {
        let mut bus: EventBus<TestEvent> = EventBus::new();
        bus.subscribe(|_| {});
        bus.subscribe(|_| {});
        assert_eq!(bus.subscriber_count(), 2);

        bus.clear();

        assert!(!bus.has_subscribers());
        bus.publish(&TestEvent(0));
    }
}
