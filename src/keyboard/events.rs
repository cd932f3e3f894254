// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard notifications.
//!
//! Listeners are plain closures registered on the keyboard. Every mutating
//! operation dispatches its event synchronously, in registration order, before
//! returning to the caller.

use crate::layout::Language;

/// Notification raised by the keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyboardEvent {
    /// Text was written to the subscribers (by a key or by `write`).
    TextAdded(String),

    /// Text was removed from the end of the subscribers.
    TextUndone(String),

    /// The input language changed.
    LayoutChanged(Language),
}

/// Handle returned when registering a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&KeyboardEvent)>;

/// Registered listeners in registration order.
#[derive(Default)]
pub(crate) struct EventListeners {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl EventListeners {
    pub(crate) fn add(&mut self, listener: impl FnMut(&KeyboardEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub(crate) fn emit(&mut self, event: &KeyboardEvent) {
        tracing::trace!("Dispatching {:?} to {} listener(s)", event, self.listeners.len());
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for EventListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventListeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = EventListeners::default();

        let first = Rc::clone(&log);
        listeners.add(move |event| first.borrow_mut().push(format!("1:{:?}", event)));
        let second = Rc::clone(&log);
        listeners.add(move |event| second.borrow_mut().push(format!("2:{:?}", event)));

        listeners.emit(&KeyboardEvent::TextAdded("a".into()));

        assert_eq!(
            *log.borrow(),
            vec![
                "1:TextAdded(\"a\")".to_string(),
                "2:TextAdded(\"a\")".to_string()
            ]
        );
    }

    #[test]
    fn test_remove_listener() {
        let count = Rc::new(RefCell::new(0));
        let mut listeners = EventListeners::default();

        let counter = Rc::clone(&count);
        let id = listeners.add(move |_| *counter.borrow_mut() += 1);

        listeners.emit(&KeyboardEvent::LayoutChanged(Language::Russian));
        assert!(listeners.remove(id));
        assert!(!listeners.remove(id), "Second removal is a no-op");
        listeners.emit(&KeyboardEvent::LayoutChanged(Language::English));

        assert_eq!(*count.borrow(), 1);
        assert_eq!(listeners.len(), 0);
    }
}
