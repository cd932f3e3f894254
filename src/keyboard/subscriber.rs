// SPDX-License-Identifier: GPL-3.0-only

//! Subscribed text targets.
//!
//! A subscriber is any widget with readable and writable text. The keyboard
//! holds subscribers by [`Weak`] reference: it never owns them, and a target
//! that has been dropped is skipped and pruned on the next pass.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Capability of a widget that can receive text from the keyboard.
pub trait TextTarget {
    /// Identifier used by `remove_subscriber` and `contains`.
    fn name(&self) -> &str;

    /// Current text.
    fn text(&self) -> &str;

    /// Replaces the text.
    fn set_text(&mut self, text: String);

    /// Appends to the end of the text.
    fn append(&mut self, text: &str) {
        let mut current = self.text().to_string();
        current.push_str(text);
        self.set_text(current);
    }
}

/// Shared handle to a text target, as owned by the host application.
pub type SharedTarget = Rc<RefCell<dyn TextTarget>>;

/// A plain named text buffer.
///
/// Hosts without a native text widget (and tests) use this as a subscriber.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    name: String,
    text: String,
}

impl TextBuffer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: String::new(),
        }
    }

    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Wraps the buffer for sharing with the keyboard.
    pub fn shared(self) -> Rc<RefCell<TextBuffer>> {
        Rc::new(RefCell::new(self))
    }
}

impl TextTarget for TextBuffer {
    fn name(&self) -> &str {
        &self.name
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }

    fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }
}

/// Ordered list of non-owning subscriber references.
#[derive(Default)]
pub(crate) struct SubscriberList {
    targets: Vec<Weak<RefCell<dyn TextTarget>>>,
}

impl SubscriberList {
    pub(crate) fn add(&mut self, target: &SharedTarget) {
        self.targets.push(Rc::downgrade(target));
    }

    pub(crate) fn replace(&mut self, targets: &[SharedTarget]) {
        self.targets = targets.iter().map(Rc::downgrade).collect();
    }

    /// Live targets in subscription order. Dropped targets are pruned.
    pub(crate) fn live(&mut self) -> Vec<SharedTarget> {
        self.targets.retain(|weak| weak.strong_count() > 0);
        self.targets.iter().filter_map(Weak::upgrade).collect()
    }

    /// Live targets in subscription order, without pruning dropped ones.
    pub(crate) fn iter(&self) -> impl Iterator<Item = SharedTarget> + '_ {
        self.targets.iter().filter_map(Weak::upgrade)
    }

    /// Names of live targets in subscription order.
    pub(crate) fn names(&self) -> Vec<String> {
        self.iter()
            .map(|target| target.borrow().name().to_string())
            .collect()
    }

    /// Removes the first live target with the given name.
    ///
    /// Returns `true` if a target was removed.
    pub(crate) fn remove(&mut self, name: &str) -> bool {
        let position = self.targets.iter().position(|weak| {
            weak.upgrade()
                .is_some_and(|target| target.borrow().name() == name)
        });

        match position {
            Some(index) => {
                self.targets.remove(index);
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.targets.len()
    }
}

impl std::fmt::Debug for SubscriberList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
