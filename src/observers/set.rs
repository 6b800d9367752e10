//! # ObserverSet: ordered fan-out over multiple observers
//!
//! [`ObserverSet`] delivers each notification to every registered observer,
//! synchronously, in registration order.
//!
//! ## What it guarantees
//! - Registration order: observer N is always notified before observer N+1.
//! - No short-circuit: every member sees every notification; one member's
//!   internal trouble is its own problem (see [`Observe`] contract).
//! - Exclusive ownership: observers live exactly as long as the set.
//!
//! ## What it does **not** guarantee
//! - No isolation from panics: a panicking observer unwinds through the
//!   batcher operation that triggered it.
//! - No concurrency: notifications run on the caller's thread.
//!
//! ## Diagram
//! ```text
//!    notify_flush(&Block)
//!        │         (in registration order, run to completion)
//!        ├──► observer 1 . on_flush()
//!        ├──► observer 2 . on_flush()
//!        └──► observer N . on_flush()
//! ```

use crate::commands::Block;
use crate::observers::Observe;

/// Composite observer: ordered, synchronous fan-out.
#[derive(Default)]
pub struct ObserverSet {
    observers: Vec<Box<dyn Observe>>,
}

impl ObserverSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer at the end of the notification order.
    pub fn add(&mut self, observer: Box<dyn Observe>) {
        self.observers.push(observer);
    }

    /// Notifies every observer that a command was appended.
    pub fn notify_command(&mut self, block: &Block) {
        for observer in &mut self.observers {
            observer.on_command(block);
        }
    }

    /// Notifies every observer that the block is about to be discharged.
    pub fn notify_flush(&mut self, block: &Block) {
        for observer in &mut self.observers {
            observer.on_flush(block);
        }
    }

    /// True if there are no observers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Number of observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::commands::Command;

    /// Appends its tag to a shared journal on every notification.
    struct Tagged {
        tag: &'static str,
        journal: Rc<RefCell<Vec<String>>>,
    }

    impl Observe for Tagged {
        fn on_command(&mut self, block: &Block) {
            self.journal
                .borrow_mut()
                .push(format!("{}:add:{}", self.tag, block.len()));
        }
        fn on_flush(&mut self, block: &Block) {
            self.journal
                .borrow_mut()
                .push(format!("{}:flush:{}", self.tag, block.len()));
        }
    }

    #[test]
    fn test_fan_out_in_registration_order() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let mut set = ObserverSet::new();
        set.add(Box::new(Tagged {
            tag: "first",
            journal: Rc::clone(&journal),
        }));
        set.add(Box::new(Tagged {
            tag: "second",
            journal: Rc::clone(&journal),
        }));
        assert_eq!(set.len(), 2);

        let mut block = Block::new();
        block.push(Command::new("a"));
        set.notify_command(&block);
        set.notify_flush(&block);

        assert_eq!(
            *journal.borrow(),
            vec!["first:add:1", "second:add:1", "first:flush:1", "second:flush:1"],
            "every observer must see every notification, in registration order"
        );
    }

    #[test]
    fn test_empty_set_is_silent() {
        let mut set = ObserverSet::new();
        assert!(set.is_empty());

        // Must be safe to notify with nobody listening.
        let block = Block::new();
        set.notify_command(&block);
        set.notify_flush(&block);
    }
}
