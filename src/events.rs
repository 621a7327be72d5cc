//! Synchronous change notification
//!
//! An ordered list of subscriber callbacks invoked in registration order,
//! entirely on the calling thread. Subscribers are held as `Weak` references
//! and owned by the [`Subscription`] handle, so dropping the handle
//! unregisters the callback; dead entries are pruned during emission.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::defaults::OptionKey;

type Callback = dyn Fn(OptionKey);

/// Handle for a registered change observer.
///
/// The callback stays registered for exactly as long as this handle is
/// alive; dropping it unsubscribes.
#[must_use = "dropping the subscription unregisters the callback"]
pub struct Subscription {
    _callback: Rc<Callback>,
}

/// Ordered, multi-subscriber emitter for option-change notifications.
#[derive(Default)]
pub(crate) struct OptionChangeEmitter {
    subscribers: RefCell<Vec<Weak<Callback>>>,
}

impl OptionChangeEmitter {
    pub(crate) fn subscribe(&self, callback: impl Fn(OptionKey) + 'static) -> Subscription {
        let callback: Rc<Callback> = Rc::new(callback);
        self.subscribers.borrow_mut().push(Rc::downgrade(&callback));
        Subscription { _callback: callback }
    }

    /// Deliver `key` to every live subscriber, in registration order, before
    /// returning.
    pub(crate) fn emit(&self, key: OptionKey) {
        // Snapshot the list so a callback may subscribe or drop handles
        // without invalidating the iteration. A subscriber added during
        // dispatch does not observe the in-flight emission.
        let snapshot: Vec<Weak<Callback>> = self.subscribers.borrow().clone();
        for subscriber in &snapshot {
            if let Some(callback) = subscriber.upgrade() {
                callback(key);
            }
        }
        self.subscribers
            .borrow_mut()
            .retain(|subscriber| subscriber.strong_count() > 0);
    }
}
