//! Scroll notifications with scoped listener lifetimes.
//!
//! A listener stays installed exactly as long as its [`ScrollSubscription`]
//! lives. Dropping the subscription removes the listener, so nothing fires
//! after the owning page is torn down.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Listener = Box<dyn FnMut(f64)>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    // `None` while the listener is being invoked
    entries: Vec<(u64, Option<Listener>)>,
}

/// Single-threaded scroll event source (the viewport's scroll notifications).
#[derive(Clone, Default)]
pub struct ScrollEvents {
    inner: Rc<RefCell<Listeners>>,
}

impl fmt::Debug for ScrollEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollEvents")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ScrollEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a listener receiving the new scroll offset.
    #[must_use = "the listener is removed when the subscription is dropped"]
    pub fn subscribe(&self, listener: impl FnMut(f64) + 'static) -> ScrollSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push((id, Some(Box::new(listener))));
        ScrollSubscription {
            id,
            source: Rc::downgrade(&self.inner),
        }
    }

    /// Notify every installed listener.
    ///
    /// Listeners may subscribe or drop subscriptions while being notified;
    /// listeners added during dispatch first fire on the next emit.
    pub fn emit(&self, offset: f64) {
        let ids: Vec<u64> = self.inner.borrow().entries.iter().map(|(id, _)| *id).collect();

        for id in ids {
            let listener = {
                let mut inner = self.inner.borrow_mut();
                inner
                    .entries
                    .iter_mut()
                    .find(|(entry, _)| *entry == id)
                    .and_then(|(_, slot)| slot.take())
            };
            let Some(mut listener) = listener else {
                continue;
            };

            listener(offset);

            // Put it back unless it was unsubscribed meanwhile
            let mut inner = self.inner.borrow_mut();
            if let Some((_, slot)) = inner.entries.iter_mut().find(|(entry, _)| *entry == id) {
                *slot = Some(listener);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

/// Guard for an installed scroll listener.
pub struct ScrollSubscription {
    id: u64,
    source: Weak<RefCell<Listeners>>,
}

impl fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("id", &self.id)
            .field("live", &(self.source.strong_count() > 0))
            .finish()
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(source) = self.source.upgrade() {
            source.borrow_mut().entries.retain(|(id, _)| *id != self.id);
        }
    }
}
