// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize notifications: a single-slot mailbox and the sources that feed it.
//!
//! A viewport owns one [`ResizeMailbox`]. Notification sources only ever see
//! a [`WeakResizeMailbox`], so a source can never keep a viewport's listener
//! alive after the viewport is gone.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Size;
//! use understory_autofit::{ResizeDispatcher, ResizeMailbox, ResizeSource};
//!
//! let mailbox = ResizeMailbox::new();
//! let mut dispatcher = ResizeDispatcher::new();
//! let id = dispatcher.subscribe(mailbox.downgrade());
//!
//! // Two resizes before anyone looks: only the last one survives.
//! dispatcher.dispatch(Size::new(100.0, 100.0));
//! dispatcher.dispatch(Size::new(200.0, 150.0));
//! assert_eq!(mailbox.take(), Some(Size::new(200.0, 150.0)));
//! assert_eq!(mailbox.take(), None);
//!
//! assert!(dispatcher.unsubscribe(id));
//! ```

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::Cell;

use kurbo::Size;

/// One-element mailbox holding the most recently reported physical size.
///
/// Posting overwrites any value that has not been taken yet; there is no
/// queue and no back-pressure. Cloning yields another strong handle to the
/// same slot.
#[derive(Clone, Debug, Default)]
pub struct ResizeMailbox {
    slot: Rc<Cell<Option<Size>>>,
}

impl ResizeMailbox {
    /// Creates an empty mailbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `size`, replacing any pending value.
    ///
    /// Returns the value that was replaced without being taken, if any.
    pub fn post(&self, size: Size) -> Option<Size> {
        self.slot.replace(Some(size))
    }

    /// Removes and returns the pending size.
    pub fn take(&self) -> Option<Size> {
        self.slot.take()
    }

    /// Returns the pending size without consuming it.
    #[must_use]
    pub fn pending(&self) -> Option<Size> {
        self.slot.get()
    }

    /// Returns `true` if a size is waiting to be taken.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending().is_some()
    }

    /// Returns a weak handle suitable for handing to a [`ResizeSource`].
    #[must_use]
    pub fn downgrade(&self) -> WeakResizeMailbox {
        WeakResizeMailbox {
            slot: Rc::downgrade(&self.slot),
        }
    }
}

/// Non-owning handle to a [`ResizeMailbox`].
///
/// Posting through a handle whose mailbox has been dropped does nothing.
#[derive(Clone, Debug, Default)]
pub struct WeakResizeMailbox {
    slot: Weak<Cell<Option<Size>>>,
}

impl WeakResizeMailbox {
    /// Stores `size` in the mailbox if it is still alive.
    ///
    /// Returns `false` once the owning mailbox has been dropped.
    pub fn post(&self, size: Size) -> bool {
        match self.slot.upgrade() {
            Some(slot) => {
                slot.set(Some(size));
                true
            }
            None => false,
        }
    }

    /// Returns `true` while the owning mailbox is alive.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.slot.strong_count() > 0
    }
}

/// Identifier returned by [`ResizeSource::subscribe`].
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Something that reports physical size changes of a host window or surface.
///
/// Delivery only needs to be at-least-once and last-value-sufficient:
/// listeners keep just the latest size.
pub trait ResizeSource {
    /// Registers `listener` for future size notifications.
    fn subscribe(&mut self, listener: WeakResizeMailbox) -> ListenerId;

    /// Removes a listener.
    ///
    /// Returns `true` if `id` was registered.
    fn unsubscribe(&mut self, id: ListenerId) -> bool;
}

/// Single-threaded [`ResizeSource`] that fans sizes out to its listeners.
///
/// Hosts call [`ResizeDispatcher::dispatch`] from their window event handler.
/// Listeners whose mailbox has been dropped are pruned on the next dispatch
/// or subscription.
#[derive(Debug, Default)]
pub struct ResizeDispatcher {
    listeners: Vec<(ListenerId, WeakResizeMailbox)>,
    next_id: u64,
    last_size: Option<Size>,
}

impl ResizeDispatcher {
    /// Creates a dispatcher with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `size` to every live listener.
    ///
    /// Returns the number of listeners that received it.
    pub fn dispatch(&mut self, size: Size) -> usize {
        self.last_size = Some(size);
        self.listeners.retain(|(_, listener)| listener.post(size));
        self.listeners.len()
    }

    /// Returns the most recently dispatched size.
    #[must_use]
    pub fn last_size(&self) -> Option<Size> {
        self.last_size
    }

    /// Returns the number of listeners whose mailbox is still alive.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners
            .iter()
            .filter(|(_, listener)| listener.is_alive())
            .count()
    }

    /// Returns `true` if `id` is registered and its mailbox is still alive.
    #[must_use]
    pub fn is_subscribed(&self, id: ListenerId) -> bool {
        self.listeners
            .iter()
            .any(|(lid, listener)| *lid == id && listener.is_alive())
    }
}

impl ResizeSource for ResizeDispatcher {
    fn subscribe(&mut self, listener: WeakResizeMailbox) -> ListenerId {
        self.listeners.retain(|(_, l)| l.is_alive());
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }
}
