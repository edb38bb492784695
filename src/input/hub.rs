//! Injected pointer event source with owned subscriptions.
//!
//! Instead of process-global listeners, the host owns a [`PointerHub`]
//! and pushes pointer events into it; the hub fans each event out to
//! subscribed sinks synchronously, one event to completion before the
//! next. Every registration is represented by a [`Subscription`] handle
//! that removes the sink exactly once — explicitly via
//! [`Subscription::release`] or implicitly on drop — so a torn-down
//! controller can never receive stale events.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::event::PointerEvent;

/// Receives pointer events from a [`PointerHub`].
pub trait PointerSink {
    /// Handle one event to completion. Must not dispatch back into the
    /// hub; delivery is single-threaded and non-reentrant.
    fn handle_event(&mut self, event: PointerEvent);
}

type SharedSink = Rc<RefCell<dyn PointerSink>>;

#[derive(Default)]
struct HubInner {
    sinks: Vec<(u64, SharedSink)>,
    next_id: u64,
}

/// Fan-out point for pointer events.
///
/// Cloning yields another handle to the same hub, so the host side that
/// produces events and the side that mounts controllers can each hold
/// one.
#[derive(Clone, Default)]
pub struct PointerHub {
    inner: Rc<RefCell<HubInner>>,
}

impl PointerHub {
    /// Hub with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `sink` and return the handle that owns the registration.
    #[must_use]
    pub fn subscribe(&self, sink: SharedSink) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.sinks.push((id, sink));
        Subscription {
            hub: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Deliver `event` to every subscribed sink, in subscription order.
    pub fn dispatch(&self, event: PointerEvent) {
        // Snapshot the sink list so a sink may release its own
        // subscription while being delivered to.
        let sinks: Vec<SharedSink> = self
            .inner
            .borrow()
            .sinks
            .iter()
            .map(|(_, sink)| Rc::clone(sink))
            .collect();
        for sink in sinks {
            sink.borrow_mut().handle_event(event);
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().sinks.len()
    }
}

/// Owns one hub registration.
///
/// Dropping the handle removes the sink from the hub; releasing twice is
/// impossible by construction.
pub struct Subscription {
    hub: Weak<RefCell<HubInner>>,
    id: u64,
}

impl Subscription {
    /// Release the registration explicitly.
    pub fn release(self) {
        // Drop does the work.
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.hub.upgrade() {
            inner.borrow_mut().sinks.retain(|(id, _)| *id != self.id);
        }
    }
}
