#![forbid(unsafe_code)]

//! Event bus: named channels with ordered, synchronous delivery.
//!
//! [`EventBus<T>`] maps an event name to an ordered list of handlers. It is
//! single-threaded by construction (`Rc<RefCell<..>>` shared inner) and all
//! delivery is synchronous: `emit` returns only after every eligible handler
//! has run.
//!
//! # Invariants
//!
//! 1. Handlers fire in registration order.
//! 2. Registering the same closure twice yields two independent
//!    registrations; both fire (no deduplication).
//! 3. `emit` delivers to the handlers registered at its start; a handler
//!    removed mid-emission before its turn does not fire. Handlers
//!    registered mid-emission are not picked up by the in-flight emit.
//! 4. `off` with an unknown id and `emit` with no subscribers are no-ops.
//! 5. Dropping a [`Subscription`] removes the registration before the next
//!    emit.
//! 6. No interior borrow is held across a handler invocation, so handlers
//!    may freely call `on`/`off`/`emit` on the same bus.
//!
//! # Failure Modes
//!
//! - Handler panic: propagates to the caller of `emit`; remaining handlers
//!   for that emit do not run. The bus itself stays usable.

use std::cell::RefCell;
use std::rc::Rc;

use ahash::AHashMap;
use tracing::trace;

/// Opaque token identifying one registration on an [`EventBus`].
///
/// Unique per bus for its lifetime; never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

struct Handler<T> {
    id: HandlerId,
    callback: Rc<dyn Fn(&T)>,
}

impl<T> Clone for Handler<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            callback: Rc::clone(&self.callback),
        }
    }
}

struct BusInner<T> {
    channels: AHashMap<String, Vec<Handler<T>>>,
    next_id: u64,
}

/// Named-channel publish/subscribe bus with synchronous in-order delivery.
///
/// Cloning an `EventBus` clones the handle, not the channels: all clones
/// share one registration table. Construct once, pass everywhere.
pub struct EventBus<T> {
    inner: Rc<RefCell<BusInner<T>>>,
}

impl<T> Clone for EventBus<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for EventBus<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("channels", &self.inner.borrow().channels.len())
            .finish()
    }
}

impl<T: 'static> EventBus<T> {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(BusInner {
                channels: AHashMap::new(),
                next_id: 0,
            })),
        }
    }

    /// Register `handler` for `event`. Returns the registration's id.
    ///
    /// The same closure may be registered any number of times; each call is
    /// an independent registration with its own id.
    pub fn on(&self, event: &str, handler: impl Fn(&T) + 'static) -> HandlerId {
        let mut inner = self.inner.borrow_mut();
        let id = HandlerId(inner.next_id);
        inner.next_id += 1;
        inner
            .channels
            .entry(event.to_owned())
            .or_default()
            .push(Handler {
                id,
                callback: Rc::new(handler),
            });
        id
    }

    /// Remove the registration `id` from `event`. No-op if absent.
    pub fn off(&self, event: &str, id: HandlerId) {
        let mut inner = self.inner.borrow_mut();
        if let Some(handlers) = inner.channels.get_mut(event) {
            handlers.retain(|h| h.id != id);
            if handlers.is_empty() {
                inner.channels.remove(event);
            }
        }
    }

    /// Deliver `payload` to every handler currently registered for `event`,
    /// synchronously, in registration order.
    ///
    /// The handler set is snapshotted at entry; each handler is re-checked
    /// against the live table just before its turn, so removal mid-emission
    /// is honored.
    pub fn emit(&self, event: &str, payload: &T) {
        let snapshot = {
            let inner = self.inner.borrow();
            match inner.channels.get(event) {
                Some(handlers) => handlers.clone(),
                None => return,
            }
        };
        trace!(event, handlers = snapshot.len(), "emit");
        for handler in snapshot {
            if self.is_registered(event, handler.id) {
                (handler.callback)(payload);
            }
        }
    }

    /// Register `handler` for `event` and return an RAII guard that removes
    /// the registration on drop.
    #[must_use]
    pub fn subscribe(&self, event: &str, handler: impl Fn(&T) + 'static) -> Subscription<T> {
        let id = self.on(event, handler);
        Subscription {
            bus: self.clone(),
            event: event.to_owned(),
            id,
        }
    }

    /// Number of handlers currently registered for `event`.
    #[must_use]
    pub fn handler_count(&self, event: &str) -> usize {
        self.inner
            .borrow()
            .channels
            .get(event)
            .map_or(0, Vec::len)
    }

    fn is_registered(&self, event: &str, id: HandlerId) -> bool {
        self.inner
            .borrow()
            .channels
            .get(event)
            .is_some_and(|handlers| handlers.iter().any(|h| h.id == id))
    }
}

/// RAII guard for one bus registration.
///
/// Dropping the guard removes the registration; no callback fires after
/// drop. Obtained from [`EventBus::subscribe`].
pub struct Subscription<T: 'static> {
    bus: EventBus<T>,
    event: String,
    id: HandlerId,
}

impl<T: 'static> Subscription<T> {
    /// Id of the underlying registration.
    #[must_use]
    pub fn id(&self) -> HandlerId {
        self.id
    }
}

impl<T: 'static> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.bus.off(&self.event, self.id);
    }
}

impl<T: 'static> std::fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("event", &self.event)
            .field("id", &self.id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    #[test]
    fn emit_delivers_payload() {
        let bus = EventBus::new();
        let seen = Rc::new(Cell::new(0));
        let s = Rc::clone(&seen);
        bus.on("tick", move |v: &i32| s.set(*v));

        bus.emit("tick", &42);
        assert_eq!(seen.get(), 42);
    }

    #[test]
    fn emit_without_subscribers_is_noop() {
        let bus: EventBus<i32> = EventBus::new();
        bus.emit("nothing", &1);
    }

    #[test]
    fn handlers_fire_in_registration_order() {
        let bus: EventBus<()> = EventBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["a", "b", "c"] {
            let o = Rc::clone(&order);
            bus.on("evt", move |()| o.borrow_mut().push(tag));
        }

        bus.emit("evt", &());
        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn duplicate_registration_fires_twice() {
        let bus: EventBus<()> = EventBus::new();
        let count = Rc::new(Cell::new(0));
        let bump = {
            let c = Rc::clone(&count);
            move |(): &()| c.set(c.get() + 1)
        };
        bus.on("evt", bump.clone());
        bus.on("evt", bump);

        bus.emit("evt", &());
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn off_removes_exactly_one_registration() {
        let bus: EventBus<()> = EventBus::new();
        let count = Rc::new(Cell::new(0));
        let c1 = Rc::clone(&count);
        let first = bus.on("evt", move |()| c1.set(c1.get() + 1));
        let c2 = Rc::clone(&count);
        bus.on("evt", move |()| c2.set(c2.get() + 1));

        bus.off("evt", first);
        assert_eq!(bus.handler_count("evt"), 1);

        bus.emit("evt", &());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn off_unknown_id_is_noop() {
        let bus: EventBus<()> = EventBus::new();
        let id = bus.on("evt", |()| {});
        bus.off("evt", id);
        // Second removal and removal on a channel that never existed.
        bus.off("evt", id);
        bus.off("other", id);
        assert_eq!(bus.handler_count("evt"), 0);
    }

    #[test]
    fn removal_during_emission_skips_pending_handler() {
        let bus: EventBus<()> = EventBus::new();
        let fired = Rc::new(Cell::new(false));
        let victim = Rc::new(Cell::new(None));

        // The remover registers first; it learns the victim's id via a cell
        // filled in after the victim is registered.
        let b = bus.clone();
        let v = Rc::clone(&victim);
        bus.on("evt", move |()| {
            if let Some(id) = v.get() {
                b.off("evt", id);
            }
        });
        let f = Rc::clone(&fired);
        victim.set(Some(bus.on("evt", move |()| f.set(true))));

        bus.emit("evt", &());
        assert!(!fired.get(), "handler removed mid-emission must not fire");
    }

    #[test]
    fn registration_during_emission_is_deferred() {
        let bus: EventBus<()> = EventBus::new();
        let late = Rc::new(Cell::new(0));

        let b = bus.clone();
        let l = Rc::clone(&late);
        bus.on("evt", move |()| {
            let l2 = Rc::clone(&l);
            b.on("evt", move |()| l2.set(l2.get() + 1));
        });

        bus.emit("evt", &());
        assert_eq!(late.get(), 0, "mid-emission registration must not fire yet");

        bus.emit("evt", &());
        assert_eq!(late.get(), 1);
    }

    #[test]
    fn reentrant_emit_is_allowed() {
        let bus: EventBus<i32> = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let b = bus.clone();
        let s = Rc::clone(&seen);
        bus.on("outer", move |v: &i32| {
            s.borrow_mut().push(*v);
            b.emit("inner", &(v + 1));
        });
        let s = Rc::clone(&seen);
        bus.on("inner", move |v: &i32| s.borrow_mut().push(*v));

        bus.emit("outer", &1);
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn subscription_drop_unregisters() {
        let bus: EventBus<()> = EventBus::new();
        let count = Rc::new(Cell::new(0));
        {
            let c = Rc::clone(&count);
            let _sub = bus.subscribe("evt", move |()| c.set(c.get() + 1));
            assert_eq!(bus.handler_count("evt"), 1);
            bus.emit("evt", &());
            assert_eq!(count.get(), 1);
        }

        assert_eq!(bus.handler_count("evt"), 0);
        bus.emit("evt", &());
        assert_eq!(count.get(), 1, "no delivery after subscription dropped");
    }

    #[test]
    fn clones_share_one_registration_table() {
        let bus: EventBus<()> = EventBus::new();
        let other = bus.clone();
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        other.on("evt", move |()| c.set(c.get() + 1));

        bus.emit("evt", &());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn channels_are_independent() {
        let bus: EventBus<()> = EventBus::new();
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        bus.on("a", move |()| c.set(c.get() + 1));

        bus.emit("b", &());
        assert_eq!(count.get(), 0);
    }

    mod properties {
        use std::cell::RefCell;
        use std::rc::Rc;

        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn delivery_order_matches_registration_order(n in 1usize..32) {
                let bus: EventBus<()> = EventBus::new();
                let order = Rc::new(RefCell::new(Vec::new()));
                for i in 0..n {
                    let o = Rc::clone(&order);
                    bus.on("evt", move |()| o.borrow_mut().push(i));
                }

                bus.emit("evt", &());
                prop_assert_eq!(&*order.borrow(), &(0..n).collect::<Vec<_>>());
            }

            #[test]
            fn subscribe_then_drop_leaves_no_handlers(n in 1usize..16) {
                let bus: EventBus<()> = EventBus::new();
                let subs: Vec<_> = (0..n).map(|_| bus.subscribe("evt", |()| {})).collect();
                prop_assert_eq!(bus.handler_count("evt"), n);
                drop(subs);
                prop_assert_eq!(bus.handler_count("evt"), 0);
            }
        }
    }
}
