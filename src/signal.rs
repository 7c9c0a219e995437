/*!

# Notification Channels

A [`Signal`] is the channel through which a property announces that its value changed. Observers
(bindings, views, other objects) [`connect`](Signal::connect) a callback and are handed a shared
reference to the new value every time the signal is [`emit`](Signal::emit)ted.

The object model this crate serves is single-threaded: an object and every observer bound to it
live on one thread, and a change is propagated synchronously before the setter returns. The
signal therefore stores its observers behind `Rc` and `RefCell` rather than `Arc` and a lock, and
is neither `Send` nor `Sync`. Delivering notifications across threads is the business of the host
framework, not of the property helpers.

Two details matter in practice:

- Observers run in the order they were connected.
- An observer may connect or disconnect observers (including itself) while an emission is in
  progress. The emission in flight keeps using the list of observers it started with; changes
  take effect from the next emission.

*/

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};

/// Identifies one connection made with [`Signal::connect`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(u64);

type Observer<T> = Rc<dyn Fn(&T)>;

/// A change-notification channel carrying values of type `T`.
pub struct Signal<T> {
    observers: RefCell<Vec<(ConnectionId, Observer<T>)>>,
    next_id: Cell<u64>,
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self {
            observers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Connects `observer`, which will be called on every subsequent emission.
    pub fn connect(&self, observer: impl Fn(&T) + 'static) -> ConnectionId {
        let id = ConnectionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.observers.borrow_mut().push((id, Rc::new(observer)));
        id
    }

    /// Removes the connection `id`. Returns `false` if it was already gone.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    pub fn disconnect_all(&self) {
        self.observers.borrow_mut().clear();
    }

    pub fn receiver_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Calls every connected observer with `value`.
    pub fn emit(&self, value: &T) {
        // Snapshot so observers can reconnect without a `RefCell` double borrow.
        let observers: Vec<Observer<T>> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();

        tracing::trace!(receivers = observers.len(), "emitting signal");
        for observer in observers {
            observer(value);
        }
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("receivers", &self.receiver_count())
            .finish()
    }
}
