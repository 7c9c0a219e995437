use std::fmt;

use crate::signal::Signal;

/// Backing storage of a `writable` or `read_only` property: the current value and the signal that
/// announces changes to it.
///
/// [`replace`](PropertyCell::replace) is the whole write contract of a notifying property.
/// Generated setters, internal update functions and resets all go through it.
pub struct PropertyCell<T> {
    name: &'static str,
    value: T,
    changed: Signal<T>,
}

impl<T> PropertyCell<T> {
    pub fn new(name: &'static str, value: T) -> Self {
        Self {
            name,
            value,
            changed: Signal::new(),
        }
    }

    /// The property name used in diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// The signal emitted after every accepted change.
    pub fn changed(&self) -> &Signal<T> {
        &self.changed
    }
}

impl<T: PartialEq> PropertyCell<T> {
    /// Stores `value` if it differs from the current value and notifies observers with the new
    /// value. Returns whether a change happened. Writing an equal value is a no-op.
    pub fn replace(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        tracing::trace!(property = self.name, "property changed");
        self.changed.emit(&self.value);
        true
    }
}

/// Clones the value only: observers stay connected to the original.
impl<T: Clone> Clone for PropertyCell<T> {
    fn clone(&self) -> Self {
        Self::new(self.name, self.value.clone())
    }
}

impl<T: fmt::Debug> fmt::Debug for PropertyCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyCell")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("receivers", &self.changed.receiver_count())
            .finish()
    }
}

/// Backing storage of a `constant` property. There is no way to change the value once the owning
/// object is constructed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Constant<T>(T);

impl<T> Constant<T> {
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    pub const fn get(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use proptest::prelude::*;

    use super::*;

    fn observed<T: Clone + 'static>(cell: &PropertyCell<T>) -> Rc<RefCell<Vec<T>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        cell.changed()
            .connect(move |value: &T| sink.borrow_mut().push(value.clone()));
        seen
    }

    #[test]
    fn count_scenario() {
        let mut count = PropertyCell::new("count", 0);
        let seen = observed(&count);

        assert!(count.replace(5));
        assert_eq!(*count.get(), 5);
        assert_eq!(*seen.borrow(), vec![5]);

        assert!(!count.replace(5));
        assert_eq!(*count.get(), 5);
        assert_eq!(*seen.borrow(), vec![5]);

        assert!(count.replace(0));
        assert_eq!(*count.get(), 0);
        assert_eq!(*seen.borrow(), vec![5, 0]);
    }

    #[test]
    fn observers_see_the_stored_value() {
        let mut label = PropertyCell::new("label", String::new());
        let seen = observed(&label);

        assert!(label.replace("ready".to_string()));
        assert_eq!(label.get(), "ready");
        assert_eq!(*seen.borrow(), vec!["ready".to_string()]);
    }

    #[test]
    fn clone_does_not_carry_observers() {
        let cell = PropertyCell::new("flag", false);
        let _seen = observed(&cell);

        let mut copy = cell.clone();
        assert_eq!(copy.changed().receiver_count(), 0);
        assert_eq!(copy.name(), "flag");
        assert!(copy.replace(true));
        assert!(!*cell.get());
    }

    #[test]
    fn constant_exposes_its_value() {
        let id = Constant::new(7_u32);
        assert_eq!(*id.get(), 7);
        assert_eq!(id.into_inner(), 7);
    }

    proptest! {
        #[test]
        fn one_notification_per_accepted_change(
            initial in 0..4_i32,
            writes in prop::collection::vec(0..4_i32, 0..32),
        ) {
            let mut cell = PropertyCell::new("value", initial);
            let seen = observed(&cell);

            let mut expected = Vec::new();
            let mut current = initial;
            for write in writes {
                let changed = cell.replace(write);
                prop_assert_eq!(changed, write != current);
                if changed {
                    expected.push(write);
                    current = write;
                }
                prop_assert_eq!(*cell.get(), current);
            }

            prop_assert_eq!(&*seen.borrow(), &expected);
        }
    }
}
