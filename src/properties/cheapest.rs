/*!

# Returning the Cheapest Form of a Value

A generated getter should not copy a `String` or a `Vec` every time it is called, and it should not
hand out a `&bool` either: for small `Copy` scalars the value itself is cheaper than the
indirection. [`CheapestRead`] makes that choice per type, at compile time, through an associated
type:

| Value type                                        | Getter returns |
| ------------------------------------------------- | -------------- |
| `()`, `bool`, `char`, integers, floats            | `T`            |
| `Duration`, `Instant`, `SystemTime`               | `T`            |
| raw pointers, shared references                   | `T`            |
| enums declared with [`enum_class!`]               | `T`            |
| `String`, `Vec<T>`, `Box<str>`, `Cow<str>`, ...   | `&T`           |
| tuples, arrays, `serde_json::Value`               | `&T`           |

Without specialization there is no blanket "everything else by reference" impl. Types from your
own crate opt in with [`impl_read_by_reference!`] or [`impl_read_by_value!`]. For a foreign type
the orphan rule forbids either, so a property can skip the trait altogether and always hand out
`&T` by being declared `writable(by_ref)`, `read_only(by_ref)` or `constant(by_ref)`; see
[`reactive_object!`](crate::reactive_object!).

[`enum_class!`]: crate::enum_class!

*/

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    path::PathBuf,
    rc::Rc,
    sync::Arc,
    time::{Duration, Instant, SystemTime},
};

/// Picks the cheapest way for a getter to hand out a `Self`.
pub trait CheapestRead {
    type Read<'a>
    where
        Self: 'a;

    fn read(&self) -> Self::Read<'_>;
}

/// Implements [`CheapestRead`] by copying the value out. The types must be `Copy`.
#[macro_export]
macro_rules! impl_read_by_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::CheapestRead for $ty {
                type Read<'a> = $ty where Self: 'a;

                #[inline]
                fn read(&self) -> Self::Read<'_> {
                    *self
                }
            }
        )+
    };
}

/// Implements [`CheapestRead`] by handing out a shared reference.
#[macro_export]
macro_rules! impl_read_by_reference {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::CheapestRead for $ty {
                type Read<'a> = &'a $ty where Self: 'a;

                #[inline]
                fn read(&self) -> Self::Read<'_> {
                    self
                }
            }
        )+
    };
}

impl_read_by_value!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    Duration,
    Instant,
    SystemTime,
);

impl_read_by_reference!(String, PathBuf, serde_json::Value);

impl<T: ?Sized> CheapestRead for *const T {
    type Read<'a>
        = *const T
    where
        Self: 'a;

    fn read(&self) -> Self::Read<'_> {
        *self
    }
}

impl<T: ?Sized> CheapestRead for *mut T {
    type Read<'a>
        = *mut T
    where
        Self: 'a;

    fn read(&self) -> Self::Read<'_> {
        *self
    }
}

impl<'r, T: ?Sized> CheapestRead for &'r T {
    type Read<'a>
        = &'r T
    where
        Self: 'a;

    fn read(&self) -> Self::Read<'_> {
        *self
    }
}

impl<T, const N: usize> CheapestRead for [T; N] {
    type Read<'a>
        = &'a [T; N]
    where
        Self: 'a;

    fn read(&self) -> Self::Read<'_> {
        self
    }
}

impl<B: ToOwned + ?Sized> CheapestRead for Cow<'_, B> {
    type Read<'a>
        = &'a Self
    where
        Self: 'a;

    fn read(&self) -> Self::Read<'_> {
        self
    }
}

macro_rules! read_generic_by_reference {
    (?Sized $($container:ident),+) => {
        $(
            impl<T: ?Sized> CheapestRead for $container<T> {
                type Read<'a> = &'a $container<T> where Self: 'a;

                fn read(&self) -> Self::Read<'_> {
                    self
                }
            }
        )+
    };
    ($($container:ident),+) => {
        $(
            impl<T> CheapestRead for $container<T> {
                type Read<'a> = &'a $container<T> where Self: 'a;

                fn read(&self) -> Self::Read<'_> {
                    self
                }
            }
        )+
    };
}

read_generic_by_reference!(Vec, VecDeque, Option, BTreeSet, HashSet);
read_generic_by_reference!(?Sized Box, Rc, Arc);

impl<K, V> CheapestRead for BTreeMap<K, V> {
    type Read<'a>
        = &'a BTreeMap<K, V>
    where
        Self: 'a;

    fn read(&self) -> Self::Read<'_> {
        self
    }
}

impl<K, V, S> CheapestRead for HashMap<K, V, S> {
    type Read<'a>
        = &'a HashMap<K, V, S>
    where
        Self: 'a;

    fn read(&self) -> Self::Read<'_> {
        self
    }
}

// Tuples are read by reference whatever their elements are.
macro_rules! read_tuple_by_reference {
    ($(($($element:ident),+)),+ $(,)?) => {
        $(
            impl<$($element),+> CheapestRead for ($($element,)+) {
                type Read<'a> = &'a Self where Self: 'a;

                fn read(&self) -> Self::Read<'_> {
                    self
                }
            }
        )+
    };
}

read_tuple_by_reference!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
    (A, B, C, D, E, F, G),
    (A, B, C, D, E, F, G, H),
);
