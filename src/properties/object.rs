/// Declares a struct whose fields are properties and generates their storage, accessors,
/// notification channels, constructor and property table.
///
/// Each field is written `kind name: Type` or `kind name: Type = initial`, where `kind` is
/// `writable`, `read_only`, `constant` or `list`. Without an initial value the property starts at
/// `Type::default()`. For `list`, `Type` is the item type and the initial value is a `Vec`. Doc
/// comments on a field end up on its getter.
///
/// A kind may carry the `(by_ref)` mode, as in `constant(by_ref) span: Range<u32>`. The getter then
/// returns `&Type` directly instead of going through [`CheapestRead`](crate::CheapestRead), so
/// foreign types without an impl can still be properties.
///
/// The object gets `new()`, a `Default` impl calling it, a
/// [`ReactiveObject`](crate::ReactiveObject) impl, and through it
/// [`Registrable`](crate::Registrable). Do not derive `Default` yourself.
///
/// The names of the generated items depend on the [`naming`](crate::naming) features this crate
/// was built with. The examples below match the build the documentation was generated from.
#[cfg_attr(
    feature = "framework-naming",
    doc = r#"
```
use std::ops::Range;

use property_helpers::{reactive_object, ReactiveObject};

reactive_object! {
    /// A counter exposed to the declarative layer.
    #[derive(Debug)]
    pub struct Counter {
        /// Number of clicks so far.
        writable count: i32 = 0,
        read_only status: String,
        constant step: i32 = 1,
        constant(by_ref) range: Range<i32> = 0..100,
        list history: i32,
    }
}

impl Counter {
    pub fn click(&mut self) {
        let next = self.count() + self.step();
        self.set_count(next);
        // `set_status` and `history_mut` are private to the module declaring `Counter`.
        self.set_status(format!("clicked {next} times"));
        self.history_mut().append(next);
    }
}

let mut counter = Counter::new();
counter.count_changed().connect(|count| println!("count is now {count}"));

assert!(counter.set_count(5));
assert!(!counter.set_count(5));
counter.click();
assert_eq!(counter.count(), 6);
assert_eq!(counter.status(), "clicked 6 times");
assert_eq!(counter.history(), &[6]);
assert!(counter.range().contains(&6));
assert!(counter.reset_count());
assert_eq!(Counter::PROPERTIES.len(), 5);
```

A `read_only` property cannot be written from outside its module:

```compile_fail
mod model {
    property_helpers::reactive_object! {
        pub struct Job {
            read_only progress: u8,
        }
    }
}

let mut job = model::Job::new();
job.set_progress(50);
```

and a `constant` property cannot be written at all:

```compile_fail
property_helpers::reactive_object! {
    pub struct Device {
        constant serial: u32 = 1234,
    }
}

let mut device = Device::new();
device.set_serial(1);
```
"#
)]
#[cfg_attr(
    not(any(
        feature = "framework-attributes",
        feature = "framework-getters",
        feature = "framework-setters",
        feature = "framework-signals",
        feature = "framework-resets"
    )),
    doc = r#"
```
use property_helpers::{reactive_object, ReactiveObject};

reactive_object! {
    pub struct Counter {
        writable count: i32 = 0,
        read_only status: String,
        constant step: i32 = 1,
        list history: i32,
    }
}

impl Counter {
    pub fn click(&mut self) {
        let next = self.GetCount() + self.GetStep();
        self.SetCount(next);
        self.SetStatus(format!("clicked {next} times"));
        self.GetHistoryMut().append(next);
    }
}

let mut counter = Counter::new();
counter.CountChanged().connect(|count| println!("count is now {count}"));

assert!(counter.SetCount(5));
assert!(!counter.SetCount(5));
counter.click();
assert_eq!(counter.GetCount(), 6);
assert_eq!(counter.GetStatus(), "clicked 6 times");
assert_eq!(counter.GetHistory(), &[6]);
assert!(counter.ResetCount());
assert_eq!(Counter::PROPERTIES.len(), 4);
```

A `read_only` property cannot be written from outside its module:

```compile_fail
mod model {
    property_helpers::reactive_object! {
        pub struct Job {
            read_only progress: u8,
        }
    }
}

let mut job = model::Job::new();
job.SetProgress(50);
```

and a `constant` property cannot be written at all:

```compile_fail
property_helpers::reactive_object! {
    pub struct Device {
        constant serial: u32 = 1234,
    }
}

let mut device = Device::new();
device.SetSerial(1);
```
"#
)]
#[macro_export]
macro_rules! reactive_object {
    ($($input:tt)*) => {
        $crate::__with_attribute_prefix! { $($input)* }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __reactive_object {
    (
        @prefix $p:tt
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$prop_meta:meta])*
                $kind:ident $(($mode:ident))? $prop:ident : $ty:ty $(= $init:expr)?
            ),* $(,)?
        }
    ) => {
        $crate::paste::paste! {
            $(#[$meta])*
            $vis struct $name {
                $( [<$p $prop>]: $crate::__property_storage!(@type $kind $ty), )*
            }

            impl $name {
                /// Creates the object with every property at its initial value.
                pub fn new() -> Self {
                    Self {
                        $(
                            [<$p $prop>]:
                                $crate::__property_storage!(@init $kind $prop $(= $init)?),
                        )*
                    }
                }
            }
        }

        #[allow(dead_code)]
        impl $name {
            $(
                $crate::__property_accessors! {
                    $kind [$(#[$prop_meta])*] [$($mode)?] $p $prop : $ty $(= $init)?
                }
            )*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::ReactiveObject for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const PROPERTIES: &'static [$crate::PropertyDescriptor] = &[
                $( $crate::__property_accessors!(@descriptor $kind $prop : $ty), )*
            ];
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __property_storage {
    (@type writable $ty:ty) => { $crate::PropertyCell<$ty> };
    (@type read_only $ty:ty) => { $crate::PropertyCell<$ty> };
    (@type constant $ty:ty) => { $crate::Constant<$ty> };
    (@type list $ty:ty) => { $crate::PropertyList<$ty> };
    // Unknown kinds are reported by `__property_accessors!`.
    (@type $other:ident $ty:ty) => { () };

    (@init writable $prop:ident $(= $init:expr)?) => {
        $crate::PropertyCell::new(stringify!($prop), $crate::__initial_value!($($init)?))
    };
    (@init read_only $prop:ident $(= $init:expr)?) => {
        $crate::PropertyCell::new(stringify!($prop), $crate::__initial_value!($($init)?))
    };
    (@init constant $prop:ident $(= $init:expr)?) => {
        $crate::Constant::new($crate::__initial_value!($($init)?))
    };
    (@init list $prop:ident $(= $init:expr)?) => {
        $crate::PropertyList::from_vec($crate::__initial_value!($($init)?))
    };
    (@init $other:ident $prop:ident $(= $init:expr)?) => {
        ()
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __initial_value {
    () => {
        ::core::default::Default::default()
    };
    ($init:expr) => {
        $init
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __property_accessors {
    (@descriptor writable $prop:ident : $ty:ty) => {
        $crate::PropertyDescriptor {
            name: stringify!($prop),
            type_name: stringify!($ty),
            mutability: $crate::Mutability::Writable,
            read: $crate::__property_getter!(@name $prop),
            write: ::core::option::Option::Some($crate::__property_setter!(@name $prop)),
            notify: ::core::option::Option::Some($crate::__property_notifier!(@name $prop)),
            reset: ::core::option::Option::Some($crate::__property_reset!(@name $prop)),
        }
    };
    (@descriptor read_only $prop:ident : $ty:ty) => {
        $crate::PropertyDescriptor {
            name: stringify!($prop),
            type_name: stringify!($ty),
            mutability: $crate::Mutability::ReadOnly,
            read: $crate::__property_getter!(@name $prop),
            write: ::core::option::Option::None,
            notify: ::core::option::Option::Some($crate::__property_notifier!(@name $prop)),
            reset: ::core::option::Option::None,
        }
    };
    (@descriptor constant $prop:ident : $ty:ty) => {
        $crate::PropertyDescriptor {
            name: stringify!($prop),
            type_name: stringify!($ty),
            mutability: $crate::Mutability::Constant,
            read: $crate::__property_getter!(@name $prop),
            write: ::core::option::Option::None,
            notify: ::core::option::Option::None,
            reset: ::core::option::Option::None,
        }
    };
    (@descriptor list $prop:ident : $ty:ty) => {
        $crate::PropertyDescriptor {
            name: stringify!($prop),
            type_name: stringify!($ty),
            mutability: $crate::Mutability::List,
            read: $crate::__property_getter!(@name $prop),
            write: ::core::option::Option::None,
            notify: ::core::option::Option::None,
            reset: ::core::option::Option::None,
        }
    };
    (@descriptor $other:ident $prop:ident : $ty:ty) => {
        $crate::PropertyDescriptor {
            name: stringify!($prop),
            type_name: stringify!($ty),
            mutability: $crate::Mutability::Constant,
            read: "",
            write: ::core::option::Option::None,
            notify: ::core::option::Option::None,
            reset: ::core::option::Option::None,
        }
    };

    (writable [$($attr:tt)*] [$($mode:ident)?] $p:tt $prop:ident : $ty:ty $(= $init:expr)?) => {
        $crate::__property_getter! { [$($attr)*] [$($mode)?] $p $prop : $ty }
        $crate::__property_setter! { [pub] $p $prop : $ty }
        $crate::__property_notifier! { $p $prop : $ty }
        $crate::__property_reset! { [pub] $p $prop : $ty $(= $init)? }
    };
    (read_only [$($attr:tt)*] [$($mode:ident)?] $p:tt $prop:ident : $ty:ty $(= $init:expr)?) => {
        $crate::__property_getter! { [$($attr)*] [$($mode)?] $p $prop : $ty }
        $crate::__property_setter! { [] $p $prop : $ty }
        $crate::__property_notifier! { $p $prop : $ty }
        $crate::__property_reset! { [] $p $prop : $ty $(= $init)? }
    };
    (constant [$($attr:tt)*] [$($mode:ident)?] $p:tt $prop:ident : $ty:ty $(= $init:expr)?) => {
        $crate::__property_getter! { [$($attr)*] [$($mode)?] $p $prop : $ty }
    };
    (list [$($attr:tt)*] [] $p:tt $prop:ident : $ty:ty $(= $init:expr)?) => {
        $crate::__property_getter! { [$($attr)*] [by_ref] $p $prop : [$ty] }
        $crate::__property_getter! { @mut $p $prop : $ty }
    };
    (list [$($attr:tt)*] [$mode:ident] $($rest:tt)*) => {
        compile_error!(concat!(
            "`list` properties are always read by reference and take no `(",
            stringify!($mode),
            ")` mode"
        ));
    };
    ($other:ident $($rest:tt)*) => {
        compile_error!(concat!(
            "unknown property kind `",
            stringify!($other),
            "`, expected `writable`, `read_only`, `constant` or `list`"
        ));
    };
}
