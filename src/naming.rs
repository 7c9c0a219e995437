/*!

# Naming Conventions Chosen at Build Time

Every name a generated property item carries follows one of two shapes:

| Item                 | Feature                | Framework shape    | Alternative shape |
| -------------------- | ---------------------- | ------------------ | ----------------- |
| backing field        | `framework-attributes` | `m_count`          | `_count`          |
| getter               | `framework-getters`    | `count()`          | `GetCount()`      |
| setter               | `framework-setters`    | `set_count(v)`     | `SetCount(v)`     |
| notification channel | `framework-signals`    | `count_changed()`  | `CountChanged()`  |
| reset                | `framework-resets`     | `reset_count()`    | `ResetCount()`    |

The five switches are independent Cargo features of this crate; `framework-naming` turns all of
them on and is part of the default feature set. With `default-features = false` every item falls
back to the alternative shape unless its feature is enabled individually.

## Why the choice lives in this crate

A `#[cfg(feature = "...")]` emitted by an exported macro is evaluated against the features of the
crate that *invokes* the macro, not the crate that defines it. So the generated code cannot carry
the switch itself. Instead, each switch selects one of two definitions of a small generator macro
when this crate is compiled:

- `__with_attribute_prefix!` hands `m_` or `_` to the object generator,
- `__property_getter!`, `__property_setter!`, `__property_notifier!` and `__property_reset!` each
  emit one accessor (or, given `@name`, the accessor's name as a string literal for the property
  table). The getter switch also names the private `&mut` accessor of `list` properties:
  `items_mut` or `GetItemsMut`.

The object generator only ever calls these five macros, which is what keeps every property of every
object in a build on the same convention. [`ACTIVE`] reports the selection at runtime.

*/

use heck::ToUpperCamelCase;

/// The two shapes a generated name can take.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NamingConvention {
    /// `m_name`, `name`, `set_name`, `name_changed`, `reset_name`.
    Framework,
    /// `_name`, `GetName`, `SetName`, `NameChanged`, `ResetName`.
    Alternative,
}

impl NamingConvention {
    const fn from_switch(enabled: bool) -> Self {
        if enabled {
            Self::Framework
        } else {
            Self::Alternative
        }
    }
}

/// The convention of each kind of generated item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Conventions {
    pub attributes: NamingConvention,
    pub getters: NamingConvention,
    pub setters: NamingConvention,
    pub signals: NamingConvention,
    pub resets: NamingConvention,
}

/// The conventions this build of the crate generates code with.
pub const ACTIVE: Conventions = Conventions {
    attributes: NamingConvention::from_switch(cfg!(feature = "framework-attributes")),
    getters: NamingConvention::from_switch(cfg!(feature = "framework-getters")),
    setters: NamingConvention::from_switch(cfg!(feature = "framework-setters")),
    signals: NamingConvention::from_switch(cfg!(feature = "framework-signals")),
    resets: NamingConvention::from_switch(cfg!(feature = "framework-resets")),
};

impl Conventions {
    pub const FRAMEWORK: Self = Self::uniform(NamingConvention::Framework);
    pub const ALTERNATIVE: Self = Self::uniform(NamingConvention::Alternative);

    pub const fn uniform(convention: NamingConvention) -> Self {
        Self {
            attributes: convention,
            getters: convention,
            setters: convention,
            signals: convention,
            resets: convention,
        }
    }

    /// Name of the backing field of `property` (a snake_case property name).
    pub fn attribute_name(&self, property: &str) -> String {
        match self.attributes {
            NamingConvention::Framework => format!("m_{property}"),
            NamingConvention::Alternative => format!("_{property}"),
        }
    }

    pub fn getter_name(&self, property: &str) -> String {
        match self.getters {
            NamingConvention::Framework => property.to_owned(),
            NamingConvention::Alternative => format!("Get{}", property.to_upper_camel_case()),
        }
    }

    pub fn setter_name(&self, property: &str) -> String {
        match self.setters {
            NamingConvention::Framework => format!("set_{property}"),
            NamingConvention::Alternative => format!("Set{}", property.to_upper_camel_case()),
        }
    }

    pub fn signal_name(&self, property: &str) -> String {
        match self.signals {
            NamingConvention::Framework => format!("{property}_changed"),
            NamingConvention::Alternative => format!("{}Changed", property.to_upper_camel_case()),
        }
    }

    pub fn reset_name(&self, property: &str) -> String {
        match self.resets {
            NamingConvention::Framework => format!("reset_{property}"),
            NamingConvention::Alternative => format!("Reset{}", property.to_upper_camel_case()),
        }
    }
}

// Backing field prefix

#[cfg(feature = "framework-attributes")]
#[doc(hidden)]
#[macro_export]
macro_rules! __with_attribute_prefix {
    ($($input:tt)*) => {
        $crate::__reactive_object! { @prefix m_ $($input)* }
    };
}

#[cfg(not(feature = "framework-attributes"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __with_attribute_prefix {
    ($($input:tt)*) => {
        $crate::__reactive_object! { @prefix _ $($input)* }
    };
}

// Getter

#[cfg(feature = "framework-getters")]
#[doc(hidden)]
#[macro_export]
macro_rules! __property_getter {
    (@name $prop:ident) => {
        stringify!($prop)
    };
    (@mut $p:tt $prop:ident : $ty:ty) => {
        $crate::paste::paste! {
            fn [<$prop _mut>](&mut self) -> &mut $crate::PropertyList<$ty> {
                &mut self.[<$p $prop>]
            }
        }
    };
    ([$($attr:tt)*] [] $p:tt $prop:ident : $ty:ty) => {
        $crate::paste::paste! {
            $($attr)*
            #[inline]
            pub fn $prop(&self) -> <$ty as $crate::CheapestRead>::Read<'_> {
                $crate::CheapestRead::read(self.[<$p $prop>].get())
            }
        }
    };
    ([$($attr:tt)*] [by_ref] $p:tt $prop:ident : $ty:ty) => {
        $crate::paste::paste! {
            $($attr)*
            #[inline]
            pub fn $prop(&self) -> &$ty {
                self.[<$p $prop>].get()
            }
        }
    };
    ([$($attr:tt)*] [$mode:ident] $($rest:tt)*) => {
        $crate::__unknown_read_mode!($mode);
    };
}

#[cfg(not(feature = "framework-getters"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __property_getter {
    (@name $prop:ident) => {
        $crate::paste::paste! { stringify!([<Get $prop:camel>]) }
    };
    (@mut $p:tt $prop:ident : $ty:ty) => {
        $crate::paste::paste! {
            #[allow(non_snake_case)]
            fn [<Get $prop:camel Mut>](&mut self) -> &mut $crate::PropertyList<$ty> {
                &mut self.[<$p $prop>]
            }
        }
    };
    ([$($attr:tt)*] [] $p:tt $prop:ident : $ty:ty) => {
        $crate::paste::paste! {
            $($attr)*
            #[inline]
            #[allow(non_snake_case)]
            pub fn [<Get $prop:camel>](&self) -> <$ty as $crate::CheapestRead>::Read<'_> {
                $crate::CheapestRead::read(self.[<$p $prop>].get())
            }
        }
    };
    ([$($attr:tt)*] [by_ref] $p:tt $prop:ident : $ty:ty) => {
        $crate::paste::paste! {
            $($attr)*
            #[inline]
            #[allow(non_snake_case)]
            pub fn [<Get $prop:camel>](&self) -> &$ty {
                self.[<$p $prop>].get()
            }
        }
    };
    ([$($attr:tt)*] [$mode:ident] $($rest:tt)*) => {
        $crate::__unknown_read_mode!($mode);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __unknown_read_mode {
    ($mode:ident) => {
        compile_error!(concat!(
            "unknown property mode `",
            stringify!($mode),
            "`, expected `by_ref`"
        ));
    };
}

// Setter, also used with private visibility for the internal update of `read_only` properties

#[cfg(feature = "framework-setters")]
#[doc(hidden)]
#[macro_export]
macro_rules! __property_setter {
    (@name $prop:ident) => {
        $crate::paste::paste! { stringify!([<set_ $prop>]) }
    };
    ([$($vis:tt)*] $p:tt $prop:ident : $ty:ty) => {
        $crate::paste::paste! {
            /// Stores `value` and notifies observers if it differs from the current value.
            /// Returns whether the value changed.
            $($vis)* fn [<set_ $prop>](&mut self, value: $ty) -> bool {
                self.[<$p $prop>].replace(value)
            }
        }
    };
}

#[cfg(not(feature = "framework-setters"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __property_setter {
    (@name $prop:ident) => {
        $crate::paste::paste! { stringify!([<Set $prop:camel>]) }
    };
    ([$($vis:tt)*] $p:tt $prop:ident : $ty:ty) => {
        $crate::paste::paste! {
            /// Stores `value` and notifies observers if it differs from the current value.
            /// Returns whether the value changed.
            #[allow(non_snake_case)]
            $($vis)* fn [<Set $prop:camel>](&mut self, value: $ty) -> bool {
                self.[<$p $prop>].replace(value)
            }
        }
    };
}

// Notification channel

#[cfg(feature = "framework-signals")]
#[doc(hidden)]
#[macro_export]
macro_rules! __property_notifier {
    (@name $prop:ident) => {
        $crate::paste::paste! { stringify!([<$prop _changed>]) }
    };
    ($p:tt $prop:ident : $ty:ty) => {
        $crate::paste::paste! {
            /// Emitted with the new value after every change.
            pub fn [<$prop _changed>](&self) -> &$crate::Signal<$ty> {
                self.[<$p $prop>].changed()
            }
        }
    };
}

#[cfg(not(feature = "framework-signals"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __property_notifier {
    (@name $prop:ident) => {
        $crate::paste::paste! { stringify!([<$prop:camel Changed>]) }
    };
    ($p:tt $prop:ident : $ty:ty) => {
        $crate::paste::paste! {
            /// Emitted with the new value after every change.
            #[allow(non_snake_case)]
            pub fn [<$prop:camel Changed>](&self) -> &$crate::Signal<$ty> {
                self.[<$p $prop>].changed()
            }
        }
    };
}

// Reset

#[cfg(feature = "framework-resets")]
#[doc(hidden)]
#[macro_export]
macro_rules! __property_reset {
    (@name $prop:ident) => {
        $crate::paste::paste! { stringify!([<reset_ $prop>]) }
    };
    ([$($vis:tt)*] $p:tt $prop:ident : $ty:ty $(= $init:expr)?) => {
        $crate::paste::paste! {
            /// Restores the initial value, with the same change contract as the setter.
            $($vis)* fn [<reset_ $prop>](&mut self) -> bool {
                self.[<$p $prop>].replace($crate::__initial_value!($($init)?))
            }
        }
    };
}

#[cfg(not(feature = "framework-resets"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __property_reset {
    (@name $prop:ident) => {
        $crate::paste::paste! { stringify!([<Reset $prop:camel>]) }
    };
    ([$($vis:tt)*] $p:tt $prop:ident : $ty:ty $(= $init:expr)?) => {
        $crate::paste::paste! {
            /// Restores the initial value, with the same change contract as the setter.
            #[allow(non_snake_case)]
            $($vis)* fn [<Reset $prop:camel>](&mut self) -> bool {
                self.[<$p $prop>].replace($crate::__initial_value!($($init)?))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_shapes() {
        let c = Conventions::FRAMEWORK;
        assert_eq!(c.attribute_name("item_count"), "m_item_count");
        assert_eq!(c.getter_name("item_count"), "item_count");
        assert_eq!(c.setter_name("item_count"), "set_item_count");
        assert_eq!(c.signal_name("item_count"), "item_count_changed");
        assert_eq!(c.reset_name("item_count"), "reset_item_count");
    }

    #[test]
    fn alternative_shapes() {
        let c = Conventions::ALTERNATIVE;
        assert_eq!(c.attribute_name("item_count"), "_item_count");
        assert_eq!(c.getter_name("item_count"), "GetItemCount");
        assert_eq!(c.setter_name("item_count"), "SetItemCount");
        assert_eq!(c.signal_name("item_count"), "ItemCountChanged");
        assert_eq!(c.reset_name("item_count"), "ResetItemCount");
    }

    #[test]
    fn switches_are_independent() {
        let mixed = Conventions {
            getters: NamingConvention::Alternative,
            ..Conventions::FRAMEWORK
        };
        assert_eq!(mixed.getter_name("count"), "GetCount");
        assert_eq!(mixed.setter_name("count"), "set_count");
    }

    #[test]
    fn active_follows_features() {
        assert_eq!(
            ACTIVE.getters == NamingConvention::Framework,
            cfg!(feature = "framework-getters")
        );
        assert_eq!(
            ACTIVE.attributes == NamingConvention::Framework,
            cfg!(feature = "framework-attributes")
        );
        if cfg!(feature = "framework-naming") {
            assert_eq!(ACTIVE, Conventions::FRAMEWORK);
        }
    }
}
