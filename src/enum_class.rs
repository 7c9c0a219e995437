/*!

# Enum Classes

A declarative layer needs more from an enum than Rust gives it for free: the names of the
variants, a mapping between names and integer values, and an entry in the type registry so that
documents can refer to `Unit.Metric`. [`enum_class!`](crate::enum_class!) generates all of that for
a C-like enum and makes the enum usable as a property value type (read by value, `Default` is the
first variant).

The registration is *uncreatable*: the host learns the type's name and values but is told it
cannot instantiate it.

*/

/// The reason given to the host when it tries to instantiate an enum class.
pub const UNCREATABLE_REASON: &str = "enum class, cannot be instantiated";

/// Declares a C-like enum with `i32` values, name/value conversions and registration.
///
/// ```
/// use property_helpers::enum_class;
///
/// enum_class! {
///     pub enum Priority {
///         Low = 1,
///         Normal = 5,
///         High = 10,
///     }
/// }
///
/// assert_eq!(Priority::Normal.as_str(), "Normal");
/// assert_eq!(Priority::key_for(10), Some("High"));
/// assert_eq!("Low".parse::<Priority>().unwrap(), Priority::Low);
/// assert_eq!(Priority::default(), Priority::Low);
/// ```
#[macro_export]
macro_rules! enum_class {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $value:expr)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(i32)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant $(= $value)?, )+
        }

        #[allow(dead_code)]
        impl $name {
            /// Every variant, in declaration order.
            pub const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant), )+
                }
            }

            pub const fn value(self) -> i32 {
                self as i32
            }

            pub fn from_value(value: i32) -> ::core::option::Option<Self> {
                Self::VARIANTS
                    .iter()
                    .copied()
                    .find(|variant| variant.value() == value)
            }

            /// Name of the variant with `value`, if any.
            pub fn key_for(value: i32) -> ::core::option::Option<&'static str> {
                Self::from_value(value).map(Self::as_str)
            }

            /// Registers the enum as an uncreatable type. The external name defaults to the
            /// enum's own name.
            pub fn register<R>(
                registry: &mut R,
                uri: &str,
                major: u32,
                minor: u32,
                name: ::core::option::Option<&str>,
            ) where
                R: $crate::TypeRegistry + ?Sized,
            {
                let name = name.unwrap_or(stringify!($name));
                $crate::tracing::debug!(uri, major, minor, name, "registering enum class");
                registry.register_type($crate::TypeRegistration {
                    uri: uri.to_owned(),
                    version: $crate::Version::new(major, minor),
                    name: name.to_owned(),
                    type_name: stringify!($name),
                    type_id: ::core::any::TypeId::of::<Self>(),
                    properties: &[],
                    instantiation: $crate::Instantiation::Uncreatable {
                        reason: $crate::enum_class::UNCREATABLE_REASON,
                    },
                });
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::VARIANTS[0]
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Self::VARIANTS
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str() == s)
                    .ok_or_else(|| $crate::Error::InvalidValue {
                        type_name: stringify!($name),
                        value: s.to_owned(),
                    })
            }
        }

        $crate::impl_read_by_value!($name);
    };
}

#[cfg(test)]
mod tests {
    use crate::{Error, Instantiation, TypeCatalog, Version};

    crate::enum_class! {
        /// Connection state of a device.
        pub enum Link {
            Down,
            Negotiating = 4,
            Up,
        }
    }

    #[test]
    fn values_follow_rust_discriminant_rules() {
        assert_eq!(Link::Down.value(), 0);
        assert_eq!(Link::Negotiating.value(), 4);
        assert_eq!(Link::Up.value(), 5);
        assert_eq!(Link::VARIANTS, &[Link::Down, Link::Negotiating, Link::Up]);
    }

    #[test]
    fn names_and_values_convert_both_ways() {
        assert_eq!(Link::key_for(4), Some("Negotiating"));
        assert_eq!(Link::key_for(1), None);
        assert_eq!(Link::from_value(5), Some(Link::Up));
        assert_eq!(Link::Up.to_string(), "Up");
        assert_eq!("Down".parse::<Link>().unwrap(), Link::Down);
    }

    #[test]
    fn parsing_unknown_names_fails() {
        let err = "Sideways".parse::<Link>().unwrap_err();
        assert!(matches!(err, Error::InvalidValue { type_name: "Link", .. }));
        assert_eq!(err.to_string(), "`Sideways` is not a valid Link");
    }

    #[test]
    fn registers_as_uncreatable() {
        let mut catalog = TypeCatalog::new();
        Link::register(&mut catalog, "Net", 1, 0, None);
        Link::register(&mut catalog, "Net", 1, 0, Some("LinkState"));

        let registration = catalog.resolve("Net", Version::new(1, 0), "LinkState").unwrap();
        assert!(matches!(
            registration.instantiation,
            Instantiation::Uncreatable { reason: super::UNCREATABLE_REASON }
        ));
        assert!(catalog.resolve("Net", Version::new(1, 0), "Link").is_some());
    }

    #[deny(dead_code)]
    mod sparse_use {
        crate::enum_class! {
            pub enum Shade {
                Light,
                Dark,
            }
        }
    }

    #[test]
    fn unused_helpers_do_not_warn() {
        let shade: sparse_use::Shade = "Dark".parse().unwrap();
        assert_eq!(shade.to_string(), "Dark");
    }

    #[cfg(feature = "framework-naming")]
    #[test]
    fn usable_as_property_value() {
        crate::reactive_object! {
            struct Modem {
                writable link: Link,
            }
        }

        let mut modem = Modem::new();
        let link: Link = modem.link();
        assert_eq!(link, Link::Down);
        assert!(modem.set_link(Link::Up));
        assert_eq!(modem.link(), Link::Up);
    }
}
