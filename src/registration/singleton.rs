/*!

# Singletons

Some objects exist once per application: settings, a clock, a connection status. The declarative
layer does not instantiate them; it asks for *the* instance. [`singleton!`](crate::singleton!)
gives a reactive object a lazily created shared instance and [`Singleton::register_singleton`]
publishes it with [`Instantiation::Singleton`], whose provider hands that instance to the host.

Objects are single-threaded, so "once" means once per thread. The instance is created by `Default`
the first time [`Singleton::instance`] is called on a thread and lives as long as the thread.

*/

use std::{any::Any, cell::RefCell, rc::Rc};

use super::{Instantiation, Registrable, TypeRegistration, TypeRegistry, Version};

/// The reason given when a singleton is asked for a fresh instance.
pub const SINGLETON_REASON: &str = "singleton, use the shared instance";

/// A reactive object with one shared instance. Implemented by [`singleton!`](crate::singleton!).
pub trait Singleton: Registrable {
    /// The shared instance, created on first use.
    fn instance() -> Rc<RefCell<Self>>;

    /// Registers the shared instance with `registry`. The external name is `name`, or the Rust
    /// type name when `name` is `None`.
    fn register_singleton<R>(
        registry: &mut R,
        uri: &str,
        major: u32,
        minor: u32,
        name: Option<&str>,
    ) where
        R: TypeRegistry + ?Sized,
    {
        let name = name.unwrap_or(Self::TYPE_NAME);
        tracing::debug!(
            uri,
            major,
            minor,
            name,
            type_name = Self::TYPE_NAME,
            "registering singleton"
        );
        registry.register_type(TypeRegistration {
            uri: uri.to_owned(),
            version: Version::new(major, minor),
            name: name.to_owned(),
            type_name: Self::TYPE_NAME,
            type_id: std::any::TypeId::of::<Self>(),
            properties: Self::PROPERTIES,
            instantiation: Instantiation::Singleton(shared_instance::<Self>),
        });
    }
}

fn shared_instance<T: Singleton>() -> Rc<dyn Any> {
    T::instance()
}

/// Gives a reactive object a lazily created, per-thread shared instance.
///
/// ```
/// use property_helpers::{reactive_object, singleton, Singleton};
///
/// reactive_object! {
///     pub struct Settings {
///         writable volume: u8 = 50,
///     }
/// }
///
/// singleton!(Settings);
///
/// let first = Settings::instance();
/// let second = Settings::instance();
/// assert!(std::rc::Rc::ptr_eq(&first, &second));
/// ```
#[macro_export]
macro_rules! singleton {
    ($ty:ty) => {
        const _: () = {
            ::std::thread_local! {
                static INSTANCE: ::std::rc::Rc<::core::cell::RefCell<$ty>> =
                    ::std::rc::Rc::new(::core::cell::RefCell::new(
                        <$ty as ::core::default::Default>::default(),
                    ));
            }

            impl $crate::Singleton for $ty {
                fn instance() -> ::std::rc::Rc<::core::cell::RefCell<Self>> {
                    INSTANCE.with(::std::rc::Rc::clone)
                }
            }
        };
    };
}
