/*!

# Registration Without a Central List

An application with many reactive types usually ends up with one function that registers all of
them, and every new type has to be added there by hand. [`auto_register!`](crate::auto_register!)
removes that list: it defines a static constructor (via [`ctor`](https://crates.io/crates/ctor))
that queues the registration before `main()` runs. When the host registry exists, the application
replays the queue into it with [`apply_pending_registrations`].

The queue holds plain function pointers, not registrations, so nothing is allocated or formatted
before `main()` beyond pushing a pointer. The queue is never drained: it can be replayed into
several registries, for example one per engine instance or one per test.

"Run before main" has the usual caveats. Order between constructors is unspecified, so nothing
here depends on it beyond the queue's own insertion order, and some linker configurations strip
constructors from otherwise unreferenced object files. Calling [`Registrable::register`]
explicitly is always available as the fallback.

[`Registrable::register`]: crate::Registrable::register

*/

use std::sync::{Mutex, PoisonError};

use super::TypeRegistry;

/// A queued registration.
pub type PendingRegistration = fn(&mut dyn TypeRegistry);

static PENDING_REGISTRATIONS: Mutex<Vec<PendingRegistration>> = Mutex::new(Vec::new());

/// Adds `registration` to the queue. Called by the constructors [`auto_register!`] defines.
///
/// [`auto_register!`]: crate::auto_register!
pub fn queue_registration(registration: PendingRegistration) {
    PENDING_REGISTRATIONS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(registration);
}

/// Number of queued registrations.
pub fn pending_registration_count() -> usize {
    PENDING_REGISTRATIONS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .len()
}

/// Replays every queued registration into `registry`, in queue order, and returns how many were
/// applied.
pub fn apply_pending_registrations(registry: &mut dyn TypeRegistry) -> usize {
    // Copy the pointers out so a registry that queues more work does not deadlock.
    let pending = PENDING_REGISTRATIONS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();

    for registration in &pending {
        registration(registry);
    }
    tracing::debug!(count = pending.len(), "applied pending registrations");
    pending.len()
}

/// Queues the registration of a reactive object at program start.
///
/// `auto_register!(Type, uri, major, minor)` registers under the type's own name,
/// `auto_register!(Type, uri, major, minor, name)` under `name`. The arguments must be constant
/// expressions. A type may be queued several times, under different names or versions. Prefixing
/// the type with `singleton` queues [`Singleton::register_singleton`] instead.
///
/// [`Singleton::register_singleton`]: crate::Singleton::register_singleton
///
/// ```
/// use property_helpers::{
///     TypeCatalog, Version, apply_pending_registrations, auto_register, reactive_object,
/// };
///
/// reactive_object! {
///     pub struct Thermostat {
///         writable target: f32 = 20.0,
///     }
/// }
///
/// auto_register!(Thermostat, "Home.Climate", 1, 0);
///
/// fn main() {
///     let mut catalog = TypeCatalog::new();
///     apply_pending_registrations(&mut catalog);
///     assert!(catalog.resolve("Home.Climate", Version::new(1, 0), "Thermostat").is_some());
/// }
/// ```
#[macro_export]
macro_rules! auto_register {
    (
        @queue $trait:ident :: $method:ident,
        $ty:ident, $uri:expr, $major:expr, $minor:expr, $name:expr
    ) => {
        // One anonymous scope per invocation, so a type can be queued more than once.
        const _: () = {
            $crate::paste::paste! {
                $crate::ctor::declarative::ctor! {
                    #[ctor]
                    fn [<__auto_register_ $ty:snake>]() {
                        $crate::registration::auto::queue_registration(|registry| {
                            <$ty as $crate::$trait>::$method(registry, $uri, $major, $minor, $name);
                        });
                    }
                }
            }
        };
    };
    (singleton $ty:ident, $uri:expr, $major:expr, $minor:expr $(,)?) => {
        $crate::auto_register!(
            @queue Singleton::register_singleton,
            $ty, $uri, $major, $minor, ::core::option::Option::None
        );
    };
    (singleton $ty:ident, $uri:expr, $major:expr, $minor:expr, $name:expr $(,)?) => {
        $crate::auto_register!(
            @queue Singleton::register_singleton,
            $ty, $uri, $major, $minor, ::core::option::Option::Some($name)
        );
    };
    ($ty:ident, $uri:expr, $major:expr, $minor:expr $(,)?) => {
        $crate::auto_register!(
            @queue Registrable::register,
            $ty, $uri, $major, $minor, ::core::option::Option::None
        );
    };
    ($ty:ident, $uri:expr, $major:expr, $minor:expr, $name:expr $(,)?) => {
        $crate::auto_register!(
            @queue Registrable::register,
            $ty, $uri, $major, $minor, ::core::option::Option::Some($name)
        );
    };
}
