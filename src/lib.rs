#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/*!

# Correctness via Macro

A reactive property is only useful if all of its parts agree: the getter reads the field the setter
writes, the setter emits the signal the binding layer listens to, the reset restores the value the
constructor chose, and every one of them is named the way the host expects. Nothing in the type
system ties those parts together. Written by hand, they drift.

The approach taken here is to have one declaration produce all of them. [`reactive_object!`] is
given a struct whose fields are property descriptors and realizes the storage, the accessors, the
signals and the property table in the client crate. The names come from the build's
[`naming`] configuration, so they cannot disagree with each other.

There is no mechanism to _require_ that a type be declared through the macro, and the code it
generates has exactly the access any other client code has. What the macro buys is that whatever it
generates is consistent by construction. The building blocks it expands to, [`PropertyCell`],
[`Constant`] and [`Signal`], are public for types that need to be written by hand.

## Layout

- [`properties`]: storage, read strategy, property descriptors and [`reactive_object!`].
- [`signal`]: single-threaded change notification.
- [`naming`]: the compile-time naming switches.
- [`registration`]: the seam to the host's type registry, singletons, an in-memory catalog, and
  [`auto_register!`].
- [`enum_class`]: enums usable as property values and registrable by name.
- [`json`]: saving and restoring objects as JSON.

*/

pub mod enum_class;
pub mod error;
pub mod json;
pub mod naming;
pub mod properties;
pub mod registration;
pub mod signal;
pub mod version;

pub use error::{Error, Result};
pub use json::{JsonExport, JsonImport, export_value, import_value};
pub use properties::{
    CheapestRead, Constant, Mutability, PropertyCell, PropertyDescriptor, PropertyList,
    ReactiveObject,
};
pub use registration::{
    Instantiation, Registrable, TypeRegistration, TypeRegistry, Version,
    auto::{apply_pending_registrations, queue_registration},
    catalog::TypeCatalog,
    singleton::Singleton,
};
pub use signal::{ConnectionId, Signal};

// Re-exported for use in exported macros
pub use ctor;
pub use paste;
pub use tracing;
