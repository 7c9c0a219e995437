/*!

# Exposing Types to the Declarative Layer

A declarative scripting layer instantiates objects by name: `Counter { }` in a document has to be
mapped to a Rust type, a constructor, and a property table. The host framework owns that mapping.
This module only defines the seam the host plugs into, [`TypeRegistry`], and the shim every
reactive object gets for calling it, [`Registrable::register`].

The shim forwards four things and nothing else:

- the module identifier (`uri`) the type is published under,
- a major and minor version,
- the external name, which defaults to the Rust type name,
- an [`Instantiation`], which for reactive objects is a plain function pointer to a
  `Default`-constructing function.

There is no error path. A host that rejects a registration reports it through its own channels.

Three conveniences sit on top of the seam:

- [`Singleton`](singleton::Singleton) registers one shared instance instead of a constructor.
- [`TypeCatalog`](catalog::TypeCatalog) is an in-memory registry with the lookup rules of a
  declarative import statement, useful for tests and for hosts that do not bring their own.
- [`auto_register!`](crate::auto_register!) records a registration before `main()` runs, so types
  defined across many modules or crates do not have to be listed in one central place. See
  [`auto`].

*/

pub mod auto;
pub mod catalog;
pub mod singleton;

use std::{
    any::{Any, TypeId},
    fmt,
    rc::Rc,
};

use crate::properties::{PropertyDescriptor, ReactiveObject};

/// A module version as written in an import statement: `major.minor`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// How the host may instantiate a registered type.
#[derive(Copy, Clone)]
pub enum Instantiation {
    Creatable(fn() -> Box<dyn Any>),
    /// The host shares one instance, the `Rc<RefCell<T>>` the provider returns.
    Singleton(fn() -> Rc<dyn Any>),
    /// The type is only published for its names and values (enum classes, for instance).
    Uncreatable { reason: &'static str },
}

impl fmt::Debug for Instantiation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Creatable(_) => f.write_str("Creatable"),
            Self::Singleton(_) => f.write_str("Singleton"),
            Self::Uncreatable { reason } => {
                f.debug_struct("Uncreatable").field("reason", reason).finish()
            }
        }
    }
}

/// Everything the host receives for one registration.
#[derive(Clone, Debug)]
pub struct TypeRegistration {
    pub uri: String,
    pub version: Version,
    /// The name the declarative layer knows the type by.
    pub name: String,
    /// The Rust type name.
    pub type_name: &'static str,
    pub type_id: TypeId,
    pub properties: &'static [PropertyDescriptor],
    pub instantiation: Instantiation,
}

/// The host framework's dynamic type registration entry point.
pub trait TypeRegistry {
    fn register_type(&mut self, registration: TypeRegistration);
}

fn instantiate<T: Default + 'static>() -> Box<dyn Any> {
    Box::new(T::default())
}

/// The registration shim, available on every [`ReactiveObject`] that can be default-constructed.
pub trait Registrable: ReactiveObject + Default + 'static {
    /// Registers `Self` with `registry` under `uri` and `major.minor`. The external name is
    /// `name`, or the Rust type name when `name` is `None`.
    fn register<R>(registry: &mut R, uri: &str, major: u32, minor: u32, name: Option<&str>)
    where
        R: TypeRegistry + ?Sized,
    {
        let name = name.unwrap_or(Self::TYPE_NAME);
        tracing::debug!(uri, major, minor, name, type_name = Self::TYPE_NAME, "registering type");
        registry.register_type(TypeRegistration {
            uri: uri.to_owned(),
            version: Version::new(major, minor),
            name: name.to_owned(),
            type_name: Self::TYPE_NAME,
            type_id: TypeId::of::<Self>(),
            properties: Self::PROPERTIES,
            instantiation: Instantiation::Creatable(instantiate::<Self>),
        });
    }
}

impl<T: ReactiveObject + Default + 'static> Registrable for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mutability, PropertyDescriptor};

    #[derive(Default)]
    struct Gauge;

    impl ReactiveObject for Gauge {
        const TYPE_NAME: &'static str = "Gauge";
        const PROPERTIES: &'static [PropertyDescriptor] = &[PropertyDescriptor {
            name: "depth",
            type_name: "u32",
            mutability: Mutability::Constant,
            read: "depth",
            write: None,
            notify: None,
            reset: None,
        }];
    }

    #[derive(Default)]
    struct Recorder(Vec<TypeRegistration>);

    impl TypeRegistry for Recorder {
        fn register_type(&mut self, registration: TypeRegistration) {
            self.0.push(registration);
        }
    }

    #[test]
    fn explicit_name_is_used() {
        let mut registry = Recorder::default();
        Gauge::register(&mut registry, "Sea.Tools", 2, 1, Some("DepthGauge"));

        let registration = &registry.0[0];
        assert_eq!(registration.uri, "Sea.Tools");
        assert_eq!(registration.version, Version::new(2, 1));
        assert_eq!(registration.name, "DepthGauge");
        assert_eq!(registration.type_name, "Gauge");
        assert_eq!(registration.type_id, TypeId::of::<Gauge>());
        assert_eq!(registration.properties[0].name, "depth");
    }

    #[test]
    fn omitted_name_defaults_to_type_name() {
        let mut registry = Recorder::default();
        Gauge::register(&mut registry, "Sea.Tools", 1, 0, None);
        assert_eq!(registry.0[0].name, "Gauge");
    }

    #[test]
    fn creatable_registrations_build_default_instances() {
        let mut registry = Recorder::default();
        Gauge::register(&mut registry, "Sea.Tools", 1, 0, None);

        let Instantiation::Creatable(create) = registry.0[0].instantiation else {
            panic!("expected a creatable registration");
        };
        assert!(create().downcast::<Gauge>().is_ok());
    }

    #[test]
    fn registers_through_a_trait_object() {
        let mut recorder = Recorder::default();
        let registry: &mut dyn TypeRegistry = &mut recorder;
        Gauge::register(registry, "Sea.Tools", 1, 0, None);
        assert_eq!(recorder.0.len(), 1);
    }

    #[test]
    fn version_display() {
        assert_eq!(Version::new(1, 12).to_string(), "1.12");
        assert!(Version::new(1, 2) < Version::new(1, 10));
    }
}
