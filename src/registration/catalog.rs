/*!

# An In-Memory Type Registry

[`TypeCatalog`] stores registrations the way a declarative import statement looks them up. A
document that imports `Sea.Tools 1.3` can use every type registered under `Sea.Tools` with major
version 1 and a minor version of at most 3; when a name was registered more than once in that
range, the highest minor version wins. Major versions never mix.

Registering the same `(uri, version, name)` twice replaces the earlier registration and logs a
warning, matching hosts that let the last registration win.

*/

use std::{any::Any, cell::RefCell, rc::Rc};

use hashbrown::HashMap;

use super::{Instantiation, TypeRegistration, TypeRegistry, Version, singleton::SINGLETON_REASON};
use crate::error::{Error, Result};

#[derive(Debug, Default)]
pub struct TypeCatalog {
    /// Registrations grouped by module uri.
    modules: HashMap<String, Vec<TypeRegistration>>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of registrations.
    pub fn len(&self) -> usize {
        self.modules.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn registrations(&self) -> impl Iterator<Item = &TypeRegistration> {
        self.modules.values().flatten()
    }

    /// Finds the registration `name` resolves to when `uri` is imported at `version`.
    pub fn resolve(&self, uri: &str, version: Version, name: &str) -> Option<&TypeRegistration> {
        self.modules
            .get(uri)?
            .iter()
            .filter(|registration| {
                registration.name == name
                    && registration.version.major == version.major
                    && registration.version.minor <= version.minor
            })
            .max_by_key(|registration| registration.version.minor)
    }

    fn lookup(&self, uri: &str, version: Version, name: &str) -> Result<&TypeRegistration> {
        self.resolve(uri, version, name).ok_or_else(|| Error::UnknownType {
            uri: uri.to_owned(),
            version,
            name: name.to_owned(),
        })
    }

    /// Instantiates the type `name` resolves to.
    pub fn create(&self, uri: &str, version: Version, name: &str) -> Result<Box<dyn Any>> {
        let registration = self.lookup(uri, version, name)?;

        match registration.instantiation {
            Instantiation::Creatable(create) => Ok(create()),
            Instantiation::Singleton(_) => Err(Error::Uncreatable {
                name: registration.name.clone(),
                reason: SINGLETON_REASON,
            }),
            Instantiation::Uncreatable { reason } => Err(Error::Uncreatable {
                name: registration.name.clone(),
                reason,
            }),
        }
    }

    /// Like [`create`](Self::create), additionally checking that the instance is a `T`.
    pub fn create_as<T: 'static>(&self, uri: &str, version: Version, name: &str) -> Result<Box<T>> {
        let instance = self.create(uri, version, name)?;
        instance
            .downcast::<T>()
            .map_err(|_| self.mismatch::<T>(uri, version, name))
    }

    /// The shared instance of the singleton `name` resolves to.
    pub fn singleton(&self, uri: &str, version: Version, name: &str) -> Result<Rc<dyn Any>> {
        let registration = self.lookup(uri, version, name)?;

        match registration.instantiation {
            Instantiation::Singleton(provide) => Ok(provide()),
            _ => Err(Error::NotASingleton {
                name: registration.name.clone(),
            }),
        }
    }

    /// Like [`singleton`](Self::singleton), additionally checking that the instance is a `T`.
    pub fn singleton_as<T: 'static>(
        &self,
        uri: &str,
        version: Version,
        name: &str,
    ) -> Result<Rc<RefCell<T>>> {
        let instance = self.singleton(uri, version, name)?;
        instance
            .downcast::<RefCell<T>>()
            .map_err(|_| self.mismatch::<T>(uri, version, name))
    }

    fn mismatch<T>(&self, uri: &str, version: Version, name: &str) -> Error {
        let registered = self
            .resolve(uri, version, name)
            .map_or("<unknown>", |registration| registration.type_name);
        Error::TypeMismatch {
            name: name.to_owned(),
            registered,
            requested: std::any::type_name::<T>(),
        }
    }
}

impl TypeRegistry for TypeCatalog {
    fn register_type(&mut self, registration: TypeRegistration) {
        let module = self.modules.entry(registration.uri.clone()).or_default();

        if let Some(existing) = module.iter_mut().find(|existing| {
            existing.name == registration.name && existing.version == registration.version
        }) {
            tracing::warn!(
                uri = %registration.uri,
                version = %registration.version,
                name = %registration.name,
                replaced = existing.type_name,
                "type registered twice, keeping the latest registration"
            );
            *existing = registration;
            return;
        }

        module.push(registration);
    }
}
