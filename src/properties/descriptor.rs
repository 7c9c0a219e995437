use std::fmt;

/// The ways a property can be written. A `ReadOnly` property still changes and notifies; it
/// just cannot be written from outside its object.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mutability {
    /// Public setter and reset.
    Writable,
    /// Updated only by the owning object's own code.
    ReadOnly,
    /// Fixed at construction, never notifies.
    Constant,
    /// A sequence of items, filled by the owning object.
    List,
}

impl Mutability {
    pub const fn notifies(self) -> bool {
        matches!(self, Self::Writable | Self::ReadOnly)
    }
}

impl fmt::Display for Mutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Writable => "writable",
            Self::ReadOnly => "read_only",
            Self::Constant => "constant",
            Self::List => "list",
        })
    }
}

/// What the declarative layer gets to know about one property: its value type and the names of
/// the entry points it may call. Only publicly reachable entry points are listed, so a
/// `read_only` property advertises no `write` or `reset`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyDescriptor {
    pub name: &'static str,
    pub type_name: &'static str,
    pub mutability: Mutability,
    pub read: &'static str,
    pub write: Option<&'static str>,
    pub notify: Option<&'static str>,
    pub reset: Option<&'static str>,
}

/// Implemented by every type declared with [`reactive_object!`](crate::reactive_object!).
pub trait ReactiveObject {
    /// The Rust name of the type, used as the default external name on registration.
    const TYPE_NAME: &'static str;

    /// Property table in declaration order.
    const PROPERTIES: &'static [PropertyDescriptor];

    fn property(name: &str) -> Option<&'static PropertyDescriptor> {
        Self::PROPERTIES
            .iter()
            .find(|descriptor| descriptor.name == name)
    }
}
