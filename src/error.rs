use crate::registration::Version;

/// Errors of the fallible helpers.
///
/// Property reads, writes and registrations are total and never produce one of these. They come
/// from instantiating types out of a [`TypeCatalog`](crate::TypeCatalog), from parsing enum
/// classes, and from JSON import and export.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("`{value}` is not a valid {type_name}")]
    InvalidValue {
        type_name: &'static str,
        value: String,
    },

    #[error("no type `{name}` is registered in module `{uri}` {version}")]
    UnknownType {
        uri: String,
        version: Version,
        name: String,
    },

    #[error("type `{name}` cannot be instantiated: {reason}")]
    Uncreatable { name: String, reason: &'static str },

    #[error("type `{name}` is not registered as a singleton")]
    NotASingleton { name: String },

    #[error("type `{name}` is registered as `{registered}`, not `{requested}`")]
    TypeMismatch {
        name: String,
        registered: &'static str,
        requested: &'static str,
    },

    #[error("expected a JSON object")]
    NotAnObject,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
