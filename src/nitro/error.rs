use crate::nitro::schema::Operation;

/// Programmer errors raised before any request leaves the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("Unknown field '{field}' for object type '{type_name}'")]
    UnknownField { type_name: String, field: String },

    #[error("Unknown object type: {0}")]
    UnknownSchema(String),

    #[error("Operation {operation} is not supported by object type '{type_name}'")]
    UnsupportedOperation {
        type_name: String,
        operation: Operation,
    },

    #[error("Object type '{0}' does not support saving the running configuration")]
    SaveNotSupported(String),

    #[error("Object type '{0}' has no key field for enable/disable")]
    MissingActionKey(String),
}

#[derive(Debug, thiserror::Error)]
pub enum NitroError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error from reqwest: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
