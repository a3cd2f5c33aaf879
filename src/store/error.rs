//! Error type for the store boundary.

use thiserror::Error;

use super::Capability;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("permission denied: {capability} is required for {uri}")]
    PermissionDenied { capability: Capability, uri: String },

    #[error("invalid uri: {0}")]
    InvalidUri(String),

    #[error("{op} is not supported for {uri}")]
    UnsupportedOperation { op: &'static str, uri: String },

    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// A value the store refuses to write.
    #[error("invalid {column}: {reason}")]
    Validation { column: String, reason: String },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A previous holder of the connection panicked.
    #[error("store connection lock poisoned")]
    Poisoned,
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
