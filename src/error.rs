//! Error types for the site store and dashboard

use thiserror::Error;

use crate::tracking::Provider;

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing or persisting site data
#[derive(Error, Debug)]
pub enum Error {
    /// The key-value backend failed to read or write
    #[error("Storage error: {0}")]
    Storage(String),

    /// A value could not be converted to or from JSON
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem error outside the store (templates, backups)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A tracking id does not match its provider's format
    #[error("Invalid {provider} id {id:?}: expected {}", .provider.format_hint())]
    InvalidTrackingId { provider: Provider, id: String },

    /// An editor operation addressed an element that does not exist
    #[error("Index {index} out of range for {section} (length {len})")]
    IndexOutOfRange {
        section: &'static str,
        index: usize,
        len: usize,
    },

    /// A form field name or value could not be understood
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// A backup file was rejected
    #[error("Invalid backup file: {0}")]
    InvalidImport(String),

    /// Dashboard login failed or is required
    #[error("Authentication failed: {0}")]
    AuthError(String),

    /// A new dashboard password was rejected
    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
